//! Per-frame geometry upload buffers.
//!
//! The scene mesh is rebuilt from scratch every frame, so vertex and
//! index data are re-uploaded each time. [`GrowableBuffer`] grows
//! geometrically when the frame's data exceeds capacity and never
//! shrinks, so steady-state frames reuse one allocation.

/// A GPU buffer that grows to fit each frame's upload.
pub struct GrowableBuffer {
    buffer: wgpu::Buffer,
    /// Capacity in bytes.
    capacity: usize,
    /// Bytes written by the most recent upload.
    len: usize,
    usage: wgpu::BufferUsages,
    label: &'static str,
}

impl GrowableBuffer {
    /// Minimum allocation, bytes.
    const MIN_CAPACITY: usize = 256;

    /// Create a buffer with the given initial byte capacity.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        label: &'static str,
        initial_capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let capacity = initial_capacity.max(Self::MIN_CAPACITY);
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: capacity as u64,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            buffer,
            capacity,
            len: 0,
            usage,
            label,
        }
    }

    /// Upload `data`, reallocating with doubled headroom when it no
    /// longer fits.
    pub fn write<T: bytemuck::Pod>(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) {
        let bytes = bytemuck::cast_slice(data);
        if bytes.len() > self.capacity {
            self.capacity = (bytes.len() * 2).max(Self::MIN_CAPACITY);
            self.buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size: self.capacity as u64,
                usage: self.usage | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }
        if !bytes.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytes);
        }
        self.len = bytes.len();
    }

    /// The underlying wgpu buffer.
    #[must_use]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Bytes written by the most recent upload.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the most recent upload was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

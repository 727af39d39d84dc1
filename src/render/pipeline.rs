//! wgpu canvas renderer.
//!
//! Uploads the frame's tessellated mesh and draws it in a single
//! alpha-blended pass over the cleared background. Positions stay in
//! logical 800x600 units; the shader maps them to clip space, so window
//! resizes only stretch the output.

use wgpu::util::DeviceExt;

use crate::gpu::frame_buffer::GrowableBuffer;
use crate::gpu::render_context::RenderContext;
use crate::model::params;
use crate::render::tessellator::{CanvasVertex, MeshCanvas};

/// Uniforms for the canvas pipeline.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    /// Logical surface size.
    surface_size: [f32; 2],
    _pad: [f32; 2],
}

/// One pipeline, one uniform, two growable buffers.
pub struct CanvasRenderer {
    pipeline: wgpu::RenderPipeline,
    globals_bind_group: wgpu::BindGroup,
    vertex_buffer: GrowableBuffer,
    index_buffer: GrowableBuffer,
    index_count: u32,
}

impl CanvasRenderer {
    /// Create the pipeline against the context's surface format.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let device = &context.device;
        let shader = device
            .create_shader_module(wgpu::include_wgsl!("shaders/canvas.wgsl"));

        let globals = Globals {
            surface_size: [params::SURFACE_WIDTH, params::SURFACE_HEIGHT],
            _pad: [0.0; 2],
        };
        let globals_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Canvas Globals"),
                contents: bytemuck::bytes_of(&globals),
                usage: wgpu::BufferUsages::UNIFORM,
            });

        let globals_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Canvas Globals Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let globals_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Canvas Globals Bind Group"),
                layout: &globals_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals_buffer.as_entire_binding(),
                }],
            });

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Canvas Pipeline Layout"),
                bind_group_layouts: &[&globals_layout],
                push_constant_ranges: &[],
            });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: size_of::<CanvasVertex>()
                as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 8,
                    shader_location: 1,
                },
            ],
        };

        let pipeline =
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Canvas Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[vertex_layout],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        Self {
            pipeline,
            globals_bind_group,
            vertex_buffer: GrowableBuffer::new(
                &context.device,
                "Canvas Vertices",
                size_of::<CanvasVertex>() * 4096,
                wgpu::BufferUsages::VERTEX,
            ),
            index_buffer: GrowableBuffer::new(
                &context.device,
                "Canvas Indices",
                size_of::<u32>() * 8192,
                wgpu::BufferUsages::INDEX,
            ),
            index_count: 0,
        }
    }

    /// Upload the frame's mesh.
    pub fn upload(&mut self, context: &RenderContext, mesh: &MeshCanvas) {
        self.vertex_buffer
            .write(&context.device, &context.queue, &mesh.vertices);
        self.index_buffer
            .write(&context.device, &context.queue, &mesh.indices);
        self.index_count = mesh.indices.len() as u32;
    }

    /// Draw the uploaded mesh into the given pass.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.index_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.globals_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.buffer().slice(..));
        render_pass.set_index_buffer(
            self.index_buffer.buffer().slice(..),
            wgpu::IndexFormat::Uint32,
        );
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

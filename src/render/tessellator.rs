//! CPU tessellation of canvas shapes into a triangle mesh.
//!
//! [`MeshCanvas`] implements [`Canvas`] by appending triangles to a
//! vertex/index list. The scene rebuilds the mesh from scratch every
//! frame (stateless redraw); allocations are retained across frames.

use glam::Vec2;

use crate::render::canvas::{Canvas, Rgba};

/// Rim subdivision for filled circles.
const CIRCLE_SEGMENTS: u32 = 20;

/// One mesh vertex: logical-space position plus straight-alpha color.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CanvasVertex {
    /// Position in logical surface units.
    pub position: [f32; 2],
    /// Straight-alpha RGBA color.
    pub color: [f32; 4],
}

/// Canvas implementation that accumulates a triangle mesh.
#[derive(Default)]
pub struct MeshCanvas {
    /// Accumulated vertices.
    pub vertices: Vec<CanvasVertex>,
    /// Accumulated triangle indices into `vertices`.
    pub indices: Vec<u32>,
}

impl MeshCanvas {
    /// Drop all accumulated geometry, keeping the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Append a convex quad as two triangles. Corners wind clockwise.
    fn push_quad(&mut self, corners: [Vec2; 4], color: Rgba) {
        let base = self.vertices.len() as u32;
        for corner in corners {
            self.vertices.push(CanvasVertex {
                position: corner.to_array(),
                color: color.to_array(),
            });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

impl Canvas for MeshCanvas {
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba) {
        self.push_quad(
            [
                min,
                min + Vec2::new(size.x, 0.0),
                min + size,
                min + Vec2::new(0.0, size.y),
            ],
            color,
        );
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        let along = to - from;
        if along.length_squared() <= f32::EPSILON {
            return;
        }
        let offset = along.normalize().perp() * (width * 0.5);
        self.push_quad(
            [from - offset, to - offset, to + offset, from + offset],
            color,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let base = self.vertices.len() as u32;
        self.vertices.push(CanvasVertex {
            position: center.to_array(),
            color: color.to_array(),
        });
        for seg in 0..CIRCLE_SEGMENTS {
            let angle =
                seg as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
            let rim = center + Vec2::new(angle.cos(), angle.sin()) * radius;
            self.vertices.push(CanvasVertex {
                position: rim.to_array(),
                color: color.to_array(),
            });
        }
        for seg in 0..CIRCLE_SEGMENTS {
            let next = (seg + 1) % CIRCLE_SEGMENTS;
            self.indices
                .extend_from_slice(&[base, base + 1 + seg, base + 1 + next]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_is_two_triangles() {
        let mut mesh = MeshCanvas::default();
        mesh.fill_rect(
            Vec2::ZERO,
            Vec2::new(10.0, 5.0),
            Rgba::new(1.0, 0.0, 0.0, 1.0),
        );
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
    }

    #[test]
    fn degenerate_line_adds_nothing() {
        let mut mesh = MeshCanvas::default();
        mesh.stroke_line(
            Vec2::new(3.0, 3.0),
            Vec2::new(3.0, 3.0),
            1.0,
            Rgba::new(1.0, 1.0, 1.0, 1.0),
        );
        assert!(mesh.vertices.is_empty());
        assert!(mesh.indices.is_empty());
    }

    #[test]
    fn line_quad_spans_the_width() {
        let mut mesh = MeshCanvas::default();
        mesh.stroke_line(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            2.0,
            Rgba::new(1.0, 1.0, 1.0, 0.5),
        );
        assert_eq!(mesh.vertices.len(), 4);
        let ys: Vec<f32> =
            mesh.vertices.iter().map(|v| v.position[1]).collect();
        let min = ys.iter().copied().fold(f32::MAX, f32::min);
        let max = ys.iter().copied().fold(f32::MIN, f32::max);
        assert!((max - min - 2.0).abs() < 1e-5);
    }

    #[test]
    fn circle_fan_counts() {
        let mut mesh = MeshCanvas::default();
        mesh.fill_circle(
            Vec2::new(5.0, 5.0),
            3.0,
            Rgba::new(0.0, 1.0, 0.0, 1.0),
        );
        assert_eq!(mesh.vertices.len(), 1 + CIRCLE_SEGMENTS as usize);
        assert_eq!(mesh.indices.len(), CIRCLE_SEGMENTS as usize * 3);
    }

    #[test]
    fn zero_radius_circle_adds_nothing() {
        let mut mesh = MeshCanvas::default();
        mesh.fill_circle(Vec2::ZERO, 0.0, Rgba::new(1.0, 1.0, 1.0, 1.0));
        assert!(mesh.vertices.is_empty());
    }

    #[test]
    fn indices_stay_in_bounds() {
        let mut mesh = MeshCanvas::default();
        mesh.fill_rect(Vec2::ZERO, Vec2::ONE, Rgba::new(1.0, 0.0, 0.0, 1.0));
        mesh.fill_circle(Vec2::ONE, 2.0, Rgba::new(0.0, 1.0, 0.0, 0.5));
        mesh.stroke_line(
            Vec2::ZERO,
            Vec2::ONE,
            1.0,
            Rgba::new(0.0, 0.0, 1.0, 0.5),
        );
        let count = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn clear_keeps_nothing() {
        let mut mesh = MeshCanvas::default();
        mesh.fill_rect(Vec2::ZERO, Vec2::ONE, Rgba::new(1.0, 0.0, 0.0, 1.0));
        mesh.clear();
        assert!(mesh.vertices.is_empty());
        assert!(mesh.indices.is_empty());
    }
}

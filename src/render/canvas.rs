//! Immediate-mode drawing abstraction.
//!
//! The scene passes draw through [`Canvas`] so the same code paths drive
//! the wgpu tessellator in the viewer and a recording canvas in tests.
//! The trait carries exactly the operations the mount contract requires:
//! rectangle fill, line stroke, and filled circles, each with a
//! straight-alpha color.

use glam::Vec2;

/// Straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel, 0.0-1.0.
    pub r: f32,
    /// Green channel, 0.0-1.0.
    pub g: f32,
    /// Blue channel, 0.0-1.0.
    pub b: f32,
    /// Alpha channel, 0.0-1.0.
    pub a: f32,
}

impl Rgba {
    /// Build from individual channels.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from an `[r, g, b]` triple and an alpha.
    #[must_use]
    pub const fn from_rgb(rgb: [f32; 3], a: f32) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    /// As an `[r, g, b, a]` array (the vertex upload layout).
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Minimal 2D immediate-mode drawing surface.
pub trait Canvas {
    /// Fill an axis-aligned rectangle with `min` at its top-left corner.
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba);
    /// Stroke a line segment with the given width.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::{Canvas, Rgba};
    use glam::Vec2;

    /// One recorded drawing command.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Command {
        Rect {
            min: Vec2,
            size: Vec2,
            color: Rgba,
        },
        Line {
            from: Vec2,
            to: Vec2,
            width: f32,
            color: Rgba,
        },
        Circle {
            center: Vec2,
            radius: f32,
            color: Rgba,
        },
    }

    /// Canvas that records commands instead of drawing.
    #[derive(Default)]
    pub(crate) struct RecordingCanvas {
        pub commands: Vec<Command>,
    }

    impl RecordingCanvas {
        pub fn lines_with_width(&self, width: f32) -> usize {
            self.commands
                .iter()
                .filter(|c| matches!(c, Command::Line { width: w, .. } if *w == width))
                .count()
        }

        pub fn circles(&self) -> usize {
            self.commands
                .iter()
                .filter(|c| matches!(c, Command::Circle { .. }))
                .count()
        }
    }

    impl Canvas for RecordingCanvas {
        fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba) {
            self.commands.push(Command::Rect { min, size, color });
        }

        fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
            self.commands.push(Command::Line {
                from,
                to,
                width,
                color,
            });
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
            self.commands.push(Command::Circle {
                center,
                radius,
                color,
            });
        }
    }
}

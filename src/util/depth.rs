//! Depth-to-attribute mapping.
//!
//! The scene is drawn orthographically; the z coordinate only modulates
//! opacity and size so nearer entities read brighter and larger.

/// Linearly map a depth coordinate into `[far_value, near_value]`.
///
/// `z` ranges over `[-half_range, half_range]`; positive z faces the
/// viewer and maps to `near_value`. Out-of-range depths clamp.
#[must_use]
pub fn depth_mix(z: f32, half_range: f32, far_value: f32, near_value: f32) -> f32 {
    let t = ((z / half_range) * 0.5 + 0.5).clamp(0.0, 1.0);
    far_value + (near_value - far_value) * t
}

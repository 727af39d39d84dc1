//! Geometric and motion constants for the helix model.
//!
//! Geometry follows B-form DNA proportions scaled to logical pixels: ten
//! base pairs per full turn, a constant rise per index step, and small
//! inclination and propeller-twist corrections. Motion constants are
//! expressed per logical tick (the animation advances 30 ticks/s).

use glam::Vec2;

/// Logical drawing surface width.
pub const SURFACE_WIDTH: f32 = 800.0;
/// Logical drawing surface height.
pub const SURFACE_HEIGHT: f32 = 600.0;
/// Center of the helix axis on the logical surface.
pub const CENTER: Vec2 = Vec2::new(SURFACE_WIDTH * 0.5, SURFACE_HEIGHT * 0.5);

/// Base pairs along the helix (also backbone particles per strand).
pub const PAIR_COUNT: usize = 54;

/// Angular advance around the helix axis per index step (10 bp per turn).
pub const ROTATION_PER_UNIT: f32 = std::f32::consts::TAU / 10.0;
/// Vertical rise per index step, logical px.
pub const RISE: f32 = 10.0;
/// Helix radius, logical px.
pub const HELIX_RADIUS: f32 = 80.0;
/// Base-plane inclination against the helix axis, radians (B-form is a
/// degree or two).
pub const INCLINATION: f32 = -0.021;
/// Propeller twist between paired bases, radians.
pub const PROPELLER_TWIST: f32 = -0.28;

/// Angular speed of the whole helix, radians per tick.
pub const SPIN_SPEED: f32 = 0.02;
/// Relative amplitude of the per-particle radial breathing oscillation.
pub const BREATHING_AMPLITUDE: f32 = 0.04;
/// Breathing oscillation frequency, radians per tick.
pub const BREATHING_SPEED: f32 = 0.05;
/// Amplitude of the slow vertical sway, logical px.
pub const SWAY_AMPLITUDE: f32 = 2.5;
/// Vertical sway frequency, radians per tick.
pub const SWAY_SPEED: f32 = 0.03;
/// Relative amplitude of the bond-fluctuation term on the propeller
/// offset.
pub const BOND_FLUTTER: f32 = 0.35;
/// Bond-fluctuation frequency, radians per tick.
pub const BOND_FLUTTER_SPEED: f32 = 0.08;

/// Distance threshold for short-range links, logical px.
pub const LINK_DISTANCE: f32 = 42.0;
/// Chance that an in-range particle pair links up this frame.
pub const LINK_CHANCE: f32 = 0.65;
/// Distance threshold for the sparse long-range pass, logical px.
pub const DISTANT_LINK_DISTANCE: f32 = 170.0;
/// Per-particle chance of scanning for long-range links this frame.
pub const DISTANT_SCAN_CHANCE: f32 = 0.02;
/// Per-candidate chance that an in-range long link is drawn.
pub const DISTANT_LINK_CHANCE: f32 = 0.3;

/// Minimum broken-bond dwell before reconnection, logical ticks.
pub const BOND_DWELL_MIN: u32 = 30;
/// Maximum broken-bond dwell, logical ticks.
pub const BOND_DWELL_MAX: u32 = 90;

/// Baseline longitudinal offset for a helix index: strictly increasing in
/// the index and antisymmetric about the vertical center.
#[must_use]
pub fn longitudinal_offset(index: usize) -> f32 {
    (index as f32 - (PAIR_COUNT as f32 - 1.0) * 0.5) * RISE
}

/// Vertical wobble contributed by base inclination at a helical angle.
#[must_use]
pub fn inclination_wobble(angle: f32) -> f32 {
    HELIX_RADIUS * INCLINATION.tan() * angle.sin()
}

/// Vertical offset between paired bases from the propeller twist.
#[must_use]
pub fn propeller_offset() -> f32 {
    RISE * PROPELLER_TWIST.sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitudinal_offset_is_monotonic() {
        for i in 1..PAIR_COUNT {
            assert!(longitudinal_offset(i) > longitudinal_offset(i - 1));
        }
    }

    #[test]
    fn longitudinal_offset_is_antisymmetric() {
        for i in 0..PAIR_COUNT {
            let lhs = longitudinal_offset(i);
            let rhs = -longitudinal_offset(PAIR_COUNT - 1 - i);
            assert!((lhs - rhs).abs() < 1e-4, "index {i}: {lhs} vs {rhs}");
        }
    }

    #[test]
    fn helix_spans_most_of_the_surface() {
        let span = longitudinal_offset(PAIR_COUNT - 1) - longitudinal_offset(0);
        assert!(span < SURFACE_HEIGHT);
        assert!(span > SURFACE_HEIGHT * 0.5);
    }

    #[test]
    fn inclination_wobble_vanishes_on_axis() {
        assert_eq!(inclination_wobble(0.0), 0.0);
        assert!(inclination_wobble(std::f32::consts::FRAC_PI_2).abs() > 0.0);
    }
}

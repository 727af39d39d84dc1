//! Base pairs and their hydrogen-bond dynamics.

use glam::Vec3;
use rand::Rng;

use super::params;

/// The two base-pair kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseKind {
    /// Adenine-thymine: two hydrogen bonds, weaker and less stable.
    AdenineThymine,
    /// Guanine-cytosine: three hydrogen bonds, stronger and stabler.
    GuanineCytosine,
}

impl BaseKind {
    /// Fraction of pairs drawn as adenine-thymine.
    pub const AT_FRACTION: f32 = 0.55;

    /// Sample a kind with the fixed AT/GC split.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        if rng.random::<f32>() < Self::AT_FRACTION {
            Self::AdenineThymine
        } else {
            Self::GuanineCytosine
        }
    }

    /// Per-tick survival probability range while connected.
    fn stability_range(self) -> std::ops::Range<f32> {
        match self {
            Self::AdenineThymine => 0.9930..0.9970,
            Self::GuanineCytosine => 0.9965..0.9990,
        }
    }

    /// Bond-strength range; feeds the bond-line opacity.
    fn strength_range(self) -> std::ops::Range<f32> {
        match self {
            Self::AdenineThymine => 0.55..0.9,
            Self::GuanineCytosine => 0.75..1.0,
        }
    }
}

/// Both endpoints of a base-pair rung at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairPoints {
    /// Base on the strand-A side.
    pub a: Vec3,
    /// Base on the strand-B side; carries the propeller-twist offset.
    pub b: Vec3,
}

/// One nucleobase pair spanning the two strands at a helix index.
pub struct BasePair {
    /// Helix index shared with the backbone particles.
    pub index: usize,
    /// Base-pair kind.
    pub kind: BaseKind,
    /// Base disk radius before depth modulation, logical px.
    pub size: f32,
    /// Base opacity before depth modulation.
    pub opacity: f32,
    /// Per-tick survival probability while connected.
    pub stability: f32,
    /// Hydrogen-bond strength; feeds the bond-line opacity.
    pub strength: f32,
    /// Random phase offset for the bond-fluctuation sinusoid.
    pub bond_phase: f32,
    /// Whether the hydrogen bond is currently intact.
    pub connected: bool,
    /// Ticks spent broken since the last break.
    broken_for: u32,
    /// Dwell threshold sampled when the bond last broke.
    dwell: u32,
}

impl BasePair {
    /// Create a pair, drawing its fixed parameters from `rng`. Bonds
    /// start connected.
    pub fn new<R: Rng>(index: usize, rng: &mut R) -> Self {
        let kind = BaseKind::sample(rng);
        Self {
            index,
            kind,
            size: rng.random_range(2.5..4.0),
            opacity: rng.random_range(0.4..0.85),
            stability: rng.random_range(kind.stability_range()),
            strength: rng.random_range(kind.strength_range()),
            bond_phase: rng.random_range(0.0..std::f32::consts::TAU),
            connected: true,
            broken_for: 0,
            dwell: 0,
        }
    }

    /// Advance the two-state bond process by one tick.
    ///
    /// A connected bond breaks with probability `1 - stability`. A broken
    /// bond dwells for the threshold sampled at break time (uniform in
    /// `[BOND_DWELL_MIN, BOND_DWELL_MAX]` ticks) before reconnecting.
    pub fn step_bond<R: Rng>(&mut self, rng: &mut R) {
        if self.connected {
            if rng.random::<f32>() > self.stability {
                self.connected = false;
                self.broken_for = 0;
                self.dwell = rng
                    .random_range(params::BOND_DWELL_MIN..=params::BOND_DWELL_MAX);
            }
        } else {
            self.broken_for += 1;
            if self.broken_for > self.dwell {
                self.connected = true;
            }
        }
    }

    /// Helical angle of the strand-A side at tick `t`. Base pairs carry
    /// no entropy term, so every rung spins at the shared rate.
    #[must_use]
    pub fn angle_at(&self, t: f32) -> f32 {
        self.index as f32 * params::ROTATION_PER_UNIT + t * params::SPIN_SPEED
    }

    /// Rung endpoints at tick `t`.
    ///
    /// Pure: identical `(self, t)` inputs always yield the same points.
    #[must_use]
    pub fn points_at(&self, t: f32) -> PairPoints {
        let angle = self.angle_at(t);
        let opposite = angle + std::f32::consts::PI;
        let y = params::CENTER.y + params::longitudinal_offset(self.index);

        let flutter = 1.0
            + params::BOND_FLUTTER
                * (t * params::BOND_FLUTTER_SPEED + self.bond_phase).sin();
        let twist = params::propeller_offset() * flutter;

        let a = Vec3::new(
            params::CENTER.x + angle.cos() * params::HELIX_RADIUS,
            y,
            angle.sin() * params::HELIX_RADIUS,
        );
        let b = Vec3::new(
            params::CENTER.x + opposite.cos() * params::HELIX_RADIUS,
            y + twist,
            opposite.sin() * params::HELIX_RADIUS,
        );
        PairPoints { a, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_bond_dwells_at_least_the_minimum() {
        let mut rng = crate::model::tests::seeded_rng(5);
        let mut pair = BasePair::new(0, &mut rng);
        pair.stability = 0.0; // force a break on the first step
        pair.step_bond(&mut rng);
        assert!(!pair.connected);

        for tick in 0..params::BOND_DWELL_MIN {
            assert!(!pair.connected, "reconnected after only {tick} ticks");
            pair.step_bond(&mut rng);
        }
    }

    #[test]
    fn broken_bond_eventually_reconnects() {
        let mut rng = crate::model::tests::seeded_rng(11);
        let mut pair = BasePair::new(3, &mut rng);
        pair.stability = 0.0;
        pair.step_bond(&mut rng);
        assert!(!pair.connected);

        pair.stability = 1.0; // no re-breaks once recovered
        for _ in 0..=params::BOND_DWELL_MAX {
            pair.step_bond(&mut rng);
        }
        assert!(pair.connected);
    }

    #[test]
    fn fully_stable_bond_never_breaks() {
        let mut rng = crate::model::tests::seeded_rng(23);
        let mut pair = BasePair::new(9, &mut rng);
        pair.stability = 1.0;
        for _ in 0..10_000 {
            pair.step_bond(&mut rng);
        }
        assert!(pair.connected);
    }

    #[test]
    fn rung_endpoints_face_each_other() {
        let mut rng = crate::model::tests::seeded_rng(41);
        let pair = BasePair::new(17, &mut rng);
        let pts = pair.points_at(120.0);

        let ax = pts.a.x - params::CENTER.x;
        let bx = pts.b.x - params::CENTER.x;
        assert!((ax + bx).abs() < 1e-3);
        assert!((pts.a.z + pts.b.z).abs() < 1e-3);
        // The propeller twist separates the rung vertically.
        assert!((pts.a.y - pts.b.y).abs() > 0.0);
    }

    #[test]
    fn point_evaluation_is_idempotent() {
        let mut rng = crate::model::tests::seeded_rng(57);
        let pair = BasePair::new(29, &mut rng);
        assert_eq!(pair.points_at(77.0), pair.points_at(77.0));
    }

    #[test]
    fn gc_ranges_dominate_at_ranges() {
        let mut rng = crate::model::tests::seeded_rng(3);
        let mut gc_min_strength = f32::MAX;
        let mut at_max_stability = 0.0f32;
        let mut seen_both = (false, false);
        for _ in 0..256 {
            let pair = BasePair::new(0, &mut rng);
            match pair.kind {
                BaseKind::AdenineThymine => {
                    seen_both.0 = true;
                    at_max_stability = at_max_stability.max(pair.stability);
                }
                BaseKind::GuanineCytosine => {
                    seen_both.1 = true;
                    gc_min_strength = gc_min_strength.min(pair.strength);
                }
            }
        }
        assert!(seen_both.0 && seen_both.1);
        assert!(at_max_stability < 0.9970);
        assert!(gc_min_strength >= 0.75);
    }
}

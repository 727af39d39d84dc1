//! Backbone strands and their phosphate-group marker particles.

use glam::Vec3;
use rand::Rng;
use rustc_hash::FxHashSet;

use super::params;

/// Which of the two backbone strands a particle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    /// First strand (angular phase 0).
    A,
    /// Second strand (angular phase π).
    B,
}

impl Strand {
    /// Angular phase offset of the strand around the helix axis.
    #[must_use]
    pub fn phase(self) -> f32 {
        match self {
            Self::A => 0.0,
            Self::B => std::f32::consts::PI,
        }
    }
}

/// One phosphate-group marker along a backbone strand.
///
/// Every random parameter is drawn once at creation and never changes;
/// the only mutable state is the transient per-frame link set.
pub struct BackboneParticle {
    /// Strand membership.
    pub strand: Strand,
    /// Fixed position along the helix, `0..PAIR_COUNT`.
    pub index: usize,
    /// Disk radius before depth modulation, logical px.
    pub size: f32,
    /// Base opacity before depth modulation.
    pub opacity: f32,
    /// Per-particle angular speed multiplier.
    pub entropy: f32,
    /// Small fixed offset added to the helical angle.
    pub phase_noise: f32,
    /// Per-particle radius multiplier.
    pub radius_noise: f32,
    /// Fixed longitudinal jitter, logical px.
    pub jitter: f32,
    /// Indices (into the combined backbone list) of particles this one is
    /// visually linked to. Cleared and rebuilt every frame; carries no
    /// cross-frame meaning.
    pub links: FxHashSet<usize>,
}

impl BackboneParticle {
    /// Create a particle, drawing its fixed parameters from `rng`.
    pub fn new<R: Rng>(strand: Strand, index: usize, rng: &mut R) -> Self {
        Self {
            strand,
            index,
            size: rng.random_range(2.0..4.5),
            opacity: rng.random_range(0.35..0.9),
            entropy: rng.random_range(0.85..1.15),
            phase_noise: rng.random_range(-0.25..0.25),
            radius_noise: rng.random_range(0.9..1.1),
            jitter: rng.random_range(-2.0..2.0),
            links: FxHashSet::default(),
        }
    }

    /// Helical angle at tick `t`.
    #[must_use]
    pub fn angle_at(&self, t: f32) -> f32 {
        self.index as f32 * params::ROTATION_PER_UNIT
            + t * params::SPIN_SPEED * self.entropy
            + self.strand.phase()
            + self.phase_noise
    }

    /// 3D position at tick `t`.
    ///
    /// Pure: identical `(self, t)` inputs always yield the same point and
    /// nothing is mutated by the evaluation.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        let angle = self.angle_at(t);
        let breathing = 1.0
            + params::BREATHING_AMPLITUDE
                * (t * params::BREATHING_SPEED
                    + self.phase_noise * std::f32::consts::TAU)
                    .sin();
        let radius = params::HELIX_RADIUS * self.radius_noise * breathing;

        let x = params::CENTER.x + angle.cos() * radius;
        let z = angle.sin() * radius;
        let y = params::CENTER.y
            + params::longitudinal_offset(self.index)
            + self.jitter
            + params::SWAY_AMPLITUDE
                * (t * params::SWAY_SPEED + self.index as f32 * 0.35).sin()
            + params::inclination_wobble(angle);

        Vec3::new(x, y, z)
    }
}

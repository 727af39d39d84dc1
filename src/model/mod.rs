//! Parametric helix model: the fixed particle set and its per-tick update.
//!
//! Two backbone strands of [`BackboneParticle`]s and one [`BasePair`] per
//! helix index are created once from an injected random generator and
//! never recreated. Each logical frame re-evaluates every position from
//! the shared tick counter and the entities' fixed random parameters,
//! steps the stochastic bond states, and rebuilds the transient link
//! sets. All randomness flows through the caller's generator, so a seeded
//! generator reproduces the animation exactly.

pub mod base_pair;
pub mod params;
pub mod strand;

pub use base_pair::{BaseKind, BasePair, PairPoints};
pub use strand::{BackboneParticle, Strand};

use glam::Vec3;
use rand::Rng;

/// The complete particle set plus the shared tick counter.
///
/// Entity counts are fixed at construction: `2 * PAIR_COUNT` backbone
/// particles and `PAIR_COUNT` base pairs. Indices never change; only
/// positions, bond states, and link sets vary over time.
pub struct HelixModel {
    /// Backbone particles: strand A at `0..PAIR_COUNT`, strand B at
    /// `PAIR_COUNT..2 * PAIR_COUNT`.
    pub backbone: Vec<BackboneParticle>,
    /// Base pairs, one per helix index.
    pub pairs: Vec<BasePair>,
    /// Cached backbone positions for the current tick, same order as
    /// `backbone`.
    pub backbone_points: Vec<Vec3>,
    /// Cached rung endpoints for the current tick, same order as `pairs`.
    pub pair_points: Vec<PairPoints>,
    tick: f32,
}

impl HelixModel {
    /// Build the particle set, drawing creation-time parameters from
    /// `rng`, and evaluate the initial positions at tick zero.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut backbone = Vec::with_capacity(params::PAIR_COUNT * 2);
        for strand in [Strand::A, Strand::B] {
            for index in 0..params::PAIR_COUNT {
                backbone.push(BackboneParticle::new(strand, index, rng));
            }
        }
        let pairs = (0..params::PAIR_COUNT)
            .map(|index| BasePair::new(index, rng))
            .collect();

        let mut model = Self {
            backbone,
            pairs,
            backbone_points: Vec::new(),
            pair_points: Vec::new(),
            tick: 0.0,
        };
        model.refresh_points();
        model
    }

    /// Current value of the shared tick counter.
    #[must_use]
    pub fn tick(&self) -> f32 {
        self.tick
    }

    /// Advance one logical frame: step every bond state, re-evaluate
    /// every cached position, and rebuild the link sets.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        self.tick += 1.0;
        for pair in &mut self.pairs {
            pair.step_bond(rng);
        }
        self.refresh_points();
        self.rebuild_links(rng);
    }

    /// Re-evaluate the cached points from the current tick.
    fn refresh_points(&mut self) {
        let t = self.tick;
        self.backbone_points.clear();
        self.backbone_points
            .extend(self.backbone.iter().map(|p| p.point_at(t)));
        self.pair_points.clear();
        self.pair_points.extend(self.pairs.iter().map(|p| p.points_at(t)));
    }

    /// Clear every link set, then repopulate from the current positions:
    /// particle pairs within `LINK_DISTANCE` link up when the per-pair
    /// random gate passes. Transient bookkeeping only.
    fn rebuild_links<R: Rng>(&mut self, rng: &mut R) {
        for particle in &mut self.backbone {
            particle.links.clear();
        }
        for i in 0..self.backbone_points.len() {
            for j in (i + 1)..self.backbone_points.len() {
                let dist =
                    self.backbone_points[i].distance(self.backbone_points[j]);
                if dist < params::LINK_DISTANCE
                    && rng.random::<f32>() < params::LINK_CHANCE
                {
                    let _ = self.backbone[i].links.insert(j);
                    let _ = self.backbone[j].links.insert(i);
                }
            }
        }
    }
}

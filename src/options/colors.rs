use serde::{Deserialize, Serialize};

use crate::model::{BaseKind, Strand};

/// Color palette, linear RGB triples.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Background fill.
    pub background: [f32; 3],
    /// Strand A backbone and particles.
    pub strand_a: [f32; 3],
    /// Strand B backbone and particles.
    pub strand_b: [f32; 3],
    /// Adenine-thymine base disks.
    pub at_bases: [f32; 3],
    /// Guanine-cytosine base disks.
    pub gc_bases: [f32; 3],
    /// Short- and long-range link lines.
    pub links: [f32; 3],
    /// Hydrogen-bond lines.
    pub bonds: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: [0.016, 0.027, 0.060],
            strand_a: [0.30, 0.85, 0.92],
            strand_b: [0.95, 0.45, 0.62],
            at_bases: [0.98, 0.80, 0.40],
            gc_bases: [0.55, 0.75, 0.98],
            links: [0.75, 0.85, 0.95],
            bonds: [0.92, 0.95, 1.00],
        }
    }
}

impl ColorOptions {
    /// Color of a backbone strand.
    #[must_use]
    pub fn strand_color(&self, strand: Strand) -> [f32; 3] {
        match strand {
            Strand::A => self.strand_a,
            Strand::B => self.strand_b,
        }
    }

    /// Base-disk color for a base-pair kind.
    #[must_use]
    pub fn base_color(&self, kind: BaseKind) -> [f32; 3] {
        match kind {
            BaseKind::AdenineThymine => self.at_bases,
            BaseKind::GuanineCytosine => self.gc_bases,
        }
    }
}

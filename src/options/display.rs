use serde::{Deserialize, Serialize};

/// Per-pass display toggles. All passes default on; the fixed pass order
/// is unaffected by which passes are enabled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayOptions {
    /// Whether to draw short-range links between nearby particles.
    pub show_links: bool,
    /// Whether to draw base pairs (hydrogen bonds and base disks).
    pub show_bases: bool,
    /// Whether to draw the backbone chain lines.
    pub show_backbone: bool,
    /// Whether to draw the backbone particle disks.
    pub show_particles: bool,
    /// Whether to draw the sparse long-range links.
    pub show_distant_links: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_links: true,
            show_bases: true,
            show_backbone: true,
            show_particles: true,
            show_distant_links: true,
        }
    }
}

//! Runtime options with TOML preset support.
//!
//! All tweakable settings (display toggles, colors, animation pacing)
//! are consolidated here. Options serialize to/from TOML so presets can
//! be stored next to the binary and loaded with `--preset`. All
//! sub-structs use `#[serde(default)]` so partial TOML files (e.g. only
//! overriding `[colors]`) work correctly.

mod animation;
mod colors;
mod display;

use std::path::Path;

pub use animation::AnimationOptions;
pub use colors::ColorOptions;
pub use display::DisplayOptions;
use serde::{Deserialize, Serialize};

use crate::error::HelyxError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Per-pass display toggles.
    pub display: DisplayOptions,
    /// Color palette.
    pub colors: ColorOptions,
    /// Animation pacing and determinism.
    pub animation: AnimationOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HelyxError::Io`] when the file cannot be read and
    /// [`HelyxError::OptionsParse`] when it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, HelyxError> {
        let content = std::fs::read_to_string(path).map_err(HelyxError::Io)?;
        toml::from_str(&content)
            .map_err(|e| HelyxError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`HelyxError::OptionsParse`] when serialization fails and
    /// [`HelyxError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), HelyxError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HelyxError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(HelyxError::Io)?;
        }
        std::fs::write(path, content).map_err(HelyxError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[animation]
tick_rate = 24
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.animation.tick_rate, 24);
        // Everything else should be default
        assert_eq!(opts.animation.seed, None);
        assert!(opts.display.show_particles);
        assert_eq!(opts.colors, ColorOptions::default());
    }

    #[test]
    fn seed_round_trips() {
        let toml_str = r"
[animation]
seed = 1234
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.animation.seed, Some(1234));
    }

    #[test]
    fn strand_and_base_color_lookup() {
        use crate::model::{BaseKind, Strand};
        let colors = ColorOptions::default();
        assert_eq!(colors.strand_color(Strand::A), colors.strand_a);
        assert_eq!(colors.strand_color(Strand::B), colors.strand_b);
        assert_eq!(
            colors.base_color(BaseKind::GuanineCytosine),
            colors.gc_bases
        );
    }

    #[test]
    fn all_passes_default_on() {
        let display = DisplayOptions::default();
        assert!(display.show_links);
        assert!(display.show_bases);
        assert!(display.show_backbone);
        assert!(display.show_particles);
        assert!(display.show_distant_links);
    }
}

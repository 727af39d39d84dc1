use serde::{Deserialize, Serialize};

/// Animation pacing and determinism options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnimationOptions {
    /// Logical frames per second the scheduler targets.
    pub tick_rate: u32,
    /// Fixed random seed; `None` seeds from OS entropy. A preset with a
    /// seed replays the same animation on every run.
    pub seed: Option<u64>,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            tick_rate: 30,
            seed: None,
        }
    }
}

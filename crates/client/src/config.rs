//! Headless match runner configuration.
use std::env;
use std::path::PathBuf;

use duel_content::ControllerKind;

/// Settings read from the process environment.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Duel setup TOML; built-in defaults when absent.
    pub setup_path: Option<PathBuf>,
    /// Overrides the seed from the setup file.
    pub seed: Option<u64>,
    pub left: Option<ControllerKind>,
    pub right: Option<ControllerKind>,
    /// Frames to run before calling the match unfinished.
    pub max_frames: u64,
}

impl SimConfig {
    /// Three minutes at the default 120 frames per second.
    pub const DEFAULT_MAX_FRAMES: u64 = 120 * 60 * 3;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_CONFIG` - Path to a duel setup TOML (default: built-in setup)
    /// - `DUEL_SEED` - Seed for AI randomness (default: from the setup)
    /// - `DUEL_LEFT` / `DUEL_RIGHT` - Controller per side, e.g. `heuristic`,
    ///   `random_sequence`, `idle` (default: from the setup)
    /// - `DUEL_MAX_FRAMES` - Frame budget (default: 21600)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.setup_path = env::var("DUEL_CONFIG").ok().map(PathBuf::from);
        config.seed = read_env::<u64>("DUEL_SEED");
        config.left = read_env::<ControllerKind>("DUEL_LEFT");
        config.right = read_env::<ControllerKind>("DUEL_RIGHT");

        if let Some(frames) = read_env::<u64>("DUEL_MAX_FRAMES") {
            config.max_frames = frames.max(1);
        }

        config
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            setup_path: None,
            seed: None,
            left: None,
            right: None,
            max_frames: Self::DEFAULT_MAX_FRAMES,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

//! Runtime settings
//!
//! Loaded once at startup from an optional JSON file in the working
//! directory. A missing file means defaults; a malformed file is logged
//! and ignored. Window title and playfield dimensions stay compile-time
//! constants, so there is deliberately little to configure here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;

/// Tunable runtime preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame rate cap; simulation velocities are tuned for 120
    pub target_fps: u32,
    /// Fixed RNG seed for reproducible serves (None = time-based)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            seed: None,
        }
    }
}

impl Settings {
    /// Load from `path`, falling back to defaults if missing or invalid
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let Ok(text) = fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&text) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("ignoring malformed settings {}: {err}", path.display());
                Self::default()
            }
        }
    }
}

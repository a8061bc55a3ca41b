//! Session settings
//!
//! Read from `galaxian.json` in the working directory, or from the file named
//! by `GALAXIAN_SETTINGS`. Missing fields take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding the settings path
pub const SETTINGS_ENV: &str = "GALAXIAN_SETTINGS";
/// Default settings file name
pub const SETTINGS_FILE: &str = "galaxian.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Starfield seed; a fresh one is picked when absent
    pub seed: Option<u64>,
    /// Let the autopilot play (attract mode)
    pub autopilot: bool,
    /// Stop after this many frames (0 = until the formation is cleared)
    pub max_frames: u64,
    /// Pace frames to wall-clock time instead of running flat out
    pub realtime: bool,

    // === Rendering ===
    /// Sprite sheet image; rendering is skipped without one
    pub spritesheet: Option<PathBuf>,
    /// Transparent colour of the sprite sheet
    pub color_key: [u8; 3],
    /// Write the last composited frame here as PNG
    pub snapshot: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            autopilot: true,
            max_frames: 60 * 60,
            realtime: false,

            spritesheet: None,
            color_key: [0, 0, 0],
            snapshot: None,
        }
    }
}

impl Settings {
    /// Parse settings JSON
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Path named by the environment, or the default file name
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };
        match Self::parse(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Whether a session may run forever
    pub fn is_unbounded(&self) -> bool {
        self.max_frames == 0
    }
}

//! Application configuration.
//!
//! The configuration is loaded from a JSON file, by default
//! `$XDG_CONFIG_HOME/hyprsnap/config.json` (override with
//! `--config <path>`).  A missing or broken file is not fatal: the daemon
//! falls back to the compiled-in defaults.
//!
//! # Example
//!
//! ```json
//! {
//!   "socket_path": "/run/user/1000/hyprsnap.sock",
//!   "prune_every": 50,
//!   "work_area": { "x": 0, "y": 30, "width": 2560, "height": 1410 }
//! }
//! ```

use crate::geometry::ScreenBounds;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
///
/// Every field is optional — a minimal `{}` file is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the command socket.  `None` means
    /// `$XDG_RUNTIME_DIR/hyprsnap.sock`.
    pub socket_path: Option<String>,

    /// Evict registry entries of closed windows after this many snaps.
    /// `0` disables automatic pruning (an explicit `"Prune"` command still
    /// works).
    pub prune_every: u32,

    /// Fixed work area.  When unset, the work area is queried from the
    /// window manager at start-up.
    pub work_area: Option<ScreenBounds>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            socket_path: None,
            prune_every: 100,
            work_area: None,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the daemon cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(area) = self.work_area {
            if !area.is_usable() {
                return Err(ConfigError(format!(
                    "work_area {}x{} at ({}, {}) must have a positive size that fits the screen coordinate range",
                    area.width, area.height, area.x, area.y
                )));
            }
        }
        Ok(())
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

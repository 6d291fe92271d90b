//! Runtime settings
//!
//! Read from a JSON file next to the binary; every field falls back to its
//! default when missing.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DT, TARGET_FPS};

/// Environment variable that overrides the settings file location
pub const SETTINGS_ENV: &str = "INTRO_ARCADE_SETTINGS";
/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the high score is kept
    pub save_path: PathBuf,
    /// Frame rate the driver paces itself to
    pub target_fps: u32,
    /// Upper bound on a single frame's `dt` (seconds)
    pub max_frame_dt: f32,
    /// RNG seed; `None` picks one from the clock
    pub seed: Option<u64>,
    /// Length of the headless attract session (seconds of wall time)
    pub demo_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from("save.json"),
            target_fps: TARGET_FPS,
            max_frame_dt: MAX_FRAME_DT,
            seed: None,
            demo_seconds: 20.0,
        }
    }
}

impl Settings {
    /// Path to read settings from (env override, else the default file)
    pub fn path_from_env() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH))
    }

    /// Load settings from `path`, using defaults if it is absent or unreadable
    pub fn load_from(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&text) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(err) => {
                log::warn!("Ignoring bad settings in {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Replace nonsensical values with defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.target_fps == 0 {
            self.target_fps = defaults.target_fps;
        }
        if !(self.max_frame_dt > 0.0) {
            self.max_frame_dt = defaults.max_frame_dt;
        }
        if !(self.demo_seconds >= 0.0) {
            self.demo_seconds = defaults.demo_seconds;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"seed": 77, "save_path": "scores/best.json"}"#).unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.seed, Some(77));
        assert_eq!(settings.save_path, PathBuf::from("scores/best.json"));
        assert_eq!(settings.target_fps, TARGET_FPS);
    }

    #[test]
    fn test_bad_values_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"target_fps": 0, "max_frame_dt": -1.0}"#).unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.target_fps, TARGET_FPS);
        assert_eq!(settings.max_frame_dt, MAX_FRAME_DT);
    }

    #[test]
    fn test_malformed_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "fps = 30").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}

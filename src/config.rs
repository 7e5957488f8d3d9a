// SPDX-License-Identifier: GPL-3.0-only

//! User configuration handling
//!
//! Settings persist as JSON under the platform config directory. A missing
//! or unreadable file falls back to defaults; the app must come up even
//! when the config is corrupt.

use crate::backends::camera::types::CameraFacing;
use crate::constants::app_info::APP_NAME;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Photo output format preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PhotoOutputFormat {
    /// JPEG (lossy, small files)
    #[default]
    Jpeg,
    /// PNG (lossless)
    Png,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mirror camera preview horizontally (selfie mode)
    pub mirror_preview: bool,
    /// Output format for saved photos
    pub photo_format: PhotoOutputFormat,
    /// Camera facing to start with on next launch
    pub last_camera_facing: CameraFacing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mirror_preview: true, // Default to mirrored (selfie mode)
            photo_format: PhotoOutputFormat::default(),
            last_camera_facing: CameraFacing::Front,
        }
    }
}

impl Config {
    /// Default config file location under the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.json"))
    }

    /// Load config from a file, falling back to defaults on any failure
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(err) => {
                    warn!(path = %path.display(), %err, "Invalid config, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist config to a file, creating parent directories as needed
    pub fn save(&self, path: &std::path::Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, contents).map_err(|e| format!("Failed to write config: {}", e))?;
        info!(path = %path.display(), "Config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load(std::path::Path::new("/nonexistent/config.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_corrupt_file_uses_defaults() {
        let dir = std::env::temp_dir().join("snapcam-test-corrupt-config");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let config = Config::load(&path);
        assert_eq!(config, Config::default());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = std::env::temp_dir().join("snapcam-test-config-roundtrip");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("config.json");

        let config = Config {
            mirror_preview: false,
            photo_format: PhotoOutputFormat::Png,
            last_camera_facing: CameraFacing::Back,
        };
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path), config);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = std::env::temp_dir().join("snapcam-test-partial-config");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{"mirror_preview": false}"#).unwrap();

        let config = Config::load(&path);
        assert!(!config.mirror_preview);
        assert_eq!(config.photo_format, PhotoOutputFormat::Jpeg);

        let _ = std::fs::remove_dir_all(&dir);
    }
}

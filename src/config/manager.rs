//! Configuration manager for loading and saving overlay settings
//!
//! This module provides functionality to load and save the overlay
//! configuration file with atomic writes to prevent corruption. The file
//! path is supplied by the embedding host; this crate has no directory
//! conventions of its own.

use crate::config::models::OverlayConfig;
use crate::error::{Result, SnaplookError, StringError};
use std::path::Path;
use tracing::{info, warn};

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist or is corrupt, returns the
    /// default configuration. Only an unreadable existing file is an error.
    pub fn load(path: &Path) -> Result<OverlayConfig> {
        if !path.exists() {
            info!("Overlay settings file not found, using defaults");
            return Ok(OverlayConfig::default());
        }

        let json = std::fs::read_to_string(path)?;

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Overlay settings loaded successfully");
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse overlay settings, using defaults: {}", e);
                Ok(OverlayConfig::default())
            }
        }
    }

    /// Save configuration to disk with atomic write
    ///
    /// Uses a temporary file and rename to ensure atomic write operation.
    pub fn save(path: &Path, config: &OverlayConfig) -> Result<()> {
        let dir = path.parent().ok_or_else(|| {
            SnaplookError::ConfigError(StringError::new("settings path has no parent directory"))
        })?;
        std::fs::create_dir_all(dir)?;

        let temp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&temp_path, json)?;
        std::fs::rename(temp_path, path)?;

        info!("Overlay settings saved successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::models::{ControlId, ControlSettings};

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigManager::load(&dir.path().join("settings.json")).unwrap();
        assert!(config.controls.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let config = ConfigManager::load(&path).unwrap();
        assert!(config.controls.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut config = OverlayConfig::default();
        config.controls.insert(
            ControlId::from("freelook"),
            ControlSettings {
                x: 7,
                y: -3,
                size: 64,
                opacity: 100,
            },
        );
        ConfigManager::save(&path, &config).unwrap();

        let loaded = ConfigManager::load(&path).unwrap();
        let settings = loaded.controls[&ControlId::from("freelook")];
        assert_eq!(settings.x, 7);
        assert_eq!(settings.y, -3);
        assert_eq!(settings.size, 64);
        assert_eq!(settings.opacity, 100);
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        ConfigManager::save(&path, &OverlayConfig::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        ConfigManager::save(&path, &OverlayConfig::default()).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
    }
}

//! Shared settings store for overlay controls
//!
//! The store is the handle overlay controllers read and write their
//! persisted geometry through. It is cheaply cloneable; all clones share
//! the same in-memory configuration, so several controls (and a host
//! persisting from another thread) see one consistent view.
//!
//! Every mutation is written back to disk immediately. A failed write is
//! logged and the in-memory configuration stays authoritative, so a
//! read-only filesystem degrades the feature to session-only persistence
//! rather than an error.

use crate::config::manager::ConfigManager;
use crate::config::models::{ControlId, ControlSettings, OverlayConfig, Position};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// Maximum opacity value; setters clamp to this
const OPACITY_MAX: u8 = 100;

/// Shared, persistent store of per-control overlay settings
#[derive(Debug, Clone)]
pub struct SettingsStore {
    config: Arc<Mutex<OverlayConfig>>,
    path: Option<PathBuf>,
}

impl SettingsStore {
    /// Open a store backed by the given settings file
    ///
    /// Missing or corrupt files start from defaults; an unreadable existing
    /// file is reported but still degrades to defaults so the overlay keeps
    /// working without persistence.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = match ConfigManager::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to read overlay settings, using defaults: {}", e);
                OverlayConfig::default()
            }
        };
        Self {
            config: Arc::new(Mutex::new(config)),
            path: Some(path),
        }
    }

    /// Open a store with no backing file
    ///
    /// For hosts that persist settings through their own channels.
    pub fn in_memory() -> Self {
        Self {
            config: Arc::new(Mutex::new(OverlayConfig::default())),
            path: None,
        }
    }

    /// Settings for the given control, falling back to defaults for
    /// controls that have never been saved
    pub fn control(&self, id: &ControlId) -> ControlSettings {
        self.config
            .lock()
            .controls
            .get(id)
            .copied()
            .unwrap_or_default()
    }

    /// Persist a control's position
    pub fn set_position(&self, id: &ControlId, position: Position) {
        self.mutate(id, |settings| {
            settings.x = position.x;
            settings.y = position.y;
        });
    }

    /// Persist a control's button size
    pub fn set_size(&self, id: &ControlId, size: u32) {
        self.mutate(id, |settings| settings.size = size);
    }

    /// Persist a control's opacity, clamped to 0-100
    pub fn set_opacity(&self, id: &ControlId, opacity: u8) {
        self.mutate(id, |settings| settings.opacity = opacity.min(OPACITY_MAX));
    }

    /// Apply a mutation to one control's settings and write the result back
    fn mutate(&self, id: &ControlId, f: impl FnOnce(&mut ControlSettings)) {
        let mut config = self.config.lock();
        f(config.controls.entry(id.clone()).or_default());

        if let Some(path) = &self.path {
            if let Err(e) = ConfigManager::save(path, &config) {
                warn!(
                    "Failed to save overlay settings to disk: {}. Continuing with \
                     in-memory settings. Changes will be lost on restart.",
                    e
                );
            }
        }
    }
}

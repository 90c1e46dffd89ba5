//! Configuration management module
//!
//! This module handles loading, saving, and sharing per-control overlay
//! settings (position, button size, opacity). Settings are stored as JSON
//! at a host-supplied path with atomic writes to prevent corruption.

pub mod manager;
pub mod models;
pub mod store;

pub use manager::ConfigManager;
pub use models::{ControlId, ControlSettings, OverlayConfig, Position};
pub use store::SettingsStore;

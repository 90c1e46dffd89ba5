//! Configuration data models
//!
//! This module defines the data structures persisted for overlay controls:
//! per-control position, button size, and opacity, keyed by a stable
//! control identifier. All fields are flat scalars; there is no schema
//! versioning.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Opaque identifier for a logical overlay control (e.g. "freelook")
///
/// Stable across process lifetimes; used as the persistence key for the
/// control's settings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(String);

impl ControlId {
    /// Create a control identifier from a stable string key
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ControlId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A control's on-screen position in device-independent units, top-left anchored
///
/// Positions round-trip losslessly through persistence; no clamping is
/// performed here (the renderer may clamp).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset from the left edge
    pub x: i32,
    /// Vertical offset from the top edge
    pub y: i32,
}

impl Position {
    /// Create a position from device-independent coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position translated by `(dx, dy)`
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Persisted settings for one overlay control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSettings {
    /// Horizontal position in device-independent units
    pub x: i32,
    /// Vertical position in device-independent units
    pub y: i32,
    /// Button size in device-independent units
    pub size: u32,
    /// Opacity, 0-100 linear
    pub opacity: u8,
}

impl ControlSettings {
    /// The stored position as a [`Position`]
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            x: 100,
            y: 200,
            size: 48,
            opacity: 80,
        }
    }
}

/// Top-level overlay configuration: settings for every known control
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Per-control settings, keyed by control identifier
    pub controls: HashMap<ControlId, ControlSettings>,
}

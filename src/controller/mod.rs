//! Overlay control logic module
//!
//! This module coordinates drag input, the native bridge, and the toggle
//! state machine into the lifecycle of visible overlay controls.
//!
//! # Overview
//!
//! - `ToggleState`: reconciles click-toggle and discrete key events into
//!   one authoritative active boolean with exactly one native call per
//!   transition
//! - `OverlayController`: show/hide/update lifecycle of one control,
//!   rendering delegated to the host through `OverlayRenderer`
//! - `OverlayRegistry`: explicit, injected ownership of controls keyed by
//!   `ControlId`
//!
//! # Event Flow
//!
//! ```text
//! renderer pointer events → DragController → PositionChanged → render
//!                                          → Clicked ─┐
//! host key events ──────────────────────────────────→ ToggleState → NativeBridge
//! ```

pub mod overlay;
pub mod registry;
pub mod toggle;

pub use overlay::{OverlayController, OverlayRenderer};
pub use registry::OverlayRegistry;
pub use toggle::ToggleState;

//! Pointer input handling module
//!
//! This module converts the raw pointer-event stream from the rendering
//! surface into overlay actions.
//!
//! # Overview
//!
//! - `PointerEvent`: raw down/move/up/cancel events with coordinates
//! - `DragController`: per-gesture state machine disambiguating drags from taps
//! - `DragAction`: the resulting position update or click
//!
//! Drag arithmetic is pure integer addition on the session's starting
//! position and touch point; the final position of a gesture depends only on
//! its endpoints, never on the intermediate move events.

pub mod drag;

pub use drag::{DragAction, DragController, PointerEvent};

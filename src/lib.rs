//! snaplook - Draggable freelook overlay control
//!
//! Implements the state machine behind a persistent, draggable on-screen
//! button that toggles an external "freelook" camera feature exposed by a
//! separately-initialized native module. The crate owns drag-vs-tap
//! disambiguation, deferred native initialization, and the reconciliation
//! of click-toggle and discrete key-down/key-up input into one
//! authoritative active state; rendering and the native camera math stay
//! on the host's side of the [`controller::OverlayRenderer`] and
//! [`bridge::FreelookModule`] traits.
//!
//! # Threading
//!
//! Single-threaded cooperative model: pointer, click, and key events are
//! dispatched on one logical UI thread, and the deferred native init is
//! delivered on that same thread through the host's `tick` pump. Only the
//! settings store is shareable across threads.

// Module declarations
pub mod bridge;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod utils;

// Re-export commonly used types
pub use error::{Result, SnaplookError};

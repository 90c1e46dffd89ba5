//! Native bridge module
//!
//! This module mediates every call into the external native camera-control
//! module and owns its deferred, one-shot initialization.
//!
//! # Overview
//!
//! - `FreelookModule`: the trait the host's native module implements
//! - `NativeBridge`: schedules initialization after a settle delay and
//!   gates activate/deactivate on readiness
//! - `BridgeState`: `Uninitialized → Initializing → Ready | Failed`, with
//!   `Failed → Initializing` on an explicit retry
//!
//! # Deferred initialization
//!
//! `request_init` arms a deadline and transitions to `Initializing`
//! immediately, so duplicate requests cannot double-schedule. The owner's
//! event pump delivers the deadline through `tick` on the same logical
//! thread; the native `init()` runs exactly once per request. Failure is
//! recorded and logged, never propagated; the feature stays inert until
//! the host requests initialization again.

pub mod native;

pub use native::{BridgeState, FreelookModule, INIT_DELAY, NativeBridge};

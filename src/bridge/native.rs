//! Native freelook bridge implementation
//!
//! Owns the deferred initialization of the native camera module and gates
//! every activate/deactivate call on the module being ready.
//!
//! Initialization is deferred because the native feature's underlying
//! resource may not be attachable at control-creation time; a fixed settle
//! delay is a simple, documented mitigation rather than a correctness
//! guarantee. The pending deadline is owned state fired by the owner's
//! `tick` pump on the same logical thread, so a deferred init can never
//! outlive its control; the generation counter additionally discards a
//! deadline that a newer request has superseded.

use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Settle delay between an init request and the native `init()` call
pub const INIT_DELAY: Duration = Duration::from_millis(1000);

/// The boundary to the external native camera-control module
///
/// `init` hooks the module into the running game; it is expected to be
/// non-blocking-fast. `on_activate`/`on_deactivate` engage and release the
/// freelook camera. `is_active` is an advisory status mirror, not
/// authoritative; the toggle state machine owns the authoritative boolean.
pub trait FreelookModule {
    /// Initialize the native module; returns false when hooking failed
    fn init(&mut self) -> bool;
    /// Engage the freelook camera
    fn on_activate(&mut self);
    /// Release the freelook camera
    fn on_deactivate(&mut self);
    /// Advisory: whether the native side currently reports the feature engaged
    fn is_active(&self) -> bool {
        false
    }
}

/// Lifecycle state of the native bridge
///
/// Transitions only move forward, except `Failed → Initializing` on a
/// retried init request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    /// No init has been requested yet
    Uninitialized,
    /// An init is scheduled or in flight
    Initializing,
    /// The native module initialized successfully
    Ready,
    /// The native module failed to initialize; a new request is required
    Failed,
}

/// A scheduled deferred initialization
#[derive(Debug)]
struct PendingInit {
    /// When the native `init()` should run
    due: Instant,
    /// Generation of the request that armed this deadline
    generation: u64,
}

/// Gatekeeper in front of the external native module
///
/// All calls happen on one logical UI thread; the only asynchrony is the
/// deferred init, which the owner delivers through [`NativeBridge::tick`].
#[derive(Debug)]
pub struct NativeBridge<M> {
    module: M,
    state: BridgeState,
    pending: Option<PendingInit>,
    generation: u64,
}

impl<M: FreelookModule> NativeBridge<M> {
    /// Wrap a native module; no initialization is scheduled yet
    pub fn new(module: M) -> Self {
        Self {
            module,
            state: BridgeState::Uninitialized,
            pending: None,
            generation: 0,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> BridgeState {
        self.state
    }

    /// Whether the native module has confirmed initialization
    pub fn is_ready(&self) -> bool {
        self.state == BridgeState::Ready
    }

    /// Request deferred initialization of the native module
    ///
    /// Idempotent: a no-op while already initializing or ready. From
    /// `Uninitialized` or `Failed`, arms a deadline [`INIT_DELAY`] ahead of
    /// `now` and transitions to `Initializing` immediately so concurrent
    /// callers cannot double-schedule.
    pub fn request_init(&mut self, now: Instant) {
        match self.state {
            BridgeState::Initializing | BridgeState::Ready => {
                debug!("Freelook init already requested (state: {:?})", self.state);
            }
            BridgeState::Uninitialized | BridgeState::Failed => {
                self.generation += 1;
                self.pending = Some(PendingInit {
                    due: now + INIT_DELAY,
                    generation: self.generation,
                });
                self.state = BridgeState::Initializing;
                info!(
                    "Freelook init scheduled in {} ms",
                    INIT_DELAY.as_millis()
                );
            }
        }
    }

    /// Deliver the deferred initialization if its deadline has elapsed
    ///
    /// Called from the owner's event pump on the UI thread. Invokes the
    /// native `init()` at most once per request; on failure the bridge stays
    /// `Failed` until the next [`NativeBridge::request_init`].
    pub fn tick(&mut self, now: Instant) {
        let Some(pending) = &self.pending else {
            return;
        };
        if pending.generation != self.generation {
            debug!("Discarding superseded freelook init deadline");
            self.pending = None;
            return;
        }
        if now < pending.due {
            return;
        }
        self.pending = None;

        if self.module.init() {
            self.state = BridgeState::Ready;
            info!("Freelook module initialized");
        } else {
            self.state = BridgeState::Failed;
            error!("Freelook module failed to initialize");
        }
    }

    /// Engage the freelook camera
    ///
    /// Warns and drops the call when the bridge is not ready.
    pub fn activate(&mut self) {
        if !self.is_ready() {
            warn!(
                "Freelook activate ignored; bridge not ready (state: {:?})",
                self.state
            );
            return;
        }
        self.module.on_activate();
    }

    /// Release the freelook camera
    ///
    /// Warns and drops the call when the bridge is not ready.
    pub fn deactivate(&mut self) {
        if !self.is_ready() {
            warn!(
                "Freelook deactivate ignored; bridge not ready (state: {:?})",
                self.state
            );
            return;
        }
        self.module.on_deactivate();
    }

    /// Advisory: the native side's own view of whether the feature is engaged
    ///
    /// False whenever the bridge is not ready. Status mirror only; the
    /// toggle state machine owns the authoritative boolean.
    pub fn module_active(&self) -> bool {
        self.is_ready() && self.module.is_active()
    }
}

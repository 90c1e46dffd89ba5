//! Toggle state machine reconciling click and key input
//!
//! The overlay button is a toggle (one click flips the state) while the
//! host may also deliver discrete key-down/key-up events for the same
//! feature. Both sources drive one authoritative `active` boolean here,
//! with per-source transition rules so that mixing them cannot
//! desynchronize the boolean from the native side: every transition that
//! changes the boolean performs exactly one matching native call, and
//! every no-op transition performs none.

use crate::bridge::{FreelookModule, NativeBridge};
use tracing::{debug, info, warn};

/// Authoritative active/inactive state for one overlay control
///
/// Only meaningful while the bridge is ready; every entry point is a
/// logged no-op before that.
#[derive(Debug, Default)]
pub struct ToggleState {
    active: bool,
}

impl ToggleState {
    /// New state machine, initially inactive
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the feature is currently engaged
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Button click: flip the state
    pub fn on_click<M: FreelookModule>(&mut self, bridge: &mut NativeBridge<M>) {
        if !bridge.is_ready() {
            warn!(
                "Freelook toggle ignored; bridge not ready (state: {:?})",
                bridge.state()
            );
            return;
        }
        if self.active {
            self.active = false;
            bridge.deactivate();
            info!("Freelook toggled off");
        } else {
            self.active = true;
            bridge.activate();
            info!("Freelook toggled on");
        }
    }

    /// Discrete key-down: force active, idempotently
    ///
    /// A second key-down while already active is ignored and does not
    /// re-invoke the native activate.
    pub fn on_key_down<M: FreelookModule>(&mut self, bridge: &mut NativeBridge<M>) {
        if !bridge.is_ready() {
            warn!(
                "Freelook key-down ignored; bridge not ready (state: {:?})",
                bridge.state()
            );
            return;
        }
        if self.active {
            debug!("Freelook key-down while already active; ignored");
            return;
        }
        self.active = true;
        bridge.activate();
        info!("Freelook engaged by key-down");
    }

    /// Discrete key-up: force inactive, idempotently
    pub fn on_key_up<M: FreelookModule>(&mut self, bridge: &mut NativeBridge<M>) {
        if !self.active {
            debug!("Freelook key-up while already inactive; ignored");
            return;
        }
        self.active = false;
        bridge.deactivate();
        info!("Freelook released by key-up");
    }

    /// The control disappeared from view: force release
    ///
    /// Guarantees the native feature is never left engaged when its visual
    /// control is gone. Idempotent.
    pub fn on_hide<M: FreelookModule>(&mut self, bridge: &mut NativeBridge<M>) {
        if !self.active {
            return;
        }
        self.active = false;
        bridge.deactivate();
        info!("Freelook released because its control was hidden");
    }
}

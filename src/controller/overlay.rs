//! Overlay controller implementation
//!
//! Composes the settings store, drag controller, native bridge, and toggle
//! state machine into the lifecycle of one visible control, delegating all
//! drawing to the host's rendering surface behind [`OverlayRenderer`].

use crate::bridge::{FreelookModule, NativeBridge};
use crate::config::{ControlId, Position, SettingsStore};
use crate::controller::toggle::ToggleState;
use crate::input::{DragAction, DragController, PointerEvent};
use std::time::Instant;
use tracing::{debug, info};

/// The external rendering surface that draws the overlay button
///
/// The renderer owns everything visual (the actual widget, icon, unit
/// conversion); this crate only tells it where and how to draw, and
/// receives the raw pointer events it emits.
pub trait OverlayRenderer {
    /// Draw or move the control
    fn render(&mut self, position: Position, size: u32, opacity: u8);
    /// Remove the control from the screen
    fn destroy(&mut self);
}

/// Lifecycle controller for one draggable overlay control
pub struct OverlayController<M, R> {
    id: ControlId,
    store: SettingsStore,
    drag: DragController,
    bridge: NativeBridge<M>,
    toggle: ToggleState,
    renderer: R,
    visible: bool,
    /// Cached geometry, refreshed on show() and update()
    size: u32,
    opacity: u8,
}

impl<M: FreelookModule, R: OverlayRenderer> OverlayController<M, R> {
    /// Create a controller for the given control
    ///
    /// Reads the control's last persisted position from the store; nothing
    /// is rendered and no native init is requested until [`Self::show`].
    pub fn new(id: ControlId, store: SettingsStore, module: M, renderer: R) -> Self {
        let settings = store.control(&id);
        Self {
            drag: DragController::new(id.clone(), store.clone()),
            bridge: NativeBridge::new(module),
            toggle: ToggleState::new(),
            id,
            store,
            renderer,
            visible: false,
            size: settings.size,
            opacity: settings.opacity,
        }
    }

    /// This control's identifier
    pub fn id(&self) -> &ControlId {
        &self.id
    }

    /// Whether the control is currently on screen
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the freelook feature is currently engaged
    pub fn is_active(&self) -> bool {
        self.toggle.is_active()
    }

    /// Whether the native bridge has confirmed initialization
    pub fn is_ready(&self) -> bool {
        self.bridge.is_ready()
    }

    /// Show the control at its current position and persisted geometry
    ///
    /// Requests the deferred native init (a no-op once initialization is
    /// under way or done, so showing again after a failed init retries).
    /// Idempotent while already visible.
    pub fn show(&mut self, now: Instant) {
        if self.visible {
            debug!("Overlay control '{}' already visible", self.id);
            return;
        }
        self.bridge.request_init(now);

        let settings = self.store.control(&self.id);
        self.size = settings.size;
        self.opacity = settings.opacity;
        self.renderer
            .render(self.drag.position(), self.size, self.opacity);
        self.visible = true;
        info!("Overlay control '{}' shown", self.id);
    }

    /// Remove the control from the screen, releasing the native feature if
    /// it was engaged
    ///
    /// Idempotent while already hidden.
    pub fn hide(&mut self) {
        if !self.visible {
            debug!("Overlay control '{}' already hidden", self.id);
            return;
        }
        self.toggle.on_hide(&mut self.bridge);
        self.renderer.destroy();
        self.visible = false;
        info!("Overlay control '{}' hidden", self.id);
    }

    /// Re-read persisted size and opacity and push them to the renderer
    ///
    /// Position and active state are untouched. No-op while hidden; the
    /// next [`Self::show`] reads fresh settings anyway.
    pub fn update(&mut self) {
        if !self.visible {
            debug!("Overlay control '{}' hidden; update skipped", self.id);
            return;
        }
        let settings = self.store.control(&self.id);
        self.size = settings.size;
        self.opacity = settings.opacity;
        self.renderer
            .render(self.drag.position(), self.size, self.opacity);
    }

    /// Pump the bridge's deferred initialization
    ///
    /// Call from the host's event loop; cheap when nothing is pending.
    pub fn tick(&mut self, now: Instant) {
        self.bridge.tick(now);
    }

    /// Feed a raw pointer event from the renderer
    ///
    /// Drag moves re-render the control at its new position; a tap toggles
    /// the freelook feature.
    pub fn on_pointer_event(&mut self, event: PointerEvent) {
        if !self.visible {
            debug!(
                "Pointer event for hidden control '{}' dropped: {:?}",
                self.id, event
            );
            return;
        }
        match self.drag.on_pointer_event(event) {
            DragAction::None => {}
            DragAction::PositionChanged(position) => {
                self.renderer.render(position, self.size, self.opacity);
            }
            DragAction::Clicked => {
                self.toggle.on_click(&mut self.bridge);
            }
        }
    }

    /// Discrete key-down for the freelook feature
    pub fn on_key_down(&mut self) {
        self.toggle.on_key_down(&mut self.bridge);
    }

    /// Discrete key-up for the freelook feature
    pub fn on_key_up(&mut self) {
        self.toggle.on_key_up(&mut self.bridge);
    }
}

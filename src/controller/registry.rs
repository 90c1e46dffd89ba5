//! Registry of overlay controls owned by the application layer
//!
//! Controls are keyed by [`ControlId`] and owned explicitly by whoever
//! composes the application, instead of being looked up through an ambient
//! per-identifier singleton. Removal and replacement hide the outgoing
//! control first, so the native feature is never left engaged by a control
//! that no longer exists.

use crate::bridge::FreelookModule;
use crate::config::ControlId;
use crate::controller::overlay::{OverlayController, OverlayRenderer};
use std::collections::HashMap;
use std::time::Instant;
use tracing::warn;

/// Owner of all overlay controls of one application layer
pub struct OverlayRegistry<M, R> {
    controls: HashMap<ControlId, OverlayController<M, R>>,
}

impl<M: FreelookModule, R: OverlayRenderer> OverlayRegistry<M, R> {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            controls: HashMap::new(),
        }
    }

    /// Register a control under its own identifier
    ///
    /// A control already registered under the same identifier is hidden
    /// and dropped.
    pub fn insert(&mut self, controller: OverlayController<M, R>) {
        if let Some(mut previous) = self
            .controls
            .insert(controller.id().clone(), controller)
        {
            warn!(
                "Overlay control '{}' replaced an existing registration",
                previous.id()
            );
            previous.hide();
        }
    }

    /// The control registered under `id`, if any
    pub fn get_mut(&mut self, id: &ControlId) -> Option<&mut OverlayController<M, R>> {
        self.controls.get_mut(id)
    }

    /// Unregister and return the control under `id`, hiding it first
    pub fn remove(&mut self, id: &ControlId) -> Option<OverlayController<M, R>> {
        let mut controller = self.controls.remove(id)?;
        controller.hide();
        Some(controller)
    }

    /// Pump deferred initialization for every registered control
    pub fn tick_all(&mut self, now: Instant) {
        for controller in self.controls.values_mut() {
            controller.tick(now);
        }
    }

    /// Hide every registered control
    pub fn hide_all(&mut self) {
        for controller in self.controls.values_mut() {
            controller.hide();
        }
    }

    /// Number of registered controls
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the registry has no controls
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

impl<M: FreelookModule, R: OverlayRenderer> Default for OverlayRegistry<M, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::INIT_DELAY;
    use crate::config::{Position, SettingsStore};
    use crate::input::PointerEvent;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Default)]
    struct FakeModule {
        deactivates: Rc<RefCell<u32>>,
    }

    impl FreelookModule for FakeModule {
        fn init(&mut self) -> bool {
            true
        }

        fn on_activate(&mut self) {}

        fn on_deactivate(&mut self) {
            *self.deactivates.borrow_mut() += 1;
        }
    }

    #[derive(Debug, Clone, Default)]
    struct FakeRenderer;

    impl OverlayRenderer for FakeRenderer {
        fn render(&mut self, _position: Position, _size: u32, _opacity: u8) {}
        fn destroy(&mut self) {}
    }

    fn active_control(
        id: &str,
        module: FakeModule,
    ) -> OverlayController<FakeModule, FakeRenderer> {
        let mut controller = OverlayController::new(
            ControlId::from(id),
            SettingsStore::in_memory(),
            module,
            FakeRenderer,
        );
        let t0 = Instant::now();
        controller.show(t0);
        controller.tick(t0 + INIT_DELAY);
        controller.on_pointer_event(PointerEvent::Down { x: 0, y: 0 });
        controller.on_pointer_event(PointerEvent::Up { x: 0, y: 0 });
        assert!(controller.is_active());
        controller
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = OverlayRegistry::new();
        assert!(registry.is_empty());

        registry.insert(active_control("freelook", FakeModule::default()));
        assert_eq!(registry.len(), 1);
        assert!(registry.get_mut(&ControlId::from("freelook")).is_some());
        assert!(registry.get_mut(&ControlId::from("other")).is_none());
    }

    #[test]
    fn test_remove_hides_the_control() {
        let module = FakeModule::default();
        let mut registry = OverlayRegistry::new();
        registry.insert(active_control("freelook", module.clone()));

        let removed = registry.remove(&ControlId::from("freelook")).unwrap();
        assert!(!removed.is_active());
        assert_eq!(*module.deactivates.borrow(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_replacing_a_registration_hides_the_old_control() {
        let old_module = FakeModule::default();
        let mut registry = OverlayRegistry::new();
        registry.insert(active_control("freelook", old_module.clone()));
        registry.insert(active_control("freelook", FakeModule::default()));

        assert_eq!(registry.len(), 1);
        assert_eq!(*old_module.deactivates.borrow(), 1);
    }

    #[test]
    fn test_tick_all_advances_deferred_init() {
        let mut registry = OverlayRegistry::new();
        let mut controller = OverlayController::new(
            ControlId::from("freelook"),
            SettingsStore::in_memory(),
            FakeModule::default(),
            FakeRenderer,
        );
        let t0 = Instant::now();
        controller.show(t0);
        registry.insert(controller);

        registry.tick_all(t0 + INIT_DELAY);
        assert!(
            registry
                .get_mut(&ControlId::from("freelook"))
                .unwrap()
                .is_ready()
        );
    }

    #[test]
    fn test_hide_all_releases_every_control() {
        let module_a = FakeModule::default();
        let module_b = FakeModule::default();
        let mut registry = OverlayRegistry::new();
        registry.insert(active_control("freelook", module_a.clone()));
        registry.insert(active_control("zoom", module_b.clone()));

        registry.hide_all();
        assert_eq!(*module_a.deactivates.borrow(), 1);
        assert_eq!(*module_b.deactivates.borrow(), 1);
    }
}

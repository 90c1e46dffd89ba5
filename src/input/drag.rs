//! Drag-vs-tap disambiguation for the overlay button
//!
//! Converts the raw pointer-event stream coming from the rendering surface
//! into either drag moves (position updates) or a tap (click), committing
//! the final position to the settings store when a drag ends.
//!
//! A session opens on pointer-down and closes on pointer-up or
//! pointer-cancel. Any move event during a session disqualifies the click,
//! zero-delta moves included; position arithmetic is pure integer addition
//! on the session's initial position and touch point, so repeated drags
//! accumulate without drift.

use crate::config::{ControlId, Position, SettingsStore};
use tracing::{debug, info};

/// A raw pointer event from the rendering surface
///
/// Coordinates are raw touch coordinates in the same device-independent
/// units as [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer made contact
    Down {
        /// Raw horizontal touch coordinate
        x: i32,
        /// Raw vertical touch coordinate
        y: i32,
    },
    /// Pointer moved while in contact
    Move {
        /// Raw horizontal touch coordinate
        x: i32,
        /// Raw vertical touch coordinate
        y: i32,
    },
    /// Pointer lifted
    Up {
        /// Raw horizontal touch coordinate
        x: i32,
        /// Raw vertical touch coordinate
        y: i32,
    },
    /// Gesture aborted by the windowing layer
    Cancel,
}

/// Outcome of feeding one pointer event to the drag controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAction {
    /// Nothing to do
    None,
    /// The control moved; the renderer should redraw at this position
    PositionChanged(Position),
    /// The gesture was a tap on the button
    Clicked,
}

/// Ephemeral per-gesture state, created on pointer-down
#[derive(Debug)]
struct DragSession {
    /// Control position when the gesture started
    initial_position: Position,
    /// Raw touch coordinates when the gesture started
    initial_touch: (i32, i32),
    /// Whether any move event occurred during this session
    moved: bool,
}

/// Converts a raw pointer-event stream into drag moves or taps
#[derive(Debug)]
pub struct DragController {
    id: ControlId,
    store: SettingsStore,
    /// Live position of the control; persisted only when a drag ends
    position: Position,
    session: Option<DragSession>,
}

impl DragController {
    /// Create a drag controller for the given control, starting from its
    /// last persisted position
    pub fn new(id: ControlId, store: SettingsStore) -> Self {
        let position = store.control(&id).position();
        Self {
            id,
            store,
            position,
            session: None,
        }
    }

    /// The control's live position
    ///
    /// Tracks drag moves as they happen; matches the persisted position
    /// whenever no drag is in flight and the last gesture was not cancelled.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Feed one pointer event through the drag state machine
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> DragAction {
        match event {
            PointerEvent::Down { x, y } => {
                self.session = Some(DragSession {
                    initial_position: self.position,
                    initial_touch: (x, y),
                    moved: false,
                });
                DragAction::None
            }
            PointerEvent::Move { x, y } => {
                let Some(session) = self.session.as_mut() else {
                    debug!("Pointer move without an open drag session; ignored");
                    return DragAction::None;
                };
                session.moved = true;
                self.position = session
                    .initial_position
                    .offset(x - session.initial_touch.0, y - session.initial_touch.1);
                DragAction::PositionChanged(self.position)
            }
            PointerEvent::Up { x, y } => {
                let Some(session) = self.session.take() else {
                    debug!("Pointer up without an open drag session; ignored");
                    return DragAction::None;
                };
                if !session.moved {
                    return DragAction::Clicked;
                }
                self.position = session
                    .initial_position
                    .offset(x - session.initial_touch.0, y - session.initial_touch.1);
                self.store.set_position(&self.id, self.position);
                info!(
                    "Overlay control '{}' moved to ({}, {})",
                    self.id, self.position.x, self.position.y
                );
                DragAction::PositionChanged(self.position)
            }
            PointerEvent::Cancel => {
                if self.session.take().is_some() {
                    debug!("Drag session for '{}' cancelled", self.id);
                }
                DragAction::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DragController {
        DragController::new(ControlId::from("freelook"), SettingsStore::in_memory())
    }

    #[test]
    fn test_down_then_up_is_a_click() {
        let mut drag = controller();
        assert_eq!(
            drag.on_pointer_event(PointerEvent::Down { x: 50, y: 60 }),
            DragAction::None
        );
        assert_eq!(
            drag.on_pointer_event(PointerEvent::Up { x: 50, y: 60 }),
            DragAction::Clicked
        );
        // A tap never changes the position
        assert_eq!(drag.position(), Position::new(100, 200));
    }

    #[test]
    fn test_move_reports_initial_plus_delta() {
        let mut drag = controller();
        drag.on_pointer_event(PointerEvent::Down { x: 500, y: 500 });
        let action = drag.on_pointer_event(PointerEvent::Move { x: 530, y: 480 });
        assert_eq!(
            action,
            DragAction::PositionChanged(Position::new(130, 180))
        );
    }

    #[test]
    fn test_any_move_disqualifies_click_even_with_zero_delta() {
        let mut drag = controller();
        drag.on_pointer_event(PointerEvent::Down { x: 10, y: 10 });
        // Zero-delta move: same position reported, but the gesture is a drag now
        assert_eq!(
            drag.on_pointer_event(PointerEvent::Move { x: 10, y: 10 }),
            DragAction::PositionChanged(Position::new(100, 200))
        );
        assert_eq!(
            drag.on_pointer_event(PointerEvent::Up { x: 10, y: 10 }),
            DragAction::PositionChanged(Position::new(100, 200))
        );
    }

    #[test]
    fn test_up_after_moves_persists_final_position() {
        let store = SettingsStore::in_memory();
        let id = ControlId::from("freelook");
        let mut drag = DragController::new(id.clone(), store.clone());

        drag.on_pointer_event(PointerEvent::Down { x: 0, y: 0 });
        drag.on_pointer_event(PointerEvent::Move { x: 5, y: 5 });
        drag.on_pointer_event(PointerEvent::Up { x: 25, y: -15 });

        assert_eq!(store.control(&id).position(), Position::new(125, 185));
        assert_eq!(drag.position(), Position::new(125, 185));
    }

    #[test]
    fn test_tap_does_not_persist() {
        let store = SettingsStore::in_memory();
        let id = ControlId::from("freelook");
        let mut drag = DragController::new(id.clone(), store.clone());
        store.set_position(&id, Position::new(1, 2));

        drag.on_pointer_event(PointerEvent::Down { x: 0, y: 0 });
        drag.on_pointer_event(PointerEvent::Up { x: 0, y: 0 });

        assert_eq!(store.control(&id).position(), Position::new(1, 2));
    }

    #[test]
    fn test_cancel_discards_session_without_persisting() {
        let store = SettingsStore::in_memory();
        let id = ControlId::from("freelook");
        let mut drag = DragController::new(id.clone(), store.clone());

        drag.on_pointer_event(PointerEvent::Down { x: 0, y: 0 });
        drag.on_pointer_event(PointerEvent::Move { x: 40, y: 40 });
        assert_eq!(
            drag.on_pointer_event(PointerEvent::Cancel),
            DragAction::None
        );

        // Nothing persisted; the next gesture starts from the live position
        assert_eq!(store.control(&id).position(), Position::new(100, 200));
        drag.on_pointer_event(PointerEvent::Down { x: 0, y: 0 });
        let action = drag.on_pointer_event(PointerEvent::Move { x: 1, y: 0 });
        assert_eq!(
            action,
            DragAction::PositionChanged(Position::new(141, 240))
        );
    }

    #[test]
    fn test_stray_events_without_session_are_ignored() {
        let mut drag = controller();
        assert_eq!(
            drag.on_pointer_event(PointerEvent::Move { x: 9, y: 9 }),
            DragAction::None
        );
        assert_eq!(
            drag.on_pointer_event(PointerEvent::Up { x: 9, y: 9 }),
            DragAction::None
        );
        assert_eq!(
            drag.on_pointer_event(PointerEvent::Cancel),
            DragAction::None
        );
        assert_eq!(drag.position(), Position::new(100, 200));
    }

    #[test]
    fn test_repeated_drags_accumulate_exactly() {
        let store = SettingsStore::in_memory();
        let id = ControlId::from("freelook");
        let mut drag = DragController::new(id.clone(), store.clone());

        for _ in 0..100 {
            drag.on_pointer_event(PointerEvent::Down { x: 0, y: 0 });
            drag.on_pointer_event(PointerEvent::Move { x: 3, y: -2 });
            drag.on_pointer_event(PointerEvent::Up { x: 3, y: -2 });
        }

        assert_eq!(store.control(&id).position(), Position::new(400, 0));
    }

    // Property-based tests using proptest
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the final position after a drag equals
            /// initial_position + (final_touch - initial_touch), regardless
            /// of the intermediate moves
            #[test]
            fn final_position_depends_only_on_endpoints(
                start in (-5000i32..5000, -5000i32..5000),
                moves in prop::collection::vec((-5000i32..5000, -5000i32..5000), 1..20),
                end in (-5000i32..5000, -5000i32..5000),
            ) {
                let store = SettingsStore::in_memory();
                let id = ControlId::from("freelook");
                let mut drag = DragController::new(id.clone(), store.clone());
                let initial = drag.position();

                drag.on_pointer_event(PointerEvent::Down { x: start.0, y: start.1 });
                for (x, y) in moves {
                    drag.on_pointer_event(PointerEvent::Move { x, y });
                }
                drag.on_pointer_event(PointerEvent::Up { x: end.0, y: end.1 });

                let expected = initial.offset(end.0 - start.0, end.1 - start.1);
                prop_assert_eq!(drag.position(), expected);
                prop_assert_eq!(store.control(&id).position(), expected);
            }

            /// Property: a session containing any move event never ends in a click
            #[test]
            fn sessions_with_moves_never_click(
                moves in prop::collection::vec((-100i32..100, -100i32..100), 1..10),
            ) {
                let mut drag = DragController::new(
                    ControlId::from("freelook"),
                    SettingsStore::in_memory(),
                );
                drag.on_pointer_event(PointerEvent::Down { x: 0, y: 0 });
                for (x, y) in moves {
                    drag.on_pointer_event(PointerEvent::Move { x, y });
                }
                let action = drag.on_pointer_event(PointerEvent::Up { x: 0, y: 0 });
                prop_assert_ne!(action, DragAction::Clicked);
            }
        }
    }
}

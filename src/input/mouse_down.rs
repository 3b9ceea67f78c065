//! Pointer down handling - hit testing, selection changes, gesture start.
//!
//! ## Performance Notes
//!
//! Pointer down is a hot path during user interaction:
//! - O(log n) candidate lookup via the R-tree spatial index
//! - Handle lookup only on targets that were already active
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::{GroupSelector, InteractionState, PointerEvent, TransformSession};
use crate::canvas::Canvas;
use crate::events::EventName;
use crate::geometry::Point;
use crate::object::Target;
use crate::profile_scope;
use crate::render::Surface;
use tracing::{debug, trace};

impl<S: Surface> Canvas<S> {
    pub(crate) fn handle_mouse_down(&mut self, e: &PointerEvent) {
        profile_scope!("handle_mouse_down");

        if !e.is_primary() {
            trace!(button = ?e.button, "Ignoring non-primary pointer down");
            return;
        }
        if !self.state.is_idle() {
            debug!(state = ?self.state, "Ignoring pointer down during a gesture");
            return;
        }

        let canvas_pointer = self.get_pointer(e);
        let pointer = self.scene_pointer(e);
        self.previous_pointer = pointer;

        let found = self.find_target(e, false);
        let notify_target = match found.filter(|t| self.is_selectable(*t)) {
            None => {
                // Empty space, or something that cannot be selected
                self.clear_selection(Some(*e));
                if self.config.selection {
                    self.state = InteractionState::Selecting(GroupSelector::new(canvas_pointer));
                    trace!(x = canvas_pointer.x, y = canvas_pointer.y, "Drag-select started");
                }
                found
            }
            Some(target) => {
                // Handles are only live on something selected before this
                // click; a fresh selection always starts with a move.
                let was_active = self.target_ref(target).is_some_and(|t| t.is_active());
                let resolved = self.resolve_pointer_down_target(e, target);
                self.start_transform(resolved, pointer, was_active && resolved == target);
                Some(resolved)
            }
        };

        self.render_all();
        self.emit_pair(EventName::MouseDown, EventName::TargetMouseDown, notify_target, e);
    }

    /// Apply the selection policy for a click on `target` and return what the gesture acts on.
    fn resolve_pointer_down_target(&mut self, e: &PointerEvent, target: Target) -> Target {
        if self.should_handle_group_logic(e) {
            let pointer = self.scene_pointer(e);
            return self.handle_group_logic(e, pointer, target);
        }
        if let Target::Object(id) = target {
            if self.active_object != Some(id) {
                self.deactivate_all();
                self.activate_object(id, Some(*e));
            }
        }
        target
    }

    fn start_transform(&mut self, target: Target, pointer: Point, handles_live: bool) {
        let zoom = self.scene.zoom();
        let corner = if handles_live {
            self.target_ref(target)
                .and_then(|t| t.find_target_corner(pointer, zoom))
        } else {
            None
        };

        let Some(placement) = self.with_target_mut(target, |t| {
            t.save_state();
            *t.placement()
        }) else {
            return;
        };

        let session = TransformSession::new(target, corner, pointer, placement);
        debug!(?target, action = ?session.action, ?corner, "Transform started");
        self.state = InteractionState::Transforming(session);
    }
}

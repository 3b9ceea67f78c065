//! Pointer move handling - hover cursor, drag-select, transforms.
//!
//! ## Performance Notes
//!
//! Move events arrive at pointer rate (60+ per second while dragging):
//! - Drag-select only repaints the overlay
//! - Hovering never repaints
//! - Transforms recompute the cache of the target alone
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::transform::{rotate_target, scale_target, ScaleAxes};
use super::{InteractionState, PointerEvent, ScaleMode, TransformAction, TransformSession};
use crate::canvas::Canvas;
use crate::events::EventName;
use crate::geometry::Point;
use crate::object::Target;
use crate::profile_scope;
use crate::render::Surface;
use tracing::trace;

impl<S: Surface> Canvas<S> {
    pub(crate) fn handle_mouse_move(&mut self, e: &PointerEvent) {
        profile_scope!("handle_mouse_move");

        match std::mem::take(&mut self.state) {
            InteractionState::Selecting(mut selector) => {
                selector.update(self.get_pointer(e));
                self.state = InteractionState::Selecting(selector);
                self.render_top();
                self.emit_pair(EventName::MouseMove, EventName::TargetMouseMove, None, e);
            }
            InteractionState::Idle => {
                let target = self.find_target(e, false);
                self.set_cursor_from_event(e, target);
                self.emit_pair(EventName::MouseMove, EventName::TargetMouseMove, target, e);
            }
            InteractionState::Transforming(mut session) => {
                let pointer = self.scene_pointer(e);
                self.apply_transform(&mut session, e, pointer);
                let target = session.target;
                self.state = InteractionState::Transforming(session);
                self.emit_pair(EventName::MouseMove, EventName::TargetMouseMove, Some(target), e);
            }
        }
    }

    fn apply_transform(
        &mut self,
        session: &mut TransformSession,
        e: &PointerEvent,
        pointer: Point,
    ) {
        let target = session.target;

        let (canvas_event, target_event) = match session.action {
            TransformAction::Rotate => {
                self.with_target_mut(target, |t| {
                    t.set_moving(true);
                    rotate_target(t, session, pointer);
                });
                (EventName::ObjectRotating, EventName::Rotating)
            }
            TransformAction::Scale => {
                let mode = if e.modifiers.shift { ScaleMode::Plain } else { ScaleMode::Uniform };
                if session.scale_mode.is_some_and(|previous| previous != mode) {
                    if let Some(current) = self.target_placement(target) {
                        trace!(?mode, "Scale mode switched, rebasing session");
                        session.rebase(pointer, current.scale_x, current.scale_y);
                    }
                }
                session.scale_mode = Some(mode);
                let axes = match mode {
                    ScaleMode::Uniform => ScaleAxes::Uniform,
                    ScaleMode::Plain => ScaleAxes::Both,
                };
                self.scale_with(target, session, pointer, axes);
                (EventName::ObjectScaling, EventName::Scaling)
            }
            TransformAction::ScaleX => {
                self.scale_with(target, session, pointer, ScaleAxes::X);
                (EventName::ObjectScaling, EventName::Scaling)
            }
            TransformAction::ScaleY => {
                self.scale_with(target, session, pointer, ScaleAxes::Y);
                (EventName::ObjectScaling, EventName::Scaling)
            }
            TransformAction::Move => {
                let delta = pointer - self.previous_pointer;
                self.with_target_mut(target, |t| {
                    t.set_moving(true);
                    t.translate(delta.x, delta.y);
                });
                self.surface.set_cursor(&self.config.move_cursor);
                (EventName::ObjectMoving, EventName::Moving)
            }
        };
        self.previous_pointer = pointer;

        self.events.emit(canvas_event, Some(target), Some(*e));
        self.events.emit(target_event, Some(target), Some(*e));
        self.refresh_target_coords(target);
        self.render_all();
    }

    fn scale_with(
        &mut self,
        target: Target,
        session: &TransformSession,
        pointer: Point,
        axes: ScaleAxes,
    ) {
        self.with_target_mut(target, |t| {
            t.set_moving(true);
            t.set_scaling(true);
            scale_target(t, session, pointer, axes);
        });
    }
}

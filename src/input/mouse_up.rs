//! Pointer up handling - finalize transforms and drag-select.

use super::coords::CoordinateConverter;
use super::{GroupSelector, InteractionState, PointerEvent};
use crate::canvas::Canvas;
use crate::events::EventName;
use crate::object::{ObjectId, Transformable};
use crate::perf::{POINTER_EVENT_BUDGET_MS, measure_and_log};
use crate::profile_scope;
use crate::render::Surface;
use tracing::debug;

impl<S: Surface> Canvas<S> {
    pub(crate) fn handle_mouse_up(&mut self, e: &PointerEvent) {
        profile_scope!("handle_mouse_up");

        let mut session_target = None;
        match std::mem::take(&mut self.state) {
            InteractionState::Transforming(session) => {
                let target = session.target;
                session_target = Some(target);

                let changed = self
                    .with_target_mut(target, |t| {
                        t.set_scaling(false);
                        t.set_moving(false);
                        t.has_state_changed()
                    })
                    .unwrap_or(false);

                self.scene.set_coords_all();
                let zoom = self.scene.zoom();
                if let Some(group) = self.active_group.as_mut() {
                    group.set_coords(zoom);
                }

                if changed {
                    debug!(?target, action = ?session.action, "Target modified");
                    self.events.emit(EventName::ObjectModified, Some(target), Some(*e));
                    self.events.emit(EventName::Modified, Some(target), Some(*e));
                }
            }
            InteractionState::Selecting(selector) => {
                self.select_in_rect(&selector, e);
            }
            InteractionState::Idle => {}
        }

        if let Some(group) = self.active_group.as_ref() {
            group.set_member_coords(&mut self.scene);
        }
        if let Some(group) = self.active_group.as_mut() {
            group.set_moving(false);
            self.surface.set_cursor(&self.config.default_cursor);
        }

        self.render_all();
        self.set_cursor_from_event(e, session_target);
        self.emit_pair(EventName::MouseUp, EventName::TargetMouseUp, session_target, e);
    }

    /// Select the selectable objects whose boxes intersect the drag-select rectangle.
    fn select_in_rect(&mut self, selector: &GroupSelector, e: &PointerEvent) {
        let rect =
            CoordinateConverter::rect_canvas_to_scene(&selector.rect(), &self.coordinate_context());
        let ids: Vec<ObjectId> =
            measure_and_log("drag_select::collect", POINTER_EVENT_BUDGET_MS, || {
                self.hit_tester()
                    .objects_in_rect(&rect)
                    .into_iter()
                    .filter(|id| self.scene.get(*id).is_some_and(|obj| obj.selectable))
                    .collect()
            });

        debug!(
            width = rect.width(),
            height = rect.height(),
            selected = ids.len(),
            "Drag-select finished"
        );
        self.apply_selection(ids, Some(*e));
    }
}

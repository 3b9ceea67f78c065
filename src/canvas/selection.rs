//! Selection bookkeeping: the active object, the active group and the
//! Shift/Ctrl toggle logic.

use super::Canvas;
use crate::error::{CanvasError, CanvasResult};
use crate::events::{EventName, Notification};
use crate::geometry::{remove_from_array, Point};
use crate::input::PointerEvent;
use crate::object::{ObjectId, SelectionGroup, Target, Transformable};
use crate::render::Surface;
use tracing::debug;

impl<S: Surface> Canvas<S> {
    pub fn active_object(&self) -> Option<ObjectId> {
        self.active_object
    }

    pub fn active_group(&self) -> Option<&SelectionGroup> {
        self.active_group.as_ref()
    }

    /// The group if there is one, otherwise the active object.
    pub fn active_target(&self) -> Option<Target> {
        if self.active_group.is_some() {
            Some(Target::Group)
        } else {
            self.active_object.map(Target::Object)
        }
    }

    /// Ids of every selected object, in selection order.
    pub fn selection(&self) -> Vec<ObjectId> {
        match &self.active_group {
            Some(group) => group.member_ids(),
            None => self.active_object.into_iter().collect(),
        }
    }

    /// Make `id` the only selected object.
    pub fn set_active_object(&mut self, id: ObjectId) -> CanvasResult<Vec<Notification>> {
        if !self.scene.contains(id) {
            return Err(CanvasError::UnknownObject(id));
        }
        self.deactivate_all();
        self.activate_object(id, None);
        self.render_all();
        Ok(self.events.flush())
    }

    /// Select exactly `ids`: a group for two or more, a single object for one.
    pub fn set_selection(&mut self, ids: &[ObjectId]) -> CanvasResult<Vec<Notification>> {
        if let Some(missing) = ids.iter().find(|id| !self.scene.contains(**id)) {
            return Err(CanvasError::UnknownObject(*missing));
        }
        self.deactivate_all();
        self.apply_selection(ids.to_vec(), None);
        self.render_all();
        Ok(self.events.flush())
    }

    /// Drop the selection without notifying anyone.
    pub fn deactivate_all(&mut self) {
        for object in self.scene.objects_mut() {
            object.active = false;
        }
        self.active_object = None;
        self.active_group = None;
    }

    /// Drop the selection and notify listeners.
    pub fn deactivate_all_with_dispatch(&mut self) -> Vec<Notification> {
        self.clear_selection(None);
        self.render_all();
        self.events.flush()
    }

    /// Forget the active group; its members stay where the group left them.
    pub fn discard_active_group(&mut self) {
        self.active_group = None;
    }

    /// Emits `before:selection:cleared`, `deselected` per object, then
    /// `selection:cleared`. Nothing is emitted when nothing was selected.
    pub(crate) fn clear_selection(&mut self, pointer: Option<PointerEvent>) {
        let Some(target) = self.active_target() else {
            self.deactivate_all();
            return;
        };
        let previous = self.selection();

        self.events.emit(EventName::BeforeSelectionCleared, Some(target), pointer);
        self.deactivate_all();
        for id in &previous {
            self.events.emit(EventName::Deselected, Some(Target::Object(*id)), pointer);
        }
        self.events.emit(EventName::SelectionCleared, None, pointer);
        debug!(cleared = previous.len(), "Selection cleared");
    }

    pub(crate) fn activate_object(&mut self, id: ObjectId, pointer: Option<PointerEvent>) {
        if let Some(previous) = self.active_object.filter(|prev| *prev != id) {
            if let Some(obj) = self.scene.get_mut(previous) {
                obj.active = false;
            }
        }
        let Some(object) = self.scene.get_mut(id) else {
            return;
        };
        object.active = true;
        self.active_object = Some(id);

        let target = Some(Target::Object(id));
        self.events.emit(EventName::ObjectSelected, target, pointer);
        self.events.emit(EventName::Selected, target, pointer);
        debug!(object_id = id, "Object selected");
    }

    pub(crate) fn build_group(&self, ids: &[ObjectId]) -> Option<SelectionGroup> {
        let mut group = SelectionGroup::new(ids.iter().filter_map(|id| self.scene.get(*id)))?;
        group.set_coords(self.scene.zoom());
        Some(group)
    }

    pub(crate) fn activate_group(&mut self, ids: &[ObjectId], pointer: Option<PointerEvent>) {
        let Some(group) = self.build_group(ids) else {
            return;
        };
        for object in self.scene.objects_mut() {
            object.active = false;
        }
        self.active_object = None;
        self.active_group = Some(group);

        self.events.emit(EventName::SelectionCreated, Some(Target::Group), pointer);
        debug!(members = ids.len(), "Selection group created");
    }

    /// Select `ids` as a whole: a group for two or more, the object for one, nothing for none.
    pub(crate) fn apply_selection(&mut self, ids: Vec<ObjectId>, pointer: Option<PointerEvent>) {
        match ids.as_slice() {
            [] => {}
            [only] => self.activate_object(*only, pointer),
            _ => self.activate_group(&ids, pointer),
        }
    }

    pub(crate) fn should_handle_group_logic(&self, e: &PointerEvent) -> bool {
        e.extends_selection() && self.config.selection && self.active_target().is_some()
    }

    /// Toggle the object under the pointer in or out of the selection.
    ///
    /// The group is rebuilt from scratch, collapsing to a single object when
    /// only one member is left. Returns the target the gesture should act on.
    pub(crate) fn handle_group_logic(
        &mut self,
        e: &PointerEvent,
        pointer: Point,
        target: Target,
    ) -> Target {
        let clicked = match target {
            Target::Group => self.hit_tester().find_target(pointer, true),
            other => Some(other),
        };
        let Some(id) = clicked
            .filter(|t| self.is_selectable(*t))
            .and_then(Target::object_id)
        else {
            return self.active_target().unwrap_or(target);
        };

        // Shift-clicking the lone selected object keeps it selected
        if self.active_group.is_none() && self.active_object == Some(id) {
            return Target::Object(id);
        }

        let mut members = self.selection();
        if !remove_from_array(&mut members, &id) {
            members.push(id);
        }
        debug!(object_id = id, members = members.len(), "Toggled selection membership");

        self.deactivate_all();
        self.apply_selection(members, Some(*e));
        self.active_target().unwrap_or(Target::Object(id))
    }
}

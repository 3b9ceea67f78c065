//! The transient multi-object selection.

use super::{Controls, ObjectCoords, ObjectId, Placement, SceneObject, Transformable};
use crate::geometry::{normalize_degrees, BoundingBox, Point};
use crate::scene::Scene;

/// A member's placement relative to the group at the time the group was formed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupMember {
    pub id: ObjectId,
    /// Member center minus group center, in the group's unscaled frame
    offset: Point,
    scale_x: f64,
    scale_y: f64,
    angle: f64,
}

/// Ephemeral group wrapping two or more selected objects.
///
/// The group is rebuilt whenever membership changes. Transforming it and then
/// calling [`sync_members`](Self::sync_members) carries the same transform
/// over to every member.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionGroup {
    members: Vec<GroupMember>,
    placement: Placement,
    controls: Controls,
    moving: bool,
    scaling: bool,
    coords: Option<ObjectCoords>,
    saved: Option<Placement>,
}

impl SelectionGroup {
    /// Wrap `objects` in a group sized to their combined bounding box.
    ///
    /// Returns `None` when `objects` is empty.
    pub fn new<'a, I>(objects: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a SceneObject>,
    {
        let objects: Vec<&SceneObject> = objects.into_iter().collect();
        let bbox = objects
            .iter()
            .map(|obj| ObjectCoords::compute(&obj.placement, 0.0).bounding_box())
            .reduce(|acc, b| acc.union(&b))?;
        let center = bbox.center();

        let members = objects
            .iter()
            .map(|obj| GroupMember {
                id: obj.id,
                offset: obj.placement.center_point() - center,
                scale_x: obj.placement.scale_x,
                scale_y: obj.placement.scale_y,
                angle: obj.placement.angle,
            })
            .collect();

        Some(Self {
            members,
            placement: Placement::new(center.x, center.y, bbox.width(), bbox.height()),
            controls: Controls::default(),
            moving: false,
            scaling: false,
            coords: None,
            saved: None,
        })
    }

    pub fn members(&self) -> &[GroupMember] {
        &self.members
    }

    pub fn member_ids(&self) -> Vec<ObjectId> {
        self.members.iter().map(|m| m.id).collect()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.members.iter().any(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Write the group's current transform through to every member's placement.
    pub fn sync_members(&self, scene: &mut Scene) {
        let center = self.placement.center_point();
        let theta = self.placement.theta();
        let (gsx, gsy) = (self.placement.scale_x, self.placement.scale_y);

        for member in &self.members {
            let Some(obj) = scene.get_mut(member.id) else {
                continue;
            };
            let scaled = Point::new(member.offset.x * gsx, member.offset.y * gsy);
            obj.placement.scale_x = member.scale_x * gsx;
            obj.placement.scale_y = member.scale_y * gsy;
            obj.placement.angle = normalize_degrees(member.angle + self.placement.angle);
            obj.placement.set_center_point(center + scaled.rotate(theta));
        }
    }

    /// Recompute the coordinate cache of every member.
    pub fn set_member_coords(&self, scene: &mut Scene) {
        for member in &self.members {
            scene.refresh_coords(member.id);
        }
    }

    /// Outline of the group in scene space, if coordinates have been computed.
    pub fn outline(&self) -> Option<BoundingBox> {
        self.coords.map(|c| c.bounding_box())
    }
}

impl Transformable for SelectionGroup {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn controls(&self) -> &Controls {
        &self.controls
    }

    fn coords(&self) -> Option<&ObjectCoords> {
        self.coords.as_ref()
    }

    fn coords_mut(&mut self) -> &mut Option<ObjectCoords> {
        &mut self.coords
    }

    fn saved_state(&self) -> Option<&Placement> {
        self.saved.as_ref()
    }

    fn saved_state_mut(&mut self) -> &mut Option<Placement> {
        &mut self.saved
    }

    // A live group always shows its handles
    fn is_active(&self) -> bool {
        true
    }

    fn is_moving(&self) -> bool {
        self.moving
    }

    fn set_moving(&mut self, moving: bool) {
        self.moving = moving;
    }

    fn set_scaling(&mut self, scaling: bool) {
        self.scaling = scaling;
    }
}

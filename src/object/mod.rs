//! Scene object model.
//!
//! A [`SceneObject`] is anything drawn on the canvas. The interaction
//! controller never looks at what an object draws; it only reads and writes
//! the object's [`Placement`] through the [`Transformable`] trait, which the
//! transient [`SelectionGroup`] implements as well.

mod group;
mod placement;

pub use group::{GroupMember, SelectionGroup};
pub use placement::{Corner, ObjectCoords, OriginX, OriginY, Placement};

use crate::constants::{
    DEFAULT_CORNER_SIZE, DEFAULT_ROTATING_POINT_OFFSET, MIN_SCALE,
};
use crate::geometry::{normalize_degrees, BoundingBox, Point};
use serde::{Deserialize, Serialize};

/// Stable identifier assigned when an object is added to a scene.
pub type ObjectId = u64;

/// What a pointer gesture is acting on: a single object or the active selection group.
///
/// `Group` carries no identity; it always means the group active right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "id")]
pub enum Target {
    Object(ObjectId),
    Group,
}

impl Target {
    pub fn object_id(self) -> Option<ObjectId> {
        match self {
            Target::Object(id) => Some(id),
            Target::Group => None,
        }
    }
}

/// The visual kind of an object. Interaction treats all kinds alike.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    #[default]
    Rect,
    Ellipse,
    Image { source: String },
    Text { content: String },
}

/// Control handle appearance and availability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub has_controls: bool,
    pub has_rotating_point: bool,
    /// Handle side length in screen pixels
    pub corner_size: f64,
    /// Distance of the rotation handle above the top edge, in screen pixels
    pub rotating_point_offset: f64,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            has_controls: true,
            has_rotating_point: true,
            corner_size: DEFAULT_CORNER_SIZE,
            rotating_point_offset: DEFAULT_ROTATING_POINT_OFFSET,
        }
    }
}

/// Shared surface of everything a gesture can transform.
///
/// Implementors expose their placement, controls and cached coordinates; the
/// provided methods implement containment, handle lookup and the mutations a
/// transform session performs.
pub trait Transformable {
    fn placement(&self) -> &Placement;
    fn placement_mut(&mut self) -> &mut Placement;
    fn controls(&self) -> &Controls;
    fn coords(&self) -> Option<&ObjectCoords>;
    fn coords_mut(&mut self) -> &mut Option<ObjectCoords>;
    fn saved_state(&self) -> Option<&Placement>;
    fn saved_state_mut(&mut self) -> &mut Option<Placement>;
    /// Whether handles are live (the object is the active selection).
    fn is_active(&self) -> bool;
    fn is_moving(&self) -> bool;
    fn set_moving(&mut self, moving: bool);
    fn set_scaling(&mut self, scaling: bool);

    /// Recompute the coordinate cache from the current placement.
    ///
    /// `zoom` keeps the rotation handle a constant distance on screen.
    fn set_coords(&mut self, zoom: f64) {
        let offset = self.controls().rotating_point_offset / zoom;
        let coords = ObjectCoords::compute(self.placement(), offset);
        *self.coords_mut() = Some(coords);
    }

    /// Snapshot the placement so [`has_state_changed`](Self::has_state_changed) can compare later.
    fn save_state(&mut self) {
        let snapshot = *self.placement();
        *self.saved_state_mut() = Some(snapshot);
    }

    /// Whether the placement differs from the last snapshot. Never-saved objects report `false`.
    fn has_state_changed(&self) -> bool {
        self.saved_state().is_some_and(|saved| saved != self.placement())
    }

    fn center_point(&self) -> Point {
        self.placement().center_point()
    }

    fn angle(&self) -> f64 {
        self.placement().angle
    }

    /// Axis-aligned box of the cached outline.
    fn bounding_box(&self) -> Option<BoundingBox> {
        self.coords().map(ObjectCoords::bounding_box)
    }

    /// Whether `p` (scene space) lies inside the cached outline.
    ///
    /// Reads the coordinate cache only; a stale cache yields stale answers.
    fn contains_point(&self, p: Point) -> bool {
        self.coords().is_some_and(|coords| coords.quad().contains(p))
    }

    /// The control handle under `p`, probed in [`Corner::ALL`] order.
    ///
    /// Handles are squares of `corner_size / zoom` scene units rotated with
    /// the object. Inactive objects and objects without controls have none.
    fn find_target_corner(&self, p: Point, zoom: f64) -> Option<Corner> {
        let controls = self.controls();
        if !self.is_active() || !controls.has_controls {
            return None;
        }
        let coords = self.coords()?;
        let half = controls.corner_size / zoom / 2.0;
        let theta = self.placement().theta();

        Corner::ALL
            .into_iter()
            .filter(|corner| *corner != Corner::Mtr || controls.has_rotating_point)
            .find(|corner| {
                let local = (p - coords.get(*corner)).rotate(-theta);
                local.x.abs() <= half && local.y.abs() <= half
            })
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        let placement = self.placement_mut();
        placement.left += dx;
        placement.top += dy;
    }

    /// Set both scale factors, clamped to [`MIN_SCALE`].
    fn set_scale(&mut self, scale_x: f64, scale_y: f64) {
        let placement = self.placement_mut();
        placement.scale_x = scale_x.max(MIN_SCALE);
        placement.scale_y = scale_y.max(MIN_SCALE);
    }

    /// Set the angle in degrees, normalized into `[0, 360)`.
    fn set_angle(&mut self, degrees: f64) {
        self.placement_mut().angle = normalize_degrees(degrees);
    }
}

/// A drawable object on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub(crate) id: ObjectId,
    pub kind: ObjectKind,
    pub placement: Placement,
    pub controls: Controls,
    pub selectable: bool,
    pub(crate) active: bool,
    pub(crate) moving: bool,
    pub(crate) scaling: bool,
    coords: Option<ObjectCoords>,
    saved: Option<Placement>,
}

impl SceneObject {
    pub fn new(kind: ObjectKind, placement: Placement) -> Self {
        Self {
            id: 0,
            kind,
            placement,
            controls: Controls::default(),
            selectable: true,
            active: false,
            moving: false,
            scaling: false,
            coords: None,
            saved: None,
        }
    }

    /// Center-origin rectangle.
    pub fn rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(ObjectKind::Rect, Placement::new(left, top, width, height))
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_controls(mut self, controls: Controls) -> Self {
        self.controls = controls;
        self
    }

    pub fn non_selectable(mut self) -> Self {
        self.selectable = false;
        self
    }

    /// Identifier assigned by the scene; `0` until the object is added.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn is_scaling(&self) -> bool {
        self.scaling
    }
}

impl Transformable for SceneObject {
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

    fn is_active(&self) -> bool {
        self.active
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

//! The ordered object list and its spatial index.
//!
//! Order is z-order: later objects draw on top and win hit tests. The scene
//! owns the zoom factor so coordinate caches keep control handles a constant
//! size on screen.

use crate::geometry::{BoundingBox, Point};
use crate::object::{ObjectId, SceneObject, Transformable};
use crate::profile_scope;
use crate::spatial_index::SpatialIndex;
use tracing::debug;

#[derive(Debug)]
pub struct Scene {
    objects: Vec<SceneObject>,
    index: SpatialIndex,
    next_id: ObjectId,
    zoom: f64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            index: SpatialIndex::new(),
            next_id: 1,
            zoom: 1.0,
        }
    }

    /// Append `object` on top, assign its id and compute its coordinates.
    pub fn add(&mut self, mut object: SceneObject) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;

        object.id = id;
        object.set_coords(self.zoom);
        if let Some(bounds) = object.bounding_box() {
            self.index.insert(id, bounds);
        }
        self.objects.push(object);
        debug!(object_id = id, count = self.objects.len(), "Object added to scene");
        id
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let idx = self.position(id)?;
        self.index.remove(id);
        Some(self.objects.remove(idx))
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.position(id).is_some()
    }

    /// Z-order position of `id`.
    pub fn position(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }

    /// Objects bottom to top.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub(crate) fn objects_mut(&mut self) -> impl Iterator<Item = &mut SceneObject> {
        self.objects.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Change the zoom factor and recompute every cache.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
        self.set_coords_all();
    }

    /// Recompute one object's coordinate cache and its index entry.
    ///
    /// Returns `false` if the object is not in the scene.
    pub fn refresh_coords(&mut self, id: ObjectId) -> bool {
        let zoom = self.zoom;
        let Some(object) = self.get_mut(id) else {
            return false;
        };
        object.set_coords(zoom);
        let bounds = object.bounding_box();
        if let Some(bounds) = bounds {
            self.index.insert(id, bounds);
        }
        true
    }

    /// Recompute every coordinate cache and rebuild the index in one pass.
    pub fn set_coords_all(&mut self) {
        profile_scope!("scene::set_coords_all", 2.0);

        let zoom = self.zoom;
        for object in &mut self.objects {
            object.set_coords(zoom);
        }
        self.index.rebuild(
            self.objects
                .iter()
                .filter_map(|o| o.bounding_box().map(|b| (o.id, b))),
        );
    }

    /// Candidate ids whose cached box contains `p`, in z-order.
    pub fn candidates_at(&self, p: Point) -> Vec<ObjectId> {
        self.sorted(self.index.query_point(p))
    }

    /// Candidate ids whose cached box intersects `rect`, in z-order.
    pub fn candidates_in(&self, rect: &BoundingBox) -> Vec<ObjectId> {
        self.sorted(self.index.query_rect(rect))
    }

    fn sorted(&self, ids: Vec<ObjectId>) -> Vec<ObjectId> {
        let mut ranked: Vec<(usize, ObjectId)> = ids
            .into_iter()
            .filter_map(|id| self.position(id).map(|pos| (pos, id)))
            .collect();
        ranked.sort_unstable_by_key(|(pos, _)| *pos);
        ranked.into_iter().map(|(_, id)| id).collect()
    }
}

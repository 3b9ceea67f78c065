//! Spatial Index Module
//!
//! R-tree over the cached bounding boxes of scene objects. Hit testing asks
//! it for candidates before running the precise outline test, which turns
//! point and rectangle queries from O(n) scans into O(log n) lookups.

use crate::geometry::{BoundingBox, Point};
use crate::object::ObjectId;
use rstar::{RTree, RTreeObject, AABB};
use std::collections::HashMap;

/// An object's axis-aligned bounding box as stored in the tree.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub object_id: ObjectId,
    pub bounds: BoundingBox,
}

impl SpatialEntry {
    pub fn new(object_id: ObjectId, bounds: BoundingBox) -> Self {
        Self { object_id, bounds }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let b = &self.bounds;
        AABB::from_corners([b.min_x, b.min_y], [b.max_x, b.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.object_id == other.object_id
    }
}

/// Spatial index for scene objects using an R-tree.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ObjectId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the entry for `object_id`.
    pub fn insert(&mut self, object_id: ObjectId, bounds: BoundingBox) {
        if let Some(old_entry) = self.entries.remove(&object_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(object_id, bounds);
        self.tree.insert(entry);
        self.entries.insert(object_id, entry);
    }

    pub fn remove(&mut self, object_id: ObjectId) -> bool {
        if let Some(entry) = self.entries.remove(&object_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Ids of every object whose bounding box contains `p`, in no particular order.
    pub fn query_point(&self, p: Point) -> Vec<ObjectId> {
        let point_envelope = AABB::from_point([p.x, p.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.bounds.contains(p))
            .map(|entry| entry.object_id)
            .collect()
    }

    /// Ids of every object whose bounding box intersects `rect`.
    pub fn query_rect(&self, rect: &BoundingBox) -> Vec<ObjectId> {
        let envelope = AABB::from_corners([rect.min_x, rect.min_y], [rect.max_x, rect.max_y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.object_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the whole index in one bulk load.
    pub fn rebuild<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (ObjectId, BoundingBox)>,
    {
        let entries: Vec<SpatialEntry> = items
            .into_iter()
            .map(|(id, bounds)| SpatialEntry::new(id, bounds))
            .collect();

        self.entries = entries.iter().map(|e| (e.object_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl std::fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex").field("len", &self.len()).finish()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

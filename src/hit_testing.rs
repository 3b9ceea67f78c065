//! Hit testing: which object or group is under a point, and which objects a
//! drag-select rectangle covers.
//!
//! All queries take scene-space coordinates. The spatial index narrows the
//! candidates; the cached outline decides.

use crate::geometry::{BoundingBox, Point};
use crate::object::{ObjectId, SelectionGroup, Target, Transformable};
use crate::profile_scope;
use crate::scene::Scene;
use tracing::trace;

/// Read-only view over a scene and its active group.
pub struct HitTester<'a> {
    scene: &'a Scene,
    active_group: Option<&'a SelectionGroup>,
}

impl<'a> HitTester<'a> {
    pub fn new(scene: &'a Scene, active_group: Option<&'a SelectionGroup>) -> Self {
        Self {
            scene,
            active_group,
        }
    }

    /// Topmost target under `p`.
    ///
    /// The active group wins when `p` is inside its outline or on one of its
    /// handles, unless `skip_group` is set. Otherwise objects are scanned top
    /// to bottom; the active object also matches on its handles.
    pub fn find_target(&self, p: Point, skip_group: bool) -> Option<Target> {
        profile_scope!("hit_testing::find_target");
        let zoom = self.scene.zoom();

        if !skip_group {
            if let Some(group) = self.active_group {
                if group.contains_point(p) || group.find_target_corner(p, zoom).is_some() {
                    trace!(x = p.x, y = p.y, "Hit active group");
                    return Some(Target::Group);
                }
            }
        }

        // Handles poke outside the bounding box, so the active object is
        // probed directly rather than through the index.
        let candidates = self.scene.candidates_at(p);
        let hit = self
            .scene
            .objects()
            .iter()
            .rev()
            .find(|obj| {
                let handle_hit = obj.is_active() && obj.find_target_corner(p, zoom).is_some();
                handle_hit || (candidates.contains(&obj.id()) && obj.contains_point(p))
            })
            .map(|obj| Target::Object(obj.id()));

        trace!(x = p.x, y = p.y, ?hit, candidates = candidates.len(), "Hit test");
        hit
    }

    /// Ids of objects whose cached box intersects `rect`, bottom to top.
    pub fn objects_in_rect(&self, rect: &BoundingBox) -> Vec<ObjectId> {
        profile_scope!("hit_testing::objects_in_rect");
        self.scene
            .candidates_in(rect)
            .into_iter()
            .filter(|id| {
                self.scene
                    .get(*id)
                    .and_then(|obj| obj.bounding_box())
                    .is_some_and(|b| b.intersects(rect))
            })
            .collect()
    }
}

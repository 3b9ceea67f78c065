//! Cursor choice from the handle under the pointer.

use super::PointerEvent;
use crate::canvas::Canvas;
use crate::constants::RESIZE_CURSORS;
use crate::geometry::normalize_degrees;
use crate::object::{Corner, Target};
use crate::render::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorChoice {
    Default,
    Hover,
    Rotation,
    /// Index into `RESIZE_CURSORS`
    Resize(usize),
}

impl<S: Surface> Canvas<S> {
    /// Set the surface cursor for the pointer over `target`.
    ///
    /// Returns whether a control handle is under the pointer.
    pub(crate) fn set_cursor_from_event(
        &mut self,
        e: &PointerEvent,
        target: Option<Target>,
    ) -> bool {
        let choice = self.cursor_choice(e, target);
        let cursor = match choice {
            CursorChoice::Default => self.config.default_cursor.as_str(),
            CursorChoice::Hover => self.config.hover_cursor.as_str(),
            CursorChoice::Rotation => self.config.rotation_cursor.as_str(),
            CursorChoice::Resize(idx) => RESIZE_CURSORS[idx],
        };
        self.surface.set_cursor(cursor);
        matches!(choice, CursorChoice::Rotation | CursorChoice::Resize(_))
    }

    fn cursor_choice(&self, e: &PointerEvent, target: Option<Target>) -> CursorChoice {
        let Some(target) = target.filter(|t| self.is_selectable(*t)) else {
            return CursorChoice::Default;
        };
        let Some(transformable) = self.target_ref(target) else {
            return CursorChoice::Default;
        };

        // Members of the active group show no handles of their own
        let in_group = match target {
            Target::Object(id) => self.active_group.as_ref().is_some_and(|g| g.contains(id)),
            Target::Group => false,
        };
        let corner = if in_group {
            None
        } else {
            transformable.find_target_corner(self.scene_pointer(e), self.scene.zoom())
        };

        match corner {
            None => CursorChoice::Hover,
            Some(Corner::Mtr) => CursorChoice::Rotation,
            Some(corner) => {
                // Any angle, including negative ones, maps to 0..8 steps
                let steps = (normalize_degrees(transformable.angle()) / 45.0).round() as i64;
                let offset = corner.cursor_offset().unwrap_or(0) as i64;
                let len = RESIZE_CURSORS.len() as i64;
                CursorChoice::Resize((offset + steps).rem_euclid(len) as usize)
            }
        }
    }
}

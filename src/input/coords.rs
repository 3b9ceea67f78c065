//! Coordinate conversion utilities for pointer handling.
//!
//! Three spaces are involved: page (raw event coordinates), canvas-local
//! (page minus the canvas offset) and scene (canvas-local through the inverse
//! viewport transform). Handlers go through these helpers rather than
//! repeating the formulas.

use crate::geometry::{BoundingBox, Offset, Point, ViewportTransform};

/// Context needed for coordinate conversions
#[derive(Debug, Clone, Copy)]
pub struct CoordinateContext<'a> {
    pub canvas_offset: &'a Offset,
    pub viewport: &'a ViewportTransform,
    pub inverse_viewport: &'a ViewportTransform,
}

impl<'a> CoordinateContext<'a> {
    #[inline]
    pub fn new(
        canvas_offset: &'a Offset,
        viewport: &'a ViewportTransform,
        inverse_viewport: &'a ViewportTransform,
    ) -> Self {
        Self {
            canvas_offset,
            viewport,
            inverse_viewport,
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Page position to canvas-local position
    #[inline]
    pub fn page_to_canvas(page: Point, ctx: &CoordinateContext<'_>) -> Point {
        Point::new(page.x - ctx.canvas_offset.left, page.y - ctx.canvas_offset.top)
    }

    /// Canvas-local position to scene position
    #[inline]
    pub fn canvas_to_scene(canvas: Point, ctx: &CoordinateContext<'_>) -> Point {
        ctx.inverse_viewport.apply(canvas)
    }

    /// Page position straight to scene position
    #[inline]
    pub fn page_to_scene(page: Point, ctx: &CoordinateContext<'_>) -> Point {
        Self::canvas_to_scene(Self::page_to_canvas(page, ctx), ctx)
    }

    /// Scene position to canvas-local position
    #[inline]
    pub fn scene_to_canvas(scene: Point, ctx: &CoordinateContext<'_>) -> Point {
        ctx.viewport.apply(scene)
    }

    /// Canvas-local rectangle to the scene-space box that covers it.
    ///
    /// Under a rotating viewport the rectangle maps to a parallelogram; the
    /// result is that shape's bounding box.
    pub fn rect_canvas_to_scene(rect: &BoundingBox, ctx: &CoordinateContext<'_>) -> BoundingBox {
        let corners = [
            Point::new(rect.min_x, rect.min_y),
            Point::new(rect.max_x, rect.min_y),
            Point::new(rect.max_x, rect.max_y),
            Point::new(rect.min_x, rect.max_y),
        ];
        BoundingBox::from_points(corners.map(|c| Self::canvas_to_scene(c, ctx))).unwrap_or(*rect)
    }
}

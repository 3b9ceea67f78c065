//! Geometry utilities shared by the object model, the hit tester and the
//! interaction controller.
//!
//! Everything here is plain value math: points, axis-aligned boxes, rotated
//! quads, the viewport matrix, angle conversions and the page offset of the
//! canvas element.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Sub};

const PI_BY_180: f64 = PI / 180.0;

/// Convert degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI_BY_180
}

/// Convert radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians / PI_BY_180
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Remove the first occurrence of `value` from `items`.
///
/// Returns whether anything was removed.
pub fn remove_from_array<T: PartialEq>(items: &mut Vec<T>, value: &T) -> bool {
    match items.iter().position(|item| item == value) {
        Some(idx) => {
            items.remove(idx);
            true
        }
        None => false,
    }
}

// ============================================================================
// Point
// ============================================================================

/// A point in page, canvas or scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Length of the vector from the origin to this point.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rotate this vector around the origin by `radians` (clockwise in screen space).
    #[inline]
    pub fn rotate(self, radians: f64) -> Point {
        let (sin, cos) = radians.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotate this point around `pivot` by `radians`.
    #[inline]
    pub fn rotate_around(self, pivot: Point, radians: f64) -> Point {
        (self - pivot).rotate(radians) + pivot
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ============================================================================
// Boxes
// ============================================================================

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Normalized box spanned by two opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Smallest box containing every point. `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bbox = Self::from_corners(first, first);
        for p in points {
            bbox.min_x = bbox.min_x.min(p.x);
            bbox.min_y = bbox.min_y.min(p.y);
            bbox.max_x = bbox.max_x.max(p.x);
            bbox.max_y = bbox.max_y.max(p.y);
        }
        Some(bbox)
    }

    /// Union of two boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }

    /// Inclusive point containment.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Inclusive overlap test; touching edges count as intersecting.
    #[inline]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }
}

/// A convex quadrilateral given clockwise (tl, tr, br, bl).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad(pub [Point; 4]);

impl Quad {
    /// Point-in-quad test, boundary inclusive.
    pub fn contains(&self, p: Point) -> bool {
        let mut sign = 0.0_f64;
        for i in 0..4 {
            let a = self.0[i];
            let b = self.0[(i + 1) % 4];
            let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
            if cross.abs() <= 1e-9 {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        // Collapsed quad (zero width or height): fall back to its extent
        if sign == 0.0 {
            return self.bounding_box().contains(p);
        }
        true
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let [a, b, c, d] = self.0;
        let mut bbox = BoundingBox::from_corners(a, b);
        bbox = bbox.union(&BoundingBox::from_corners(c, d));
        bbox
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// 2D affine matrix `[a, b, c, d, e, f]` mapping scene to canvas-local space:
/// `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform(pub [f64; 6]);

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewportTransform {
    pub const IDENTITY: ViewportTransform = ViewportTransform([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    /// Uniform zoom followed by a pan, the common editor viewport.
    pub fn zoom_pan(zoom: f64, pan_x: f64, pan_y: f64) -> Self {
        Self([zoom, 0.0, 0.0, zoom, pan_x, pan_y])
    }

    /// Map a scene point into canvas-local space.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        let [a, b, c, d, e, f] = self.0;
        Point::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }

    /// Inverse matrix, `None` when the determinant is zero.
    pub fn invert(&self) -> Option<ViewportTransform> {
        let [a, b, c, d, e, f] = self.0;
        let det = a * d - b * c;
        if det.abs() < f64::EPSILON {
            return None;
        }
        let inv = 1.0 / det;
        Some(ViewportTransform([
            d * inv,
            -b * inv,
            -c * inv,
            a * inv,
            (c * f - d * e) * inv,
            (b * e - a * f) * inv,
        ]))
    }

    /// Scale factor along the x axis; used to keep controls a constant screen size.
    #[inline]
    pub fn zoom(&self) -> f64 {
        let [a, b, ..] = self.0;
        a.hypot(b)
    }
}

// ============================================================================
// Element Offset
// ============================================================================

/// Page offset of the canvas's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

/// One element in the canvas's offset-parent chain, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutBox {
    /// Offset from the offset parent's left edge
    pub offset_left: f64,
    /// Offset from the offset parent's top edge
    pub offset_top: f64,
    /// Horizontal scroll of this element's content
    pub scroll_left: f64,
    /// Vertical scroll of this element's content
    pub scroll_top: f64,
}

/// Accumulate the page offset of an element from its layout chain.
///
/// The first box is the element itself; its own scroll does not move it, so
/// only ancestors' scroll is subtracted.
pub fn element_offset<I: IntoIterator<Item = LayoutBox>>(chain: I) -> Offset {
    let mut offset = Offset::default();
    for (depth, layout) in chain.into_iter().enumerate() {
        offset.left += layout.offset_left;
        offset.top += layout.offset_top;
        if depth > 0 {
            offset.left -= layout.scroll_left;
            offset.top -= layout.scroll_top;
        }
    }
    offset
}

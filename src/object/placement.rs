//! Object placement, origin anchors and the derived control coordinates.

use crate::geometry::{degrees_to_radians, BoundingBox, Point, Quad};
use serde::{Deserialize, Serialize};

/// Horizontal origin anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginX {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical origin anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginY {
    Top,
    #[default]
    Center,
    Bottom,
}

impl OriginX {
    /// Position of the anchor relative to the center, as a fraction of the width.
    fn factor(self) -> f64 {
        match self {
            Self::Left => -0.5,
            Self::Center => 0.0,
            Self::Right => 0.5,
        }
    }
}

impl OriginY {
    fn factor(self) -> f64 {
        match self {
            Self::Top => -0.5,
            Self::Center => 0.0,
            Self::Bottom => 0.5,
        }
    }
}

/// The geometric state of an object: everything a transform can change.
///
/// `left`/`top` locate the origin anchor in scene space; rotation and scaling
/// pivot around that point. Snapshots of this struct are the "saved state"
/// used to detect whether a gesture modified anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Clockwise rotation in degrees
    pub angle: f64,
    pub origin_x: OriginX,
    pub origin_y: OriginY,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            angle: 0.0,
            origin_x: OriginX::Center,
            origin_y: OriginY::Center,
        }
    }
}

impl Placement {
    /// Unscaled, unrotated placement with a center origin.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height, ..Default::default() }
    }

    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_origin(mut self, origin_x: OriginX, origin_y: OriginY) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    /// Width and height after scaling.
    #[inline]
    pub fn scaled_size(&self) -> (f64, f64) {
        (self.width * self.scale_x.abs(), self.height * self.scale_y.abs())
    }

    #[inline]
    pub fn theta(&self) -> f64 {
        degrees_to_radians(self.angle)
    }

    /// The origin anchor in scene space; the pivot for rotation and scaling.
    #[inline]
    pub fn origin_point(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Anchor position relative to the center, before rotation.
    fn origin_offset(&self) -> Point {
        let (w, h) = self.scaled_size();
        Point::new(self.origin_x.factor() * w, self.origin_y.factor() * h)
    }

    pub fn center_point(&self) -> Point {
        self.origin_point() - self.origin_offset().rotate(self.theta())
    }

    /// Move the object so its center lands on `center`, keeping size and angle.
    pub fn set_center_point(&mut self, center: Point) {
        let origin = center + self.origin_offset().rotate(self.theta());
        self.left = origin.x;
        self.top = origin.y;
    }

    /// Express a scene point in the object's unrotated frame centered on its center.
    pub fn to_local(&self, p: Point) -> Point {
        (p - self.center_point()).rotate(-self.theta())
    }

    /// Containment in object-local space against the scaled half extents.
    pub fn contains_local(&self, p: Point) -> bool {
        let local = self.to_local(p);
        let (w, h) = self.scaled_size();
        local.x.abs() <= w / 2.0 + 1e-9 && local.y.abs() <= h / 2.0 + 1e-9
    }
}

/// Control handles, in the order they are probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corner {
    Tl,
    Tr,
    Br,
    Bl,
    Ml,
    Mt,
    Mr,
    Mb,
    /// Rotation handle above the top edge
    Mtr,
}

impl Corner {
    pub const ALL: [Corner; 9] = [
        Corner::Tl,
        Corner::Tr,
        Corner::Br,
        Corner::Bl,
        Corner::Ml,
        Corner::Mt,
        Corner::Mr,
        Corner::Mb,
        Corner::Mtr,
    ];

    /// Index into [`crate::constants::RESIZE_CURSORS`] for an unrotated object.
    pub fn cursor_offset(self) -> Option<usize> {
        match self {
            Self::Mt => Some(0),
            Self::Tr => Some(1),
            Self::Mr => Some(2),
            Self::Br => Some(3),
            Self::Mb => Some(4),
            Self::Bl => Some(5),
            Self::Ml => Some(6),
            Self::Tl => Some(7),
            Self::Mtr => None,
        }
    }
}

/// Cached scene-space positions of the corners, edge midpoints and rotation handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectCoords {
    pub tl: Point,
    pub tr: Point,
    pub br: Point,
    pub bl: Point,
    pub ml: Point,
    pub mt: Point,
    pub mr: Point,
    pub mb: Point,
    pub mtr: Point,
}

impl ObjectCoords {
    /// Derive coordinates from a placement. `rotating_offset` is already in scene units.
    pub fn compute(placement: &Placement, rotating_offset: f64) -> Self {
        let center = placement.center_point();
        let theta = placement.theta();
        let (w, h) = placement.scaled_size();
        let (hw, hh) = (w / 2.0, h / 2.0);
        let at = |x: f64, y: f64| center + Point::new(x, y).rotate(theta);

        Self {
            tl: at(-hw, -hh),
            tr: at(hw, -hh),
            br: at(hw, hh),
            bl: at(-hw, hh),
            ml: at(-hw, 0.0),
            mt: at(0.0, -hh),
            mr: at(hw, 0.0),
            mb: at(0.0, hh),
            mtr: at(0.0, -hh - rotating_offset),
        }
    }

    pub fn get(&self, corner: Corner) -> Point {
        match corner {
            Corner::Tl => self.tl,
            Corner::Tr => self.tr,
            Corner::Br => self.br,
            Corner::Bl => self.bl,
            Corner::Ml => self.ml,
            Corner::Mt => self.mt,
            Corner::Mr => self.mr,
            Corner::Mb => self.mb,
            Corner::Mtr => self.mtr,
        }
    }

    /// The rotated, scaled outline.
    pub fn quad(&self) -> Quad {
        Quad([self.tl, self.tr, self.br, self.bl])
    }

    /// Axis-aligned box around the outline (the rotation handle is excluded).
    pub fn bounding_box(&self) -> BoundingBox {
        self.quad().bounding_box()
    }
}

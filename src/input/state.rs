//! Interaction state machine.
//!
//! A single enum replaces separate "current transform" and "group selector"
//! slots, so a drag-select and a transform can never be live at once.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Selecting       (primary down on empty space / non-selectable object)
//! Idle -> Transforming    (primary down on a selectable object or the active group)
//!
//! Any -> Idle             (primary up or blur - finalizes the gesture)
//! ```

use crate::geometry::{BoundingBox, Point};
use crate::object::{Corner, Placement, Target};

/// What a transform session does on each pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformAction {
    Move,
    Rotate,
    /// Both axes, from a corner handle
    Scale,
    ScaleX,
    ScaleY,
}

impl TransformAction {
    /// Action for a grabbed handle; no handle means move.
    pub fn for_corner(corner: Option<Corner>) -> Self {
        match corner {
            None => Self::Move,
            Some(Corner::Mtr) => Self::Rotate,
            Some(Corner::Ml | Corner::Mr) => Self::ScaleX,
            Some(Corner::Mt | Corner::Mb) => Self::ScaleY,
            Some(Corner::Tl | Corner::Tr | Corner::Br | Corner::Bl) => Self::Scale,
        }
    }

    pub fn is_scaling(self) -> bool {
        matches!(self, Self::Scale | Self::ScaleX | Self::ScaleY)
    }
}

/// How a corner drag scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    /// Both axes by the same distance ratio, aspect preserved
    Uniform,
    /// Each axis independently
    Plain,
}

/// State of an in-progress transform gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformSession {
    pub target: Target,
    pub action: TransformAction,
    /// Unset until the first scaling move
    pub scale_mode: Option<ScaleMode>,
    pub corner: Option<Corner>,
    /// Pointer (scene space) at session start or at the last rebase
    pub grab: Point,
    /// Target's origin point; rotation and scaling pivot here
    pub pivot: Point,
    pub start_scale_x: f64,
    pub start_scale_y: f64,
    pub start_angle: f64,
    pub original: Placement,
}

impl TransformSession {
    pub fn new(target: Target, corner: Option<Corner>, grab: Point, placement: Placement) -> Self {
        Self {
            target,
            action: TransformAction::for_corner(corner),
            scale_mode: None,
            corner,
            grab,
            pivot: placement.origin_point(),
            start_scale_x: placement.scale_x,
            start_scale_y: placement.scale_y,
            start_angle: placement.angle,
            original: placement,
        }
    }

    /// Restart the scale reference from the current pointer and scale.
    pub fn rebase(&mut self, pointer: Point, scale_x: f64, scale_y: f64) {
        self.grab = pointer;
        self.start_scale_x = scale_x;
        self.start_scale_y = scale_y;
    }
}

/// Drag-select rectangle, in canvas-local coordinates.
///
/// `ex`/`ey` is the anchor where the drag started; `left`/`top` are the
/// extents relative to it and may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroupSelector {
    pub ex: f64,
    pub ey: f64,
    pub left: f64,
    pub top: f64,
}

impl GroupSelector {
    pub fn new(anchor: Point) -> Self {
        Self {
            ex: anchor.x,
            ey: anchor.y,
            left: 0.0,
            top: 0.0,
        }
    }

    /// Stretch the rectangle to `pointer`.
    pub fn update(&mut self, pointer: Point) {
        self.left = pointer.x - self.ex;
        self.top = pointer.y - self.ey;
    }

    /// Normalized rectangle in canvas-local space.
    pub fn rect(&self) -> BoundingBox {
        BoundingBox::from_corners(
            Point::new(self.ex, self.ey),
            Point::new(self.ex + self.left, self.ey + self.top),
        )
    }
}

/// The controller's gesture state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Selecting(GroupSelector),
    Transforming(TransformSession),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self, Self::Selecting(_))
    }

    pub fn is_transforming(&self) -> bool {
        matches!(self, Self::Transforming(_))
    }

    pub fn session(&self) -> Option<&TransformSession> {
        match self {
            Self::Transforming(session) => Some(session),
            _ => None,
        }
    }

    pub fn selector(&self) -> Option<&GroupSelector> {
        match self {
            Self::Selecting(selector) => Some(selector),
            _ => None,
        }
    }

    /// Target of the running transform, if any.
    pub fn target(&self) -> Option<Target> {
        self.session().map(|s| s.target)
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

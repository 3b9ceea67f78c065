//! Crate-wide constants.
//!
//! Centralizes control sizes, cursor names and numeric limits used by the
//! interaction controller and the object model.

// ============================================================================
// Controls
// ============================================================================

/// Default side length of a control handle, in screen pixels
pub const DEFAULT_CORNER_SIZE: f64 = 12.0;

/// Default distance between the top edge and the rotation handle, in screen pixels
pub const DEFAULT_ROTATING_POINT_OFFSET: f64 = 40.0;

/// Smallest scale factor a transform may produce
pub const MIN_SCALE: f64 = 0.01;

/// Reference distances shorter than this are treated as zero
pub const GEOMETRY_EPSILON: f64 = 1e-9;

// ============================================================================
// Cursors
// ============================================================================

/// Default cursor over empty canvas
pub const DEFAULT_CURSOR: &str = "default";

/// Cursor shown when hovering an object body
pub const HOVER_CURSOR: &str = "move";

/// Cursor shown while an object is being dragged
pub const MOVE_CURSOR: &str = "move";

/// Cursor shown over the rotation handle
pub const ROTATION_CURSOR: &str = "crosshair";

/// Resize cursors in clockwise order starting from north.
///
/// Indexed by `(handle_offset + angle / 45) % 8`, see [`crate::object::Corner::cursor_offset`].
pub const RESIZE_CURSORS: [&str; 8] = [
    "n-resize",
    "ne-resize",
    "e-resize",
    "se-resize",
    "s-resize",
    "sw-resize",
    "w-resize",
    "nw-resize",
];

// ============================================================================
// Canvas Defaults
// ============================================================================

/// Default canvas width (matches an unsized HTML canvas)
pub const DEFAULT_CANVAS_WIDTH: f64 = 300.0;

/// Default canvas height (matches an unsized HTML canvas)
pub const DEFAULT_CANVAS_HEIGHT: f64 = 150.0;

/// Default fill of the drag-select rectangle
pub const DEFAULT_SELECTION_COLOR: &str = "rgba(100, 100, 255, 0.3)";

/// Default border color of the drag-select rectangle
pub const DEFAULT_SELECTION_BORDER_COLOR: &str = "red";

/// Default border width of the drag-select rectangle
pub const DEFAULT_SELECTION_LINE_WIDTH: f64 = 1.0;

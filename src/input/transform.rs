//! Rotation and scale math for a transform session.
//!
//! Both are computed from the session's fixed reference (grab point, pivot,
//! starting scale/angle) rather than accumulated per move, so a gesture
//! that returns to its start restores the original values exactly.

use super::TransformSession;
use crate::constants::GEOMETRY_EPSILON;
use crate::geometry::{degrees_to_radians, radians_to_degrees, Point};
use crate::object::Transformable;

/// Which axes a scale move drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScaleAxes {
    /// Both axes by the ratio of distances from the pivot
    Uniform,
    /// Each axis by its own ratio in the object's local frame
    Both,
    X,
    Y,
}

/// Rotate around the pivot by the angle the pointer swept since the grab.
pub(crate) fn rotate_target(
    target: &mut dyn Transformable,
    session: &TransformSession,
    pointer: Point,
) {
    let from = session.grab - session.pivot;
    let to = pointer - session.pivot;
    if from.length() < GEOMETRY_EPSILON || to.length() < GEOMETRY_EPSILON {
        return;
    }
    let swept = to.y.atan2(to.x) - from.y.atan2(from.x);
    target.set_angle(session.start_angle + radians_to_degrees(swept));
}

/// Scale relative to the pivot. An axis whose reference distance is zero keeps its factor.
pub(crate) fn scale_target(
    target: &mut dyn Transformable,
    session: &TransformSession,
    pointer: Point,
    axes: ScaleAxes,
) {
    let theta = degrees_to_radians(session.start_angle);
    let from = (session.grab - session.pivot).rotate(-theta);
    let to = (pointer - session.pivot).rotate(-theta);
    let current = *target.placement();

    let along_x = || ratio(from.x, to.x).map_or(current.scale_x, |r| session.start_scale_x * r);
    let along_y = || ratio(from.y, to.y).map_or(current.scale_y, |r| session.start_scale_y * r);

    let (scale_x, scale_y) = match axes {
        ScaleAxes::Uniform => match ratio(from.length(), to.length()) {
            Some(r) => (session.start_scale_x * r, session.start_scale_y * r),
            None => (current.scale_x, current.scale_y),
        },
        ScaleAxes::Both => (along_x(), along_y()),
        ScaleAxes::X => (along_x(), current.scale_y),
        ScaleAxes::Y => (current.scale_x, along_y()),
    };
    target.set_scale(scale_x, scale_y);
}

fn ratio(from: f64, to: f64) -> Option<f64> {
    (from.abs() >= GEOMETRY_EPSILON).then(|| to.abs() / from.abs())
}

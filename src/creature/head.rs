//! Head outline and the eye sampling region.
//!
//! The head has no bilateral separator structure of its own: it hangs off the
//! torso's head-end separator as a four-point outline and is shaped by the
//! generic pivot-anchored warp instead of per-cross-section deformation.

use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{GenoformError, GenoformResult};
use crate::foundation::math::midpoint;
use crate::shape::model::Separator;
use crate::shape::warp::warp_path;

/// Forward reach of the top of the head from the neck, in reference units.
const SNOUT_REACH: f64 = 40.0;
/// Forward reach of the jaw, shorter so the chin slopes back.
const JAW_REACH: f64 = 20.0;
/// Upward pull on the jaw point.
const JAW_LIFT: f64 = 10.0;

/// Build the head outline from the torso's head-end separator.
///
/// The base outline is anchored at the neck (the separator's two points) and
/// reaches forward (toward negative x); it is then warped about the neck
/// midpoint, `length_factor` along the forward axis and `width_factor`
/// vertically.
pub fn head_outline(neck: &Separator, length_factor: f64, width_factor: f64) -> BezPath {
    let top = neck.a;
    let bottom = neck.b;
    let snout = Point::new(top.x - SNOUT_REACH, top.y);
    let jaw = Point::new(bottom.x - JAW_REACH, bottom.y - JAW_LIFT);

    let mut base = BezPath::new();
    base.move_to(top);
    base.line_to(snout);
    base.line_to(jaw);
    base.line_to(bottom);
    base.close_path();

    warp_path(&base, neck.midpoint(), length_factor, width_factor)
}

/// Derive the triangular eye sampling region from the head outline anchors.
///
/// The region spans the neck top, the snout, and the midpoint of the neck
/// edge, covering the upper half of the head.
pub fn eye_region(head_points: &[Point]) -> GenoformResult<[Point; 3]> {
    if head_points.len() < 4 {
        return Err(GenoformError::geometry(
            "eye region derivation needs the 4-point head outline",
        ));
    }
    let neck_mid = midpoint(head_points[0], head_points[3]);
    Ok([head_points[0], head_points[1], neck_mid])
}

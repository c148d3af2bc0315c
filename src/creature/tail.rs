//! Tail body: the second reference contour run through the same separator
//! model and deformations as the torso, then rigidly joined to the torso.

use crate::foundation::core::Point;
use crate::foundation::error::GenoformResult;
use crate::shape::contour::{TAIL_CONTOUR, anchor_points, parse_contour};
use crate::shape::deform::{adjust_tail_length, thin_creature};
use crate::shape::model::{Separator, generate_midpoints, generate_separators};

/// Build the tail separator sequence, deformed by the tail traits and
/// translated so its head-end midpoint coincides with `join` (the torso's
/// tail-end separator midpoint), producing a seamless join.
pub fn tail_separators(
    join: Point,
    width_factor: f64,
    length_factor: f64,
) -> GenoformResult<Vec<Separator>> {
    let contour = parse_contour(TAIL_CONTOUR)?;
    let separators = generate_separators(&anchor_points(&contour))?;
    let midpoints = generate_midpoints(&separators);
    let separators = thin_creature(&separators, &midpoints, width_factor, None)?;
    let separators = adjust_tail_length(&separators, length_factor);

    let anchor = separators[0].midpoint();
    let (dx, dy) = (join.x - anchor.x, join.y - anchor.y);
    Ok(separators.iter().map(|s| s.translate(dx, dy)).collect())
}

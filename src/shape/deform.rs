//! Length and width transforms over a separator sequence.
//!
//! All factors are clamped to `[0, 1]` at this boundary: trait-derived usage
//! always lands in `[0, 0.75]`, and negative (widening) factors are
//! deliberately unsupported rather than left to caller discipline.

use crate::foundation::core::Point;
use crate::foundation::error::{GenoformError, GenoformResult};
use crate::foundation::math::{clamp01, lerp_point};
use crate::shape::model::{Separator, midpoint_between};

/// Axial damping applied to the raw length factor before any point moves.
const LENGTH_DAMPING: f64 = 2.5;

/// Pull every separator's points toward its midpoint by `width_factor`.
///
/// `0` is identity; `1` collapses both points onto the midpoint. Index 0 (the
/// head-end cross-section) uses `head_width_override` when supplied, letting
/// the head taper independently from torso width.
pub fn thin_creature(
    separators: &[Separator],
    midpoints: &[Point],
    width_factor: f64,
    head_width_override: Option<f64>,
) -> GenoformResult<Vec<Separator>> {
    if midpoints.len() != separators.len() {
        return Err(GenoformError::geometry(
            "midpoint count does not match separator count",
        ));
    }
    let body = clamp01(width_factor);
    let head = head_width_override.map(clamp01);

    Ok(separators
        .iter()
        .zip(midpoints)
        .enumerate()
        .map(|(index, (sep, mid))| {
            let f = match (index, head) {
                (0, Some(h)) => h,
                _ => body,
            };
            Separator {
                a: lerp_point(sep.a, *mid, f),
                b: lerp_point(sep.b, *mid, f),
            }
        })
        .collect())
}

/// Axial stretch/compression propagated from the body center outward.
///
/// The raw factor is damped by [`LENGTH_DAMPING`], then: a central anchor
/// separator is taken halfway between the two interior separators nearest the
/// body center (indices 1 and 2 of the canonical body model); both are pulled
/// toward it; finally the tail-end and head-end separators are pulled toward
/// their already-adjusted interior neighbours. `0` is identity. Requires at
/// least 4 separators.
pub fn adjust_creature_length(
    separators: &[Separator],
    length_factor: f64,
) -> GenoformResult<Vec<Separator>> {
    if separators.len() < 4 {
        return Err(GenoformError::geometry(
            "length adjustment needs at least 4 separators",
        ));
    }
    let f = clamp01(length_factor) / LENGTH_DAMPING;
    let last = separators.len() - 1;
    let anchor = midpoint_between(&separators[1], &separators[2]);

    let mut adjusted = separators.to_vec();
    adjusted[2] = pull_toward(&separators[2], &anchor, f);
    adjusted[1] = pull_toward(&separators[1], &anchor, f);
    // End separators chase their interior neighbours after those have moved,
    // matching the middle-outward propagation order.
    let inner_tail = adjusted[last - 1];
    adjusted[last] = pull_toward(&separators[last], &inner_tail, f);
    let inner_head = adjusted[1];
    adjusted[0] = pull_toward(&separators[0], &inner_head, f);
    Ok(adjusted)
}

/// Tail-specific compression: the leftmost separator stays anchored and every
/// following separator lerps toward its already-adjusted predecessor.
///
/// Sequences shorter than 3 separators are returned unchanged.
pub fn adjust_tail_length(separators: &[Separator], length_factor: f64) -> Vec<Separator> {
    if separators.len() < 3 {
        return separators.to_vec();
    }
    let f = clamp01(length_factor);
    let mut adjusted = separators.to_vec();
    for i in 1..separators.len() {
        let prev = adjusted[i - 1];
        adjusted[i] = pull_toward(&separators[i], &prev, f);
    }
    adjusted
}

fn pull_toward(sep: &Separator, target: &Separator, f: f64) -> Separator {
    Separator {
        a: lerp_point(sep.a, target.a, f),
        b: lerp_point(sep.b, target.b, f),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/deform.rs"]
mod tests;

//! Limb generation along a Bezier spine.
//!
//! Attachment points are spaced by accumulated arc length over a sampled
//! polyline, not by curve parameter, so limbs do not bunch where curvature is
//! high. Each limb is a two-segment skeleton: a short upper segment bent
//! outward, and a vertical lower segment.

use crate::foundation::core::Point;
use crate::foundation::error::{GenoformError, GenoformResult};
use crate::foundation::math::quad_bezier;

/// Default number of spine samples.
pub(crate) const SPINE_SAMPLES: usize = 20;

/// Fraction of the limb taken by the bent upper segment.
const UPPER_FRACTION: f64 = 0.3;

/// One generated limb, consumed directly by the drawing step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppendageSpec {
    /// Attachment point on the spine.
    pub base: Point,
    /// Joint between the bent upper segment and the vertical lower segment.
    pub knee: Point,
    /// Foot point.
    pub tip: Point,
    /// Stroke thickness.
    pub thickness: f64,
}

/// How limb bends are assigned across the limb count.
///
/// The exactly-two-limb case is a documented asymmetry inherited from the
/// reference behavior (the first limb bends more than the second); it is kept
/// as an explicit named strategy rather than an inline special case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimbLayout {
    /// A single limb attached mid-spine, no bend.
    Single,
    /// Exactly two limbs with the historical asymmetric bend pair.
    Pair,
    /// Three or more limbs with bends spread linearly around the center.
    Spread,
}

impl LimbLayout {
    /// Pick the layout strategy for a limb count.
    pub fn for_count(count: usize) -> Self {
        match count {
            0 | 1 => Self::Single,
            2 => Self::Pair,
            _ => Self::Spread,
        }
    }

    /// Signed outward bend offsets, one per limb.
    fn offsets(self, count: usize) -> Vec<f64> {
        match self {
            Self::Single => vec![0.0],
            // First limb bends harder; preserved quirk, not an oversight.
            Self::Pair => vec![-1.5, 0.75],
            Self::Spread => {
                let half = (count - 1) as f64 / 2.0;
                (0..count).map(|i| (i as f64 - half) / half).collect()
            }
        }
    }
}

/// Sample a quadratic Bezier spine at `samples + 1` evenly spaced parameters.
///
/// `samples` is the segment count and is raised to 1 when 0, so the result
/// always spans both endpoints.
pub fn sample_spine(control: [Point; 3], samples: usize) -> Vec<Point> {
    let [p0, p1, p2] = control;
    let samples = samples.max(1);
    (0..=samples)
        .map(|i| quad_bezier(p0, p1, p2, i as f64 / samples as f64))
        .collect()
}

/// Walk a sampled spine and emit an attachment point each time accumulated
/// arc length crosses `gap`, resetting the accumulator.
pub fn attachment_points(spine: &[Point], gap: f64) -> GenoformResult<Vec<Point>> {
    if gap <= 0.0 || !gap.is_finite() {
        return Err(GenoformError::validation(
            "attachment gap must be positive and finite",
        ));
    }
    let mut points = Vec::new();
    let mut accumulated = 0.0;
    for pair in spine.windows(2) {
        accumulated += pair[0].distance(pair[1]);
        if accumulated >= gap {
            points.push(pair[1]);
            accumulated = 0.0;
        }
    }
    Ok(points)
}

/// Build limb skeletons for `count` limbs over the attachment point list.
///
/// Limb `i` maps to attachment index `round(i / (count-1) * (len-1))`; its
/// bend is proportional to the signed distance from the center limb and to
/// `thickness`. The upper segment takes 30% of `length`, the lower segment
/// drops vertically for the rest.
pub fn limb_skeletons(
    count: usize,
    attach: &[Point],
    length: f64,
    thickness: f64,
) -> GenoformResult<Vec<AppendageSpec>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if attach.is_empty() {
        return Err(GenoformError::geometry(
            "no attachment points available for limb placement",
        ));
    }

    let layout = LimbLayout::for_count(count);
    let offsets = layout.offsets(count);
    let last = (attach.len() - 1) as f64;

    Ok((0..count)
        .map(|i| {
            let base = match layout {
                LimbLayout::Single => attach[attach.len() / 2],
                _ => {
                    let t = i as f64 / (count - 1) as f64;
                    attach[(t * last).round() as usize]
                }
            };
            let bend = offsets[i] * thickness * 1.2;
            let upper = length * UPPER_FRACTION;
            let knee = Point::new(base.x + bend, base.y + upper);
            let tip = Point::new(knee.x, knee.y + (length - upper));
            AppendageSpec {
                base,
                knee,
                tip,
                thickness,
            }
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/creature/limbs.rs"]
mod tests;

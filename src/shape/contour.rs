//! Parses parametric-curve descriptions into typed command lists.
//!
//! Reference silhouettes are authored as SVG path text and parsed once into a
//! [`BezPath`]; everything downstream operates on the structured command list,
//! never on re-split strings.

use crate::foundation::core::{BezPath, PathEl, Point};
use crate::foundation::error::{GenoformError, GenoformResult};

/// Torso reference silhouette: closed, bilaterally symmetric about `y = 200`,
/// 10 anchors ordered head end first along the top, then tail to head along
/// the bottom, so vertex `i` mirrors vertex `n-1-i`.
pub(crate) const TORSO_CONTOUR: &str = "M120,150 L170,132 L225,126 L280,138 L320,164 \
     L320,236 L280,262 L225,274 L170,268 L120,250 Z";

/// Tail reference silhouette in local space, 8 anchors, same ordering rules;
/// its head-end midpoint sits at the local origin side (`x = 0`).
pub(crate) const TAIL_CONTOUR: &str =
    "M0,186 L25,178 L50,186 L70,196 L70,204 L50,214 L25,222 L0,214 Z";

/// Parse SVG-style path text into a typed command list.
pub fn parse_contour(d: &str) -> GenoformResult<BezPath> {
    BezPath::from_svg(d.trim())
        .map_err(|e| GenoformError::validation(format!("invalid contour path: {e}")))
}

/// Extract only the anchor (end) points of every command, in order.
///
/// Control points are discarded; `ClosePath` contributes nothing. This is how
/// a closed silhouette contour becomes the plain ordered vertex list that
/// seeds separator generation.
pub fn anchor_points(path: &BezPath) -> Vec<Point> {
    let mut points = Vec::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => points.push(p),
            PathEl::QuadTo(_, p) => points.push(p),
            PathEl::CurveTo(_, _, p) => points.push(p),
            PathEl::ClosePath => {}
        }
    }
    points
}

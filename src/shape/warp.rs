//! Generic pivot-anchored path warp.
//!
//! Used where no bilateral separator structure exists (head outline, highlight
//! ellipse): a single scale about a pivot rather than per-cross-section
//! thinning.

use crate::foundation::core::{BezPath, PathEl, Point};

/// Scale every anchor and control point of `path` about `pivot`.
///
/// A coordinate maps to `pivot + (coord - pivot) * (1 + factor)` per axis;
/// close commands pass through unchanged. Zero factors are the identity.
pub fn warp_path(path: &BezPath, pivot: Point, width_factor: f64, height_factor: f64) -> BezPath {
    let warp = |p: Point| -> Point {
        Point::new(
            pivot.x + ((p.x - pivot.x) * (1.0 + width_factor)),
            pivot.y + ((p.y - pivot.y) * (1.0 + height_factor)),
        )
    };

    let mut out = BezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to(warp(p)),
            PathEl::LineTo(p) => out.line_to(warp(p)),
            PathEl::QuadTo(c, p) => out.quad_to(warp(c), warp(p)),
            PathEl::CurveTo(c1, c2, p) => out.curve_to(warp(c1), warp(c2), warp(p)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/shape/warp.rs"]
mod tests;

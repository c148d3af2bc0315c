//! Symmetric cross-section model.
//!
//! A closed, bilaterally symmetric silhouette is reduced to a head-to-tail
//! sequence of [`Separator`]s: left/right point pairs marking one body
//! cross-section each. Midpoints are always derived on demand from the
//! current separators so the two can never drift out of sync.

use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{GenoformError, GenoformResult};
use crate::foundation::math::midpoint;

/// One symmetric cross-section of the body silhouette.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Separator {
    /// Point on one side of the spine (top in the reference contours).
    pub a: Point,
    /// Mirror point on the other side.
    pub b: Point,
}

impl Separator {
    /// Derived centerpoint of this cross-section.
    pub fn midpoint(&self) -> Point {
        midpoint(self.a, self.b)
    }

    /// Shift both points by a constant offset (rigid translation).
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            a: Point::new(self.a.x + dx, self.a.y + dy),
            b: Point::new(self.b.x + dx, self.b.y + dy),
        }
    }
}

/// Pair ordered contour vertices into `floor(n/2)` separators.
///
/// The input must already be ordered so that vertex `i` and vertex `n-1-i`
/// are mirror points; `separator[i] = (v[i], v[n-1-i])`, head end first.
/// Fewer than 2 vertices is a hard precondition failure.
pub fn generate_separators(vertices: &[Point]) -> GenoformResult<Vec<Separator>> {
    if vertices.len() < 2 {
        return Err(GenoformError::validation(
            "at least two vertices are required to generate separators",
        ));
    }
    let n = vertices.len();
    Ok((0..n / 2)
        .map(|i| Separator {
            a: vertices[i],
            b: vertices[n - 1 - i],
        })
        .collect())
}

/// Derive one midpoint per separator, same order.
pub fn generate_midpoints(separators: &[Separator]) -> Vec<Point> {
    separators.iter().map(Separator::midpoint).collect()
}

/// The separator halfway between two others, pointwise.
pub fn midpoint_between(s1: &Separator, s2: &Separator) -> Separator {
    Separator {
        a: midpoint(s1.a, s2.a),
        b: midpoint(s1.b, s2.b),
    }
}

/// Close a separator sequence back into a fillable outline: all `a` points
/// head to tail, then all `b` points tail to head.
pub fn separator_outline(separators: &[Separator]) -> BezPath {
    let mut path = BezPath::new();
    let Some(first) = separators.first() else {
        return path;
    };
    path.move_to(first.a);
    for sep in &separators[1..] {
        path.line_to(sep.a);
    }
    for sep in separators.iter().rev() {
        path.line_to(sep.b);
    }
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/shape/model.rs"]
mod tests;

//! Rejection-sampled eye placement inside a triangular region.
//!
//! Candidates are drawn uniformly via barycentric coordinates and accepted
//! only when far enough from every already-placed eye. The attempt budget is
//! a hard cap: exhausting it returns the accepted subset, never an error and
//! never an unbounded loop.

use crate::foundation::core::Point;
use rand::Rng;

/// Total candidate draws allowed per placement call.
pub const EYE_ATTEMPT_CAP: usize = 128;

/// Minimum pairwise separation as a fraction of the average triangle side.
const MIN_DIST_RATIO: f64 = 0.15;

/// Place up to `eye_count` eyes inside `region`.
///
/// The minimum pairwise distance is derived from the region itself (15% of
/// the average side length). Returns fewer eyes when [`EYE_ATTEMPT_CAP`]
/// candidates were not enough, which happens for crowded counts in small
/// regions. A degenerate region (zero area) yields no eyes at all.
pub fn place_eyes<R: Rng>(region: [Point; 3], eye_count: usize, rng: &mut R) -> Vec<Point> {
    if region_area(region) <= 0.0 {
        return Vec::new();
    }
    let min_dist = auto_min_dist(region);
    let mut eyes: Vec<Point> = Vec::with_capacity(eye_count);

    let mut attempts = 0;
    while eyes.len() < eye_count && attempts < EYE_ATTEMPT_CAP {
        attempts += 1;
        let candidate = random_point_in_triangle(region, rng);
        if eyes.iter().all(|e| e.distance(candidate) >= min_dist) {
            eyes.push(candidate);
        }
    }
    eyes
}

/// Uniform sample inside a triangle: reflect `(r1, r2)` across the diagonal
/// when their sum exceeds 1 so the parallelogram folds back onto the triangle.
fn random_point_in_triangle<R: Rng>([a, b, c]: [Point; 3], rng: &mut R) -> Point {
    let mut r1: f64 = rng.r#gen();
    let mut r2: f64 = rng.r#gen();
    if r1 + r2 > 1.0 {
        r1 = 1.0 - r1;
        r2 = 1.0 - r2;
    }
    Point::new(
        a.x + (r1 * (b.x - a.x)) + (r2 * (c.x - a.x)),
        a.y + (r1 * (b.y - a.y)) + (r2 * (c.y - a.y)),
    )
}

fn region_area([a, b, c]: [Point; 3]) -> f64 {
    ((b - a).cross(c - a) / 2.0).abs()
}

/// Separation threshold derived from the region: 15% of the average side.
pub(crate) fn auto_min_dist([a, b, c]: [Point; 3]) -> f64 {
    let avg_side = (a.distance(b) + b.distance(c) + c.distance(a)) / 3.0;
    avg_side * MIN_DIST_RATIO
}

#[cfg(test)]
#[path = "../../tests/unit/creature/eyes.rs"]
mod tests;

//! Radial spike strokes.

use crate::foundation::core::Point;

/// How far spikes overshoot the torso boundary, in reference units.
const OVERSHOOT: f64 = 18.0;

/// Straight spike strokes radiating from `center` out past `body_radius`.
///
/// `density * 3` strokes, evenly angularly spaced starting at angle zero;
/// density 0 yields none. Each entry is a `(center, tip)` segment.
pub fn spike_lines(center: Point, body_radius: f64, density: u8) -> Vec<(Point, Point)> {
    let count = usize::from(density) * 3;
    let reach = body_radius + OVERSHOOT;
    (0..count)
        .map(|i| {
            let angle = (i as f64) * std::f64::consts::TAU / (count as f64);
            let tip = Point::new(
                center.x + (angle.cos() * reach),
                center.y + (angle.sin() * reach),
            );
            (center, tip)
        })
        .collect()
}

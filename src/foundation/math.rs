use crate::foundation::core::Point;

/// Clamp scalar value to normalized range `[0, 1]`.
#[inline]
pub(crate) fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Linear interpolation from `a` toward `b`; `t = 0` returns `a` exactly.
#[inline]
pub(crate) fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(a.x + ((b.x - a.x) * t), a.y + ((b.y - a.y) * t))
}

/// Pointwise average of two points.
#[inline]
pub(crate) fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Evaluate a quadratic Bezier at parameter `t`.
#[inline]
pub(crate) fn quad_bezier(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    let u = 1.0 - t;
    Point::new(
        (u * u * p0.x) + (2.0 * u * t * p1.x) + (t * t * p2.x),
        (u * u * p0.y) + (2.0 * u * t * p1.y) + (t * t * p2.y),
    )
}

//! The abstract drawing-primitive sink consumed by the pipeline.
//!
//! Path-building commands accumulate an open sub-path between a `move_to` and
//! the `fill`/`stroke` that consumes it, so all geometry for one creature must
//! go through one sink instance in a single uninterrupted sequence. The sink
//! is always threaded explicitly as a parameter; there is no shared drawing
//! context anywhere in the crate.

use crate::foundation::core::{BezPath, PathEl, Point, Rgba8};
use crate::foundation::error::GenoformResult;

/// Ordered drawing-primitive consumer.
///
/// Implementations rasterize, record, or forward the primitive stream; the
/// pipeline issues commands in a fixed per-shape order: build path, then fill
/// and/or stroke, then move to the next shape.
pub trait RenderSink {
    /// Start a new sub-path at `p`.
    fn move_to(&mut self, p: Point);
    /// Straight segment to `p`.
    fn line_to(&mut self, p: Point);
    /// Cubic segment with control points `c1`, `c2` ending at `p`.
    fn curve_to(&mut self, c1: Point, c2: Point, p: Point);
    /// Close the current sub-path.
    fn close_path(&mut self);
    /// Fill the accumulated path and reset it.
    fn fill(&mut self, color: Rgba8) -> GenoformResult<()>;
    /// Stroke the accumulated path with `width` and reset it.
    fn stroke(&mut self, color: Rgba8, width: f64) -> GenoformResult<()>;
    /// Finish the render and export encoded image bytes.
    fn export_image(&mut self) -> GenoformResult<Vec<u8>>;
}

/// Replay a [`BezPath`] into a sink as move/line/curve/close commands.
///
/// Quadratic segments are elevated to the cubic form the sink interface
/// carries.
pub fn emit_path<S: RenderSink + ?Sized>(sink: &mut S, path: &BezPath) {
    let mut start = Point::ZERO;
    let mut current = Point::ZERO;
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                sink.move_to(p);
                start = p;
                current = p;
            }
            PathEl::LineTo(p) => {
                sink.line_to(p);
                current = p;
            }
            PathEl::QuadTo(c, p) => {
                // Degree elevation: cubic controls sit 2/3 of the way toward
                // the quadratic control point.
                let c1 = Point::new(
                    current.x + (2.0 / 3.0) * (c.x - current.x),
                    current.y + (2.0 / 3.0) * (c.y - current.y),
                );
                let c2 = Point::new(
                    p.x + (2.0 / 3.0) * (c.x - p.x),
                    p.y + (2.0 / 3.0) * (c.y - p.y),
                );
                sink.curve_to(c1, c2, p);
                current = p;
            }
            PathEl::CurveTo(c1, c2, p) => {
                sink.curve_to(c1, c2, p);
                current = p;
            }
            PathEl::ClosePath => {
                sink.close_path();
                current = start;
            }
        }
    }
}

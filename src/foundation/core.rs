//! Core geometry and color types.
//!
//! Geometry is `kurbo` end-to-end: a parametric path is a [`BezPath`], a path
//! command is a [`PathEl`] (move/line/quad/curve/close), and pivot-anchored
//! transforms are [`Affine`]s.

pub use kurbo::{Affine, BezPath, PathEl, Point, Rect, Vec2};

/// Straight-alpha RGBA8 color as handed to a render sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Build an opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build a color with explicit alpha.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

//! Silhouette machinery: contour parsing, the symmetric cross-section model,
//! trait-driven deformations and the generic path warp.

pub mod contour;
pub mod deform;
pub mod model;
pub mod warp;

//! Genoform turns a packed integer gene into a deterministic 2D vector
//! illustration of a creature.
//!
//! The pipeline has two halves:
//!
//! 1. **Codec**: a bijective variable-width bit-packing between a gene and a
//!    [`CreatureTraits`] struct (`encode(decode(g)) == g` across the declared
//!    layout).
//! 2. **Illustrator**: a procedural geometric-deformation pipeline. A
//!    hard-coded symmetric silhouette is split into cross-section
//!    [`Separator`]s, stretched and thinned by trait-derived factors, then
//!    finished with limbs, a tail, spikes and rejection-sampled eyes. All
//!    geometry is emitted as an ordered stream of abstract drawing primitives
//!    to a [`RenderSink`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: rendering is a pure function of the trait
//!   struct; the one randomized step (eye placement) takes an injected
//!   [`rand::Rng`] so renders are reproducible under test.
//! - **No hidden drawing state**: the sink is threaded explicitly through
//!   every drawing call; concurrent renders use independent sinks.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod creature;
mod foundation;
mod genome;
mod render;
mod shape;

pub use creature::eyes::{EYE_ATTEMPT_CAP, place_eyes};
pub use creature::head::{eye_region, head_outline};
pub use creature::limbs::{
    AppendageSpec, LimbLayout, attachment_points, limb_skeletons, sample_spine,
};
pub use creature::palette::{Palette, palette_for};
pub use creature::spikes::spike_lines;
pub use creature::tail::tail_separators;
pub use foundation::core::{Affine, BezPath, PathEl, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{GenoformError, GenoformResult};
pub use genome::codec::{
    CreatureTraits, GENE_BITS, Gene, TRAIT_LAYOUT, TraitField, decode_gene, encode_gene,
};
pub use render::cpu::CpuSink;
pub use render::pipeline::{
    REFERENCE_SIZE, render_creature, render_creature_data_uri, render_creature_with,
};
pub use render::sink::{RenderSink, emit_path};
pub use shape::contour::{anchor_points, parse_contour};
pub use shape::deform::{adjust_creature_length, adjust_tail_length, thin_creature};
pub use shape::model::{
    Separator, generate_midpoints, generate_separators, midpoint_between, separator_outline,
};
pub use shape::warp::warp_path;

//! One-shot creature render: trait struct in, primitive stream (and image
//! bytes) out.
//!
//! Geometry is produced in a fixed 400x400 reference space and scaled to the
//! requested surface size on emission. Everything is a pure function of the
//! trait struct except eye placement, which draws from the injected random
//! source.

use crate::creature::eyes::place_eyes;
use crate::creature::head::{eye_region, head_outline};
use crate::creature::limbs::{SPINE_SAMPLES, attachment_points, limb_skeletons, sample_spine};
use crate::creature::palette::{OUTLINE, palette_for};
use crate::creature::spikes::spike_lines;
use crate::creature::tail::tail_separators;
use crate::foundation::core::{Affine, BezPath, Point, Rgba8};
use crate::foundation::error::GenoformResult;
use crate::genome::codec::CreatureTraits;
use crate::render::cpu::CpuSink;
use crate::render::sink::{RenderSink, emit_path};
use crate::shape::contour::{TORSO_CONTOUR, anchor_points, parse_contour};
use crate::shape::deform::{adjust_creature_length, thin_creature};
use crate::shape::model::{generate_midpoints, generate_separators, separator_outline};
use base64::Engine as _;
use kurbo::Shape as _;
use rand::Rng;

/// Side length of the square reference space all geometry is authored in.
pub const REFERENCE_SIZE: f64 = 400.0;

/// Arc-length spacing between limb attachment points, reference units.
const LIMB_GAP: f64 = 12.0;
/// Outline stroke width for the filled body shapes, reference units.
const OUTLINE_WIDTH: f64 = 2.0;
/// Spike stroke width, reference units.
const SPIKE_WIDTH: f64 = 4.0;
/// Eye disc radius, reference units.
const EYE_RADIUS: f64 = 6.0;

/// Render a creature to PNG bytes on the built-in CPU sink.
///
/// Eye placement uses the thread RNG; use [`render_creature_with`] to inject
/// a seeded source and a custom sink.
#[tracing::instrument]
pub fn render_creature(traits: &CreatureTraits, size: u32) -> GenoformResult<Vec<u8>> {
    let mut sink = CpuSink::new(size)?;
    render_creature_with(traits, size, &mut rand::thread_rng(), &mut sink)?;
    sink.export_image()
}

/// Render a creature to a `data:image/png;base64,...` URI.
pub fn render_creature_data_uri(traits: &CreatureTraits, size: u32) -> GenoformResult<String> {
    let png = render_creature(traits, size)?;
    let payload = base64::engine::general_purpose::STANDARD.encode(png);
    Ok(format!("data:image/png;base64,{payload}"))
}

/// Emit one creature's full primitive stream into `sink`.
///
/// The stream for one creature must not be interleaved with another render on
/// the same sink; concurrent renders take independent sinks.
#[tracing::instrument(skip(rng, sink))]
pub fn render_creature_with<R: Rng, S: RenderSink>(
    traits: &CreatureTraits,
    size: u32,
    rng: &mut R,
    sink: &mut S,
) -> GenoformResult<()> {
    let palette = palette_for(traits);
    let scale = f64::from(size) / REFERENCE_SIZE;
    let to_canvas = Affine::scale(scale);

    // Torso: reference contour -> separators -> width/length deformation.
    let contour = parse_contour(TORSO_CONTOUR)?;
    let separators = generate_separators(&anchor_points(&contour))?;
    let midpoints = generate_midpoints(&separators);
    let separators = thin_creature(
        &separators,
        &midpoints,
        CreatureTraits::factor2(traits.torso_width),
        Some(CreatureTraits::factor2(traits.head_width)),
    )?;
    let separators = adjust_creature_length(
        &separators,
        CreatureTraits::factor1(traits.torso_length),
    )?;
    let body_mids = generate_midpoints(&separators);
    tracing::debug!(separators = separators.len(), "torso deformed");

    fill_and_outline(sink, &(to_canvas * separator_outline(&separators)), palette.body, scale)?;

    // Tail joins the torso's tail-end midpoint.
    let tail = tail_separators(
        separators[separators.len() - 1].midpoint(),
        CreatureTraits::factor2(traits.tail_width),
        CreatureTraits::factor2(traits.tail_length),
    )?;
    fill_and_outline(sink, &(to_canvas * separator_outline(&tail)), palette.body, scale)?;

    // Limbs hang from a Bezier spine along the belly.
    let limb_count = usize::from(traits.arm_count) + 1;
    let belly_start = separators[1].b;
    let belly_end = separators[3].b;
    let belly_control = Point::new(
        (belly_start.x + belly_end.x) / 2.0,
        belly_start.y.max(belly_end.y) + 28.0,
    );
    let spine = sample_spine([belly_start, belly_control, belly_end], SPINE_SAMPLES);
    let attach = attachment_points(&spine, LIMB_GAP)?;
    let limb_length = 40.0 * (1.0 + CreatureTraits::factor2(traits.limb_length));
    let limb_thickness = 3.0 + (f64::from(traits.limb_width) * 2.0);
    for limb in limb_skeletons(limb_count, &attach, limb_length, limb_thickness)? {
        let mut path = BezPath::new();
        path.move_to(limb.base);
        path.line_to(limb.knee);
        path.line_to(limb.tip);
        emit_path(sink, &(to_canvas * path));
        sink.stroke(palette.accent, limb.thickness * scale)?;
    }

    // Spikes radiate from the deformed body center past its boundary.
    let center = centroid(&body_mids);
    let body_radius = separators
        .iter()
        .flat_map(|s| [s.a, s.b])
        .map(|p| center.distance(p))
        .fold(0.0, f64::max);
    for (base, tip) in spike_lines(center, body_radius, traits.spike_density) {
        let mut path = BezPath::new();
        path.move_to(base);
        path.line_to(tip);
        emit_path(sink, &(to_canvas * path));
        sink.stroke(palette.accent, SPIKE_WIDTH * scale)?;
    }

    // Head hangs off the (already thinned) head-end separator.
    let head = head_outline(
        &separators[0],
        CreatureTraits::factor2(traits.head_length),
        CreatureTraits::factor2(traits.head_width) / 2.0,
    );
    fill_and_outline(sink, &(to_canvas * head.clone()), palette.body, scale)?;

    // Eyes: capped rejection sampling inside the head's upper triangle.
    let region = eye_region(&anchor_points(&head))?;
    for eye in place_eyes(region, usize::from(traits.eye_count), rng) {
        let disc = kurbo::Circle::new(eye, EYE_RADIUS).to_path(0.1);
        emit_path(sink, &(to_canvas * disc));
        sink.fill(palette.eye)?;
    }

    // Shiny highlight over the fore-body.
    if let Some(highlight) = palette.highlight {
        let hl_center = Point::new(center.x - 55.0, center.y - 40.0);
        let ellipse = kurbo::Ellipse::new(hl_center, (30.0, 18.0), -std::f64::consts::FRAC_PI_4)
            .to_path(0.1);
        emit_path(sink, &(to_canvas * ellipse));
        sink.fill(highlight)?;
    }

    Ok(())
}

fn fill_and_outline<S: RenderSink>(
    sink: &mut S,
    path: &BezPath,
    fill: Rgba8,
    scale: f64,
) -> GenoformResult<()> {
    emit_path(sink, path);
    sink.fill(fill)?;
    emit_path(sink, path);
    sink.stroke(OUTLINE, OUTLINE_WIDTH * scale)
}

fn centroid(points: &[Point]) -> Point {
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

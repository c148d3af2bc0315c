use super::*;
use crate::shape::model::generate_midpoints;

fn ladder(xs: &[f64]) -> Vec<Separator> {
    xs.iter()
        .map(|&x| Separator {
            a: Point::new(x, 0.0),
            b: Point::new(x, 10.0),
        })
        .collect()
}

#[test]
fn zero_width_factor_is_identity() {
    let seps = ladder(&[0.0, 10.0]);
    let mids = generate_midpoints(&seps);
    let thinned = thin_creature(&seps, &mids, 0.0, None).unwrap();
    assert_eq!(thinned, seps);
}

#[test]
fn unit_width_factor_collapses_onto_midpoints() {
    let seps = ladder(&[0.0]);
    let mids = generate_midpoints(&seps);
    let thinned = thin_creature(&seps, &mids, 1.0, None).unwrap();
    assert_eq!(thinned[0].a, Point::new(0.0, 5.0));
    assert_eq!(thinned[0].b, Point::new(0.0, 5.0));
}

#[test]
fn width_factors_above_one_are_clamped() {
    let seps = ladder(&[0.0]);
    let mids = generate_midpoints(&seps);
    let clamped = thin_creature(&seps, &mids, 5.0, None).unwrap();
    let unit = thin_creature(&seps, &mids, 1.0, None).unwrap();
    assert_eq!(clamped, unit);
}

#[test]
fn head_override_applies_only_to_the_first_separator() {
    let seps = ladder(&[0.0, 10.0]);
    let mids = generate_midpoints(&seps);
    let thinned = thin_creature(&seps, &mids, 0.0, Some(0.5)).unwrap();
    // Head cross-section pulled halfway in, body untouched.
    assert_eq!(thinned[0].a, Point::new(0.0, 2.5));
    assert_eq!(thinned[0].b, Point::new(0.0, 7.5));
    assert_eq!(thinned[1], seps[1]);
}

#[test]
fn midpoint_count_mismatch_is_an_error() {
    let seps = ladder(&[0.0, 10.0]);
    assert!(thin_creature(&seps, &[], 0.5, None).is_err());
}

#[test]
fn zero_length_factor_is_identity() {
    let seps = ladder(&[0.0, 10.0, 20.0, 30.0]);
    let adjusted = adjust_creature_length(&seps, 0.0).unwrap();
    assert_eq!(adjusted, seps);
}

#[test]
fn length_adjustment_propagates_middle_outward() {
    // Raw factor 0.5 damped to 0.2; the anchor sits at x = 15 between the
    // two interior separators.
    let seps = ladder(&[0.0, 10.0, 20.0, 30.0]);
    let adjusted = adjust_creature_length(&seps, 0.5).unwrap();
    assert!((adjusted[1].a.x - 11.0).abs() < 1e-12);
    assert!((adjusted[2].a.x - 19.0).abs() < 1e-12);
    // End separators chase their interior neighbours' adjusted positions.
    assert!((adjusted[0].a.x - 2.2).abs() < 1e-12);
    assert!((adjusted[3].a.x - 27.8).abs() < 1e-12);
    // Cross-section height is untouched.
    assert!(adjusted.iter().all(|s| s.a.y == 0.0 && s.b.y == 10.0));
}

#[test]
fn length_adjustment_needs_four_separators() {
    let seps = ladder(&[0.0, 10.0, 20.0]);
    assert!(adjust_creature_length(&seps, 0.5).is_err());
}

#[test]
fn tail_adjustment_anchors_the_leftmost_separator() {
    let seps = ladder(&[0.0, 10.0, 20.0]);
    let adjusted = adjust_tail_length(&seps, 0.5);
    assert_eq!(adjusted[0], seps[0]);
    // Each separator chases its already-adjusted predecessor.
    assert!((adjusted[1].a.x - 5.0).abs() < 1e-12);
    assert!((adjusted[2].a.x - 12.5).abs() < 1e-12);
}

#[test]
fn short_tails_pass_through_unchanged() {
    let seps = ladder(&[0.0, 10.0]);
    assert_eq!(adjust_tail_length(&seps, 0.9), seps);
}

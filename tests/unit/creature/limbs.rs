use super::*;

fn straight_spine() -> Vec<Point> {
    // 10 unit-length segments along the x axis.
    (0..=10).map(|i| Point::new(f64::from(i) * 10.0, 0.0)).collect()
}

#[test]
fn spine_sampling_hits_both_endpoints() {
    let control = [
        Point::new(0.0, 0.0),
        Point::new(50.0, 40.0),
        Point::new(100.0, 0.0),
    ];
    let spine = sample_spine(control, 8);
    assert_eq!(spine.len(), 9);
    assert_eq!(spine[0], control[0]);
    assert_eq!(spine[8], control[2]);
    // Quadratic midpoint: (p0 + 2*p1 + p2) / 4.
    assert_eq!(spine[4], Point::new(50.0, 20.0));
}

#[test]
fn zero_segment_sampling_still_spans_the_endpoints() {
    let control = [
        Point::new(0.0, 0.0),
        Point::new(50.0, 40.0),
        Point::new(100.0, 0.0),
    ];
    let spine = sample_spine(control, 0);
    assert_eq!(spine, vec![control[0], control[2]]);
    assert!(spine.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}

#[test]
fn attachment_points_space_by_arc_length() {
    let points = attachment_points(&straight_spine(), 25.0).unwrap();
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![30.0, 60.0, 90.0]);
}

#[test]
fn non_positive_gap_is_rejected() {
    assert!(attachment_points(&straight_spine(), 0.0).is_err());
    assert!(attachment_points(&straight_spine(), -1.0).is_err());
    assert!(attachment_points(&straight_spine(), f64::NAN).is_err());
}

#[test]
fn layout_selection_by_count() {
    assert_eq!(LimbLayout::for_count(0), LimbLayout::Single);
    assert_eq!(LimbLayout::for_count(1), LimbLayout::Single);
    assert_eq!(LimbLayout::for_count(2), LimbLayout::Pair);
    assert_eq!(LimbLayout::for_count(3), LimbLayout::Spread);
}

#[test]
fn zero_limbs_is_empty_not_an_error() {
    let attach = attachment_points(&straight_spine(), 25.0).unwrap();
    assert!(limb_skeletons(0, &attach, 40.0, 3.0).unwrap().is_empty());
}

#[test]
fn limbs_need_at_least_one_attachment_point() {
    assert!(limb_skeletons(2, &[], 40.0, 3.0).is_err());
}

#[test]
fn single_limb_hangs_straight_from_mid_spine() {
    let attach = attachment_points(&straight_spine(), 25.0).unwrap();
    let limbs = limb_skeletons(1, &attach, 40.0, 3.0).unwrap();
    assert_eq!(limbs.len(), 1);
    let limb = limbs[0];
    assert_eq!(limb.base, attach[1]);
    // No bend: knee and tip stay on the attachment vertical.
    assert_eq!(limb.knee, Point::new(limb.base.x, limb.base.y + 12.0));
    assert_eq!(limb.tip, Point::new(limb.base.x, limb.base.y + 40.0));
}

#[test]
fn limb_pair_keeps_the_asymmetric_bend() {
    let attach = attachment_points(&straight_spine(), 25.0).unwrap();
    let limbs = limb_skeletons(2, &attach, 40.0, 1.0).unwrap();
    assert_eq!(limbs[0].base, attach[0]);
    assert_eq!(limbs[1].base, attach[2]);
    // Bends are offset * thickness * 1.2 with the -1.5 / 0.75 pair.
    assert!((limbs[0].knee.x - (attach[0].x - 1.8)).abs() < 1e-12);
    assert!((limbs[1].knee.x - (attach[2].x + 0.9)).abs() < 1e-12);
}

#[test]
fn spread_bends_are_linear_and_centered() {
    let attach = attachment_points(&straight_spine(), 25.0).unwrap();
    let limbs = limb_skeletons(3, &attach, 40.0, 1.0).unwrap();
    assert_eq!(limbs.len(), 3);
    // Middle limb of an odd spread is unbent and sits mid-list.
    assert_eq!(limbs[1].base, attach[1]);
    assert_eq!(limbs[1].knee.x, limbs[1].base.x);
    assert!(limbs[0].knee.x < limbs[0].base.x);
    assert!(limbs[2].knee.x > limbs[2].base.x);
}

#[test]
fn skeleton_segments_split_thirty_seventy() {
    let attach = attachment_points(&straight_spine(), 25.0).unwrap();
    let limb = limb_skeletons(1, &attach, 50.0, 3.0).unwrap()[0];
    assert!((limb.knee.y - limb.base.y - 15.0).abs() < 1e-12);
    assert!((limb.tip.y - limb.knee.y - 35.0).abs() < 1e-12);
}

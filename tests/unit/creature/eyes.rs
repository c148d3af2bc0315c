use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn region() -> [Point; 3] {
    [
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(0.0, 100.0),
    ]
}

// The test region is the right triangle x >= 0, y >= 0, x + y <= 100.
fn inside(p: Point) -> bool {
    p.x >= 0.0 && p.y >= 0.0 && (p.x + p.y) <= 100.0 + 1e-9
}

#[test]
fn zero_eyes_is_empty() {
    let mut rng = StdRng::seed_from_u64(7);
    assert!(place_eyes(region(), 0, &mut rng).is_empty());
}

#[test]
fn eyes_land_inside_the_region() {
    let mut rng = StdRng::seed_from_u64(7);
    let eyes = place_eyes(region(), 3, &mut rng);
    assert_eq!(eyes.len(), 3);
    assert!(eyes.iter().all(|&e| inside(e)));
}

#[test]
fn eyes_keep_the_derived_minimum_separation() {
    let mut rng = StdRng::seed_from_u64(42);
    let eyes = place_eyes(region(), 3, &mut rng);
    let min_dist = auto_min_dist(region());
    for (i, a) in eyes.iter().enumerate() {
        for b in &eyes[i + 1..] {
            assert!(a.distance(*b) >= min_dist);
        }
    }
}

#[test]
fn same_seed_places_the_same_eyes() {
    let one = place_eyes(region(), 3, &mut StdRng::seed_from_u64(9));
    let two = place_eyes(region(), 3, &mut StdRng::seed_from_u64(9));
    assert_eq!(one, two);
}

#[test]
fn degenerate_regions_yield_no_eyes() {
    let mut rng = StdRng::seed_from_u64(3);
    let p = Point::new(50.0, 50.0);
    assert!(place_eyes([p, p, p], 3, &mut rng).is_empty());
    // Collinear points enclose no area either.
    let flat = [
        Point::new(0.0, 0.0),
        Point::new(50.0, 50.0),
        Point::new(100.0, 100.0),
    ];
    assert!(place_eyes(flat, 2, &mut rng).is_empty());
}

#[test]
fn attempt_cap_bounds_crowded_requests() {
    // Far more eyes than the separation constraint can fit: the call must
    // terminate and return only what was accepted.
    let mut rng = StdRng::seed_from_u64(1);
    let eyes = place_eyes(region(), 500, &mut rng);
    assert!(eyes.len() < 500);
    assert!(!eyes.is_empty());
}

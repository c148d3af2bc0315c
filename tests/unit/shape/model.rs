use super::*;
use crate::foundation::core::PathEl;

fn square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ]
}

#[test]
fn pairing_walks_the_contour_from_both_ends() {
    let seps = generate_separators(&square()).unwrap();
    assert_eq!(seps.len(), 2);
    assert_eq!(seps[0].a, Point::new(0.0, 0.0));
    assert_eq!(seps[0].b, Point::new(0.0, 10.0));
    assert_eq!(seps[1].a, Point::new(10.0, 0.0));
    assert_eq!(seps[1].b, Point::new(10.0, 10.0));
}

#[test]
fn odd_vertex_counts_drop_the_middle_vertex() {
    let mut vertices = square();
    vertices.insert(2, Point::new(15.0, 5.0));
    let seps = generate_separators(&vertices).unwrap();
    assert_eq!(seps.len(), 2);
    assert!(
        seps.iter()
            .all(|s| s.a != Point::new(15.0, 5.0) && s.b != Point::new(15.0, 5.0))
    );
}

#[test]
fn fewer_than_two_vertices_is_an_error() {
    assert!(generate_separators(&[]).is_err());
    assert!(generate_separators(&[Point::new(1.0, 1.0)]).is_err());
}

#[test]
fn midpoint_and_translate() {
    let sep = Separator {
        a: Point::new(0.0, 0.0),
        b: Point::new(10.0, 20.0),
    };
    assert_eq!(sep.midpoint(), Point::new(5.0, 10.0));
    let moved = sep.translate(1.0, -2.0);
    assert_eq!(moved.a, Point::new(1.0, -2.0));
    assert_eq!(moved.b, Point::new(11.0, 18.0));
}

#[test]
fn midpoint_between_is_pointwise() {
    let s1 = Separator {
        a: Point::new(0.0, 0.0),
        b: Point::new(0.0, 10.0),
    };
    let s2 = Separator {
        a: Point::new(10.0, 0.0),
        b: Point::new(10.0, 10.0),
    };
    let between = midpoint_between(&s1, &s2);
    assert_eq!(between.a, Point::new(5.0, 0.0));
    assert_eq!(between.b, Point::new(5.0, 10.0));
}

#[test]
fn outline_walks_a_side_forward_and_b_side_back() {
    let seps = generate_separators(&square()).unwrap();
    let outline = separator_outline(&seps);
    let els: Vec<PathEl> = outline.elements().to_vec();
    assert_eq!(
        els,
        vec![
            PathEl::MoveTo(Point::new(0.0, 0.0)),
            PathEl::LineTo(Point::new(10.0, 0.0)),
            PathEl::LineTo(Point::new(10.0, 10.0)),
            PathEl::LineTo(Point::new(0.0, 10.0)),
            PathEl::ClosePath,
        ]
    );
}

#[test]
fn outline_of_nothing_is_empty() {
    assert!(separator_outline(&[]).elements().is_empty());
}

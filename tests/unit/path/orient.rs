use super::*;
use crate::foundation::core::BezPath;

fn square_ccw() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ]
}

#[test]
fn counter_clockwise_is_outer_and_reversed_is_hole() {
    let ccw = square_ccw();
    assert_eq!(signed_area(&ccw), 100.0);
    assert_eq!(classify_points(&ccw), SubpathKind::Outer);

    let mut cw = ccw.clone();
    cw.reverse();
    assert_eq!(signed_area(&cw), -100.0);
    assert_eq!(classify_points(&cw), SubpathKind::Hole);
}

#[test]
fn closed_ring_anchors_repeat_the_start_point() {
    let path = BezPath::from_svg("M0,0 L10,0 L10,10 L0,10 Z").unwrap();
    let pts = anchor_points(path.elements());

    assert_eq!(pts.len(), 5);
    assert_eq!(pts.first(), pts.last());
    assert_eq!(signed_area(&pts), 100.0);
}

#[test]
fn open_ring_is_closed_implicitly() {
    let path = BezPath::from_svg("M0,0 L10,0 L10,10 L0,10").unwrap();
    let pts = anchor_points(path.elements());

    assert_eq!(pts.len(), 4);
    assert_eq!(signed_area(&pts), 100.0);
}

#[test]
fn close_at_start_adds_no_segment() {
    let path = BezPath::from_svg("M0,0 L10,0 L10,10 L0,0 Z").unwrap();
    let pts = anchor_points(path.elements());
    assert_eq!(
        pts,
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 0.0),
        ]
    );
}

#[test]
fn curve_anchors_skip_control_points() {
    let path = BezPath::from_svg("M0,0 C1,50 9,50 10,0 Q5,-20 0,0 Z").unwrap();
    let pts = anchor_points(path.elements());
    assert_eq!(
        pts,
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 0.0),
        ]
    );
}

#[test]
fn degenerate_rings_are_never_holes() {
    assert_eq!(classify_points(&[]), SubpathKind::Outer);
    assert_eq!(classify_points(&[Point::new(3.0, 4.0)]), SubpathKind::Outer);

    let move_only = BezPath::from_svg("M5,5").unwrap();
    assert!(anchor_points(move_only.elements()).is_empty());
}

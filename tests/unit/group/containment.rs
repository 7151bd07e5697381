use super::*;
use crate::path::split::split_path_data;

fn subpaths(d: &str) -> Vec<Subpath> {
    split_path_data(d).unwrap()
}

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point> {
    vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ]
}

#[test]
fn centroid_is_the_plain_mean_of_points() {
    assert_eq!(centroid(&[]), None);
    assert_eq!(
        centroid(&square(0.0, 0.0, 10.0, 10.0)),
        Some(Point::new(5.0, 5.0))
    );
    // Repeated closing point pulls the mean towards the start.
    let closed = subpaths("M0,0 L10,0 L10,10 L0,10 Z");
    assert_eq!(centroid(closed[0].points()), Some(Point::new(4.0, 4.0)));
}

#[test]
fn ray_casting_inside_and_outside() {
    let ring = square(0.0, 0.0, 10.0, 10.0);
    assert!(point_in_polygon(Point::new(5.0, 5.0), &ring));
    assert!(point_in_polygon(Point::new(0.5, 9.5), &ring));
    assert!(!point_in_polygon(Point::new(15.0, 5.0), &ring));
    assert!(!point_in_polygon(Point::new(-1.0, 5.0), &ring));
    assert!(!point_in_polygon(Point::new(5.0, 20.0), &ring));
}

#[test]
fn ray_casting_handles_concave_rings() {
    // A "U" shape; the notch between the arms is outside.
    let ring = vec![
        Point::new(0.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(3.0, 7.0),
        Point::new(7.0, 7.0),
        Point::new(7.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    assert!(!point_in_polygon(Point::new(5.0, 3.0), &ring));
    assert!(point_in_polygon(Point::new(5.0, 8.5), &ring));
    assert!(point_in_polygon(Point::new(1.5, 3.0), &ring));
}

#[test]
fn too_few_points_contain_nothing() {
    let line = vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
    assert!(!point_in_polygon(Point::new(5.0, 5.0), &line));
    assert!(!point_in_polygon(Point::new(0.0, 0.0), &[]));
}

#[test]
fn small_square_inside_large_square_is_enclosed() {
    let sp = subpaths("M0,0 L10,0 L10,10 L0,10 Z M3,3 L3,7 L7,7 L7,3 Z M30,30 L30,34 L34,34 L34,30 Z");
    assert!(encloses(&sp[0], &sp[1]));
    assert!(!encloses(&sp[0], &sp[2]));
}

#[test]
fn first_match_takes_the_earliest_containing_outer() {
    // Outer A encloses outer B, which encloses the hole.
    let sp = subpaths(
        "M0,0 L100,0 L100,100 L0,100 Z \
         M20,20 L80,20 L80,80 L20,80 Z \
         M40,40 L40,60 L60,60 L60,40 Z",
    );
    let outers = vec![sp[0].clone(), sp[1].clone()];
    let holes = vec![sp[2].clone()];

    assert_eq!(FirstMatch.resolve(&outers, &holes), vec![Some(0)]);
    assert_eq!(SmallestEnclosing.resolve(&outers, &holes), vec![Some(1)]);
}

#[test]
fn unclaimed_holes_resolve_to_none() {
    let sp = subpaths("M0,0 L10,0 L10,10 L0,10 Z M50,50 L50,60 L60,60 L60,50 Z");
    let owners = FirstMatch.resolve(&sp[..1], &sp[1..]);
    assert_eq!(owners, vec![None]);
    assert_eq!(SmallestEnclosing.resolve(&sp[..1], &sp[1..]), vec![None]);
}

#[test]
fn first_match_claims_each_hole_once() {
    let sp = subpaths(
        "M0,0 L10,0 L10,10 L0,10 Z \
         M0,0 L10,0 L10,10 L0,10 Z \
         M3,3 L3,7 L7,7 L7,3 Z",
    );
    let owners = FirstMatch.resolve(&sp[..2], &sp[2..]);
    assert_eq!(owners, vec![Some(0)]);
}

#[test]
fn policy_dispatches_and_deserializes() {
    let policy: ContainmentPolicy = serde_json::from_str("\"smallest_enclosing\"").unwrap();
    assert_eq!(policy, ContainmentPolicy::SmallestEnclosing);
    assert_eq!(ContainmentPolicy::default(), ContainmentPolicy::FirstMatch);

    let sp = subpaths(
        "M0,0 L100,0 L100,100 L0,100 Z \
         M20,20 L80,20 L80,80 L20,80 Z \
         M40,40 L40,60 L60,60 L60,40 Z",
    );
    let resolver: &dyn ContainmentResolver = &policy;
    assert_eq!(resolver.resolve(&sp[..2], &sp[2..]), vec![Some(1)]);
}

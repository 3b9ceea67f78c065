//! Unit tests for object coordinates and containment.

use stageboard::geometry::Point;
use stageboard::object::{Corner, OriginX, OriginY, Placement, SceneObject, Transformable};

fn placements() -> Vec<Placement> {
    vec![
        Placement::new(100.0, 100.0, 60.0, 40.0),
        Placement::new(100.0, 100.0, 60.0, 40.0).with_angle(30.0),
        Placement::new(80.0, 120.0, 50.0, 30.0)
            .with_scale(1.7, 0.6)
            .with_angle(200.0),
        Placement::new(90.0, 90.0, 40.0, 40.0)
            .with_origin(OriginX::Left, OriginY::Top)
            .with_angle(315.0),
        Placement::new(110.0, 70.0, 70.0, 20.0)
            .with_origin(OriginX::Right, OriginY::Bottom)
            .with_scale(0.8, 2.5)
            .with_angle(95.0),
    ]
}

#[test]
fn test_cached_outline_matches_local_containment() {
    for placement in placements() {
        let mut obj = SceneObject::rect(0.0, 0.0, 0.0, 0.0).with_placement(placement);
        obj.set_coords(1.0);

        // Off-grid sample points keep clear of exact edges
        for i in 0..40 {
            for j in 0..40 {
                let p = Point::new(i as f64 * 5.37 + 0.11, j as f64 * 5.37 + 0.13);
                assert_eq!(
                    obj.contains_point(p),
                    placement.contains_local(p),
                    "disagreement at {p:?} for {placement:?}"
                );
            }
        }
    }
}

#[test]
fn test_contains_reads_cache_only() {
    let mut obj = SceneObject::rect(100.0, 100.0, 20.0, 20.0);
    obj.set_coords(1.0);

    obj.placement.left = 300.0;
    // Stale cache still answers for the old position
    assert!(obj.contains_point(Point::new(100.0, 100.0)));
    assert!(!obj.contains_point(Point::new(300.0, 100.0)));

    obj.set_coords(1.0);
    assert!(!obj.contains_point(Point::new(100.0, 100.0)));
    assert!(obj.contains_point(Point::new(300.0, 100.0)));
}

#[test]
fn test_no_cache_contains_nothing() {
    let obj = SceneObject::rect(100.0, 100.0, 20.0, 20.0);
    assert!(!obj.contains_point(Point::new(100.0, 100.0)));
    assert!(obj.bounding_box().is_none());
}

#[test]
fn test_rotation_handle_above_top_edge() {
    let mut obj = SceneObject::rect(100.0, 100.0, 50.0, 50.0);
    obj.set_coords(1.0);
    let coords = obj.coords().unwrap();
    assert_eq!(coords.get(Corner::Mt), Point::new(100.0, 75.0));
    assert_eq!(coords.get(Corner::Mtr), Point::new(100.0, 35.0));

    // Zoom shrinks the scene-space distance so it stays constant on screen
    obj.set_coords(2.0);
    assert_eq!(obj.coords().unwrap().get(Corner::Mtr), Point::new(100.0, 55.0));
}

#[test]
fn test_bounding_box_of_rotated_square() {
    let placement = Placement::new(0.0, 0.0, 20.0, 20.0).with_angle(45.0);
    let mut obj = SceneObject::rect(0.0, 0.0, 0.0, 0.0).with_placement(placement);
    obj.set_coords(1.0);

    let bbox = obj.bounding_box().unwrap();
    let half_diagonal = 200.0_f64.sqrt();
    assert!((bbox.width() - 2.0 * half_diagonal).abs() < 1e-9);
    assert!((bbox.height() - 2.0 * half_diagonal).abs() < 1e-9);
}

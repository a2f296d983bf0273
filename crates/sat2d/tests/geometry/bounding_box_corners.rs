use approx::assert_relative_eq;
use sat2d::math::Point;
use sat2d::shape::{BoundingBox, Corner};

#[test]
fn unrotated_corners_are_distinct_and_span_the_extents() {
    let cuboid = BoundingBox::new(-3.0, 7.5, 12.0, 4.0, 0.0).unwrap();
    let corners = cuboid.corners();

    for i in 0..4 {
        for j in (i + 1)..4 {
            assert_ne!(corners[i], corners[j]);
        }
    }

    assert_eq!(sat2d::na::distance(&corners[0], &corners[1]), 12.0);
    assert_eq!(sat2d::na::distance(&corners[1], &corners[2]), 4.0);
    assert_eq!(sat2d::na::distance(&corners[2], &corners[3]), 12.0);
    assert_eq!(sat2d::na::distance(&corners[3], &corners[0]), 4.0);
}

#[test]
fn corner_by_index_matches_corners() {
    let cuboid = BoundingBox::new(1.0, 1.0, 2.0, 3.0, 30.0).unwrap();
    let corners = cuboid.corners();

    for (i, corner) in corners.iter().enumerate() {
        let named = Corner::from_index(i).unwrap();
        assert_eq!(cuboid.corner(named), *corner);
    }
}

#[test]
fn full_turn_is_identity() {
    let cuboid = BoundingBox::new(2.0, -1.0, 6.0, 2.0, 0.0).unwrap();
    let turned = cuboid.with_rotation(360.0);

    for corner in Corner::ALL {
        assert_relative_eq!(
            cuboid.corner(corner),
            turned.corner(corner),
            epsilon = 1.0e-12
        );
    }
}

#[test]
fn half_turn_swaps_opposite_corners() {
    let cuboid = BoundingBox::new(0.0, 0.0, 4.0, 2.0, 180.0).unwrap();

    assert_relative_eq!(
        cuboid.corner(Corner::TopLeft),
        Point::new(4.0, 2.0),
        epsilon = 1.0e-12
    );
    assert_relative_eq!(
        cuboid.corner(Corner::BottomRight),
        Point::new(0.0, 0.0),
        epsilon = 1.0e-12
    );
}

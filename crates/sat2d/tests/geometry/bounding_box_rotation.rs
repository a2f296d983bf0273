use approx::assert_relative_eq;
use sat2d::math::{Rotation, Vector};
use sat2d::shape::{BoundingBox, Corner};
use sat2d::utils::VectorOps;

fn random_box(rng: &mut oorandom::Rand64) -> BoundingBox {
    BoundingBox::new(
        rng.rand_float() * 100.0 - 50.0,
        rng.rand_float() * 100.0 - 50.0,
        1.0 + rng.rand_float() * 20.0,
        1.0 + rng.rand_float() * 20.0,
        0.0,
    )
    .unwrap()
}

#[test]
fn rotated_corners_are_rotated_about_the_center() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..1000 {
        let cuboid = random_box(&mut rng);
        let angle = rng.rand_float() * 720.0 - 360.0;
        let rotated = cuboid.with_rotation(angle);
        let center = cuboid.center();
        let rotation = Rotation::new(angle.to_radians());

        assert_eq!(rotated.center(), center);

        for corner in Corner::ALL {
            let expected = center + rotation * (cuboid.corner(corner) - center);
            assert_relative_eq!(rotated.corner(corner), expected, epsilon = 1.0e-9);
        }
    }
}

#[test]
fn rotation_preserves_distances_between_corners() {
    let mut rng = oorandom::Rand64::new(1234);

    for _ in 0..1000 {
        let cuboid = random_box(&mut rng);
        let rotated = cuboid.with_rotation(rng.rand_float() * 360.0);
        let corners = cuboid.corners();
        let rotated_corners = rotated.corners();

        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_relative_eq!(
                    sat2d::na::distance(&corners[i], &corners[j]),
                    sat2d::na::distance(&rotated_corners[i], &rotated_corners[j]),
                    epsilon = 1.0e-9
                );
            }
        }
    }
}

#[test]
fn axes_are_unit_and_orthogonal() {
    let mut rng = oorandom::Rand64::new(7);

    for _ in 0..1000 {
        let cuboid = random_box(&mut rng).with_rotation(rng.rand_float() * 360.0);
        let [axis1, axis2] = cuboid.axes();
        assert_relative_eq!(axis1.norm(), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(axis2.norm(), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(axis1.dot(&axis2), 0.0, epsilon = 1.0e-12);

        // The last two normals are the first two, reversed.
        let normals = cuboid.normals();
        assert_relative_eq!(
            normals[2].normalized_or_unchanged(),
            -axis1,
            epsilon = 1.0e-9
        );
        assert_relative_eq!(
            normals[3].normalized_or_unchanged(),
            -axis2,
            epsilon = 1.0e-9
        );
    }
}

#[test]
fn unrotated_axes_follow_the_edges() {
    let cuboid = BoundingBox::new(0.0, 0.0, 3.0, 8.0, 0.0).unwrap();
    assert_eq!(cuboid.axes(), [-Vector::y(), Vector::x()]);
}

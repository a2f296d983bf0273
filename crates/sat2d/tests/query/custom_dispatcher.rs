use sat2d::math::{Point, Real};
use sat2d::query::{
    self, sat, CollisionDispatcher, CollisionResult, DefaultCollisionDispatcher, SolveError,
    SolverOptions,
};
use sat2d::shape::{BoundingBox, BoundingCircle, Shape, ShapeType, TypedShape};

/// A single point, tested against boxes by projecting it on the box axes.
#[derive(Debug)]
struct Dot(Point<Real>);

impl Shape for Dot {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Custom
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Custom(self)
    }
}

struct DotDispatcher;

impl CollisionDispatcher for DotDispatcher {
    fn solve<'a>(
        &self,
        shape1: &'a dyn Shape,
        shape2: &'a dyn Shape,
        _options: &SolverOptions,
    ) -> Result<CollisionResult<'a>, SolveError> {
        let (Some(dot), Some(cuboid)) = (shape1.as_shape::<Dot>(), shape2.as_bounding_box())
        else {
            return Err(SolveError::UnsupportedShapePair(
                shape1.shape_type(),
                shape2.shape_type(),
            ));
        };

        let mut result =
            CollisionResult::new(shape1.as_typed_shape(), shape2.as_typed_shape());
        let corners = cuboid.corners();

        for axis in cuboid.axes() {
            match sat::penetration_along_axis(&[dot.0], &corners, &axis)? {
                Some(penetration) => result.add_penetration(penetration),
                None => result.mark_separated(),
            }
        }

        Ok(result)
    }
}

#[test]
fn default_dispatcher_rejects_custom_shapes() {
    let dot = Dot(Point::new(1.0, 1.0));
    let ball = BoundingCircle::new(0.0, 0.0, 2.0).unwrap();

    assert_eq!(
        query::solve(&dot, &ball).unwrap_err(),
        SolveError::UnsupportedShapePair(ShapeType::Custom, ShapeType::BoundingCircle)
    );
    assert_eq!(
        query::intersection_test(&ball, &dot),
        Err(SolveError::UnsupportedShapePair(
            ShapeType::BoundingCircle,
            ShapeType::Custom
        ))
    );
}

#[test]
fn chained_dispatcher_handles_custom_shapes() {
    let dispatcher = DotDispatcher.chain(DefaultCollisionDispatcher);
    let options = SolverOptions::default();
    let cuboid = BoundingBox::new(0.0, 0.0, 4.0, 4.0, 0.0).unwrap();
    let inside = Dot(Point::new(1.0, 2.0));
    let outside = Dot(Point::new(5.0, 2.0));

    let result = dispatcher.solve(&inside, &cuboid, &options).unwrap();
    assert!(result.is_colliding());
    assert_eq!(result.penetrations().len(), 2);
    assert_eq!(result.shape1().shape_type(), ShapeType::Custom);

    let result = dispatcher.solve(&outside, &cuboid, &options).unwrap();
    assert!(!result.is_colliding());

    // Pairs the custom dispatcher ignores fall back to the default one.
    let other = BoundingBox::new(3.0, 0.0, 4.0, 4.0, 0.0).unwrap();
    assert!(dispatcher
        .solve(&cuboid, &other, &options)
        .unwrap()
        .is_colliding());

    // Pairs neither dispatcher supports are still reported.
    assert_eq!(
        dispatcher.solve(&cuboid, &inside, &options).unwrap_err(),
        SolveError::UnsupportedShapePair(ShapeType::BoundingBox, ShapeType::Custom)
    );
}

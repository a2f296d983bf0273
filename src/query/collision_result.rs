use crate::math::{Real, Vector};
use crate::shape::TypedShape;
use core::fmt;
use smallvec::SmallVec;

/// The outcome of a collision test between two shapes.
///
/// It holds every penetration vector found along the tested axes, sorted by increasing
/// length and without duplicates. Each vector is a translation separating the shapes along
/// its axis. For box-box and circle-circle tests it applies to the first shape. For
/// box-circle tests it applies to the circle.
///
/// Duplicates are detected with an exact component-wise comparison: two vectors differing
/// only by floating-point noise are both kept.
#[derive(Clone, Debug)]
pub struct CollisionResult<'a> {
    shape1: TypedShape<'a>,
    shape2: TypedShape<'a>,
    colliding: bool,
    penetrations: SmallVec<[Vector<Real>; 4]>,
}

impl<'a> CollisionResult<'a> {
    /// Creates an empty colliding result between two shapes.
    pub fn new(shape1: TypedShape<'a>, shape2: TypedShape<'a>) -> Self {
        CollisionResult {
            shape1,
            shape2,
            colliding: true,
            penetrations: SmallVec::new(),
        }
    }

    /// The first shape involved in the test.
    #[inline]
    pub fn shape1(&self) -> TypedShape<'a> {
        self.shape1
    }

    /// The second shape involved in the test.
    #[inline]
    pub fn shape2(&self) -> TypedShape<'a> {
        self.shape2
    }

    /// Whether the shapes collide, i.e., no tested axis separated them.
    #[inline]
    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    /// The penetration vectors, sorted by increasing length.
    #[inline]
    pub fn penetrations(&self) -> &[Vector<Real>] {
        &self.penetrations
    }

    /// The shortest penetration vector, if any.
    #[inline]
    pub fn min_penetration(&self) -> Option<&Vector<Real>> {
        self.penetrations.first()
    }

    /// Records that an axis separates the two shapes.
    ///
    /// Once separated, a result never becomes colliding again.
    #[inline]
    pub fn mark_separated(&mut self) {
        self.colliding = false;
    }

    /// Inserts a penetration vector, keeping the set sorted by length.
    ///
    /// Does nothing if an identical vector is already present. A new vector is inserted
    /// before the first strictly longer one, so vectors of equal length keep their
    /// insertion order.
    pub fn add_penetration(&mut self, penetration: Vector<Real>) {
        if self.penetrations.contains(&penetration) {
            return;
        }

        let length = penetration.norm();
        let index = self
            .penetrations
            .iter()
            .position(|p| p.norm() > length)
            .unwrap_or(self.penetrations.len());
        self.penetrations.insert(index, penetration);
    }
}

impl fmt::Display for CollisionResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CollisionResult between {} {} : {}",
            self.shape1, self.shape2, self.colliding
        )
    }
}

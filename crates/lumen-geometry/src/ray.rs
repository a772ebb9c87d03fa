//! Ray representation.

use lumen_math::{self as math, Dir3, Point3, Vec3};

/// Offset applied along the surface normal when spawning secondary rays,
/// so a ray never re-intersects the surface it starts on.
const DELTA: f64 = 1e-3;

/// A ray in 3D space defined by origin and unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
}

impl Ray {
    /// Create a new ray from origin and unit direction.
    pub fn new(origin: Point3, direction: Dir3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray from origin and an arbitrary direction vector.
    ///
    /// Fails with [`lumen_math::MathError::ZeroVector`] if the vector has
    /// zero length.
    pub fn from_vec(origin: Point3, direction: Vec3) -> math::Result<Self> {
        Ok(Self::new(origin, math::unit(direction)?))
    }

    /// Create a ray whose origin is nudged off a surface along its normal.
    ///
    /// The origin moves by [`DELTA`] in the direction of `normal` when the
    /// ray leaves on the normal's side, and against it otherwise, so shadow
    /// and secondary rays cannot hit the surface they were spawned from.
    /// A direction lying in the surface plane leaves the origin in place.
    pub fn offset(origin: Point3, direction: Dir3, normal: Dir3) -> Self {
        let side = math::align_zero(direction.dot(&normal));
        let origin = if side == 0.0 {
            origin
        } else {
            origin + normal.as_ref() * side.signum() * DELTA
        };
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }
}

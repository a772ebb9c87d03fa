//! Ray-sphere intersection (projection form of the quadratic).

use lumen_math::{self as math, Dir3, Point3};

use crate::Ray;

/// A sphere defined by center and radius.
///
/// The radius is taken as given; callers are responsible for supplying a
/// positive value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius of the sphere.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere from center and radius.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Intersect a ray with the sphere.
    ///
    /// Projects the center onto the ray: `tm` is the projection length and
    /// `d^2` the squared perpendicular distance. Rays passing outside the
    /// radius (or exactly tangent) miss; otherwise the two roots
    /// `tm -+ th` are kept where strictly positive, so a ray starting
    /// inside yields a single exit point.
    pub fn intersect(&self, ray: &Ray) -> Vec<Point3> {
        let to_center = self.center - ray.origin;

        // Ray starts at the center: one hit, a radius away.
        if math::is_zero(to_center.norm()) {
            return vec![ray.at(self.radius)];
        }

        let tm = ray.direction.dot(&to_center);
        let d_squared = to_center.norm_squared() - tm * tm;
        let th_squared = math::align_zero(self.radius * self.radius - d_squared);
        if th_squared <= 0.0 {
            return Vec::new();
        }

        let th = th_squared.sqrt();
        let t2 = math::align_zero(tm + th);
        if t2 <= 0.0 {
            return Vec::new();
        }

        let t1 = math::align_zero(tm - th);
        if t1 <= 0.0 {
            vec![ray.at(t2)]
        } else {
            vec![ray.at(t1), ray.at(t2)]
        }
    }

    /// Outward unit normal at a point on the sphere.
    pub fn normal_at(&self, point: &Point3) -> Dir3 {
        Dir3::new_normalize(point - self.center)
    }
}

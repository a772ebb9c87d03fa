//! Ray-plane intersection (closed-form).

use lumen_math::{self as math, Dir3, Point3};

use crate::error::{GeometryError, Result};
use crate::Ray;

/// An infinite plane defined by a reference point and a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Point3,
    normal: Dir3,
}

impl Plane {
    /// Create a plane from a reference point and a unit normal.
    pub fn new(point: Point3, normal: Dir3) -> Self {
        Self { point, normal }
    }

    /// Create a plane through three points.
    ///
    /// The normal is `(b - a) x (c - a)`, normalized. Coincident or
    /// collinear points make the cross product vanish and are rejected
    /// with [`GeometryError::DegeneratePlane`].
    pub fn from_points(a: Point3, b: Point3, c: Point3) -> Result<Self> {
        let normal =
            math::unit((b - a).cross(&(c - a))).map_err(|_| GeometryError::DegeneratePlane)?;
        Ok(Self { point: a, normal })
    }

    /// The plane's unit normal (constant over the surface).
    pub fn normal(&self) -> Dir3 {
        self.normal
    }

    /// The plane's reference point.
    pub fn point(&self) -> Point3 {
        self.point
    }

    /// Intersect a ray with the plane.
    ///
    /// Solves `t = n . (q - o) / n . d`. Returns `None` when the ray is
    /// parallel to the plane (including lying in it) or when the
    /// intersection parameter is not strictly positive.
    pub fn intersect(&self, ray: &Ray) -> Option<Point3> {
        let denom = math::align_zero(self.normal.dot(&ray.direction));
        if denom == 0.0 {
            return None;
        }

        let t = math::align_zero(self.normal.dot(&(self.point - ray.origin)) / denom);
        if t <= 0.0 {
            return None;
        }

        Some(ray.at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Vec3;

    fn xy_plane() -> Plane {
        Plane::new(Point3::origin(), math::unit(Vec3::z()).unwrap())
    }

    #[test]
    fn test_from_points_normal() {
        let plane = Plane::from_points(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
        .unwrap();
        assert!((plane.normal().as_ref() - Vec3::z()).norm() < 1e-12);
    }

    #[test]
    fn test_from_points_collinear_rejected() {
        let err = Plane::from_points(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        )
        .unwrap_err();
        assert_eq!(err, GeometryError::DegeneratePlane);
    }

    #[test]
    fn test_from_points_coincident_rejected() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!(Plane::from_points(p, p, Point3::new(4.0, 5.0, 6.0)).is_err());
    }

    #[test]
    fn test_intersect_hits() {
        let plane = xy_plane();
        let ray = Ray::from_vec(Point3::new(1.0, 2.0, 5.0), Vec3::new(0.0, 0.0, -1.0)).unwrap();
        let hit = plane.intersect(&ray).unwrap();
        assert!((hit - Point3::new(1.0, 2.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_intersect_parallel_misses() {
        let plane = xy_plane();
        let ray = Ray::from_vec(Point3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0)).unwrap();
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_intersect_ray_in_plane_misses() {
        let plane = xy_plane();
        let ray = Ray::from_vec(Point3::new(1.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0)).unwrap();
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_intersect_behind_origin_misses() {
        let plane = xy_plane();
        let ray = Ray::from_vec(Point3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0)).unwrap();
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_intersect_origin_on_plane_misses() {
        let plane = xy_plane();
        let ray = Ray::from_vec(Point3::new(1.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0)).unwrap();
        // t = 0 is not a forward intersection.
        assert!(plane.intersect(&ray).is_none());
    }
}

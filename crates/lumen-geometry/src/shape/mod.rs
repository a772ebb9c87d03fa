//! Ray-surface intersection algorithms.
//!
//! Each surface type lives in a dedicated module with its exact
//! intersection routine. [`Shape`] closes the set of supported surfaces
//! and dispatches intersection and normal queries by match.

mod cylinder;
mod plane;
mod polygon;
mod sphere;
mod tube;

pub use cylinder::Cylinder;
pub use plane::Plane;
pub use polygon::{Polygon, Triangle};
pub use sphere::Sphere;
pub use tube::Tube;

use lumen_math::{Dir3, Point3};

use crate::Ray;

/// A surface that a ray can intersect.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Infinite plane.
    Plane(Plane),
    /// Sphere defined by center and radius.
    Sphere(Sphere),
    /// Triangle with strictly interior intersection.
    Triangle(Triangle),
    /// Convex planar polygon with strictly interior intersection.
    Polygon(Polygon),
    /// Infinite cylinder around an axis ray.
    Tube(Tube),
    /// Finite cylinder with end caps.
    Cylinder(Cylinder),
}

impl Shape {
    /// Intersect a ray with this shape.
    ///
    /// Returns every intersection point with `t > 0`, unordered. Numerical
    /// edge cases (parallel, tangent, origin on the surface) resolve to an
    /// empty result rather than an error.
    pub fn intersect(&self, ray: &Ray) -> Vec<Point3> {
        match self {
            Shape::Plane(plane) => plane.intersect(ray).into_iter().collect(),
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Triangle(triangle) => triangle.intersect(ray).into_iter().collect(),
            Shape::Polygon(polygon) => polygon.intersect(ray).into_iter().collect(),
            Shape::Tube(tube) => tube.intersect(ray),
            Shape::Cylinder(cylinder) => cylinder.intersect(ray),
        }
    }

    /// Outward surface normal at a point assumed to lie on the shape.
    pub fn normal_at(&self, point: &Point3) -> Dir3 {
        match self {
            Shape::Plane(plane) => plane.normal(),
            Shape::Sphere(sphere) => sphere.normal_at(point),
            Shape::Triangle(triangle) => triangle.normal(),
            Shape::Polygon(polygon) => polygon.normal(),
            Shape::Tube(tube) => tube.normal_at(point),
            Shape::Cylinder(cylinder) => cylinder.normal_at(point),
        }
    }
}

impl From<Plane> for Shape {
    fn from(p: Plane) -> Self {
        Shape::Plane(p)
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}

impl From<Tube> for Shape {
    fn from(t: Tube) -> Self {
        Shape::Tube(t)
    }
}

impl From<Cylinder> for Shape {
    fn from(c: Cylinder) -> Self {
        Shape::Cylinder(c)
    }
}

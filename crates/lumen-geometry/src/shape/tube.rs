//! Ray-tube intersection (quadratic in the plane perpendicular to the axis).

use lumen_math::{self as math, Dir3, Point3};

use crate::Ray;

/// An infinite cylinder around an axis ray.
///
/// Radius positivity is not validated; the tube takes its parameters as
/// given, matching the asymmetry of the plane/polygon constructors which
/// do validate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tube {
    /// Axis of the tube; the origin anchors the parametrization.
    pub axis: Ray,
    /// Radius of the tube.
    pub radius: f64,
}

impl Tube {
    /// Create a tube from its axis and radius.
    pub fn new(axis: Ray, radius: f64) -> Self {
        Self { axis, radius }
    }

    /// Intersect a ray with the tube's lateral surface.
    pub fn intersect(&self, ray: &Ray) -> Vec<Point3> {
        lateral_intersections(&self.axis, self.radius, ray)
            .into_iter()
            .map(|t| ray.at(t))
            .collect()
    }

    /// Outward unit normal at a point on the lateral surface.
    ///
    /// Projects the point onto the axis and points away from it.
    pub fn normal_at(&self, point: &Point3) -> Dir3 {
        let t = self.axis.direction.dot(&(point - self.axis.origin));
        Dir3::new_normalize(point - self.axis.at(t))
    }
}

/// Positive ray parameters where a ray crosses the infinite lateral
/// surface of radius `radius` around `axis`.
///
/// Projects both the ray direction and the origin offset onto the plane
/// perpendicular to the axis and solves the resulting quadratic. A ray
/// parallel to the axis or tangent to the surface yields nothing.
pub(crate) fn lateral_intersections(axis: &Ray, radius: f64, ray: &Ray) -> Vec<f64> {
    let va = axis.direction.as_ref();
    let d = ray.direction.as_ref();

    let d_perp = d - d.dot(va) * va;
    let a = math::align_zero(d_perp.norm_squared());
    if a == 0.0 {
        return Vec::new();
    }

    let oc = ray.origin - axis.origin;
    let oc_perp = oc - oc.dot(va) * va;
    let b = 2.0 * d_perp.dot(&oc_perp);
    let c = oc_perp.norm_squared() - radius * radius;

    let discriminant = math::align_zero(b * b - 4.0 * a * c);
    if discriminant <= 0.0 {
        return Vec::new();
    }

    let sqrt_disc = discriminant.sqrt();
    [(-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)]
        .into_iter()
        .map(math::align_zero)
        .filter(|&t| t > 0.0)
        .collect()
}

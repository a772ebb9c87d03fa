//! Ray-cylinder intersection (bounded tube plus end caps).

use lumen_math::{self as math, Dir3, Point3};

use crate::Ray;

use super::tube::lateral_intersections;
use super::Plane;

/// A finite cylinder: a tube bounded to `0 < t_axial < height` with two
/// circular end caps.
///
/// Like [`super::Tube`], radius and height positivity are not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    /// Axis of the cylinder; its origin is the center of the bottom cap.
    pub axis: Ray,
    /// Radius of the cylinder.
    pub radius: f64,
    /// Height of the cylinder along the axis.
    pub height: f64,
}

impl Cylinder {
    /// Create a cylinder from its axis, radius, and height.
    pub fn new(axis: Ray, radius: f64, height: f64) -> Self {
        Self {
            axis,
            radius,
            height,
        }
    }

    /// Center of the top cap.
    fn top_center(&self) -> Point3 {
        self.axis.at(self.height)
    }

    /// Intersect a ray with the cylinder.
    ///
    /// Lateral hits are tube hits whose axial projection falls strictly
    /// inside `(0, height)`; cap hits are plane hits within the cap
    /// radius (boundary included). At most 2 lateral and 2 cap hits.
    pub fn intersect(&self, ray: &Ray) -> Vec<Point3> {
        let mut hits = Vec::new();
        let va = self.axis.direction;

        for t in lateral_intersections(&self.axis, self.radius, ray) {
            let point = ray.at(t);
            let axial = math::align_zero(va.dot(&(point - self.axis.origin)));
            if axial > 0.0 && math::align_zero(axial - self.height) < 0.0 {
                hits.push(point);
            }
        }

        let bottom = self.axis.origin;
        if let Some(point) = Plane::new(bottom, va).intersect(ray) {
            if math::align_zero((point - bottom).norm_squared() - self.radius * self.radius) <= 0.0
            {
                hits.push(point);
            }
        }

        let top = self.top_center();
        if let Some(point) = Plane::new(top, va).intersect(ray) {
            if math::align_zero((point - top).norm_squared() - self.radius * self.radius) <= 0.0 {
                hits.push(point);
            }
        }

        hits
    }

    /// Outward unit normal at a point on the cylinder.
    ///
    /// The axial projection decides between the bottom cap (`-axis`), the
    /// top cap (`+axis`), and the lateral surface (radially outward).
    pub fn normal_at(&self, point: &Point3) -> Dir3 {
        let axial = math::align_zero(self.axis.direction.dot(&(point - self.axis.origin)));
        if axial <= 0.0 {
            return -self.axis.direction;
        }
        if math::align_zero(axial - self.height) >= 0.0 {
            return self.axis.direction;
        }
        Dir3::new_normalize(point - self.axis.at(axial))
    }
}

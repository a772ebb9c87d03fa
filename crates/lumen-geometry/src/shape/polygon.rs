//! Ray-triangle and ray-polygon intersection (edge-sign test).

use lumen_math::{self as math, Dir3, Point3};

use crate::error::{GeometryError, Result};
use crate::Ray;

use super::Plane;

/// A convex planar polygon with at least three vertices.
///
/// Vertices must be coplanar, convex, and listed in consistent winding
/// order; all of this is validated at construction so intersection never
/// has to re-check it.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3>,
    plane: Plane,
}

impl Polygon {
    /// Create a polygon from its vertex list.
    ///
    /// The containing plane is derived from the first three vertices.
    /// Fails when fewer than three vertices are given, when the first
    /// three are degenerate, when a later vertex leaves the plane, or
    /// when the winding is concave or inconsistent.
    pub fn new(vertices: Vec<Point3>) -> Result<Self> {
        let len = vertices.len();
        if len < 3 {
            return Err(GeometryError::TooFewVertices(len));
        }

        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        if len == 3 {
            return Ok(Self { vertices, plane });
        }

        let normal = plane.normal();
        let mut edge1 = vertices[len - 1] - vertices[len - 2];
        let mut edge2 = vertices[0] - vertices[len - 1];
        let positive = edge1.cross(&edge2).dot(&normal) > 0.0;

        for i in 1..len {
            if !math::is_zero((vertices[i] - vertices[0]).dot(&normal)) {
                return Err(GeometryError::NonCoplanarVertex(i));
            }

            edge1 = edge2;
            edge2 = vertices[i] - vertices[i - 1];
            let turn = math::align_zero(edge1.cross(&edge2).dot(&normal));
            if turn == 0.0 || positive != (turn > 0.0) {
                return Err(GeometryError::NotConvex);
            }
        }

        Ok(Self { vertices, plane })
    }

    /// The polygon's vertices.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Unit normal of the polygon's plane.
    pub fn normal(&self) -> Dir3 {
        self.plane.normal()
    }

    /// Intersect a ray with the polygon's strict interior.
    pub fn intersect(&self, ray: &Ray) -> Option<Point3> {
        let point = self.plane.intersect(ray)?;
        interior_hit(&self.vertices, ray).then_some(point)
    }
}

/// A triangle with strictly interior intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point3; 3],
    plane: Plane,
}

impl Triangle {
    /// Create a triangle from its three vertices.
    ///
    /// Fails with [`GeometryError::DegeneratePlane`] when the vertices
    /// are coincident or collinear.
    pub fn new(a: Point3, b: Point3, c: Point3) -> Result<Self> {
        Ok(Self {
            vertices: [a, b, c],
            plane: Plane::from_points(a, b, c)?,
        })
    }

    /// The triangle's vertices.
    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    /// Unit normal of the triangle's plane.
    pub fn normal(&self) -> Dir3 {
        self.plane.normal()
    }

    /// Intersect a ray with the triangle's strict interior.
    ///
    /// A ray grazing an edge or vertex exactly counts as a miss.
    pub fn intersect(&self, ray: &Ray) -> Option<Point3> {
        let point = self.plane.intersect(ray)?;
        interior_hit(&self.vertices, ray).then_some(point)
    }
}

/// Strict interior test shared by triangles and polygons.
///
/// Forms the edge normals `(v_i - o) x (v_i+1 - o)` around the vertex fan
/// seen from the ray origin and requires the ray direction to have the
/// same strict sign against every one of them. A zero sign means the ray
/// passes through an edge or vertex, which is excluded.
fn interior_hit(vertices: &[Point3], ray: &Ray) -> bool {
    let len = vertices.len();
    let mut sign = 0.0;

    for i in 0..len {
        let a = vertices[i] - ray.origin;
        let b = vertices[(i + 1) % len] - ray.origin;
        let s = math::align_zero(ray.direction.dot(&a.cross(&b)));
        if s == 0.0 {
            return false;
        }
        if sign == 0.0 {
            sign = s;
        } else if sign * s < 0.0 {
            return false;
        }
    }

    true
}

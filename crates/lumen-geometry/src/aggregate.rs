//! Primitive objects and the flat scene aggregate.

use lumen_math::{Color, Dir3, Point3};

use crate::{Material, Ray, Shape};

/// A renderable object: a shape paired with its emission color and
/// surface material.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    shape: Shape,
    emission: Color,
    material: Material,
}

impl Primitive {
    /// Create a primitive with black emission and an inert material.
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            emission: Color::BLACK,
            material: Material::default(),
        }
    }

    /// Set the emission color.
    pub fn with_emission(mut self, emission: Color) -> Self {
        self.emission = emission;
        self
    }

    /// Set the surface material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// The underlying shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The emission color.
    pub fn emission(&self) -> Color {
        self.emission
    }

    /// The surface material.
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Outward surface normal at a point on the primitive.
    pub fn normal_at(&self, point: &Point3) -> Dir3 {
        self.shape.normal_at(point)
    }
}

/// An intersection point paired with the primitive it lies on.
///
/// Created fresh per intersection query and never cached; the reference
/// is valid for as long as the aggregate it came from.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// The intersection point.
    pub point: Point3,
    /// The primitive the point lies on.
    pub primitive: &'a Primitive,
}

impl Hit<'_> {
    /// Distance from a ray origin to this hit.
    pub fn distance_to(&self, origin: &Point3) -> f64 {
        (self.point - origin).norm()
    }
}

impl PartialEq for Hit<'_> {
    /// Equal when the points match and both refer to the same primitive
    /// instance.
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point && std::ptr::eq(self.primitive, other.primitive)
    }
}

/// A flat, unordered collection of primitives.
///
/// Intersection queries every member linearly and concatenates the
/// results — O(primitives) per ray, the dominant cost driver. A spatial
/// acceleration structure could replace the internals without changing
/// the ray-to-hit-list contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometries {
    primitives: Vec<Primitive>,
}

impl Geometries {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive.
    pub fn add(&mut self, primitive: Primitive) -> &mut Self {
        self.primitives.push(primitive);
        self
    }

    /// Number of primitives in the aggregate.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether the aggregate is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Intersect a ray against every primitive, returning all hits
    /// unordered.
    pub fn intersect(&self, ray: &Ray) -> Vec<Hit<'_>> {
        let mut hits = Vec::new();
        for primitive in &self.primitives {
            for point in primitive.shape.intersect(ray) {
                hits.push(Hit { point, primitive });
            }
        }
        hits
    }

    /// The hit closest to the ray's origin, if any.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        self.intersect(ray).into_iter().min_by(|a, b| {
            a.distance_to(&ray.origin)
                .total_cmp(&b.distance_to(&ray.origin))
        })
    }
}

impl FromIterator<Primitive> for Geometries {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane, Shape, Sphere, Triangle};
    use lumen_math::{self as math, Vec3};

    fn sample_scene() -> Geometries {
        let mut geometries = Geometries::new();
        geometries
            .add(Primitive::new(Sphere::new(Point3::new(1.0, 1.0, 1.0), 1.0)))
            .add(Primitive::new(Plane::new(
                Point3::new(0.0, 0.0, 5.0),
                math::unit(Vec3::z()).unwrap(),
            )))
            .add(Primitive::new(
                Triangle::new(
                    Point3::new(-1.0, 0.0, 3.0),
                    Point3::new(1.0, 0.0, 3.0),
                    Point3::new(0.0, 1.0, 3.0),
                )
                .unwrap(),
            ));
        geometries
    }

    #[test]
    fn test_empty_aggregate_has_no_hits() {
        let geometries = Geometries::new();
        let ray = Ray::from_vec(Point3::origin(), Vec3::z()).unwrap();
        assert!(geometries.intersect(&ray).is_empty());
        assert!(geometries.closest_hit(&ray).is_none());
    }

    #[test]
    fn test_all_members_queried() {
        let geometries = sample_scene();
        // Straight down +z through sphere (twice), triangle, and plane.
        let ray = Ray::from_vec(Point3::new(0.3, 0.3, -1.0), Vec3::z()).unwrap();
        let hits = geometries.intersect(&ray);
        assert_eq!(hits.len(), 4);
    }

    #[test]
    fn test_some_members_missed() {
        let geometries = sample_scene();
        // Misses the sphere and triangle, hits the plane.
        let ray = Ray::from_vec(Point3::new(10.0, 10.0, 0.0), Vec3::z()).unwrap();
        assert_eq!(geometries.intersect(&ray).len(), 1);
    }

    #[test]
    fn test_closest_hit_ordering() {
        let geometries = sample_scene();
        let ray = Ray::from_vec(Point3::new(0.3, 0.3, -1.0), Vec3::z()).unwrap();
        let closest = geometries.closest_hit(&ray).unwrap();
        // The sphere's near surface comes first.
        assert!(matches!(closest.primitive.shape(), Shape::Sphere(_)));
        let all = geometries.intersect(&ray);
        for hit in &all {
            assert!(closest.distance_to(&ray.origin) <= hit.distance_to(&ray.origin) + 1e-12);
        }
    }

    #[test]
    fn test_hit_equality_is_by_identity() {
        let geometries = sample_scene();
        let ray = Ray::from_vec(Point3::new(10.0, 10.0, 0.0), Vec3::z()).unwrap();
        let a = geometries.closest_hit(&ray).unwrap();
        let b = geometries.closest_hit(&ray).unwrap();
        assert_eq!(a, b);
    }
}

#![warn(missing_docs)]

//! Math primitives for the lumen ray tracer.
//!
//! Thin wrappers around nalgebra providing the value types the rest of
//! the renderer builds on: points, vectors, unit directions, the additive
//! [`Color`] type, and the epsilon helpers used by every intersection and
//! shading routine.

use nalgebra::{Unit, Vector3};
use thiserror::Error;

mod color;

pub use color::Color;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Magnitudes below this are treated as zero in geometric comparisons.
pub const EPSILON: f64 = 1e-10;

/// Errors arising from math-level construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// A zero-length vector was used where a direction is required.
    #[error("cannot normalize a zero-length vector")]
    ZeroVector,
}

/// Result type for math operations.
pub type Result<T> = std::result::Result<T, MathError>;

/// Snap a scalar to exactly zero if it is within [`EPSILON`] of zero.
///
/// Dot-product-derived scalars pass through this before any sign
/// comparison, so floating-point noise near zero cannot flip a branch.
#[inline]
pub fn align_zero(x: f64) -> f64 {
    if x.abs() < EPSILON {
        0.0
    } else {
        x
    }
}

/// Check whether a scalar is effectively zero.
#[inline]
pub fn is_zero(x: f64) -> bool {
    x.abs() < EPSILON
}

/// Normalize a vector into a unit direction.
///
/// Returns [`MathError::ZeroVector`] if the vector's length is below
/// [`EPSILON`] — the zero vector has no direction.
pub fn unit(v: Vec3) -> Result<Dir3> {
    Unit::try_new(v, EPSILON).ok_or(MathError::ZeroVector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_zero_snaps_noise() {
        assert_eq!(align_zero(1e-14), 0.0);
        assert_eq!(align_zero(-1e-14), 0.0);
        assert_eq!(align_zero(0.5), 0.5);
        assert_eq!(align_zero(-0.5), -0.5);
    }

    #[test]
    fn test_unit_rejects_zero_vector() {
        assert_eq!(unit(Vec3::zeros()), Err(MathError::ZeroVector));
        assert_eq!(unit(Vec3::new(1e-12, 0.0, 0.0)), Err(MathError::ZeroVector));
    }

    #[test]
    fn test_unit_is_normalized_and_parallel() {
        let v = Vec3::new(3.0, -4.0, 12.0);
        let d = unit(v).unwrap();
        // Unit length
        approx::assert_relative_eq!(d.as_ref().norm(), 1.0);
        // Parallel to the original (cross product vanishes)
        assert!(d.as_ref().cross(&v).norm() < EPSILON);
        // Never anti-parallel
        assert!(d.as_ref().dot(&v) > 0.0);
    }
}

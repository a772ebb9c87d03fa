//! Error types for geometry construction.

use lumen_math::MathError;
use thiserror::Error;

/// Errors raised when constructing degenerate geometry.
///
/// All of these are construction-time failures; intersection queries never
/// error — numerical edge cases resolve to "no intersection" instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The three points defining a plane are coincident or collinear.
    #[error("plane definition points are coincident or collinear")]
    DegeneratePlane,

    /// A polygon was given fewer than three vertices.
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// A polygon vertex lies outside the plane of the first three.
    #[error("polygon vertex {0} is not in the plane of the first three vertices")]
    NonCoplanarVertex(usize),

    /// Polygon vertices are concave or not in consistent winding order.
    #[error("polygon vertices must be convex and in consistent winding order")]
    NotConvex,

    /// A zero-length vector reached a direction-valued constructor.
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Result type for geometry construction.
pub type Result<T> = std::result::Result<T, GeometryError>;

//! Error types for camera configuration.

use thiserror::Error;

/// Errors raised while building a camera.
///
/// All of these surface at `build()` time, before any rendering work
/// starts; a successfully built camera cannot fail mid-render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// No camera location was set.
    #[error("camera builder is missing a location")]
    MissingLocation,

    /// No direction pair was set.
    #[error("camera builder is missing the direction vectors")]
    MissingDirection,

    /// The forward and up vectors are not orthogonal.
    #[error("camera forward and up vectors must be orthogonal")]
    NonOrthogonalDirection,

    /// Viewport width or height missing or not strictly positive.
    #[error("camera viewport size must be set and strictly positive")]
    InvalidViewportSize,

    /// Viewport distance missing or not strictly positive.
    #[error("camera viewport distance must be set and strictly positive")]
    InvalidViewportDistance,

    /// No shading engine was attached.
    #[error("camera builder is missing a ray tracer")]
    MissingTracer,

    /// No pixel sink was attached.
    #[error("camera builder is missing a pixel sink")]
    MissingSink,
}

/// Result type for camera construction.
pub type Result<T> = std::result::Result<T, RenderError>;

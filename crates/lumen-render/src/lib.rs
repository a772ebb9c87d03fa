#![warn(missing_docs)]

//! Recursive shading engine, camera, and concurrent renderer for lumen.
//!
//! This crate turns a [`lumen_scene::Scene`] into pixels. The
//! [`RayTracer`] evaluates one ray to one color (local lighting with
//! shadow transparency, plus recursive reflection and refraction); the
//! [`Camera`] maps pixels to rays and drives the render, either
//! sequentially or over a fixed worker pool fed by a shared
//! [`PixelManager`] cursor.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use lumen_render::{Camera, ImageWriter, RayTracer, ThreadPolicy};
//!
//! let writer = Arc::new(ImageWriter::new(800, 600).with_output("scene.png"));
//! let camera = Camera::builder()
//!     .location(Point3::new(0.0, 0.0, 10.0))
//!     .direction(forward, up)
//!     .viewport_size(8.0, 6.0)
//!     .viewport_distance(10.0)
//!     .threads(ThreadPolicy::Auto)
//!     .tracer(RayTracer::new(scene))
//!     .sink(writer.clone())
//!     .build()?;
//! camera.render_image().flush()?;
//! ```

mod camera;
mod error;
mod pixels;
mod sink;
mod tracer;

pub use camera::{Camera, CameraBuilder, ThreadPolicy};
pub use error::{RenderError, Result};
pub use pixels::{Pixel, PixelManager};
pub use sink::{ImageWriter, PixelSink};
pub use tracer::RayTracer;

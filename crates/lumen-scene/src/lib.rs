#![warn(missing_docs)]

//! Light sources and the scene snapshot for the lumen ray tracer.
//!
//! A [`Scene`] bundles everything a render pass reads: the geometry
//! aggregate, the light list, the ambient light, and the background
//! color. It is constructed up front and treated as immutable while
//! rendering, so worker threads share it without locking.

mod light;
mod scene;

pub use light::{AmbientLight, Light};
pub use scene::Scene;

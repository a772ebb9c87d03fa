//! The read-only scene snapshot.

use lumen_geometry::Geometries;
use lumen_math::Color;

use crate::{AmbientLight, Light};

/// Everything a render pass reads: geometry, lights, ambient light, and
/// the background color.
///
/// Built once via the chainable `with_*` methods and not mutated during
/// rendering, so the shading engine and all worker threads can share it
/// by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Name of the scene.
    pub name: String,
    /// Color returned for rays that hit nothing.
    pub background: Color,
    /// Ambient light added once per traced pixel.
    pub ambient: AmbientLight,
    /// The geometry aggregate.
    pub geometries: Geometries,
    /// The light sources.
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene: black background, no ambient light, no
    /// geometry, no lights.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: Color::BLACK,
            ambient: AmbientLight::NONE,
            geometries: Geometries::new(),
            lights: Vec::new(),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the ambient light.
    pub fn with_ambient(mut self, ambient: AmbientLight) -> Self {
        self.ambient = ambient;
        self
    }

    /// Set the geometry aggregate.
    pub fn with_geometries(mut self, geometries: Geometries) -> Self {
        self.geometries = geometries;
        self
    }

    /// Add a light source.
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }
}

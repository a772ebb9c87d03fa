//! Surface material coefficients.

use lumen_math::Vec3;
use serde::{Deserialize, Serialize};

/// Per-surface shading coefficients.
///
/// Each coefficient is a 3-channel vector in `[0, 1]^3`; a channel of zero
/// means the corresponding effect does not contribute. Unset coefficients
/// default to zero, so a default material is completely inert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Diffuse reflection coefficient.
    pub kd: Vec3,
    /// Specular reflection coefficient.
    pub ks: Vec3,
    /// Transparency coefficient (refraction / shadow transmission).
    pub kt: Vec3,
    /// Mirror reflection coefficient.
    pub kr: Vec3,
    /// Shininess exponent for the specular highlight.
    pub shininess: i32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            kd: Vec3::zeros(),
            ks: Vec3::zeros(),
            kt: Vec3::zeros(),
            kr: Vec3::zeros(),
            shininess: 1,
        }
    }
}

impl Material {
    /// Create an inert material (all coefficients zero).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a uniform diffuse coefficient.
    pub fn with_kd(mut self, kd: f64) -> Self {
        self.kd = Vec3::repeat(kd);
        self
    }

    /// Set a per-channel diffuse coefficient.
    pub fn with_kd_rgb(mut self, kd: Vec3) -> Self {
        self.kd = kd;
        self
    }

    /// Set a uniform specular coefficient.
    pub fn with_ks(mut self, ks: f64) -> Self {
        self.ks = Vec3::repeat(ks);
        self
    }

    /// Set a per-channel specular coefficient.
    pub fn with_ks_rgb(mut self, ks: Vec3) -> Self {
        self.ks = ks;
        self
    }

    /// Set a uniform transparency coefficient.
    pub fn with_kt(mut self, kt: f64) -> Self {
        self.kt = Vec3::repeat(kt);
        self
    }

    /// Set a per-channel transparency coefficient.
    pub fn with_kt_rgb(mut self, kt: Vec3) -> Self {
        self.kt = kt;
        self
    }

    /// Set a uniform mirror-reflection coefficient.
    pub fn with_kr(mut self, kr: f64) -> Self {
        self.kr = Vec3::repeat(kr);
        self
    }

    /// Set a per-channel mirror-reflection coefficient.
    pub fn with_kr_rgb(mut self, kr: Vec3) -> Self {
        self.kr = kr;
        self
    }

    /// Set the shininess exponent.
    pub fn with_shininess(mut self, shininess: i32) -> Self {
        self.shininess = shininess;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inert() {
        let m = Material::default();
        assert_eq!(m.kd, Vec3::zeros());
        assert_eq!(m.ks, Vec3::zeros());
        assert_eq!(m.kt, Vec3::zeros());
        assert_eq!(m.kr, Vec3::zeros());
        assert_eq!(m.shininess, 1);
    }

    #[test]
    fn test_chained_setters() {
        let m = Material::new()
            .with_kd(0.5)
            .with_ks_rgb(Vec3::new(0.1, 0.2, 0.3))
            .with_shininess(30);
        assert_eq!(m.kd, Vec3::repeat(0.5));
        assert_eq!(m.ks, Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(m.shininess, 30);
    }
}

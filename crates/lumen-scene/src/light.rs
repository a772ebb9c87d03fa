//! Light sources.

use lumen_math::{self as math, Color, Dir3, Point3};

/// Ambient light applied once per pixel, outside the recursion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    intensity: Color,
}

impl AmbientLight {
    /// No ambient light at all.
    pub const NONE: Self = Self {
        intensity: Color::BLACK,
    };

    /// Create an ambient light with a base intensity scaled by a factor.
    pub fn new(intensity: Color, attenuation: f64) -> Self {
        Self {
            intensity: intensity.scale(attenuation),
        }
    }

    /// The ambient intensity.
    pub fn intensity(&self) -> Color {
        self.intensity
    }
}

/// A light source illuminating the scene.
///
/// A closed set of variants; every light answers intensity at a point,
/// unit direction from the light toward a point, and distance to a point.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    /// Parallel rays from infinitely far away (sunlight).
    Directional {
        /// Base intensity.
        intensity: Color,
        /// Direction the light travels in.
        direction: Dir3,
    },
    /// Omnidirectional light at a position, attenuated by distance.
    Point {
        /// Base intensity.
        intensity: Color,
        /// Position of the light.
        position: Point3,
        /// Constant attenuation coefficient.
        kc: f64,
        /// Linear attenuation coefficient.
        kl: f64,
        /// Quadratic attenuation coefficient.
        kq: f64,
    },
    /// A point light restricted to a cone around a direction.
    Spot {
        /// Base intensity.
        intensity: Color,
        /// Position of the light.
        position: Point3,
        /// Center direction of the beam.
        direction: Dir3,
        /// Constant attenuation coefficient.
        kc: f64,
        /// Linear attenuation coefficient.
        kl: f64,
        /// Quadratic attenuation coefficient.
        kq: f64,
        /// Beam-narrowing exponent; 1.0 is a plain cosine falloff.
        narrow_beam: f64,
    },
}

impl Light {
    /// Create a directional light.
    pub fn directional(intensity: Color, direction: Dir3) -> Self {
        Self::Directional {
            intensity,
            direction,
        }
    }

    /// Create a point light with default attenuation (constant 1).
    pub fn point(intensity: Color, position: Point3) -> Self {
        Self::Point {
            intensity,
            position,
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
        }
    }

    /// Create a spot light with default attenuation and a wide beam.
    pub fn spot(intensity: Color, position: Point3, direction: Dir3) -> Self {
        Self::Spot {
            intensity,
            position,
            direction,
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
            narrow_beam: 1.0,
        }
    }

    /// Set the attenuation coefficients; ignored for directional lights,
    /// which do not attenuate.
    pub fn with_attenuation(mut self, new_kc: f64, new_kl: f64, new_kq: f64) -> Self {
        match &mut self {
            Self::Directional { .. } => {}
            Self::Point { kc, kl, kq, .. } | Self::Spot { kc, kl, kq, .. } => {
                *kc = new_kc;
                *kl = new_kl;
                *kq = new_kq;
            }
        }
        self
    }

    /// Set the narrow-beam exponent; ignored for non-spot lights.
    pub fn with_narrow_beam(mut self, beam: f64) -> Self {
        if let Self::Spot { narrow_beam, .. } = &mut self {
            *narrow_beam = beam;
        }
        self
    }

    /// Intensity reaching a point, after distance attenuation and (for
    /// spot lights) the beam falloff.
    pub fn intensity_at(&self, p: &Point3) -> Color {
        match self {
            Self::Directional { intensity, .. } => *intensity,
            Self::Point {
                intensity,
                position,
                kc,
                kl,
                kq,
            } => attenuated(*intensity, position, p, *kc, *kl, *kq),
            Self::Spot {
                intensity,
                position,
                direction,
                kc,
                kl,
                kq,
                narrow_beam,
            } => {
                let Some(l) = self.direction_to(p) else {
                    return Color::BLACK;
                };
                let cos = math::align_zero(direction.dot(&l));
                if cos <= 0.0 {
                    return Color::BLACK;
                }
                let beam = if *narrow_beam == 1.0 {
                    cos
                } else {
                    cos.powf(*narrow_beam)
                };
                attenuated(*intensity, position, p, *kc, *kl, *kq).scale(beam)
            }
        }
    }

    /// Unit direction from the light toward a point.
    ///
    /// `None` when the point coincides with a positional light's
    /// location, where no direction exists.
    pub fn direction_to(&self, p: &Point3) -> Option<Dir3> {
        match self {
            Self::Directional { direction, .. } => Some(*direction),
            Self::Point { position, .. } | Self::Spot { position, .. } => {
                math::unit(p - position).ok()
            }
        }
    }

    /// Distance from the light to a point; infinite for directional
    /// lights, so no occluder can ever sit "beyond" them.
    pub fn distance_to(&self, p: &Point3) -> f64 {
        match self {
            Self::Directional { .. } => f64::INFINITY,
            Self::Point { position, .. } | Self::Spot { position, .. } => (p - position).norm(),
        }
    }
}

/// Point-light distance attenuation: `1 / (kc + kl*d + kq*d^2)`.
fn attenuated(intensity: Color, position: &Point3, p: &Point3, kc: f64, kl: f64, kq: f64) -> Color {
    let d = (p - position).norm();
    intensity.scale(1.0 / (kc + kl * d + kq * d * d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Vec3;

    #[test]
    fn test_directional_is_uniform() {
        let light = Light::directional(
            Color::new(100.0, 100.0, 100.0),
            math::unit(Vec3::new(0.0, 0.0, -1.0)).unwrap(),
        );
        let a = light.intensity_at(&Point3::origin());
        let b = light.intensity_at(&Point3::new(50.0, 0.0, -10.0));
        assert_eq!(a, b);
        assert_eq!(light.distance_to(&Point3::origin()), f64::INFINITY);
    }

    #[test]
    fn test_point_light_attenuates_with_distance() {
        let light = Light::point(Color::new(100.0, 100.0, 100.0), Point3::origin())
            .with_attenuation(1.0, 0.0, 1.0);
        let near = light.intensity_at(&Point3::new(1.0, 0.0, 0.0));
        let far = light.intensity_at(&Point3::new(3.0, 0.0, 0.0));
        approx::assert_relative_eq!(near.r, 50.0);
        approx::assert_relative_eq!(far.r, 10.0);
    }

    #[test]
    fn test_point_light_direction_and_distance() {
        let light = Light::point(Color::new(1.0, 1.0, 1.0), Point3::new(0.0, 5.0, 0.0));
        let p = Point3::new(0.0, 1.0, 0.0);
        let l = light.direction_to(&p).unwrap();
        assert!((l.as_ref() - Vec3::new(0.0, -1.0, 0.0)).norm() < 1e-12);
        assert!((light.distance_to(&p) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_light_at_its_own_position() {
        let light = Light::point(Color::new(1.0, 1.0, 1.0), Point3::origin());
        assert!(light.direction_to(&Point3::origin()).is_none());
    }

    #[test]
    fn test_spot_light_dark_behind_cone() {
        let light = Light::spot(
            Color::new(100.0, 100.0, 100.0),
            Point3::origin(),
            math::unit(Vec3::z()).unwrap(),
        );
        assert_eq!(
            light.intensity_at(&Point3::new(0.0, 0.0, -2.0)),
            Color::BLACK
        );
        // On-axis point gets the full cosine (1.0).
        let on_axis = light.intensity_at(&Point3::new(0.0, 0.0, 2.0));
        assert!((on_axis.r - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_spot_narrow_beam_sharpens_falloff() {
        let pos = Point3::origin();
        let dir = math::unit(Vec3::z()).unwrap();
        let wide = Light::spot(Color::new(100.0, 100.0, 100.0), pos, dir);
        let narrow = wide.clone().with_narrow_beam(8.0);
        // 45 degrees off axis.
        let p = Point3::new(1.0, 0.0, 1.0);
        assert!(narrow.intensity_at(&p).r < wide.intensity_at(&p).r);
    }

    #[test]
    fn test_ambient_none_is_black() {
        assert_eq!(AmbientLight::NONE.intensity(), Color::BLACK);
        let ambient = AmbientLight::new(Color::new(100.0, 50.0, 0.0), 0.5);
        assert_eq!(ambient.intensity(), Color::new(50.0, 25.0, 0.0));
    }
}

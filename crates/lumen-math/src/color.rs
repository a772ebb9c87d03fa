//! Additive RGB color with unbounded channel range.

use serde::{Deserialize, Serialize};

use crate::Vec3;

/// An RGB color used for light transport.
///
/// Channels are non-negative `f64` values and are *not* clamped to `[0, 1]`
/// during shading — light contributions accumulate additively and are only
/// clamped when quantized to 8-bit for output.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Color {
    /// Black (no light).
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Create a color from raw channel values.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64, g as f64, b as f64)
    }

    /// Add another color channel-wise.
    pub fn add(self, other: Self) -> Self {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }

    /// Scale all channels by a scalar factor.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Scale each channel by the matching component of a coefficient vector.
    pub fn scale_rgb(self, k: Vec3) -> Self {
        Self::new(self.r * k.x, self.g * k.y, self.b * k.z)
    }

    /// Quantize to 8-bit channels, clamping to `[0, 255]`.
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            self.r.clamp(0.0, 255.0).round() as u8,
            self.g.clamp(0.0, 255.0).round() as u8,
            self.b.clamp(0.0, 255.0).round() as u8,
        ]
    }
}

impl std::ops::Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::add(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_scale() {
        let c = Color::new(10.0, 20.0, 30.0)
            .add(Color::new(1.0, 2.0, 3.0))
            .scale(2.0);
        assert_eq!(c, Color::new(22.0, 44.0, 66.0));
    }

    #[test]
    fn test_scale_rgb_channel_wise() {
        let c = Color::new(100.0, 100.0, 100.0).scale_rgb(Vec3::new(0.5, 0.25, 0.0));
        assert_eq!(c, Color::new(50.0, 25.0, 0.0));
    }

    #[test]
    fn test_to_rgb8_clamps() {
        assert_eq!(Color::new(-5.0, 300.0, 127.6).to_rgb8(), [0, 255, 128]);
    }
}

//! RGBA color values shared by drawables, lighting, and the clear color.

use crate::foundation::math::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
///
/// Constructed from a `0xRRGGBBAA` literal, converted to normalized floats
/// at the GPU boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Build a color from a packed `0xRRGGBBAA` value.
    pub const fn from_rgba(rgba: u32) -> Self {
        Self {
            r: ((rgba >> 24) & 0xFF) as u8,
            g: ((rgba >> 16) & 0xFF) as u8,
            b: ((rgba >> 8) & 0xFF) as u8,
            a: (rgba & 0xFF) as u8,
        }
    }

    /// Build an opaque color from normalized RGB components.
    pub fn from_vec3(rgb: Vec3) -> Self {
        Self {
            r: (rgb.x * 255.0) as u8,
            g: (rgb.y * 255.0) as u8,
            b: (rgb.z * 255.0) as u8,
            a: 0xFF,
        }
    }

    /// Normalized RGB components.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    /// Normalized RGBA components.
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        )
    }

    /// Normalized RGBA components as a plain array, for vertex records.
    pub fn to_array(self) -> [f32; 4] {
        let v = self.to_vec4();
        [v.x, v.y, v.z, v.w]
    }
}

/// Named colors matching the engine defaults.
pub mod colors {
    use super::Color;

    /// Opaque black
    pub const BLACK: Color = Color::from_rgba(0x0000_00FF);
    /// Opaque white
    pub const WHITE: Color = Color::from_rgba(0xFFFF_FFFF);
    /// Engine red
    pub const RED: Color = Color::from_rgba(0xFF33_33FF);
    /// Engine green
    pub const GREEN: Color = Color::from_rgba(0x33FF_33FF);
    /// Engine blue
    pub const BLUE: Color = Color::from_rgba(0x3333_FFFF);
    /// Engine magenta
    pub const MAGENTA: Color = Color::from_rgba(0xFF33_FFFF);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unpacks_rgba_literal() {
        let c = Color::from_rgba(0x1020_30FF);
        assert_eq!(c.r, 0x10);
        assert_eq!(c.g, 0x20);
        assert_eq!(c.b, 0x30);
        assert_eq!(c.a, 0xFF);
    }

    #[test]
    fn normalizes_channels() {
        let v = colors::WHITE.to_vec4();
        assert_relative_eq!(v.x, 1.0);
        assert_relative_eq!(v.w, 1.0);
        assert_relative_eq!(colors::BLACK.to_vec3().x, 0.0);
    }
}

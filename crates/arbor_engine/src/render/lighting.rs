//! Light source descriptions uploaded to the material shader
//!
//! The shader consumes point lights as three parallel uniform arrays
//! (position, color, strength), so the types here stay plain value data.

use crate::foundation::color::{colors, Color};
use crate::foundation::math::Vec3;

/// A point light in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    /// World-space position
    pub position: Vec3,
    /// Light color
    pub color: Color,
    /// Intensity multiplier
    pub strength: f32,
}

impl LightSource {
    /// Create a point light.
    pub fn new(position: Vec3, color: Color, strength: f32) -> Self {
        Self {
            position,
            color,
            strength,
        }
    }
}

/// Scene-wide ambient lighting term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    /// Ambient color
    pub color: Color,
    /// Ambient intensity in `[0, 1]`
    pub strength: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: colors::WHITE,
            strength: 1.0,
        }
    }
}

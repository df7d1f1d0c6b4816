//! World-origin reference gizmo
//!
//! A flat gray platform plus red/green/blue markers for the X/Y/Z axes,
//! built as a composite drawable so the whole gizmo submits through one
//! dispatch call.

use crate::drawables::{Cube, Cylinder, Drawable};
use crate::foundation::color::{colors, Color};
use crate::foundation::math::Vec3;

const AXIS_RADIUS: f32 = 0.02;
const PLATFORM_COLOR: Color = Color::from_rgba(0xAAAA_AAFF);
const PLATFORM_MULTIPLIER: f32 = 10.0;

/// Reference gizmo marking the world origin and axes.
#[derive(Debug, Clone)]
pub struct WorldReference {
    platform: Cube,
    x_axis: Cylinder,
    y_axis: Cylinder,
    z_axis: Cylinder,
    show_platform: bool,
}

impl WorldReference {
    /// Build the gizmo for a platform of the given side length.
    pub fn new(platform_size: f32) -> Self {
        let mut platform = Cube::new(PLATFORM_COLOR);
        platform.set_scale(platform_size, AXIS_RADIUS, platform_size);
        platform.set_translate(platform_size / 2.0, 0.0, platform_size / 2.0);

        let origin = Vec3::zeros();
        let axis_length = platform_size * PLATFORM_MULTIPLIER;
        let x_axis = Cylinder::new(origin, AXIS_RADIUS, Vec3::new(1.0, 0.0, 0.0), axis_length, colors::RED);
        let y_axis = Cylinder::new(origin, AXIS_RADIUS, Vec3::new(0.0, 1.0, 0.0), axis_length, colors::GREEN);
        let z_axis = Cylinder::new(origin, AXIS_RADIUS, Vec3::new(0.0, 0.0, 1.0), axis_length, colors::BLUE);

        Self {
            platform,
            x_axis,
            y_axis,
            z_axis,
            show_platform: true,
        }
    }

    /// Toggle the platform without affecting the axis markers.
    pub fn show_platform(&mut self, show: bool) {
        self.show_platform = show;
    }

    /// Assemble the composite drawable for this frame.
    pub fn drawable(&self) -> Drawable {
        let mut children = Vec::with_capacity(4);
        if self.show_platform {
            children.push(Drawable::Cube(self.platform.clone()));
        }
        children.push(Drawable::Cylinder(self.x_axis.clone()));
        children.push(Drawable::Cylinder(self.y_axis.clone()));
        children.push(Drawable::Cylinder(self.z_axis.clone()));
        Drawable::Composite(children)
    }
}

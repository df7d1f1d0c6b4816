//! Cylinder drawable generated around an arbitrary axis

use crate::foundation::color::Color;
use crate::foundation::math::{Mat4, Vec3};
use crate::render::vertices::{Vertex, VertexData};

/// Ring subdivisions. 32 keeps the silhouette smooth at gizmo scale.
const SEGMENTS: u32 = 32;

/// A solid cylinder positioned in world space at construction time.
///
/// Geometry is generated directly around the base point and axis, so the
/// model matrix stays identity.
#[derive(Debug, Clone)]
pub struct Cylinder {
    base: Vec3,
    radius: f32,
    direction: Vec3,
    height: f32,
    color: Color,
}

impl Cylinder {
    /// Create a cylinder from its base center, radius, axis direction,
    /// and height. The direction is normalized internally.
    pub fn new(base: Vec3, radius: f32, direction: Vec3, height: f32, color: Color) -> Self {
        Self {
            base,
            radius,
            direction: direction.normalize(),
            height,
            color,
        }
    }

    /// Identity: the cylinder is generated in world space.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::identity()
    }

    /// World-space geometry with local, zero-based indices.
    ///
    /// Layout: `SEGMENTS` pairs of bottom/top ring vertices with radial
    /// normals for the side, then two cap fans with axial normals.
    pub fn geometry(&self) -> (VertexData, Vec<u32>) {
        let color = self.color.to_array();
        let (u, v) = orthonormal_basis(self.direction);
        let top_offset = self.direction * self.height;

        let mut vertices = VertexData::new();
        let mut indices = Vec::new();

        // Side: ring pairs with radial normals.
        for segment in 0..SEGMENTS {
            let theta = (segment as f32) / (SEGMENTS as f32) * std::f32::consts::TAU;
            let radial = u * theta.cos() + v * theta.sin();
            let bottom = self.base + radial * self.radius;
            let top = bottom + top_offset;
            let normal = [radial.x, radial.y, radial.z];
            let s = (segment as f32) / (SEGMENTS as f32);

            vertices.push(Vertex::new([bottom.x, bottom.y, bottom.z], [s, 0.0], color, normal));
            vertices.push(Vertex::new([top.x, top.y, top.z], [s, 1.0], color, normal));
        }
        for segment in 0..SEGMENTS {
            let here = segment * 2;
            let next = ((segment + 1) % SEGMENTS) * 2;
            indices.extend_from_slice(&[here, next, next + 1, next + 1, here + 1, here]);
        }

        // Caps: center vertex plus one ring each, axial normals.
        let bottom_normal = -self.direction;
        let top_normal = self.direction;
        for (center, normal, flip) in [
            (self.base, bottom_normal, true),
            (self.base + top_offset, top_normal, false),
        ] {
            let normal_arr = [normal.x, normal.y, normal.z];
            let center_index = vertices.len() as u32;
            vertices.push(Vertex::new(
                [center.x, center.y, center.z],
                [0.5, 0.5],
                color,
                normal_arr,
            ));
            for segment in 0..SEGMENTS {
                let theta = (segment as f32) / (SEGMENTS as f32) * std::f32::consts::TAU;
                let radial = u * theta.cos() + v * theta.sin();
                let p = center + radial * self.radius;
                vertices.push(Vertex::new(
                    [p.x, p.y, p.z],
                    [0.5 + theta.cos() * 0.5, 0.5 + theta.sin() * 0.5],
                    color,
                    normal_arr,
                ));
            }
            for segment in 0..SEGMENTS {
                let here = center_index + 1 + segment;
                let next = center_index + 1 + (segment + 1) % SEGMENTS;
                if flip {
                    indices.extend_from_slice(&[center_index, next, here]);
                } else {
                    indices.extend_from_slice(&[center_index, here, next]);
                }
            }
        }

        (vertices, indices)
    }
}

/// Two unit vectors spanning the plane perpendicular to `axis`.
fn orthonormal_basis(axis: Vec3) -> (Vec3, Vec3) {
    let helper = if axis.x.abs() < 0.9 {
        Vec3::new(1.0, 0.0, 0.0)
    } else {
        Vec3::new(0.0, 1.0, 0.0)
    };
    let u = axis.cross(&helper).normalize();
    let v = axis.cross(&u);
    (u, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::color::colors;

    #[test]
    fn indices_stay_in_range() {
        let cylinder = Cylinder::new(Vec3::zeros(), 0.5, Vec3::new(0.0, 1.0, 0.0), 2.0, colors::RED);
        let (vertices, indices) = cylinder.geometry();
        let count = vertices.len() as u32;
        assert!(indices.iter().all(|&i| i < count));
        // Side quads plus two cap fans.
        assert_eq!(indices.len() as u32, SEGMENTS * 6 + SEGMENTS * 3 * 2);
    }

    #[test]
    fn vertices_lie_on_the_radius() {
        let cylinder = Cylinder::new(Vec3::zeros(), 0.5, Vec3::new(0.0, 1.0, 0.0), 2.0, colors::RED);
        let (vertices, _) = cylinder.geometry();
        // Side vertices (first SEGMENTS * 2) are exactly radius from the axis.
        for vertex in &vertices.vertices()[..(SEGMENTS * 2) as usize] {
            let radial = (vertex.position[0].powi(2) + vertex.position[2].powi(2)).sqrt();
            assert!((radial - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn spans_base_to_height_along_axis() {
        let cylinder = Cylinder::new(
            Vec3::new(0.0, 1.0, 0.0),
            0.1,
            Vec3::new(0.0, 1.0, 0.0),
            3.0,
            colors::GREEN,
        );
        let (vertices, _) = cylinder.geometry();
        let ys: Vec<f32> = vertices.vertices().iter().map(|v| v.position[1]).collect();
        let min = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert!((min - 1.0).abs() < 1e-5);
        assert!((max - 4.0).abs() < 1e-5);
    }

    #[test]
    fn handles_axis_aligned_with_x() {
        let cylinder = Cylinder::new(Vec3::zeros(), 0.2, Vec3::new(1.0, 0.0, 0.0), 1.0, colors::BLUE);
        let (vertices, indices) = cylinder.geometry();
        assert!(!vertices.is_empty());
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }
}

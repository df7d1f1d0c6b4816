//! Axis-aligned unit cube drawable

use crate::foundation::color::Color;
use crate::foundation::math::{Mat4, Vec3};
use crate::render::vertices::{Vertex, VertexData};

/// Corner offsets and outward normal for each of the six faces, wound
/// counter-clockwise seen from outside.
const FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
    // Front (+Z)
    (
        [0.0, 0.0, 1.0],
        [
            [-0.5, -0.5, 0.5],
            [0.5, -0.5, 0.5],
            [0.5, 0.5, 0.5],
            [-0.5, 0.5, 0.5],
        ],
    ),
    // Back (-Z)
    (
        [0.0, 0.0, -1.0],
        [
            [0.5, -0.5, -0.5],
            [-0.5, -0.5, -0.5],
            [-0.5, 0.5, -0.5],
            [0.5, 0.5, -0.5],
        ],
    ),
    // Left (-X)
    (
        [-1.0, 0.0, 0.0],
        [
            [-0.5, -0.5, -0.5],
            [-0.5, -0.5, 0.5],
            [-0.5, 0.5, 0.5],
            [-0.5, 0.5, -0.5],
        ],
    ),
    // Right (+X)
    (
        [1.0, 0.0, 0.0],
        [
            [0.5, -0.5, 0.5],
            [0.5, -0.5, -0.5],
            [0.5, 0.5, -0.5],
            [0.5, 0.5, 0.5],
        ],
    ),
    // Top (+Y)
    (
        [0.0, 1.0, 0.0],
        [
            [-0.5, 0.5, 0.5],
            [0.5, 0.5, 0.5],
            [0.5, 0.5, -0.5],
            [-0.5, 0.5, -0.5],
        ],
    ),
    // Bottom (-Y)
    (
        [0.0, -1.0, 0.0],
        [
            [-0.5, -0.5, -0.5],
            [0.5, -0.5, -0.5],
            [0.5, -0.5, 0.5],
            [-0.5, -0.5, 0.5],
        ],
    ),
];

const FACE_TEX_COORDS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Unit cube centered at the origin, with per-face normals.
///
/// 24 vertices and 36 indices: each face carries its own four vertices so
/// normals stay flat across the face.
#[derive(Debug, Clone)]
pub struct Cube {
    color: Color,
    translation: Vec3,
    scale: Vec3,
}

impl Cube {
    /// Create a solid-color cube with identity transform.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            translation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Set the cube's translation.
    pub fn set_translate(&mut self, x: f32, y: f32, z: f32) {
        self.translation = Vec3::new(x, y, z);
    }

    /// Set the cube's per-axis scale.
    pub fn set_scale(&mut self, x: f32, y: f32, z: f32) {
        self.scale = Vec3::new(x, y, z);
    }

    /// The model matrix built from translation and scale.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.translation) * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Local-space geometry with local, zero-based indices.
    pub fn geometry(&self) -> (VertexData, Vec<u32>) {
        let color = self.color.to_array();
        let mut vertices = VertexData::new();
        let mut indices = Vec::with_capacity(36);

        for (face, (normal, corners)) in FACES.iter().enumerate() {
            for (corner, tex_coord) in corners.iter().zip(FACE_TEX_COORDS.iter()) {
                vertices.push(Vertex::new(*corner, *tex_coord, color, *normal));
            }
            let base = (face * 4) as u32;
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }

        (vertices, indices)
    }
}

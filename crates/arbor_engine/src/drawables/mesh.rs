//! Arbitrary mesh drawable

use crate::foundation::math::Mat4;
use crate::render::vertices::VertexData;

/// Arbitrary vertex/index geometry with a model transform.
///
/// The drawable keeps its source geometry across frames and hands the
/// batch renderer a fresh copy each submission, since the batch path
/// consumes its input by move.
#[derive(Debug, Clone)]
pub struct MeshDrawable {
    vertices: VertexData,
    indices: Vec<u32>,
    model: Mat4,
}

impl MeshDrawable {
    /// Create a mesh with identity transform.
    pub fn new(vertices: VertexData, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices,
            model: Mat4::identity(),
        }
    }

    /// Create a mesh with the given model transform.
    pub fn with_model(vertices: VertexData, indices: Vec<u32>, model: Mat4) -> Self {
        Self {
            vertices,
            indices,
            model,
        }
    }

    /// Replace the model transform.
    pub fn set_model(&mut self, model: Mat4) {
        self.model = model;
    }

    /// A copy of the geometry for submission.
    pub fn geometry(&self) -> (VertexData, Vec<u32>) {
        (self.vertices.clone(), self.indices.clone())
    }

    /// The current model transform.
    pub fn model_matrix(&self) -> Mat4 {
        self.model
    }

    /// Vertex count of the source geometry.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

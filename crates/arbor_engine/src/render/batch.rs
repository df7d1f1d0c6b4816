//! Geometry accumulation for batched draws
//!
//! The accumulator owns the shared vertex and index buffers for one
//! in-flight frame. Objects are submitted in local space with local,
//! zero-based indices; the accumulator bakes each object into world space
//! and rebases its indices by the vertex count already accumulated, so the
//! merged buffers stay valid for a single indexed draw.
//!
//! Frame-boundary discipline is enforced with assertions. Calling `push`
//! outside an open frame, or `begin` while one is open, would corrupt the
//! shared buffers for every subsequent frame, so these are programming
//! errors that fail fast rather than conditions to recover from.

use crate::foundation::math::{transform_normal, transform_position, Mat4};
use crate::render::vertices::VertexData;

/// Accumulation state across the Begin/Push/End sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BatchState {
    /// No frame open
    Idle,
    /// Between Begin and End
    Accumulating,
}

/// Accumulates world-space geometry between `begin` and `finish`.
#[derive(Debug)]
pub struct BatchAccumulator {
    vertices: VertexData,
    indices: Vec<u32>,
    state: BatchState,
}

impl Default for BatchAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchAccumulator {
    /// Create an idle accumulator with empty buffers.
    pub fn new() -> Self {
        Self {
            vertices: VertexData::new(),
            indices: Vec::new(),
            state: BatchState::Idle,
        }
    }

    /// Open a frame: reset both buffers, retaining their allocations.
    pub fn begin(&mut self) {
        assert!(
            self.state == BatchState::Idle,
            "batch Begin called while a frame is still accumulating"
        );
        self.vertices.clear();
        self.indices.clear();
        self.state = BatchState::Accumulating;
    }

    /// Submit one object's geometry to the open frame.
    ///
    /// Positions are transformed by the full model matrix and normals by
    /// its upper-left 3x3 block, then the records are appended. Each local
    /// index is rebased by the vertex count accumulated before this object.
    ///
    /// CPU-only by design: no backend calls happen here, so many objects
    /// can be pushed per frame without stalling on the graphics driver.
    ///
    /// Returns the (vertex, index) counts pushed, for statistics.
    pub fn push(&mut self, mut vertices: VertexData, indices: &[u32], model: &Mat4) -> (u64, u64) {
        assert!(
            self.state == BatchState::Accumulating,
            "batch PushObject called outside an open frame"
        );

        for vertex in vertices.vertices_mut() {
            vertex.position = transform_position(model, vertex.position);
            vertex.normal = transform_normal(model, vertex.normal);
        }

        let base_index = self.vertices.len() as u32;
        let pushed_vertices = vertices.len() as u64;
        let pushed_indices = indices.len() as u64;

        self.vertices.append(vertices);
        self.indices.extend(indices.iter().map(|i| i + base_index));

        (pushed_vertices, pushed_indices)
    }

    /// Close the frame after its contents have been flushed.
    pub fn finish(&mut self) {
        assert!(
            self.state == BatchState::Accumulating,
            "batch End called with no open frame"
        );
        self.state = BatchState::Idle;
    }

    /// Whether a frame is currently open.
    pub fn is_accumulating(&self) -> bool {
        self.state == BatchState::Accumulating
    }

    /// Accumulated vertex records.
    pub fn vertices(&self) -> &VertexData {
        &self.vertices
    }

    /// Accumulated, rebased indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }
}

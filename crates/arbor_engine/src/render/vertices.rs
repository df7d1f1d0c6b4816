//! Vertex records and the per-frame vertex container

use crate::render::layout::{DataPurpose, ShaderDataType, VertexLayout};
use bytemuck::{Pod, Zeroable};
use std::cmp::Ordering;

/// One GPU vertex.
///
/// `#[repr(C)]` keeps the memory layout identical to the attribute layout
/// declared by [`Vertex::layout`], so a slice of records can be uploaded
/// with a plain byte cast. Plain value type, freely copyable.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in object or world space
    pub position: [f32; 3],
    /// Texture coordinate
    pub tex_coord: [f32; 2],
    /// Normalized RGBA color
    pub color: [f32; 4],
    /// Surface normal
    pub normal: [f32; 3],
}

impl Vertex {
    /// Create a new vertex.
    pub fn new(position: [f32; 3], tex_coord: [f32; 2], color: [f32; 4], normal: [f32; 3]) -> Self {
        Self {
            position,
            tex_coord,
            color,
            normal,
        }
    }

    /// The canonical attribute layout of this record.
    ///
    /// Field order here and attribute order below must stay in sync.
    pub fn layout() -> VertexLayout {
        VertexLayout::new(&[
            (DataPurpose::Position, ShaderDataType::Float3),
            (DataPurpose::TextureCoordinate, ShaderDataType::Float2),
            (DataPurpose::Color, ShaderDataType::Float4),
            (DataPurpose::Normal, ShaderDataType::Float3),
        ])
        .expect("the vertex attribute list is statically non-empty")
    }
}

/// Ordered, appendable sequence of vertex records.
///
/// Insertion order is significant: it determines index validity and draw
/// order within a batch. The container is owned exclusively by whichever
/// component is accumulating it and transfers only by move - pushing into
/// the batch renderer consumes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexData {
    data: Vec<Vertex>,
}

impl VertexData {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container from an initial sequence of records.
    pub fn from_vertices(vertices: Vec<Vertex>) -> Self {
        Self { data: vertices }
    }

    /// Append one record. Amortized O(1).
    pub fn push(&mut self, vertex: Vertex) {
        self.data.push(vertex);
    }

    /// Merge in another container's full contents, preserving order.
    ///
    /// Consumes `other`; used when two producers contribute to one logical
    /// mesh before submission.
    pub fn append(&mut self, mut other: VertexData) {
        self.data.append(&mut other.data);
    }

    /// Drop all records, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the container holds no records.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allocated capacity in records.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Total size of the records in bytes.
    pub fn size_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<Vertex>()
    }

    /// The records as raw bytes, ready for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Shared view of the records.
    pub fn vertices(&self) -> &[Vertex] {
        &self.data
    }

    /// Mutable view of the records, used for in-place transforms.
    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.data
    }

    /// Reorder records by a caller-defined comparison.
    ///
    /// Used for draw-order optimizations such as depth sorting of
    /// transparent geometry; not required for opaque batching.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Vertex, &Vertex) -> Ordering,
    {
        self.data.sort_by(compare);
    }
}

impl From<Vec<Vertex>> for VertexData {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self::from_vertices(vertices)
    }
}

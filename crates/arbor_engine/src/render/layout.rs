//! Vertex attribute layout description
//!
//! A [`VertexLayout`] is the schema mapping attribute semantics to byte
//! offsets and a total stride. The same layout interprets a CPU-side
//! [`crate::render::Vertex`] in memory and configures GPU attribute
//! pointers, so the layout produced by a vertex producer must equal the
//! layout the active shader expects. That equality is checked at binding
//! time, never assumed.

use thiserror::Error;

/// Semantic purpose of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataPurpose {
    /// World- or object-space position
    Position,
    /// Texture coordinate
    TextureCoordinate,
    /// Per-vertex color
    Color,
    /// Surface normal
    Normal,
}

/// Scalar shape of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderDataType {
    /// One 32-bit float
    Float,
    /// Two 32-bit floats
    Float2,
    /// Three 32-bit floats
    Float3,
    /// Four 32-bit floats
    Float4,
    /// One 32-bit signed integer
    Int,
}

impl ShaderDataType {
    /// Size of the attribute in bytes.
    pub const fn size_bytes(self) -> u32 {
        match self {
            Self::Float | Self::Int => 4,
            Self::Float2 => 8,
            Self::Float3 => 12,
            Self::Float4 => 16,
        }
    }

    /// Number of scalar components.
    pub const fn component_count(self) -> u32 {
        match self {
            Self::Float | Self::Int => 1,
            Self::Float2 => 2,
            Self::Float3 => 3,
            Self::Float4 => 4,
        }
    }
}

/// Errors raised while constructing a vertex layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// A layout must describe at least one attribute.
    #[error("a vertex layout must describe at least one attribute")]
    Empty,
}

/// One attribute within a vertex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferElement {
    /// Semantic purpose of the attribute
    pub purpose: DataPurpose,
    /// Scalar shape of the attribute
    pub data_type: ShaderDataType,
    /// Byte offset from the start of the vertex record
    pub offset: u32,
}

/// Ordered attribute layout with fixed stride and per-attribute offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    elements: Vec<BufferElement>,
    stride: u32,
}

impl VertexLayout {
    /// Build a layout from ordered (purpose, type) pairs.
    ///
    /// Offsets are assigned by accumulating attribute sizes in input order;
    /// the stride is the total size of one record.
    pub fn new(attributes: &[(DataPurpose, ShaderDataType)]) -> Result<Self, LayoutError> {
        if attributes.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut offset = 0;
        let mut elements = Vec::with_capacity(attributes.len());
        for &(purpose, data_type) in attributes {
            elements.push(BufferElement {
                purpose,
                data_type,
                offset,
            });
            offset += data_type.size_bytes();
        }

        Ok(Self {
            elements,
            stride: offset,
        })
    }

    /// Byte size of one vertex record.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Attributes in declaration order.
    pub fn elements(&self) -> &[BufferElement] {
        &self.elements
    }
}

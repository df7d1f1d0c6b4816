//! Backend abstraction traits for the rendering system
//!
//! This module defines the trait that rendering backends must implement
//! to provide a consistent interface for the high-level renderer. The
//! renderer owns a backend as a trait object; everything that touches the
//! graphics driver lives behind this seam.

use crate::foundation::math::{Mat4, Vec3, Vec4};
use crate::render::diagnostics::DriverDiagnostic;
use crate::render::layout::VertexLayout;
use crate::render::RenderError;
use bitflags::bitflags;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Handle to a compiled shader program owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u64);

/// Handle to a vertex/index buffer pair owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryHandle(pub u64);

bitflags! {
    /// Framebuffer planes affected by [`RenderBackend::clear`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        /// Color attachment
        const COLOR = 1 << 0;
        /// Depth attachment
        const DEPTH = 1 << 1;
    }
}

/// A uniform value uploaded to a shader program.
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    /// Single integer (texture slot, flag)
    Int(i32),
    /// Integer array (texture slot list)
    IntArray(Vec<i32>),
    /// Single float
    Float(f32),
    /// Float array (light strengths)
    FloatArray(Vec<f32>),
    /// 3-component vector
    Vec3(Vec3),
    /// Array of 3-component vectors (light positions, colors)
    Vec3Array(Vec<Vec3>),
    /// 4-component vector
    Vec4(Vec4),
    /// 4x4 matrix
    Mat4(Mat4),
}

/// Hardware limits relevant to draw submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawLimits {
    /// Maximum indices one `draw_indexed` call may cover.
    pub max_indices_per_draw: u32,
}

impl Default for DrawLimits {
    fn default() -> Self {
        Self {
            max_indices_per_draw: u32::MAX,
        }
    }
}

/// Main rendering backend trait
///
/// Abstracts over graphics APIs behind an object-safe interface. Buffer
/// capacity is grow-only: uploading more data than a geometry allocation
/// currently holds must reallocate, while smaller uploads reuse the
/// existing allocation.
pub trait RenderBackend {
    /// One-time device and pipeline-state initialization.
    fn init(&mut self) -> BackendResult<()>;

    /// Set the viewport rectangle in pixels.
    fn set_viewport(&mut self, x: u32, y: u32, width: u32, height: u32);

    /// Set the color used by [`Self::clear`].
    fn set_clear_color(&mut self, color: Vec4);

    /// Clear the selected framebuffer planes.
    fn clear(&mut self, flags: ClearFlags);

    /// Compile and link a shader program from GLSL sources.
    fn create_shader(&mut self, vertex_src: &str, fragment_src: &str)
        -> BackendResult<ShaderHandle>;

    /// Bind a shader program for subsequent uniform updates and draws.
    fn bind_shader(&mut self, shader: ShaderHandle) -> BackendResult<()>;

    /// Unbind the active shader program.
    fn unbind_shader(&mut self);

    /// Upload a uniform value to a shader program.
    fn set_uniform(
        &mut self,
        shader: ShaderHandle,
        name: &str,
        value: UniformValue,
    ) -> BackendResult<()>;

    /// Allocate an empty vertex/index buffer pair configured for `layout`.
    fn create_geometry(&mut self, layout: &VertexLayout) -> BackendResult<GeometryHandle>;

    /// Replace a geometry allocation's contents, growing capacity if needed.
    fn upload_geometry(
        &mut self,
        geometry: GeometryHandle,
        vertex_bytes: &[u8],
        indices: &[u32],
    ) -> BackendResult<()>;

    /// Issue one indexed draw over `index_count` indices starting at
    /// `first_index` in the geometry's index buffer.
    fn draw_indexed(
        &mut self,
        geometry: GeometryHandle,
        first_index: u32,
        index_count: u32,
    ) -> BackendResult<()>;

    /// Hardware limits for draw submission.
    fn limits(&self) -> DrawLimits;

    /// Drain diagnostics queued by the driver's debug channel.
    fn poll_diagnostics(&mut self) -> Vec<DriverDiagnostic>;

    /// Downcast to the concrete backend type.
    ///
    /// This breaks abstraction but is needed for backend-specific resource
    /// inspection, primarily in tests and tooling.
    fn as_any(&self) -> &dyn std::any::Any;

    /// Downcast to the mutable concrete backend type.
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}

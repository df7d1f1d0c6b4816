//! # Rendering System
//!
//! Core rendering abstraction for the engine: a high-level [`Renderer`]
//! facade over a pluggable [`RenderBackend`], plus the batching pipeline
//! that merges per-object geometry into shared buffers for a minimal
//! number of draw calls per frame.
//!
//! ## Architecture
//!
//! - **Renderer**: facade owning the backend, the material shader, the
//!   batch accumulator, and frame statistics
//! - **BatchAccumulator**: CPU-side geometry merge with index rebasing
//! - **MaterialShader**: the GPU program shared by every batched object
//! - **RenderBackend**: object-safe seam to the graphics driver
//!
//! ## Frame protocol
//!
//! `begin_batch(camera, view_position)` → zero or more `push_object` →
//! `end_batch()`. The sequence is strictly program-order on one thread;
//! violations are programming errors and fail fast by assertion rather
//! than corrupting the shared buffers of every later frame.

pub mod api;
pub mod backends;
pub mod batch;
pub mod diagnostics;
pub mod layout;
pub mod lighting;
pub mod materials;
pub mod stats;
pub mod vertices;

#[cfg(test)]
mod graphics_engine_tests;

pub use api::{
    BackendResult, ClearFlags, DrawLimits, GeometryHandle, RenderBackend, ShaderHandle,
    UniformValue,
};
pub use batch::BatchAccumulator;
pub use diagnostics::{DiagnosticSeverity, DriverDiagnostic};
pub use layout::{BufferElement, DataPurpose, LayoutError, ShaderDataType, VertexLayout};
pub use lighting::{AmbientLight, LightSource};
pub use materials::MaterialShader;
pub use stats::FrameStatistics;
pub use vertices::{Vertex, VertexData};

use crate::core::config::RendererConfig;
use crate::foundation::color::Color;
use crate::foundation::math::{Mat4, Vec3};
use crate::foundation::time::FrameClock;
use log::{info, trace};
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the rendering system.
///
/// These are the recoverable-in-principle conditions. Frame-protocol
/// violations and non-benign driver diagnostics are programming defects
/// and panic instead (see the module docs).
#[derive(Debug, Error)]
pub enum RenderError {
    /// Renderer or backend initialization failed.
    #[error("renderer initialization failed: {0}")]
    InitializationFailed(String),

    /// A shader source file is missing or unreadable.
    #[error("shader source not found at {path}: {source}")]
    ShaderNotFound {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Shader compilation or linking failed.
    #[error("shader compilation failed: {0}")]
    ShaderCompileFailed(String),

    /// A handle referred to a resource the backend does not own.
    #[error("unknown resource handle: {0}")]
    InvalidHandle(String),

    /// A rendering operation failed during execution.
    #[error("rendering failed: {0}")]
    RenderingFailed(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

/// High-level rendering coordinator.
///
/// Owns the render-frame state explicitly - accumulator, material shader,
/// statistics - so lifetime and threading assumptions are visible at call
/// sites instead of hiding in process-wide statics. All operations take
/// `&mut self`; the type is single-threaded by construction.
pub struct Renderer {
    backend: Box<dyn RenderBackend>,
    material_shader: MaterialShader,
    batch_geometry: GeometryHandle,
    accumulator: BatchAccumulator,
    stats: FrameStatistics,
    frame_clock: FrameClock,
}

impl Renderer {
    /// Initialize the backend and load the configured material shader.
    ///
    /// Shader lookup follows the fixed asset convention
    /// `<asset_root>/shaders/<Name>.vshader.glsl` / `.fshader.glsl` and is
    /// fatal here, not deferred to draw time.
    pub fn new(mut backend: Box<dyn RenderBackend>, config: &RendererConfig) -> RenderResult<Self> {
        backend.init()?;
        let material_shader =
            MaterialShader::new(backend.as_mut(), &config.asset_root, &config.material_shader)?;
        let batch_geometry = backend.create_geometry(material_shader.layout())?;
        backend.set_clear_color(config.clear_color.to_vec4());

        info!(
            "renderer initialized for '{}' with shader '{}'",
            config.application_name, config.material_shader
        );

        Ok(Self {
            backend,
            material_shader,
            batch_geometry,
            accumulator: BatchAccumulator::new(),
            stats: FrameStatistics::default(),
            frame_clock: FrameClock::start(),
        })
    }

    /// Set the viewport rectangle in pixels.
    pub fn set_viewport(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.backend.set_viewport(x, y, width, height);
    }

    /// Set the framebuffer clear color.
    pub fn set_clear_color(&mut self, color: Color) {
        self.backend.set_clear_color(color.to_vec4());
    }

    /// Clear the color and depth planes.
    pub fn clear(&mut self) {
        self.backend.clear(ClearFlags::COLOR | ClearFlags::DEPTH);
    }

    /// Allocate a geometry buffer pair for immediate draws.
    pub fn create_geometry(&mut self) -> RenderResult<GeometryHandle> {
        self.backend.create_geometry(self.material_shader.layout())
    }

    /// Upload vertex and index data to a geometry allocation.
    pub fn upload_geometry(
        &mut self,
        geometry: GeometryHandle,
        vertices: &VertexData,
        indices: &[u32],
    ) -> RenderResult<()> {
        self.backend
            .upload_geometry(geometry, vertices.as_bytes(), indices)
    }

    /// Immediate (non-batched) indexed draw of a whole geometry allocation.
    ///
    /// The caller supplies the object's model matrix as a per-draw uniform;
    /// this is the path for single objects outside the batch pipeline.
    pub fn draw_indexed(
        &mut self,
        geometry: GeometryHandle,
        index_count: u32,
        model: &Mat4,
    ) -> RenderResult<()> {
        self.material_shader.activate(self.backend.as_mut())?;
        self.material_shader
            .update_model_matrix(self.backend.as_mut(), model)?;
        self.backend.draw_indexed(geometry, 0, index_count)?;
        self.drain_diagnostics();
        Ok(())
    }

    /// Update the ambient lighting term.
    pub fn set_ambient_light(&mut self, ambient: AmbientLight) -> RenderResult<()> {
        self.material_shader.activate(self.backend.as_mut())?;
        self.material_shader
            .update_ambient_light(self.backend.as_mut(), ambient)
    }

    /// Update the point-light array.
    pub fn set_light_sources(&mut self, lights: &[LightSource]) -> RenderResult<()> {
        self.material_shader.activate(self.backend.as_mut())?;
        self.material_shader
            .update_light_sources(self.backend.as_mut(), lights)
    }

    /// Update the texture unit indices sampled by the material.
    pub fn set_texture_slots(&mut self, slots: &[i32]) -> RenderResult<()> {
        self.material_shader.activate(self.backend.as_mut())?;
        self.material_shader
            .update_texture_slots(self.backend.as_mut(), slots)
    }

    /// Open a batch frame.
    ///
    /// Resets the statistics counters, records the start timestamp,
    /// activates the material shader and uploads the camera state exactly
    /// once for the whole frame, then opens the accumulator. The shader's
    /// expected layout is validated against the vertex record layout here,
    /// before the first push of the frame.
    pub fn begin_batch(&mut self, camera_matrix: &Mat4, view_position: Vec3) -> RenderResult<()> {
        self.stats.reset_counters();
        self.frame_clock.restart();

        assert!(
            self.material_shader.layout() == &Vertex::layout(),
            "vertex producer layout does not match the active material shader layout"
        );

        self.material_shader.activate(self.backend.as_mut())?;
        self.material_shader.update_view_projection(
            self.backend.as_mut(),
            camera_matrix,
            view_position,
        )?;
        self.accumulator.begin();
        Ok(())
    }

    /// Submit one object's geometry to the open batch frame.
    ///
    /// Consumes the vertex container; geometry is baked into world space
    /// and indices are rebased. CPU-only - no backend traffic until
    /// [`Self::end_batch`].
    pub fn push_object(&mut self, vertices: VertexData, indices: &[u32], model: &Mat4) {
        let (vertex_count, index_count) = self.accumulator.push(vertices, indices, model);
        self.stats.vertices_count += vertex_count;
        self.stats.indices_count += index_count;
    }

    /// Flush the accumulated frame.
    ///
    /// Re-activates the shader (idempotent, in case intervening code
    /// changed driver state), uploads the merged buffers, and issues one
    /// indexed draw over the full range - or several contiguous ranges
    /// when the backend's per-draw index limit would be exceeded. Splits
    /// happen on triangle boundaries so no primitive straddles two calls.
    /// Finalizes `time_spent` with a floor of one nanosecond.
    pub fn end_batch(&mut self) -> RenderResult<()> {
        self.material_shader.activate(self.backend.as_mut())?;
        self.backend.upload_geometry(
            self.batch_geometry,
            self.accumulator.vertices().as_bytes(),
            self.accumulator.indices(),
        )?;

        let total = self.accumulator.indices().len() as u32;
        let step = triangle_aligned(self.backend.limits().max_indices_per_draw);
        let mut first = 0u32;
        while first < total {
            let count = (total - first).min(step);
            self.backend
                .draw_indexed(self.batch_geometry, first, count)?;
            self.stats.draw_calls += 1;
            first += count;
        }

        self.accumulator.finish();
        self.stats.time_spent = self.frame_clock.elapsed_ns() + 1;
        self.drain_diagnostics();

        trace!(
            "batch flushed: {} vertices, {} indices, {} draw calls",
            self.stats.vertices_count,
            self.stats.indices_count,
            self.stats.draw_calls
        );
        Ok(())
    }

    /// Counters for the last completed frame.
    pub fn stats(&self) -> FrameStatistics {
        self.stats
    }

    /// The backend, for backend-specific inspection via downcast.
    pub fn backend(&self) -> &dyn RenderBackend {
        self.backend.as_ref()
    }

    /// The backend, mutably.
    pub fn backend_mut(&mut self) -> &mut dyn RenderBackend {
        self.backend.as_mut()
    }

    fn drain_diagnostics(&mut self) {
        diagnostics::escalate(self.backend.poll_diagnostics());
    }
}

/// Largest multiple of three at or below `limit`, with a floor of one
/// triangle so a pathological limit still makes progress.
fn triangle_aligned(limit: u32) -> u32 {
    (limit - limit % 3).max(3)
}

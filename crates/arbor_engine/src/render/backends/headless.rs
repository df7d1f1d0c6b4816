//! Headless rendering backend
//!
//! Implements the full backend contract against in-memory state: a shader
//! table, geometry buffers with grow-only capacity bookkeeping, and a log
//! of submitted draw calls. No GPU is touched, which makes it suitable for
//! CI, server-side runs, and the engine's own test suite.

use crate::foundation::math::Vec4;
use crate::render::api::{
    BackendResult, ClearFlags, DrawLimits, GeometryHandle, RenderBackend, ShaderHandle,
    UniformValue,
};
use crate::render::diagnostics::DriverDiagnostic;
use crate::render::layout::VertexLayout;
use crate::render::RenderError;
use log::{debug, trace};
use std::collections::HashMap;

/// A compiled shader program's stored state.
#[derive(Debug, Clone)]
struct ShaderProgram {
    uniforms: HashMap<String, UniformValue>,
}

/// A geometry allocation with grow-only capacity.
#[derive(Debug, Clone)]
struct GeometryBuffers {
    layout: VertexLayout,
    vertex_bytes: Vec<u8>,
    indices: Vec<u32>,
    vertex_capacity: usize,
    index_capacity: usize,
}

/// Record of one submitted indexed draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    /// Geometry the draw was issued against
    pub geometry: GeometryHandle,
    /// First index consumed
    pub first_index: u32,
    /// Number of indices consumed
    pub index_count: u32,
}

/// In-memory backend with no GPU behind it.
#[derive(Debug)]
pub struct HeadlessBackend {
    shaders: Vec<ShaderProgram>,
    geometries: Vec<GeometryBuffers>,
    bound_shader: Option<ShaderHandle>,
    clear_color: Vec4,
    viewport: (u32, u32, u32, u32),
    draw_calls: Vec<DrawCall>,
    uniform_log: Vec<(ShaderHandle, String)>,
    pending_diagnostics: Vec<DriverDiagnostic>,
    limits: DrawLimits,
    initialized: bool,
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self {
            shaders: Vec::new(),
            geometries: Vec::new(),
            bound_shader: None,
            clear_color: Vec4::zeros(),
            viewport: (0, 0, 0, 0),
            draw_calls: Vec::new(),
            uniform_log: Vec::new(),
            pending_diagnostics: Vec::new(),
            limits: DrawLimits::default(),
            initialized: false,
        }
    }
}

impl HeadlessBackend {
    /// Create a backend with default (unbounded) draw limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend advertising the given draw limits.
    pub fn with_limits(limits: DrawLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// All draw calls submitted since creation, in order.
    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.draw_calls
    }

    /// Every uniform update since creation, in order.
    pub fn uniform_log(&self) -> &[(ShaderHandle, String)] {
        &self.uniform_log
    }

    /// Current value of a uniform, if it was ever set.
    pub fn uniform(&self, shader: ShaderHandle, name: &str) -> Option<&UniformValue> {
        self.shader(shader).ok()?.uniforms.get(name)
    }

    /// The currently bound shader program, if any.
    pub fn bound_shader(&self) -> Option<ShaderHandle> {
        self.bound_shader
    }

    /// Currently configured clear color.
    pub fn clear_color(&self) -> Vec4 {
        self.clear_color
    }

    /// Currently configured viewport rectangle.
    pub fn viewport(&self) -> (u32, u32, u32, u32) {
        self.viewport
    }

    /// Uploaded index contents of a geometry allocation.
    pub fn geometry_indices(&self, geometry: GeometryHandle) -> &[u32] {
        self.geometries
            .get(geometry.0 as usize)
            .map_or(&[], |g| g.indices.as_slice())
    }

    /// Uploaded vertex bytes of a geometry allocation.
    pub fn geometry_vertex_bytes(&self, geometry: GeometryHandle) -> &[u8] {
        self.geometries
            .get(geometry.0 as usize)
            .map_or(&[], |g| g.vertex_bytes.as_slice())
    }

    /// Capacity bookkeeping for a geometry allocation, in
    /// (vertex bytes, index count).
    pub fn geometry_capacity(&self, geometry: GeometryHandle) -> (usize, usize) {
        self.geometries
            .get(geometry.0 as usize)
            .map_or((0, 0), |g| (g.vertex_capacity, g.index_capacity))
    }

    /// Queue a diagnostic as if the driver's debug channel emitted it.
    pub fn inject_diagnostic(&mut self, diagnostic: DriverDiagnostic) {
        self.pending_diagnostics.push(diagnostic);
    }

    /// Whether [`RenderBackend::init`] has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn shader(&self, handle: ShaderHandle) -> BackendResult<&ShaderProgram> {
        self.shaders
            .get(handle.0 as usize)
            .ok_or_else(|| RenderError::InvalidHandle(format!("shader {}", handle.0)))
    }

    fn shader_mut(&mut self, handle: ShaderHandle) -> BackendResult<&mut ShaderProgram> {
        self.shaders
            .get_mut(handle.0 as usize)
            .ok_or_else(|| RenderError::InvalidHandle(format!("shader {}", handle.0)))
    }

    fn geometry_mut(&mut self, handle: GeometryHandle) -> BackendResult<&mut GeometryBuffers> {
        self.geometries
            .get_mut(handle.0 as usize)
            .ok_or_else(|| RenderError::InvalidHandle(format!("geometry {}", handle.0)))
    }
}

impl RenderBackend for HeadlessBackend {
    fn init(&mut self) -> BackendResult<()> {
        self.initialized = true;
        debug!("headless backend initialized");
        Ok(())
    }

    fn set_viewport(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.viewport = (x, y, width, height);
    }

    fn set_clear_color(&mut self, color: Vec4) {
        self.clear_color = color;
    }

    fn clear(&mut self, flags: ClearFlags) {
        trace!("clear {flags:?}");
    }

    fn create_shader(
        &mut self,
        vertex_src: &str,
        fragment_src: &str,
    ) -> BackendResult<ShaderHandle> {
        if vertex_src.trim().is_empty() || fragment_src.trim().is_empty() {
            return Err(RenderError::ShaderCompileFailed(
                "empty shader source".to_string(),
            ));
        }
        let handle = ShaderHandle(self.shaders.len() as u64);
        self.shaders.push(ShaderProgram {
            uniforms: HashMap::new(),
        });
        Ok(handle)
    }

    fn bind_shader(&mut self, shader: ShaderHandle) -> BackendResult<()> {
        self.shader(shader)?;
        self.bound_shader = Some(shader);
        Ok(())
    }

    fn unbind_shader(&mut self) {
        self.bound_shader = None;
    }

    fn set_uniform(
        &mut self,
        shader: ShaderHandle,
        name: &str,
        value: UniformValue,
    ) -> BackendResult<()> {
        self.shader_mut(shader)?
            .uniforms
            .insert(name.to_string(), value);
        self.uniform_log.push((shader, name.to_string()));
        Ok(())
    }

    fn create_geometry(&mut self, layout: &VertexLayout) -> BackendResult<GeometryHandle> {
        let handle = GeometryHandle(self.geometries.len() as u64);
        self.geometries.push(GeometryBuffers {
            layout: layout.clone(),
            vertex_bytes: Vec::new(),
            indices: Vec::new(),
            vertex_capacity: 0,
            index_capacity: 0,
        });
        Ok(handle)
    }

    fn upload_geometry(
        &mut self,
        geometry: GeometryHandle,
        vertex_bytes: &[u8],
        indices: &[u32],
    ) -> BackendResult<()> {
        let buffers = self.geometry_mut(geometry)?;
        let stride = buffers.layout.stride() as usize;
        if stride == 0 || vertex_bytes.len() % stride != 0 {
            return Err(RenderError::RenderingFailed(format!(
                "vertex upload of {} bytes does not match layout stride {stride}",
                vertex_bytes.len()
            )));
        }

        buffers.vertex_bytes.clear();
        buffers.vertex_bytes.extend_from_slice(vertex_bytes);
        buffers.indices.clear();
        buffers.indices.extend_from_slice(indices);

        // Capacity only ever grows; smaller uploads reuse the allocation.
        buffers.vertex_capacity = buffers.vertex_capacity.max(vertex_bytes.len());
        buffers.index_capacity = buffers.index_capacity.max(indices.len());
        Ok(())
    }

    fn draw_indexed(
        &mut self,
        geometry: GeometryHandle,
        first_index: u32,
        index_count: u32,
    ) -> BackendResult<()> {
        let bound = self.bound_shader;
        let buffers = self.geometry_mut(geometry)?;
        if bound.is_none() {
            return Err(RenderError::RenderingFailed(
                "draw issued with no shader bound".to_string(),
            ));
        }

        let start = first_index as usize;
        let end = start + index_count as usize;
        if end > buffers.indices.len() {
            return Err(RenderError::RenderingFailed(format!(
                "draw range {start}..{end} exceeds {} uploaded indices",
                buffers.indices.len()
            )));
        }

        let vertex_count = buffers.vertex_bytes.len() / buffers.layout.stride() as usize;
        if let Some(&bad) = buffers.indices[start..end]
            .iter()
            .find(|&&i| i as usize >= vertex_count)
        {
            return Err(RenderError::RenderingFailed(format!(
                "index {bad} out of range for {vertex_count} vertices"
            )));
        }

        self.draw_calls.push(DrawCall {
            geometry,
            first_index,
            index_count,
        });
        Ok(())
    }

    fn limits(&self) -> DrawLimits {
        self.limits
    }

    fn poll_diagnostics(&mut self) -> Vec<DriverDiagnostic> {
        std::mem::take(&mut self.pending_diagnostics)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::vertices::{Vertex, VertexData};

    fn backend_with_geometry() -> (HeadlessBackend, GeometryHandle) {
        let mut backend = HeadlessBackend::new();
        let geometry = backend.create_geometry(&Vertex::layout()).unwrap();
        (backend, geometry)
    }

    fn vertex_bytes(count: usize) -> VertexData {
        VertexData::from_vertices(vec![
            Vertex::new(
                [0.0; 3],
                [0.0; 2],
                [1.0; 4],
                [0.0, 1.0, 0.0]
            );
            count
        ])
    }

    #[test]
    fn capacity_grows_and_never_shrinks() {
        let (mut backend, geometry) = backend_with_geometry();

        let big = vertex_bytes(16);
        backend
            .upload_geometry(geometry, big.as_bytes(), &[0; 24])
            .unwrap();
        let (vertex_cap, index_cap) = backend.geometry_capacity(geometry);
        assert_eq!(vertex_cap, big.size_bytes());
        assert_eq!(index_cap, 24);

        let small = vertex_bytes(4);
        backend
            .upload_geometry(geometry, small.as_bytes(), &[0; 6])
            .unwrap();
        assert_eq!(backend.geometry_capacity(geometry), (vertex_cap, index_cap));
        assert_eq!(backend.geometry_indices(geometry).len(), 6);
    }

    #[test]
    fn rejects_misaligned_vertex_upload() {
        let (mut backend, geometry) = backend_with_geometry();
        let result = backend.upload_geometry(geometry, &[0u8; 7], &[]);
        assert!(matches!(result, Err(RenderError::RenderingFailed(_))));
    }

    #[test]
    fn rejects_draw_without_bound_shader() {
        let (mut backend, geometry) = backend_with_geometry();
        let data = vertex_bytes(3);
        backend
            .upload_geometry(geometry, data.as_bytes(), &[0, 1, 2])
            .unwrap();
        assert!(backend.draw_indexed(geometry, 0, 3).is_err());
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let (mut backend, geometry) = backend_with_geometry();
        let shader = backend.create_shader("v", "f").unwrap();
        backend.bind_shader(shader).unwrap();

        let data = vertex_bytes(3);
        backend
            .upload_geometry(geometry, data.as_bytes(), &[0, 1, 7])
            .unwrap();
        assert!(backend.draw_indexed(geometry, 0, 3).is_err());
    }

    #[test]
    fn records_draw_calls_in_order() {
        let (mut backend, geometry) = backend_with_geometry();
        let shader = backend.create_shader("v", "f").unwrap();
        backend.bind_shader(shader).unwrap();

        let data = vertex_bytes(4);
        backend
            .upload_geometry(geometry, data.as_bytes(), &[0, 1, 2, 2, 3, 0])
            .unwrap();
        backend.draw_indexed(geometry, 0, 3).unwrap();
        backend.draw_indexed(geometry, 3, 3).unwrap();

        let calls = backend.draw_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].first_index, 0);
        assert_eq!(calls[1].first_index, 3);
    }
}

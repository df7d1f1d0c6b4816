//! The lit material shader program
//!
//! Wraps the GPU program shared by every batched object: camera and model
//! matrices, ambient light, the point-light arrays, and texture slots.
//! Sources are located by the fixed asset convention
//! `<asset_root>/shaders/<Name>.vshader.glsl` / `.fshader.glsl`; a missing
//! or unreadable source is fatal at construction time, never deferred to
//! draw time.

use crate::foundation::math::{Mat4, Vec3};
use crate::render::api::{BackendResult, RenderBackend, ShaderHandle, UniformValue};
use crate::render::layout::{DataPurpose, ShaderDataType, VertexLayout};
use crate::render::lighting::{AmbientLight, LightSource};
use crate::render::materials::MAX_LIGHT_SOURCES;
use crate::render::RenderError;
use log::info;
use std::path::Path;

/// GPU program plus its uniform state (camera, lighting, textures).
#[derive(Debug)]
pub struct MaterialShader {
    handle: ShaderHandle,
    layout: VertexLayout,
}

impl MaterialShader {
    /// Load, compile, and link the named shader program.
    pub fn new(
        backend: &mut dyn RenderBackend,
        asset_root: &Path,
        name: &str,
    ) -> Result<Self, RenderError> {
        let shader_dir = asset_root.join("shaders");
        let vertex_src = read_source(&shader_dir.join(format!("{name}.vshader.glsl")))?;
        let fragment_src = read_source(&shader_dir.join(format!("{name}.fshader.glsl")))?;

        let handle = backend.create_shader(&vertex_src, &fragment_src)?;
        info!("compiled material shader '{name}'");

        let layout = VertexLayout::new(&[
            (DataPurpose::Position, ShaderDataType::Float3),
            (DataPurpose::TextureCoordinate, ShaderDataType::Float2),
            (DataPurpose::Color, ShaderDataType::Float4),
            (DataPurpose::Normal, ShaderDataType::Float3),
        ])
        .expect("the material attribute list is statically non-empty");

        Ok(Self { handle, layout })
    }

    /// Bind the program.
    pub fn activate(&self, backend: &mut dyn RenderBackend) -> BackendResult<()> {
        backend.bind_shader(self.handle)
    }

    /// Unbind the program.
    pub fn deactivate(&self, backend: &mut dyn RenderBackend) {
        backend.unbind_shader();
    }

    /// Upload the camera's view-projection matrix and world-space eye
    /// position. Called exactly once per batch frame: every object in the
    /// batch shares the same camera state.
    pub fn update_view_projection(
        &self,
        backend: &mut dyn RenderBackend,
        view_projection: &Mat4,
        view_position: Vec3,
    ) -> BackendResult<()> {
        backend.set_uniform(self.handle, "u_VP", UniformValue::Mat4(*view_projection))?;
        backend.set_uniform(self.handle, "u_viewPos", UniformValue::Vec3(view_position))
    }

    /// Upload a per-object model matrix.
    ///
    /// Only relevant for immediate (non-batched) draws; the batch path
    /// bakes transforms into world-space vertices instead.
    pub fn update_model_matrix(
        &self,
        backend: &mut dyn RenderBackend,
        model: &Mat4,
    ) -> BackendResult<()> {
        backend.set_uniform(self.handle, "u_M", UniformValue::Mat4(*model))
    }

    /// Upload the ambient lighting term.
    pub fn update_ambient_light(
        &self,
        backend: &mut dyn RenderBackend,
        ambient: AmbientLight,
    ) -> BackendResult<()> {
        backend.set_uniform(
            self.handle,
            "u_ambientColor",
            UniformValue::Vec3(ambient.color.to_vec3()),
        )?;
        backend.set_uniform(
            self.handle,
            "u_ambientStrength",
            UniformValue::Float(ambient.strength),
        )
    }

    /// Upload the point-light array as three parallel uniform arrays.
    pub fn update_light_sources(
        &self,
        backend: &mut dyn RenderBackend,
        lights: &[LightSource],
    ) -> BackendResult<()> {
        let lights = &lights[..lights.len().min(MAX_LIGHT_SOURCES)];
        let positions: Vec<Vec3> = lights.iter().map(|l| l.position).collect();
        let colors: Vec<Vec3> = lights.iter().map(|l| l.color.to_vec3()).collect();
        let strengths: Vec<f32> = lights.iter().map(|l| l.strength).collect();

        backend.set_uniform(self.handle, "u_lightPos", UniformValue::Vec3Array(positions))?;
        backend.set_uniform(self.handle, "u_lightColor", UniformValue::Vec3Array(colors))?;
        backend.set_uniform(
            self.handle,
            "u_lightStrength",
            UniformValue::FloatArray(strengths),
        )
    }

    /// Upload the texture unit indices sampled by the fragment stage.
    pub fn update_texture_slots(
        &self,
        backend: &mut dyn RenderBackend,
        slots: &[i32],
    ) -> BackendResult<()> {
        backend.set_uniform(
            self.handle,
            "u_textures",
            UniformValue::IntArray(slots.to_vec()),
        )
    }

    /// The vertex layout this program expects.
    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    /// Backend handle of the linked program.
    pub fn handle(&self) -> ShaderHandle {
        self.handle
    }
}

fn read_source(path: &Path) -> Result<String, RenderError> {
    std::fs::read_to_string(path).map_err(|source| RenderError::ShaderNotFound {
        path: path.to_path_buf(),
        source,
    })
}

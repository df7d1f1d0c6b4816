//! Public rendering API
//!
//! The backend trait and the handle/value types that cross it.

pub mod render_backend;

pub use render_backend::{
    BackendResult, ClearFlags, DrawLimits, GeometryHandle, RenderBackend, ShaderHandle,
    UniformValue,
};

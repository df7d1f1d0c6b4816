//! Material and shader program interfaces

pub mod material_shader;

pub use material_shader::MaterialShader;

/// Maximum point lights the material shader's uniform arrays accept.
pub const MAX_LIGHT_SOURCES: usize = 8;

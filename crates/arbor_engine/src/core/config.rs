//! Renderer configuration
//!
//! Strongly typed configuration with serde support, loadable from TOML.
//! Applications typically keep a `renderer.toml` next to their assets and
//! hand the parsed config to [`crate::render::Renderer::new`].

use crate::foundation::color::{colors, Color};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read from disk.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file was read but is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Renderer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Application name, used for log messages.
    pub application_name: String,

    /// Root directory for shader assets. Shader sources are located at
    /// `<asset_root>/shaders/<Name>.vshader.glsl` and `.fshader.glsl`.
    pub asset_root: PathBuf,

    /// Name of the material shader program to load at startup.
    pub material_shader: String,

    /// Framebuffer clear color.
    pub clear_color: Color,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            application_name: "arbor".to_string(),
            asset_root: PathBuf::from("assets"),
            material_shader: "Material".to_string(),
            clear_color: colors::BLACK,
        }
    }
}

impl RendererConfig {
    /// Load a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = RendererConfig::from_toml_str(
            r#"
            application_name = "editor"
            asset_root = "game/assets"
            material_shader = "Material"
            clear_color = { r = 20, g = 20, b = 30, a = 255 }
            "#,
        )
        .unwrap();
        assert_eq!(config.application_name, "editor");
        assert_eq!(config.asset_root, PathBuf::from("game/assets"));
        assert_eq!(config.clear_color.b, 30);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = RendererConfig::from_toml_str("application_name = \"demo\"").unwrap();
        assert_eq!(config.material_shader, "Material");
        assert_eq!(config.asset_root, PathBuf::from("assets"));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            RendererConfig::from_toml_str("application_name = "),
            Err(ConfigError::Parse(_))
        ));
    }
}

//! Core engine modules
//!
//! Configuration types shared by applications embedding the renderer.

pub mod config;

pub use config::{ConfigError, RendererConfig};

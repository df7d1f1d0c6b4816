//! # Arbor Engine
//!
//! A batching 3D renderer core: per-object geometry is merged into shared
//! vertex and index buffers on the CPU and flushed to the graphics backend
//! in as few draw calls as possible.
//!
//! ## Features
//!
//! - **Batch Pipeline**: begin/push/end frame protocol with index rebasing
//! - **Pluggable Backends**: object-safe backend seam, headless included
//! - **Single Material Shader**: one GPU program shared by every object
//! - **Drawable Primitives**: cubes, cylinders, meshes, composites
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arbor_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RendererConfig::default();
//!     let backend = Box::new(HeadlessBackend::new());
//!     let mut renderer = Renderer::new(backend, &config)?;
//!
//!     let mut cube = Cube::new(colors::RED);
//!     cube.set_translate(0.0, 1.0, 0.0);
//!
//!     renderer.begin_batch(&Mat4::identity(), Vec3::new(0.0, 2.0, 5.0))?;
//!     Drawable::Cube(cube).push_to(&mut renderer);
//!     renderer.end_batch()?;
//!
//!     println!("{} draw calls", renderer.stats().draw_calls);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;
pub mod drawables;
pub mod foundation;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::RendererConfig,
        drawables::{Cube, Cylinder, Drawable, MeshDrawable, WorldReference},
        foundation::{
            color::{colors, Color},
            math::{Mat4, Vec3},
        },
        render::{
            backends::HeadlessBackend, AmbientLight, DrawLimits, FrameStatistics, LightSource,
            RenderError, RenderResult, Renderer, Vertex, VertexData,
        },
    };
}

//! Graphics backend implementations
//!
//! Contains backend implementations of [`crate::render::RenderBackend`].
//! Window-system backends are external integrations; the headless backend
//! ships with the engine for off-screen runs and the test suite.

pub mod headless;

pub use headless::{DrawCall, HeadlessBackend};

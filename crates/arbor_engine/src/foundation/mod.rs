//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and operations
//! - Color values
//! - Time measurement
//! - Logging utilities

pub mod color;
pub mod logging;
pub mod math;
pub mod time;

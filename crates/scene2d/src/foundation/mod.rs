//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - 2D math types and operations
//! - Rectangle/bounding geometry
//! - Logging utilities

pub mod logging;
pub mod math;
pub mod rect;

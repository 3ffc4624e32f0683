//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like
//! file I/O and other system-level operations.

pub mod resources;

pub use resources::*;

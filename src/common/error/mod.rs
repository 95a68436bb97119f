//! Unified error types.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Axis, Error, Result};

//! Types shared by every stage of the parser.

// Submodule declarations
pub mod error;

// Re-exports for convenience
pub use error::{Axis, Error, Result};

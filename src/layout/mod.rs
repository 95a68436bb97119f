//! Sheet layout: presets, axis patterns and detection.
//!
//! Every faculty publishes the same kind of grid (a time column on the left,
//! group names across the top, one cell block per class slot) but with its own
//! offsets and quirks. [`LayoutConfig`] captures a faculty's preset,
//! [`LayoutDetector`] finds where the axes actually start on a given sheet.

// Submodule declarations
pub mod config;
pub mod detect;
pub mod faculty;
pub mod patterns;

// Re-exports
pub use config::{Layout, LayoutConfig, StartPoints};
pub use detect::{Direction, LayoutDetector, CONFIDENCE_THRESHOLD, SEARCH_WINDOW};
pub use faculty::Faculty;

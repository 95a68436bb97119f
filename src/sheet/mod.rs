//! Grid access over decoded worksheets.
//!
//! This module provides the read side every later stage works against: a
//! [`Worksheet`] trait for decoded sheets, an in-memory [`Sheet`], the
//! [`Workbook`] that orders sheets for parsing, and the merge-aware [`Grid`].
//!
//! # Quick Start
//!
//! ```rust
//! use timetable_sheet::sheet::{CellAddress, Grid, Range, Sheet};
//!
//! let sheet = Sheet::new("Лист1")
//!     .with_cell(5, 2, "1-21б")
//!     .with_merge(Range::from_coords(5, 2, 5, 3));
//! let grid = Grid::new(&sheet);
//!
//! // The right half of the merged header reads as the anchor
//! let cell = grid.resolve(CellAddress::new(5, 3));
//! assert_eq!(cell.text, Some("1-21б"));
//! assert_eq!(cell.addr, CellAddress::new(5, 2));
//! ```

// Submodule declarations
pub mod grid;
pub mod text;
pub mod traits;
pub mod types;
mod workbook;

// Re-exports
pub use grid::Grid;
pub use traits::Worksheet;
pub use types::{Cell, CellAddress, Range};
pub use workbook::{Sheet, Workbook};

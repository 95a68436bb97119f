//! Crate-wide error type.
//!
//! Detection and segmentation failures abort the current sheet attempt and are
//! surfaced as [`Error::LayoutNotFound`]; the multi-sheet flow in
//! [`crate::schedule::ScheduleParser`] treats them as recoverable and moves on
//! to the next sheet. Session text never produces an error.
use std::fmt;

use thiserror::Error;

/// Which axis block a layout search was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The column of class start times.
    Time,
    /// The row of group names above the session block.
    Groups,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Time => f.write_str("time column"),
            Axis::Groups => f.write_str("group row"),
        }
    }
}

/// Main error type for timetable parsing.
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown faculty key or an unusable layout preset
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An axis block could not be located at the required confidence
    #[error("Layout not found: {axis} not detected in sheet '{sheet}'")]
    LayoutNotFound { axis: Axis, sheet: String },

    /// The workbook has no sheets to try
    #[error("Workbook contains no sheets")]
    EmptyWorkbook,

    /// The teacher pattern set could not be compiled
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// IO error while loading a sheet
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether another sheet of the same workbook may still succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::LayoutNotFound { .. })
    }
}

/// Result type for timetable operations.
pub type Result<T> = std::result::Result<T, Error>;

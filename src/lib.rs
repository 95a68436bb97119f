//! Timetable Sheet - A Rust library for reading university timetables from spreadsheets
//!
//! This library turns the weekly class timetable a faculty publishes as a
//! spreadsheet into structured sessions: which group has which class, when,
//! where and with whom. Sheets differ in offsets from faculty to faculty and
//! from week to week, so the axes of each sheet are located heuristically
//! before the grid is read.
//!
//! # Features
//!
//! - **Layout detection**: Finds the time column and group header row by majority vote
//! - **Faculty presets**: Built-in layout configurations for every known faculty, or custom YAML ones
//! - **Merge-aware grid**: Merged cells resolve to their anchor text
//! - **Session text parsing**: Splits cell text into subject, room and teacher ids
//! - **Delimited loader**: Reads CSV/TSV exports into sheets
//!
//! # Example - Parsing a workbook
//!
//! ```no_run
//! use timetable_sheet::pair::{PairTextParser, Teacher};
//! use timetable_sheet::schedule::{ScheduleParser, WeekStart};
//! use timetable_sheet::sheet::text::{load_delimited, DelimitedConfig};
//! use timetable_sheet::sheet::Workbook;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Teacher roster from the caller's storage
//! let roster = vec![Teacher::new(7, "Иванов Иван Иванович")];
//! let pairs = PairTextParser::new(&roster)?;
//!
//! // Sheets exported by the faculty
//! let sheet = load_delimited("week.tsv", &DelimitedConfig::tsv())?;
//! let workbook = Workbook::new(vec![sheet]);
//!
//! let schedule = ScheduleParser::for_faculty_key("ff", &pairs)?
//!     .with_week_start(WeekStart::from_ymd(2025, 9, 1))
//!     .parse_workbook(&workbook)?;
//!
//! for session in &schedule.sessions {
//!     println!("{:?} #{} {} {:?}", session.date, session.number, session.subject, session.groups);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Custom layout
//!
//! ```no_run
//! use timetable_sheet::layout::LayoutConfig;
//! use timetable_sheet::pair::PairTextParser;
//! use timetable_sheet::schedule::ScheduleParser;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LayoutConfig::from_yaml_str(&std::fs::read_to_string("layout.yaml")?)?;
//! let pairs = PairTextParser::without_roster();
//! let parser = ScheduleParser::with_config(config, &pairs)?;
//! # Ok(())
//! # }
//! ```

/// Common types shared across the crate
pub mod common;

/// Layout presets, axis patterns and axis detection
pub mod layout;

/// Session text parsing and teacher patterns
pub mod pair;

/// Day and group segmentation, session extraction and the parsing flow
pub mod schedule;

/// Worksheet access with merge resolution, and the delimited-text loader
pub mod sheet;

// Re-export commonly used types for convenience
pub use common::{Axis, Error, Result};
pub use layout::{Faculty, LayoutConfig};
pub use pair::{PairTextParser, Teacher};
pub use schedule::{Schedule, ScheduleParser, Session, WeekStart};
pub use sheet::{Sheet, Workbook, Worksheet};

//! Schedule extraction.
//!
//! A [`ScheduleParser`] turns one worksheet into a [`Schedule`] in three
//! passes over the grid, each working from the layout resolved for that sheet:
//!
//! - [`DaySegmenter`] splits the time column into day row ranges
//! - [`GroupSegmenter`] maps header names to their column spans
//! - [`SessionExtractor`] reads every day/group/slot cell into a [`Session`]
//!
//! # Examples
//!
//! ```rust
//! use timetable_sheet::pair::PairTextParser;
//! use timetable_sheet::schedule::ScheduleParser;
//! use timetable_sheet::sheet::{Sheet, Workbook};
//!
//! let pairs = PairTextParser::without_roster();
//! let parser = ScheduleParser::for_faculty_key("ff", &pairs)?;
//!
//! let workbook = Workbook::new(vec![Sheet::new("Титул").with_cell(0, 0, "Расписание")]);
//! let err = parser.parse_workbook(&workbook).unwrap_err();
//! assert!(err.is_recoverable());
//! # Ok::<(), timetable_sheet::Error>(())
//! ```

pub mod days;
pub mod extract;
pub mod groups;
pub mod parser;
pub mod types;
pub mod week;

#[cfg(test)]
mod tests;

pub use days::{DaySegmenter, FIRST_CLASS_HOUR};
pub use extract::{SessionExtractor, ROW_SEPARATOR};
pub use groups::GroupSegmenter;
pub use parser::ScheduleParser;
pub use types::{DayRange, GroupColumns, GroupName, GroupSpan, Schedule, Session};
pub use week::WeekStart;

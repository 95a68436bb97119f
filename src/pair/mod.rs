//! Free-text parsing of a single session cell.
//!
//! A cell such as `Матанализ (лекция) Иванов И.И. 305` is split into the
//! referenced teachers (matched against the roster), the room token and the
//! remaining subject text.

pub mod parser;
pub mod roster;

pub use parser::{ParsedPair, PairTextParser, TeacherIds};
pub use roster::{Teacher, TeacherId, TeacherPattern};

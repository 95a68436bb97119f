//! Teacher roster entries and the abbreviated-name patterns built from them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Identifier of a teacher in the external roster.
pub type TeacherId = u32;

/// First parenthesised remark in a roster name, e.g. a former surname.
static NAME_REMARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" ?\(.+?\) ?").expect("Failed to build name remark pattern"));

/// One roster entry: an id and a full "Surname Name Patronymic" name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
}

impl Teacher {
    pub fn new(id: TeacherId, name: impl Into<String>) -> Self {
        Teacher { id, name: name.into() }
    }
}

/// Pattern matching the way a teacher is written in timetable cells.
///
/// Timetables write `Иванов И.И.` (surname, then name and patronymic
/// initials), with an optional space between the initials and an optional
/// final period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherPattern {
    pub id: TeacherId,
    /// Regex source for this teacher, a single capture group
    pub pattern: String,
}

impl TeacherPattern {
    /// Build the pattern for a roster entry.
    ///
    /// Returns `None` for names with fewer than three parts, which cannot be
    /// abbreviated reliably.
    pub fn from_teacher(teacher: &Teacher) -> Option<Self> {
        let name = NAME_REMARK.replacen(&teacher.name, 1, " ");
        let mut parts = name.split_whitespace();

        let surname = parts.next()?;
        let first = parts.next()?.chars().next()?;
        let patronymic = parts.next()?.chars().next()?;

        Some(TeacherPattern {
            id: teacher.id,
            pattern: format!(
                r"({} {}\. ?{}\.?)",
                regex::escape(surname),
                regex::escape(&first.to_string()),
                regex::escape(&patronymic.to_string()),
            ),
        })
    }
}

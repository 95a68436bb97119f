//! Splitting session text into teachers, room and subject.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use smallvec::SmallVec;

use super::roster::{Teacher, TeacherId, TeacherPattern};
use crate::common::Result;

/// Room number with an optional building letter, or a named remote/lab location.
static ROOM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9]{3})(?: ?([а-в]))?|(zoom)|(эиос)|(кванториум)").expect("Failed to build room pattern")
});

/// Empty parentheses, slash separators at either end, and runs of spaces.
static SUBJECT_CLEANUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r" *\(\s*\) *|^(?: */ *)+|(?: */ *)+$| {2,}").expect("Failed to build subject cleanup pattern")
});

/// Compiled size allowed for the teacher alternation; a full roster is large.
const TEACHER_PATTERN_SIZE_LIMIT: usize = 256 * 1024 * 1024;

/// Teacher ids found in one session, in order of appearance.
pub type TeacherIds = SmallVec<[TeacherId; 2]>;

/// What the parser extracts from one session's text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedPair {
    pub subject: String,
    pub room: Option<String>,
    pub teachers: TeacherIds,
}

/// Session text parser for one roster snapshot.
///
/// Building compiles every teacher pattern into a single alternation, which
/// is the expensive part; build once per roster and reuse it for every cell.
/// Parsing never fails: text that matches nothing becomes the subject as is.
///
/// # Examples
///
/// ```rust
/// use timetable_sheet::pair::{PairTextParser, Teacher};
///
/// let parser = PairTextParser::new(&[Teacher::new(7, "Иванов Иван Иванович")])?;
/// let pair = parser.parse("Матанализ Иванов И.И. 305");
///
/// assert_eq!(pair.subject, "Матанализ");
/// assert_eq!(pair.room.as_deref(), Some("305"));
/// assert_eq!(pair.teachers.as_slice(), &[7]);
/// # Ok::<(), timetable_sheet::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PairTextParser {
    teachers: Vec<TeacherPattern>,
    matcher: Option<Regex>,
}

impl PairTextParser {
    /// Build a parser from the roster, keeping roster order.
    pub fn new<'t, I>(roster: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'t Teacher>,
    {
        let teachers: Vec<TeacherPattern> = roster
            .into_iter()
            .filter_map(|teacher| {
                let pattern = TeacherPattern::from_teacher(teacher);
                if pattern.is_none() {
                    log::trace!("teacher {} has no abbreviable name: {:?}", teacher.id, teacher.name);
                }
                pattern
            })
            .collect();

        let matcher = if teachers.is_empty() {
            None
        } else {
            let alternation = teachers
                .iter()
                .map(|t| t.pattern.as_str())
                .collect::<Vec<_>>()
                .join("|");
            Some(
                RegexBuilder::new(&alternation)
                    .size_limit(TEACHER_PATTERN_SIZE_LIMIT)
                    .build()?,
            )
        };

        Ok(PairTextParser { teachers, matcher })
    }

    /// A parser that knows no teachers.
    pub fn without_roster() -> Self {
        Self::default()
    }

    /// Patterns in roster order.
    pub fn patterns(&self) -> &[TeacherPattern] {
        &self.teachers
    }

    /// Split session text into subject, room and teachers.
    pub fn parse(&self, text: &str) -> ParsedPair {
        let (teachers, rest) = self.strip_teachers(text);
        let (room, rest) = strip_room(&rest);

        ParsedPair {
            subject: clean_subject(&rest),
            room,
            teachers,
        }
    }

    /// Teacher ids referenced in `text`, and the text with those references cut out.
    ///
    /// Matches are taken left to right without overlap; when several teachers
    /// match at the same position the one earlier in the roster wins.
    pub fn strip_teachers(&self, text: &str) -> (TeacherIds, String) {
        let Some(matcher) = &self.matcher else {
            return (TeacherIds::new(), text.to_string());
        };

        let mut ids = TeacherIds::new();
        let mut rest = String::with_capacity(text.len());
        let mut last_end = 0;

        for caps in matcher.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            // Group i (1-based) belongs to the i-th roster pattern
            if let Some(index) = (1..caps.len()).find(|&i| caps.get(i).is_some()) {
                ids.push(self.teachers[index - 1].id);
            }
            rest.push_str(&text[last_end..whole.start()]);
            last_end = whole.end();
        }
        rest.push_str(&text[last_end..]);

        (ids, rest)
    }
}

/// First room token in `text`, and the text with it cut out.
pub fn strip_room(text: &str) -> (Option<String>, String) {
    let Some(caps) = ROOM_PATTERN.captures(text) else {
        return (None, text.to_string());
    };
    let Some(whole) = caps.get(0) else {
        return (None, text.to_string());
    };

    let room: String = caps.iter().skip(1).flatten().map(|m| m.as_str()).collect();
    let rest = [&text[..whole.start()], &text[whole.end()..]].concat();

    (Some(room), rest)
}

/// Collapse what is left after teachers and room are cut into a subject.
pub fn clean_subject(text: &str) -> String {
    SUBJECT_CLEANUP.replace_all(text, " ").trim().to_string()
}

//! Schedule output types.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use super::week::WeekStart;
use crate::layout::Faculty;
use crate::pair::TeacherIds;

/// Canonical (lowercased) group name, e.g. `1-21б`.
pub type GroupName = String;

/// One class ("pair") held in one slot for one or more groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Cell text as read from the sheet, split rows joined with ` / `
    pub text: String,
    /// Slot number within the day, starting at 1
    pub number: u32,
    /// Day index from the week start, Monday is 0
    pub day: usize,
    /// Calendar date, when the week start is known
    pub date: Option<NaiveDate>,
    /// Groups attending; never empty
    pub groups: BTreeSet<GroupName>,
    pub subject: String,
    pub room: Option<String>,
    /// Teacher ids in order of appearance in the text
    pub teachers: TeacherIds,
}

impl Session {
    /// Whether `group` attends this session.
    pub fn has_group(&self, group: &str) -> bool {
        self.groups.contains(group)
    }
}

/// Rows of the time column that belong to one day, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayRange {
    pub start: u32,
    pub end: u32,
}

impl DayRange {
    pub const fn new(start: u32, end: u32) -> Self {
        DayRange { start, end }
    }

    /// First row of each slot in this day.
    pub fn slot_rows(&self, rows_per_slot: u32) -> impl Iterator<Item = u32> {
        (self.start..=self.end).step_by(rows_per_slot.max(1) as usize)
    }

    /// Number of grid rows covered.
    pub fn len(&self) -> u32 {
        (self.end + 1).saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Columns one group occupies: `width` columns starting at `col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupSpan {
    pub col: u32,
    pub width: u32,
}

impl GroupSpan {
    /// Columns to read sessions from, one per group step.
    pub fn columns(&self, cols_per_group: u32) -> impl Iterator<Item = u32> {
        (self.col..self.col + self.width).step_by(cols_per_group.max(1) as usize)
    }
}

/// Group names and their column spans, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupColumns {
    entries: Vec<(GroupName, GroupSpan)>,
}

impl GroupColumns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a group's span. A replaced group keeps its position.
    pub fn set(&mut self, name: GroupName, span: GroupSpan) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = span,
            None => self.entries.push((name, span)),
        }
    }

    /// Mutable span of a group.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut GroupSpan> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, span)| span)
    }

    /// Span of a group.
    pub fn get(&self, name: &str) -> Option<GroupSpan> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, span)| *span)
    }

    /// Groups in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, GroupSpan)> {
        self.entries.iter().map(|(n, span)| (n.as_str(), *span))
    }

    /// Group names in order.
    pub fn names(&self) -> Vec<GroupName> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parsed timetable of one faculty for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    /// Faculty preset used, `None` for a custom layout
    pub faculty: Option<Faculty>,
    /// Name of the sheet the schedule was read from
    pub sheet: String,
    pub week_start: Option<WeekStart>,
    /// Distinct group names in header order
    pub groups: Vec<GroupName>,
    /// Sessions in discovery order
    pub sessions: Vec<Session>,
}

impl Schedule {
    /// Sessions attended by `group`.
    pub fn sessions_for<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Session> + 'a {
        self.sessions.iter().filter(move |s| s.has_group(group))
    }

    /// Sessions held on day `day`.
    pub fn sessions_on(&self, day: usize) -> impl Iterator<Item = &Session> {
        self.sessions.iter().filter(move |s| s.day == day)
    }
}

//! Session extraction.
//!
//! Walks every (day, group, slot, column) position of the session block and
//! turns each non-empty cell into a [`Session`]. A cell merged across several
//! groups is read once per group; such reads are folded into one session by
//! keying on the text and the slot row.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{DayRange, GroupColumns, Session};
use super::week::WeekStart;
use crate::layout::LayoutConfig;
use crate::pair::PairTextParser;
use crate::sheet::{CellAddress, Grid, Worksheet};

/// Runs of two or more spaces.
static EXTRA_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("Failed to build space pattern"));

/// Separator between the two rows of a split slot.
pub const ROW_SEPARATOR: &str = " / ";

/// Reads sessions from the session block.
#[derive(Debug)]
pub struct SessionExtractor<'a, 'c, W: ?Sized> {
    grid: Grid<'a, W>,
    config: &'c LayoutConfig,
    parser: &'c PairTextParser,
    week_start: Option<WeekStart>,
}

impl<'a, 'c, W: Worksheet + ?Sized> SessionExtractor<'a, 'c, W> {
    pub fn new(grid: Grid<'a, W>, config: &'c LayoutConfig, parser: &'c PairTextParser) -> Self {
        SessionExtractor {
            grid,
            config,
            parser,
            week_start: None,
        }
    }

    /// Date sessions from this Monday.
    pub fn with_week_start(mut self, week_start: Option<WeekStart>) -> Self {
        self.week_start = week_start;
        self
    }

    /// Sessions in discovery order: day, then group, then slot, then column.
    pub fn extract(&self, days: &[DayRange], groups: &GroupColumns) -> Vec<Session> {
        let pitch = self.config.rows_per_slot.max(1);
        let mut sessions: Vec<Session> = Vec::new();
        let mut seen: HashMap<(String, u32), usize> = HashMap::new();

        for (day, range) in days.iter().enumerate() {
            for (group, span) in groups.iter() {
                for (slot, row) in range.slot_rows(pitch).enumerate() {
                    for col in span.columns(self.config.cols_per_group) {
                        let Some(text) = self.slot_text(CellAddress::new(row, col)) else {
                            continue;
                        };

                        match seen.entry((text, row)) {
                            Entry::Occupied(entry) => {
                                sessions[*entry.get()].groups.insert(group.to_owned());
                            }
                            Entry::Vacant(entry) => {
                                let text = entry.key().0.clone();
                                entry.insert(sessions.len());
                                sessions.push(self.session(text, slot as u32 + 1, day, group));
                            }
                        }
                    }
                }
            }
        }

        sessions
    }

    fn session(&self, text: String, number: u32, day: usize, group: &str) -> Session {
        let pair = self.parser.parse(&text);
        Session {
            number,
            day,
            date: self.week_start.map(|week| week.day(day)),
            groups: BTreeSet::from([group.to_owned()]),
            subject: pair.subject,
            room: pair.room,
            teachers: pair.teachers,
            text,
        }
    }

    /// Text of the slot whose first row is at `addr`.
    ///
    /// With two rows per slot the second row is appended after
    /// [`ROW_SEPARATOR`], unless it is the same merged cell as the first.
    fn slot_text(&self, addr: CellAddress) -> Option<String> {
        let first = self.grid.resolve(addr);
        let mut text = match first.trimmed() {
            Some(top) if self.config.rows_per_slot == 2 => {
                let below = self.grid.resolve(addr.down(1));
                // Unlike a literal join of both rows, a cell merged over the
                // slot is read once instead of producing "X / X"
                match below.trimmed().filter(|_| below.addr != first.addr) {
                    Some(bottom) => format!("{}{}{}", top, ROW_SEPARATOR, bottom),
                    None => top.to_string(),
                }
            }
            Some(top) => top.to_string(),
            None if self.config.rows_per_slot == 2 => self.grid.text(addr.down(1))?.to_string(),
            None => return None,
        };

        if let Some(replacement) = &self.config.replace_extra_spaces {
            text = EXTRA_SPACES.replace_all(&text, replacement.as_ref()).into_owned();
        }
        Some(text)
    }
}

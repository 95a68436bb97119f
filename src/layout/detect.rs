//! Axis block detection.
//!
//! Sheets put their time column and group header row in slightly different
//! places, so instead of trusting fixed coordinates the detector searches a
//! window near the top-left corner. A cell matching the axis pattern is only
//! accepted as the axis start when at least half of the sub-range running from
//! it to the window edge also matches: stray times in titles or notes do not
//! pass, a real axis does even when slots span two rows.

use std::ops::ControlFlow;

use regex::Regex;

use super::config::{Layout, StartPoints};
use super::patterns::{GROUP_PATTERN, TIME_PATTERN};
use crate::common::{Axis, Error, Result};
use crate::sheet::{CellAddress, Grid, Range, Worksheet};

/// Window where axis blocks start on every known sheet: columns A..J, rows 1..17.
pub const SEARCH_WINDOW: Range = Range::from_coords(0, 0, 16, 9);

/// Share of matching cells a candidate's sub-range needs.
pub const CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Row pitch assumed when the rows below the first time do not reveal it.
pub const DEFAULT_ROW_PITCH: u32 = 2;

/// Direction the sub-range of a candidate extends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Down to the bottom of the window (time column)
    Down,
    /// Right to the edge of the window (group row)
    Right,
}

/// Finds the time and group axes of a sheet.
#[derive(Debug)]
pub struct LayoutDetector<'a, W: ?Sized> {
    grid: Grid<'a, W>,
    window: Range,
}

impl<'a, W: Worksheet + ?Sized> LayoutDetector<'a, W> {
    /// Create a detector using [`SEARCH_WINDOW`].
    pub fn new(grid: Grid<'a, W>) -> Self {
        LayoutDetector {
            grid,
            window: SEARCH_WINDOW,
        }
    }

    /// Search a different window.
    pub fn with_window(mut self, window: Range) -> Self {
        self.window = window;
        self
    }

    /// Locate both axes and the row pitch.
    pub fn detect(&self) -> Result<Layout> {
        let times = self
            .find_axis_block(self.window, &TIME_PATTERN, Direction::Down)
            .ok_or_else(|| self.not_found(Axis::Time))?;
        let rows_per_slot = self.row_pitch(times);

        // Group headers sit right of the time column and above its first slot
        if times.row == 0 || times.col >= self.window.end.col {
            return Err(self.not_found(Axis::Groups));
        }
        let group_window = Range::from_coords(self.window.start.row, times.col + 1, times.row - 1, self.window.end.col);
        let groups = self
            .find_axis_block(group_window, &GROUP_PATTERN, Direction::Right)
            .ok_or_else(|| self.not_found(Axis::Groups))?;

        log::debug!(
            "sheet '{}': times at {}, groups at {}, {} row(s) per slot",
            self.grid.name(),
            times,
            groups,
            rows_per_slot
        );

        Ok(Layout {
            start_points: StartPoints {
                times,
                groups,
                pairs: CellAddress::new(times.row, groups.col),
            },
            rows_per_slot,
        })
    }

    /// First cell in `window` (column-major) that starts an axis block.
    ///
    /// A matching cell is accepted when matches in its sub-range, divided by the
    /// number of rows the sub-range spans, reach [`CONFIDENCE_THRESHOLD`]. A
    /// rightward sub-range spans a single row, so any match in a header row is
    /// enough there; the group row is already confined to the rows above the
    /// time column.
    pub fn find_axis_block(&self, window: Range, pattern: &Regex, direction: Direction) -> Option<CellAddress> {
        if window.is_empty() {
            return None;
        }

        let found = self.grid.for_each(window, |cell, addr| {
            if !cell.text.is_some_and(|text| pattern.is_match(text)) {
                return ControlFlow::Continue(());
            }

            let sub_range = match direction {
                Direction::Down => Range::new(addr, CellAddress::new(window.end.row, addr.col)),
                Direction::Right => Range::new(addr, CellAddress::new(addr.row, window.end.col)),
            };

            let mut matches = 0u32;
            let _ = self.grid.for_each(sub_range, |cell, _| {
                if cell.text.is_some_and(|text| pattern.is_match(text)) {
                    matches += 1;
                }
                ControlFlow::<()>::Continue(())
            });

            let ratio = f64::from(matches) / f64::from(sub_range.height());
            if ratio >= CONFIDENCE_THRESHOLD {
                ControlFlow::Break(addr)
            } else {
                ControlFlow::Continue(())
            }
        });

        match found {
            ControlFlow::Break(addr) => Some(addr),
            ControlFlow::Continue(()) => None,
        }
    }

    /// Rows per class slot, probed from the cells below the first time.
    ///
    /// The first of the next two rows holding another time (not just the same
    /// merged cell again) gives the pitch.
    pub fn row_pitch(&self, times: CellAddress) -> u32 {
        (1..=2)
            .find(|&shift| {
                let next = self.grid.resolve(times.down(shift));
                next.addr != times && next.text.is_some_and(|text| TIME_PATTERN.is_match(text))
            })
            .unwrap_or(DEFAULT_ROW_PITCH)
    }

    fn not_found(&self, axis: Axis) -> Error {
        Error::LayoutNotFound {
            axis,
            sheet: self.grid.name().to_string(),
        }
    }
}

//! Day segmentation along the time column.
//!
//! Every day starts with the first class of the morning. The scan walks the
//! time column one slot at a time; a row without a time closes the current
//! day. The last day of the week is often short and may be interrupted by a
//! blank row before its real end, so it is only closed once it spans enough
//! slots.

use log::trace;

use super::types::DayRange;
use crate::layout::LayoutConfig;
use crate::layout::patterns::{is_time, leading_hour};
use crate::sheet::{CellAddress, Grid, Worksheet};

/// Hour of the first class of a day.
pub const FIRST_CLASS_HOUR: u32 = 8;

/// Splits the time column into per-day row ranges.
#[derive(Debug)]
pub struct DaySegmenter<'a, 'c, W: ?Sized> {
    grid: Grid<'a, W>,
    config: &'c LayoutConfig,
}

impl<'a, 'c, W: Worksheet + ?Sized> DaySegmenter<'a, 'c, W> {
    /// `config` must carry the layout resolved for this sheet.
    pub fn new(grid: Grid<'a, W>, config: &'c LayoutConfig) -> Self {
        DaySegmenter { grid, config }
    }

    /// Row ranges of each day in order, Monday first.
    pub fn segment(&self) -> Vec<DayRange> {
        let pitch = self.config.rows_per_slot.max(1);
        let times = self.config.start_points.times;
        let last_row = self.grid.bounds().end.row;
        let min_rows = self.config.min_last_day_slots.saturating_mul(pitch);

        let mut days: Vec<DayRange> = Vec::new();
        let mut last_ok = times.row;
        let mut row = times.row;

        while row <= last_row {
            let addr = CellAddress::new(row, times.col);
            if let Some(hour) = self.slot_hour(addr) {
                if hour == Some(FIRST_CLASS_HOUR) {
                    // A morning slot right after the last one also ends the previous day
                    if let Some(previous) = days.last_mut() {
                        previous.end = previous.end.max(last_ok + pitch - 1);
                    }
                    days.push(DayRange::new(row, row));
                }
                last_ok = row;
                row += pitch;
                continue;
            }

            let index = days.len().wrapping_sub(1);
            let Some(day) = days.last_mut() else {
                trace!("row {} before the first day, skipped", row + 1);
                row += 1;
                continue;
            };

            if self.config.trailing_day_index == Some(index) {
                if self.config.min_last_day_slots > 0 && (row - day.start).saturating_add(pitch) < min_rows {
                    last_ok = row;
                    row += pitch;
                    continue;
                }
                day.end = last_ok + pitch - 1;
                return days;
            }

            day.end = last_ok + pitch - 1;
            row += 1;
        }

        if let Some(day) = days.last_mut() {
            day.end = day.end.max(last_ok + pitch - 1);
        }
        days
    }

    /// `Some(hour)` when the slot at `addr` holds a time; the inner value is
    /// the hour of that time when it can be read.
    fn slot_hour(&self, addr: CellAddress) -> Option<Option<u32>> {
        let cell = self.grid.resolve(addr);
        let text = cell.trimmed().filter(|t| is_time(t))?;

        if !self.config.parted_time {
            return Some(leading_hour(text));
        }
        let hour = match self.grid.resolve(addr.right(1)).text {
            Some(minutes) => leading_hour(&format!("{}:{}", text, minutes)),
            None => leading_hour(text),
        };
        Some(hour)
    }
}

//! Week start dates.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Monday that a timetable week starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekStart(NaiveDate);

impl WeekStart {
    /// Monday of the week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let offset = i64::from(date.weekday().num_days_from_monday());
        WeekStart(date - Duration::days(offset))
    }

    /// Monday of the week containing the given calendar day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::containing)
    }

    /// The Monday itself.
    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Date of the day `offset` days into the week.
    pub fn day(self, offset: usize) -> NaiveDate {
        self.0 + Duration::days(offset as i64)
    }
}

impl From<NaiveDate> for WeekStart {
    fn from(date: NaiveDate) -> Self {
        Self::containing(date)
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

//! Schedule parsing flow: detect, segment, extract.

use log::{debug, error, warn};

use super::days::DaySegmenter;
use super::extract::SessionExtractor;
use super::groups::GroupSegmenter;
use super::types::Schedule;
use super::week::WeekStart;
use crate::common::{Axis, Error, Result};
use crate::layout::{Faculty, Layout, LayoutConfig, LayoutDetector, SEARCH_WINDOW};
use crate::pair::PairTextParser;
use crate::sheet::{Grid, Range, Workbook, Worksheet};

/// Parses timetable sheets of one faculty.
///
/// The parser holds the faculty preset, the optional reference week and a
/// borrowed [`PairTextParser`] built from the current teacher roster.
/// Parsing is pure: the same sheet always yields the same [`Schedule`].
///
/// # Examples
///
/// ```rust
/// use timetable_sheet::pair::PairTextParser;
/// use timetable_sheet::schedule::{ScheduleParser, WeekStart};
/// use timetable_sheet::sheet::Range;
/// use timetable_sheet::sheet::text::{parse_delimited, DelimitedConfig};
///
/// let tsv = "\
/// \t\tГрафик\n\
/// \t\t1-21б\t1-22б\n\
/// Пн\t8.00\tФизика 305\tХимия\n\
/// \t9.40\tАлгебра\n";
/// let sheet = parse_delimited(tsv, &DelimitedConfig::tsv());
///
/// let pairs = PairTextParser::without_roster();
/// let parser = ScheduleParser::for_faculty_key("pp_zb", &pairs)?
///     .with_week_start(WeekStart::from_ymd(2025, 9, 1))
///     .with_search_window(Range::from_coords(0, 0, 4, 4));
/// let schedule = parser.parse_sheet(&sheet)?;
///
/// assert_eq!(schedule.groups, vec!["1-21б", "1-22б"]);
/// assert_eq!(schedule.sessions.len(), 3);
/// assert_eq!(schedule.sessions[0].room.as_deref(), Some("305"));
/// # Ok::<(), timetable_sheet::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleParser<'p> {
    faculty: Option<Faculty>,
    config: LayoutConfig,
    pairs: &'p PairTextParser,
    week_start: Option<WeekStart>,
    window: Range,
}

impl<'p> ScheduleParser<'p> {
    /// Parser using a built-in faculty preset.
    pub fn new(faculty: Faculty, pairs: &'p PairTextParser) -> Self {
        ScheduleParser {
            faculty: Some(faculty),
            config: faculty.layout(),
            pairs,
            week_start: None,
            window: SEARCH_WINDOW,
        }
    }

    /// Parser for a faculty key such as `"ff"` or `"gumin_zb"`.
    pub fn for_faculty_key(key: &str, pairs: &'p PairTextParser) -> Result<Self> {
        let faculty: Faculty = key.parse()?;
        Ok(Self::new(faculty, pairs))
    }

    /// Parser using a custom preset.
    pub fn with_config(config: LayoutConfig, pairs: &'p PairTextParser) -> Result<Self> {
        config.validate()?;
        Ok(ScheduleParser {
            faculty: None,
            config,
            pairs,
            week_start: None,
            window: SEARCH_WINDOW,
        })
    }

    /// Date sessions from the week containing this day.
    pub fn with_week_start(mut self, week_start: impl Into<Option<WeekStart>>) -> Self {
        self.week_start = week_start.into();
        self
    }

    /// Search the axes in a different window.
    pub fn with_search_window(mut self, window: Range) -> Self {
        self.window = window;
        self
    }

    pub fn faculty(&self) -> Option<Faculty> {
        self.faculty
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Parse the first sheet of `workbook` that matches the layout.
    ///
    /// Sheets are tried in [`Workbook::scan_order`]. A sheet whose layout is
    /// not found is skipped; if no sheet matches, the first error is returned.
    pub fn parse_workbook<W: Worksheet>(&self, workbook: &Workbook<W>) -> Result<Schedule> {
        if workbook.sheets().is_empty() {
            return Err(Error::EmptyWorkbook);
        }
        self.warn_if_undated();

        let mut first_error: Option<Error> = None;
        for index in workbook.scan_order() {
            let sheet = &workbook.sheets()[index];
            match self.detect_and_extract(sheet) {
                Ok(schedule) => return Ok(schedule),
                Err(e) if e.is_recoverable() => {
                    warn!("Sheet '{}' skipped: {}", sheet.name(), e);
                    first_error.get_or_insert(e);
                }
                Err(e) => return Err(e),
            }
        }

        error!(
            "No sheet of {} matches the {} layout",
            workbook.sheet_names().join(", "),
            self.layout_name()
        );
        Err(first_error.unwrap_or(Error::EmptyWorkbook))
    }

    /// Parse one sheet, detecting where its axes start.
    pub fn parse_sheet<W: Worksheet + ?Sized>(&self, sheet: &W) -> Result<Schedule> {
        self.warn_if_undated();
        self.detect_and_extract(sheet)
    }

    /// Parse one sheet at the preset's own coordinates, without detection.
    pub fn parse_fixed<W: Worksheet + ?Sized>(&self, sheet: &W) -> Result<Schedule> {
        self.warn_if_undated();
        self.extract(Grid::new(sheet), &self.config)
    }

    fn detect_and_extract<W: Worksheet + ?Sized>(&self, sheet: &W) -> Result<Schedule> {
        let grid = Grid::new(sheet);
        debug!("Trying sheet '{}' with the {} layout", grid.name(), self.layout_name());

        let layout: Layout = LayoutDetector::new(grid).with_window(self.window).detect()?;
        let config = self.config.with_layout(layout);
        self.extract(grid, &config)
    }

    fn extract<W: Worksheet + ?Sized>(&self, grid: Grid<'_, W>, config: &LayoutConfig) -> Result<Schedule> {
        let days = DaySegmenter::new(grid, config).segment();
        if days.is_empty() {
            return Err(Error::LayoutNotFound {
                axis: Axis::Time,
                sheet: grid.name().to_string(),
            });
        }

        let groups = GroupSegmenter::new(grid, config).segment();
        if groups.is_empty() {
            return Err(Error::LayoutNotFound {
                axis: Axis::Groups,
                sheet: grid.name().to_string(),
            });
        }

        let sessions = SessionExtractor::new(grid, config, self.pairs)
            .with_week_start(self.week_start)
            .extract(&days, &groups);
        debug!(
            "Sheet '{}': {} day(s), {} group(s), {} session(s)",
            grid.name(),
            days.len(),
            groups.len(),
            sessions.len()
        );

        Ok(Schedule {
            faculty: self.faculty,
            sheet: grid.name().to_string(),
            week_start: self.week_start,
            groups: groups.names(),
            sessions,
        })
    }

    fn warn_if_undated(&self) {
        if self.week_start.is_none() {
            warn!("No week start given for the {} schedule, sessions will have no dates", self.layout_name());
        }
    }

    fn layout_name(&self) -> &'static str {
        self.faculty.map_or("custom", Faculty::as_str)
    }
}

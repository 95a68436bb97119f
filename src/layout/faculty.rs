//! Built-in faculty presets.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use phf::phf_map;
use serde::Serialize;

use super::config::{LayoutConfig, StartPoints};
use crate::common::Error;
use crate::sheet::CellAddress;

/// Faculty and study-mode combinations that publish timetables.
///
/// `_zb` and `_zm` are the part-time bachelor and master programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Faculty {
    Ff,
    Iittien,
    Gumin,
    Pp,
    College,
    CollegeZ,
    GuminZb,
    GuminZm,
    IittienZb,
    IittienZm,
    FfZb,
    FfZm,
    PpZb,
    PpZm,
}

/// Compile-time lookup table from faculty key to faculty.
static FACULTY_KEYS: phf::Map<&'static str, Faculty> = phf_map! {
    "ff" => Faculty::Ff,
    "iittien" => Faculty::Iittien,
    "gumin" => Faculty::Gumin,
    "pp" => Faculty::Pp,
    "college" => Faculty::College,
    "college_z" => Faculty::CollegeZ,
    "gumin_zb" => Faculty::GuminZb,
    "gumin_zm" => Faculty::GuminZm,
    "iittien_zb" => Faculty::IittienZb,
    "iittien_zm" => Faculty::IittienZm,
    "ff_zb" => Faculty::FfZb,
    "ff_zm" => Faculty::FfZm,
    "pp_zb" => Faculty::PpZb,
    "pp_zm" => Faculty::PpZm,
};

const fn start_points(times: (u32, u32), groups: (u32, u32)) -> StartPoints {
    StartPoints {
        times: CellAddress::new(times.0, times.1),
        groups: CellAddress::new(groups.0, groups.1),
        pairs: CellAddress::new(times.0, groups.1),
    }
}

// Full-time sheets: two rows per slot and a Saturday of at least four slots.
fn full_time() -> LayoutConfig {
    LayoutConfig {
        start_points: start_points((8, 1), (5, 2)),
        rows_per_slot: 2,
        min_last_day_slots: 4,
        ..LayoutConfig::DEFAULT
    }
}

fn gumin() -> LayoutConfig {
    LayoutConfig {
        start_points: start_points((10, 2), (6, 3)),
        ..full_time()
    }
}

fn pp() -> LayoutConfig {
    LayoutConfig {
        replace_extra_spaces: Some(Cow::Borrowed(" / ")),
        ..full_time()
    }
}

fn part_time(times: (u32, u32), groups: (u32, u32), replace_extra_spaces: Option<&'static str>) -> LayoutConfig {
    LayoutConfig {
        start_points: start_points(times, groups),
        replace_extra_spaces: replace_extra_spaces.map(Cow::Borrowed),
        ..LayoutConfig::DEFAULT
    }
}

impl Faculty {
    /// Every known faculty, in table order.
    pub const ALL: [Faculty; 14] = [
        Faculty::Ff,
        Faculty::Iittien,
        Faculty::Gumin,
        Faculty::Pp,
        Faculty::College,
        Faculty::CollegeZ,
        Faculty::GuminZb,
        Faculty::GuminZm,
        Faculty::IittienZb,
        Faculty::IittienZm,
        Faculty::FfZb,
        Faculty::FfZm,
        Faculty::PpZb,
        Faculty::PpZm,
    ];

    /// Short key used in file paths and storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Faculty::Ff => "ff",
            Faculty::Iittien => "iittien",
            Faculty::Gumin => "gumin",
            Faculty::Pp => "pp",
            Faculty::College => "college",
            Faculty::CollegeZ => "college_z",
            Faculty::GuminZb => "gumin_zb",
            Faculty::GuminZm => "gumin_zm",
            Faculty::IittienZb => "iittien_zb",
            Faculty::IittienZm => "iittien_zm",
            Faculty::FfZb => "ff_zb",
            Faculty::FfZm => "ff_zm",
            Faculty::PpZb => "pp_zb",
            Faculty::PpZm => "pp_zm",
        }
    }

    /// Look up a faculty by key.
    pub fn from_key(key: &str) -> Option<Faculty> {
        FACULTY_KEYS.get(key).copied()
    }

    /// Whether this is a part-time program.
    pub fn is_part_time(self) -> bool {
        !matches!(
            self,
            Faculty::Ff | Faculty::Iittien | Faculty::Gumin | Faculty::Pp | Faculty::College
        )
    }

    /// Layout preset for this faculty's sheets.
    pub fn layout(self) -> LayoutConfig {
        match self {
            Faculty::Ff
            | Faculty::Iittien
            | Faculty::College
            | Faculty::CollegeZ
            | Faculty::IittienZb
            | Faculty::IittienZm
            | Faculty::PpZb
            | Faculty::PpZm => full_time(),
            Faculty::Gumin => gumin(),
            Faculty::Pp => pp(),
            Faculty::GuminZb => part_time((9, 1), (7, 2), Some(" / ")),
            Faculty::GuminZm => part_time((8, 1), (6, 2), Some(" / ")),
            Faculty::FfZb | Faculty::FfZm => part_time((7, 1), (5, 2), None),
        }
    }
}

impl FromStr for Faculty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Faculty::from_key(s)
            .ok_or_else(|| Error::Configuration(format!("no layout configured for faculty \"{}\"", s)))
    }
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

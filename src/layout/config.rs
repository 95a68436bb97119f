//! Per-faculty layout presets.
//!
//! A [`LayoutConfig`] holds the coordinates and thresholds that drive
//! detection and segmentation for one faculty's sheets. Built-in presets live
//! in [`super::Faculty`]; custom ones can be deserialized (see
//! [`LayoutConfig::from_yaml_str`]).

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};
use crate::sheet::CellAddress;

/// Where each block of the sheet starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StartPoints {
    /// First cell of the time column
    pub times: CellAddress,
    /// First cell of the group header row
    pub groups: CellAddress,
    /// Top-left cell of the session block
    pub pairs: CellAddress,
}

/// Coordinates and thresholds for one faculty's sheets.
///
/// # Examples
///
/// ```rust
/// use timetable_sheet::layout::LayoutConfig;
///
/// let config = LayoutConfig::default();
/// assert_eq!(config.rows_per_slot, 2);
/// assert_eq!(config.trailing_day_index, Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Expected block starts; replaced by detected ones when detection runs
    pub start_points: StartPoints,
    /// Grid rows per class slot
    pub rows_per_slot: u32,
    /// Grid columns per group step
    pub cols_per_group: u32,
    /// Minimum number of slots the trailing day must span before a blank row
    /// may close it; `0` closes it at the first blank row
    pub min_last_day_slots: u32,
    /// Empty columns tolerated between two group headers
    pub max_empty_cols: u32,
    /// Hours and minutes of a slot sit in two adjacent cells
    pub parted_time: bool,
    /// Replacement for runs of two or more spaces in session text
    pub replace_extra_spaces: Option<Cow<'static, str>>,
    /// Day index the short trailing day rule applies to; `None` disables it
    pub trailing_day_index: Option<usize>,
}

/// Largest accepted `rows_per_slot` and `cols_per_group`.
pub const MAX_PITCH: u32 = 16;

/// Largest accepted `min_last_day_slots` and `max_empty_cols`.
pub const MAX_SPAN: u32 = 32;

impl LayoutConfig {
    /// Defaults every preset starts from.
    pub const DEFAULT: LayoutConfig = LayoutConfig {
        start_points: StartPoints {
            times: CellAddress::new(0, 0),
            groups: CellAddress::new(0, 0),
            pairs: CellAddress::new(0, 0),
        },
        rows_per_slot: 2,
        cols_per_group: 1,
        min_last_day_slots: 1,
        max_empty_cols: 2,
        parted_time: false,
        replace_extra_spaces: None,
        trailing_day_index: Some(5),
    };

    /// Check the preset can drive a scan.
    pub fn validate(&self) -> Result<()> {
        if self.rows_per_slot == 0 {
            return Err(Error::Configuration("rows_per_slot must be at least 1".into()));
        }
        if self.cols_per_group == 0 {
            return Err(Error::Configuration("cols_per_group must be at least 1".into()));
        }
        if self.rows_per_slot > MAX_PITCH || self.cols_per_group > MAX_PITCH {
            return Err(Error::Configuration(format!(
                "rows_per_slot and cols_per_group must not exceed {}",
                MAX_PITCH
            )));
        }
        if self.min_last_day_slots > MAX_SPAN || self.max_empty_cols > MAX_SPAN {
            return Err(Error::Configuration(format!(
                "min_last_day_slots and max_empty_cols must not exceed {}",
                MAX_SPAN
            )));
        }
        Ok(())
    }

    /// Whether the short trailing day rule is active.
    #[inline]
    pub fn enforces_trailing_day(&self) -> bool {
        self.min_last_day_slots > 0 && self.trailing_day_index.is_some()
    }

    /// Copy of this preset with detected coordinates applied.
    pub fn with_layout(&self, layout: Layout) -> LayoutConfig {
        LayoutConfig {
            start_points: layout.start_points,
            rows_per_slot: layout.rows_per_slot,
            ..self.clone()
        }
    }

    /// Load a preset from YAML. Missing keys take their default values.
    ///
    /// ```rust
    /// use timetable_sheet::layout::LayoutConfig;
    ///
    /// let yaml = "rows_per_slot: 1\nmin_last_day_slots: 0\nreplace_extra_spaces: ' / '\n";
    /// let config = LayoutConfig::from_yaml_str(yaml)?;
    /// assert_eq!(config.rows_per_slot, 1);
    /// assert_eq!(config.replace_extra_spaces.as_deref(), Some(" / "));
    /// assert_eq!(config.max_empty_cols, 2);
    /// # Ok::<(), timetable_sheet::Error>(())
    /// ```
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: LayoutConfig = serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Configuration(format!("invalid layout preset: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Block starts and row pitch resolved for one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub start_points: StartPoints,
    pub rows_per_slot: u32,
}

impl Layout {
    /// The layout a preset expects, for sheets that match it exactly.
    pub fn from_config(config: &LayoutConfig) -> Self {
        Layout {
            start_points: config.start_points,
            rows_per_slot: config.rows_per_slot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_zero_pitch() {
        let config = LayoutConfig {
            rows_per_slot: 0,
            ..LayoutConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));

        let config = LayoutConfig {
            cols_per_group: 0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_with_layout_keeps_thresholds() {
        let base = LayoutConfig {
            min_last_day_slots: 4,
            ..LayoutConfig::default()
        };
        let layout = Layout {
            start_points: StartPoints {
                times: CellAddress::new(9, 1),
                groups: CellAddress::new(6, 2),
                pairs: CellAddress::new(9, 2),
            },
            rows_per_slot: 1,
        };

        let merged = base.with_layout(layout);
        assert_eq!(merged.start_points.times, CellAddress::new(9, 1));
        assert_eq!(merged.rows_per_slot, 1);
        assert_eq!(merged.min_last_day_slots, 4);
        assert_eq!(Layout::from_config(&merged), layout);
    }

    #[test]
    fn test_trailing_day_rule_switches() {
        assert!(LayoutConfig::default().enforces_trailing_day());
        let off = LayoutConfig {
            trailing_day_index: None,
            ..LayoutConfig::default()
        };
        assert!(!off.enforces_trailing_day());
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_preset_with_start_points() {
        let yaml = r#"
start_points:
  times: { row: 8, col: 1 }
  groups: { row: 5, col: 2 }
  pairs: { row: 8, col: 2 }
min_last_day_slots: 4
trailing_day_index: null
"#;
        let config = LayoutConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.start_points.groups, CellAddress::new(5, 2));
        assert_eq!(config.min_last_day_slots, 4);
        assert_eq!(config.trailing_day_index, None);
        assert_eq!(config.rows_per_slot, 2);
    }

    #[test]
    fn test_validate_rejects_oversized_values() {
        let config = LayoutConfig {
            min_last_day_slots: u32::MAX,
            ..LayoutConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));

        let config = LayoutConfig {
            rows_per_slot: MAX_PITCH + 1,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LayoutConfig {
            max_empty_cols: u32::MAX,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LayoutConfig {
            rows_per_slot: MAX_PITCH,
            min_last_day_slots: MAX_SPAN,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_start_points_are_origin() {
        let points = StartPoints::default();
        assert_eq!(points.times, CellAddress::new(0, 0));
        assert_eq!(points.groups, CellAddress::default());
        assert_eq!(points.pairs, CellAddress::new(0, 0));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_preset_rejects_oversized_pitch() {
        let err = LayoutConfig::from_yaml_str("rows_per_slot: 4294967295\n").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_preset_rejects_zero_pitch() {
        let err = LayoutConfig::from_yaml_str("cols_per_group: 0\n").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}

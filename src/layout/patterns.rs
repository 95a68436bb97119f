//! Text patterns that identify the time and group axes.

use once_cell::sync::Lazy;
use regex::Regex;

/// A class start time such as `8.00`, `08:30` or `8.00-9.30`.
///
/// Group 1 is the hour without leading zeros. The time must not be glued to
/// other digits or dots on either side, so dates like `01.09.2025` do not match.
pub static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^.0-9])0*([0-9]{1,2})[:.][0-9]{1,2}(?:$|[^.0-9])").expect("Failed to build time pattern")
});

/// A group code such as `1-21б`, `121 м`, `2-11б/а` standing alone in a cell.
///
/// Groups 1..=4 are the course/number, the program letter and the optional
/// subgroup separator and suffix.
pub static GROUP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|\s)([0-9]-?[0-9][0-9]) ?([мбс])(?: ?([-/]) ?([а-я0-9]))?(?:\s|$)")
        .expect("Failed to build group pattern")
});

/// Whether `text` contains a class time.
#[inline]
pub fn is_time(text: &str) -> bool {
    TIME_PATTERN.is_match(text)
}

/// Hour of the first class time in `text`.
pub fn leading_hour(text: &str) -> Option<u32> {
    TIME_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|hour| hour.as_str().parse().ok())
}

/// Whether `text` contains a group code.
#[inline]
pub fn is_group(text: &str) -> bool {
    GROUP_PATTERN.is_match(text)
}

/// Canonical group name: the captured parts concatenated and lowercased.
///
/// `"1-21 Б"` and `"1-21б"` both normalize to `"1-21б"`.
pub fn group_name(text: &str) -> Option<String> {
    let caps = GROUP_PATTERN.captures(text)?;
    let name: String = caps
        .iter()
        .skip(1)
        .flatten()
        .map(|part| part.as_str())
        .collect();
    Some(name.to_lowercase())
}

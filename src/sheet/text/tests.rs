//! Tests for delimited text loading

use super::*;
use crate::sheet::{Range, Worksheet};
use std::io::Write;

#[test]
fn test_tsv_sheet_layout() {
    let tsv = "Расписание\n\t\t1-21б\t1-22б\n\t8.00\tФизика\n";
    let sheet = parse_delimited(tsv, &DelimitedConfig::tsv().with_sheet_name("Неделя"));

    assert_eq!(sheet.name(), "Неделя");
    assert_eq!(sheet.cell_count(), 5);
    assert_eq!(sheet.cell_text(CellAddress::new(0, 0)), Some("Расписание"));
    assert_eq!(sheet.cell_text(CellAddress::new(1, 3)), Some("1-22б"));
    assert_eq!(sheet.cell_text(CellAddress::new(2, 1)), Some("8.00"));
    assert_eq!(sheet.cell_text(CellAddress::new(2, 0)), None);
    assert_eq!(sheet.dimensions(), Some(Range::from_coords(0, 0, 2, 3)));
}

#[test]
fn test_blank_lines_advance_rows() {
    let sheet = parse_delimited("a\n\n\nb", &DelimitedConfig::default());
    assert_eq!(sheet.cell_text(CellAddress::new(3, 0)), Some("b"));
}

#[test]
fn test_trim_whitespace() {
    let config = DelimitedConfig::semicolon().with_trim_whitespace(true);
    let sheet = parse_delimited("  a  ;   ;b", &config);
    assert_eq!(sheet.cell_text(CellAddress::new(0, 0)), Some("a"));
    assert_eq!(sheet.cell_text(CellAddress::new(0, 1)), None);
    assert_eq!(sheet.cell_text(CellAddress::new(0, 2)), Some("b"));
}

#[test]
fn test_load_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "8.00,\"Химия 210\"\r\n9.40,Биология").unwrap();
    file.flush().unwrap();

    let sheet = load_delimited(file.path(), &DelimitedConfig::default()).unwrap();
    assert_eq!(sheet.cell_text(CellAddress::new(0, 1)), Some("Химия 210"));
    assert_eq!(sheet.cell_text(CellAddress::new(1, 1)), Some("Биология"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_delimited("/nonexistent/timetable.csv", &DelimitedConfig::default()).unwrap_err();
    assert!(matches!(err, crate::common::Error::Io(_)));
}

//! Addressing types for spreadsheet grids.
//!
//! All coordinates are 0-based, matching the row/column indices stored in
//! workbook files rather than the 1-based labels shown to users.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Zero-based cell coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellAddress {
    /// Row index (0-based)
    pub row: u32,
    /// Column index (0-based)
    pub col: u32,
}

impl CellAddress {
    /// Create a new address.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Address `rows` below this one, in the same column.
    #[inline]
    pub const fn down(self, rows: u32) -> Self {
        Self::new(self.row + rows, self.col)
    }

    /// Address `cols` to the right of this one, in the same row.
    #[inline]
    pub const fn right(self, cols: u32) -> Self {
        Self::new(self.row, self.col + cols)
    }

    /// Convert a 0-based column index to spreadsheet letters (0 -> "A", 26 -> "AA").
    pub fn column_letters(col: u32) -> String {
        let mut letters = String::new();
        let mut col = col + 1;

        while col > 0 {
            col -= 1;
            let letter = ((col % 26) as u8 + b'A') as char;
            letters.insert(0, letter);
            col /= 26;
        }

        letters
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_letters(self.col), self.row + 1)
    }
}

/// Inclusive rectangle of cells.
///
/// Used both for scan windows and for merge regions, where `start` is the
/// anchor cell that holds the region's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: CellAddress,
    pub end: CellAddress,
}

impl Range {
    /// Create a range from its corners.
    pub const fn new(start: CellAddress, end: CellAddress) -> Self {
        Self { start, end }
    }

    /// Create a range from `(row, col)` corner pairs.
    pub const fn from_coords(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        Self::new(
            CellAddress::new(start_row, start_col),
            CellAddress::new(end_row, end_col),
        )
    }

    /// Whether `addr` lies inside the rectangle.
    #[inline]
    pub fn contains(&self, addr: CellAddress) -> bool {
        self.start.row <= addr.row
            && self.start.col <= addr.col
            && self.end.row >= addr.row
            && self.end.col >= addr.col
    }

    /// Number of rows covered; zero for an inverted range.
    pub fn height(&self) -> u32 {
        (self.end.row + 1).saturating_sub(self.start.row)
    }

    /// Number of columns covered; zero for an inverted range.
    pub fn width(&self) -> u32 {
        (self.end.col + 1).saturating_sub(self.start.col)
    }

    /// Whether the range covers no cells.
    pub fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// A resolved cell: its text, if any, and the address the text came from.
///
/// For a cell inside a merge region `addr` is the region's anchor, not the
/// address that was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a> {
    pub addr: CellAddress,
    pub text: Option<&'a str>,
}

impl<'a> Cell<'a> {
    /// An empty cell at `addr`.
    pub const fn empty(addr: CellAddress) -> Self {
        Self { addr, text: None }
    }

    /// Cell text with surrounding whitespace removed, `None` when blank.
    pub fn trimmed(&self) -> Option<&'a str> {
        self.text.map(str::trim).filter(|t| !t.is_empty())
    }

    /// Whether the cell carries no text at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
    }
}

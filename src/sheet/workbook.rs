//! In-memory worksheets and workbooks.

use std::collections::HashMap;

use super::traits::Worksheet;
use super::types::{CellAddress, Range};

/// Fully materialized worksheet: text cells plus merge regions.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    name: String,
    cells: HashMap<CellAddress, String>,
    merges: Vec<Range>,
    max_row: u32,
    max_col: u32,
}

impl Sheet {
    /// Create an empty sheet.
    pub fn new(name: impl Into<String>) -> Self {
        Sheet {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Store `text` at `addr`, replacing any previous value.
    pub fn set_cell(&mut self, addr: CellAddress, text: impl Into<String>) {
        self.grow_to(addr);
        self.cells.insert(addr, text.into());
    }

    /// Builder form of [`Sheet::set_cell`].
    pub fn with_cell(mut self, row: u32, col: u32, text: impl Into<String>) -> Self {
        self.set_cell(CellAddress::new(row, col), text);
        self
    }

    /// Declare a merge region; its value lives at `range.start`.
    pub fn add_merge(&mut self, range: Range) {
        self.grow_to(range.end);
        self.merges.push(range);
    }

    /// Builder form of [`Sheet::add_merge`].
    pub fn with_merge(mut self, range: Range) -> Self {
        self.add_merge(range);
        self
    }

    /// Number of stored cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn grow_to(&mut self, addr: CellAddress) {
        self.max_row = self.max_row.max(addr.row);
        self.max_col = self.max_col.max(addr.col);
    }
}

impl Worksheet for Sheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn cell_text(&self, addr: CellAddress) -> Option<&str> {
        self.cells.get(&addr).map(String::as_str)
    }

    fn merges(&self) -> &[Range] {
        &self.merges
    }

    fn dimensions(&self) -> Option<Range> {
        if self.cells.is_empty() && self.merges.is_empty() {
            None
        } else {
            Some(Range::from_coords(0, 0, self.max_row, self.max_col))
        }
    }
}

/// Ordered set of worksheets as handed over by the file decoder.
///
/// `active_tab` is the tab that was selected when the file was saved, when the
/// decoder could read it.
#[derive(Debug, Clone)]
pub struct Workbook<W = Sheet> {
    sheets: Vec<W>,
    active_tab: Option<usize>,
}

impl<W: Worksheet> Workbook<W> {
    /// Create a workbook without an active tab hint.
    pub fn new(sheets: Vec<W>) -> Self {
        Workbook {
            sheets,
            active_tab: None,
        }
    }

    /// Set the active tab hint.
    pub fn with_active_tab(mut self, index: usize) -> Self {
        self.active_tab = Some(index);
        self
    }

    /// Active tab hint, if any.
    pub fn active_tab(&self) -> Option<usize> {
        self.active_tab
    }

    /// All worksheets in file order.
    pub fn sheets(&self) -> &[W] {
        &self.sheets
    }

    /// Sheet names in file order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name()).collect()
    }

    /// Sheet indices in the order they should be attempted.
    ///
    /// File order, except that a valid active tab swaps places with the first
    /// sheet.
    pub fn scan_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.sheets.len()).collect();
        if let Some(active) = self.active_tab.filter(|&i| i < order.len()) {
            order.swap(0, active);
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_cover_cells_and_merges() {
        let sheet = Sheet::new("s")
            .with_cell(2, 1, "a")
            .with_merge(Range::from_coords(4, 0, 5, 3));
        assert_eq!(sheet.dimensions(), Some(Range::from_coords(0, 0, 5, 3)));
        assert_eq!(Sheet::new("empty").dimensions(), None);
    }

    #[test]
    fn test_scan_order_prefers_active_tab() {
        let book = Workbook::new(vec![Sheet::new("a"), Sheet::new("b"), Sheet::new("c")]);
        assert_eq!(book.scan_order(), vec![0, 1, 2]);

        let book = book.with_active_tab(2);
        assert_eq!(book.scan_order(), vec![2, 1, 0]);
        assert_eq!(book.sheet_names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_scan_order_ignores_out_of_range_tab() {
        let book = Workbook::new(vec![Sheet::new("a")]).with_active_tab(4);
        assert_eq!(book.scan_order(), vec![0]);
    }
}

//! Merge-aware cell addressing over a worksheet.

use std::ops::ControlFlow;

use super::traits::Worksheet;
use super::types::{Cell, CellAddress, Range};

/// Uniform, read-only view used by every detection and extraction stage.
///
/// Cell lookups fall back to the anchor of the enclosing merge region, so a
/// session written once across several merged columns is seen in each of them.
#[derive(Debug)]
pub struct Grid<'a, W: ?Sized> {
    sheet: &'a W,
}

impl<W: ?Sized> Clone for Grid<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: ?Sized> Copy for Grid<'_, W> {}

impl<'a, W: Worksheet + ?Sized> Grid<'a, W> {
    /// Wrap a worksheet.
    pub fn new(sheet: &'a W) -> Self {
        Grid { sheet }
    }

    /// Name of the underlying worksheet.
    pub fn name(&self) -> &'a str {
        self.sheet.name()
    }

    /// Bounding range of the sheet; a single empty cell for an empty sheet.
    pub fn bounds(&self) -> Range {
        self.sheet
            .dimensions()
            .unwrap_or(Range::from_coords(0, 0, 0, 0))
    }

    /// Resolve `addr` to its cell.
    ///
    /// Returns the cell stored at `addr` if present, otherwise the anchor cell
    /// of the first merge region containing `addr`, otherwise an empty cell.
    pub fn resolve(&self, addr: CellAddress) -> Cell<'a> {
        if let Some(text) = self.sheet.cell_text(addr) {
            return Cell {
                addr,
                text: Some(text),
            };
        }

        match self.merge_anchor(addr) {
            Some(anchor) => Cell {
                addr: anchor,
                text: self.sheet.cell_text(anchor),
            },
            None => Cell::empty(addr),
        }
    }

    /// Trimmed, non-blank text at `addr` after merge resolution.
    pub fn text(&self, addr: CellAddress) -> Option<&'a str> {
        self.resolve(addr).trimmed()
    }

    /// Visit stored cells of `range` column by column (each column top to
    /// bottom before the next), stopping at the first `Break`.
    ///
    /// Only cells physically present in the sheet are visited; merge regions
    /// are not expanded.
    pub fn for_each<B, F>(&self, range: Range, mut visitor: F) -> ControlFlow<B>
    where
        F: FnMut(Cell<'a>, CellAddress) -> ControlFlow<B>,
    {
        for col in range.start.col..=range.end.col {
            for row in range.start.row..=range.end.row {
                let addr = CellAddress::new(row, col);
                if let Some(text) = self.sheet.cell_text(addr) {
                    if let ControlFlow::Break(b) = visitor(Cell { addr, text: Some(text) }, addr) {
                        return ControlFlow::Break(b);
                    }
                }
            }
        }
        ControlFlow::Continue(())
    }

    fn merge_anchor(&self, addr: CellAddress) -> Option<CellAddress> {
        self.sheet
            .merges()
            .iter()
            .find(|merge| merge.contains(addr))
            .map(|merge| merge.start)
    }
}

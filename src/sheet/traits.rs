//! Traits for spreadsheet abstraction.

use super::types::{CellAddress, Range};

/// Read-only view of one decoded worksheet.
///
/// Implemented by [`super::Sheet`] and by whatever decoder the caller uses for
/// `.xls`/`.xlsx` files. Lookups are raw: merge regions are reported but not
/// applied here; [`super::Grid`] does the resolution.
pub trait Worksheet {
    /// Get the worksheet name.
    fn name(&self) -> &str;

    /// Text of the cell stored exactly at `addr`, without merge resolution.
    fn cell_text(&self, addr: CellAddress) -> Option<&str>;

    /// Declared merge regions.
    fn merges(&self) -> &[Range];

    /// Bounding range of the used area, `None` for an empty sheet.
    fn dimensions(&self) -> Option<Range>;
}

impl<W: Worksheet + ?Sized> Worksheet for &W {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn cell_text(&self, addr: CellAddress) -> Option<&str> {
        (**self).cell_text(addr)
    }

    fn merges(&self) -> &[Range] {
        (**self).merges()
    }

    fn dimensions(&self) -> Option<Range> {
        (**self).dimensions()
    }
}

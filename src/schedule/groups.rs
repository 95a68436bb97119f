//! Group segmentation along the header row.

use log::trace;

use super::types::{GroupColumns, GroupSpan};
use crate::layout::LayoutConfig;
use crate::layout::patterns::{group_name, is_group};
use crate::sheet::{CellAddress, Grid, Worksheet};

/// Maps group names on the header row to the columns they occupy.
#[derive(Debug)]
pub struct GroupSegmenter<'a, 'c, W: ?Sized> {
    grid: Grid<'a, W>,
    config: &'c LayoutConfig,
}

impl<'a, 'c, W: Worksheet + ?Sized> GroupSegmenter<'a, 'c, W> {
    /// `config` must carry the layout resolved for this sheet.
    pub fn new(grid: Grid<'a, W>, config: &'c LayoutConfig) -> Self {
        GroupSegmenter { grid, config }
    }

    /// Scan the header row from the first group column.
    ///
    /// Adjacent columns with the same name widen that group. Gaps of up to
    /// `max_empty_cols` columns are skipped; a longer gap ends the row.
    pub fn segment(&self) -> GroupColumns {
        let step = self.config.cols_per_group.max(1);
        let start = self.config.start_points.groups;
        let last_col = self.grid.bounds().end.col;

        let mut groups = GroupColumns::new();
        let mut previous: Option<String> = None;
        let mut col = start.col;

        while col <= last_col {
            let addr = CellAddress::new(start.row, col);
            match self.grid.resolve(addr).text.and_then(group_name) {
                Some(name) => {
                    match groups.get_mut(&name).filter(|_| previous.as_deref() == Some(name.as_str())) {
                        Some(span) => span.width += step,
                        None => {
                            groups.set(name.clone(), GroupSpan { col, width: step });
                            previous = Some(name);
                        }
                    }
                    col += step;
                }
                None => match self.next_header(addr) {
                    Some(next) => col = next,
                    None => {
                        trace!("group row ends at column {}", CellAddress::column_letters(col));
                        break;
                    }
                },
            }
        }

        groups
    }

    /// Column of the next group header within the tolerated gap.
    fn next_header(&self, from: CellAddress) -> Option<u32> {
        (1..=self.config.max_empty_cols)
            .map(|offset| from.right(offset))
            .find(|addr| self.grid.resolve(*addr).text.is_some_and(is_group))
            .map(|addr| addr.col)
    }
}

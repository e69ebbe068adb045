//! Page window arithmetic for the list view.
//!
//! The window is never stored: it is recomputed from the item count, the number of
//! visible rows and the selected index every time a list is drawn.

use crate::core::error::{GitBrowserError, Result};
use std::ops::Range;

/// Position of the selection within a paged list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: usize,
    pub page_count: usize,
    /// Index of the first item on the page.
    pub start: usize,
}

impl Page {
    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        self.page + 1 >= self.page_count
    }

    /// Indices of the items shown on this page.
    pub fn range(&self, item_count: usize, visible_item_count: usize) -> Range<usize> {
        let end = (self.start + visible_item_count).min(item_count);
        self.start.min(end)..end
    }
}

/// Compute the page containing `selected_index`.
///
/// Fails with [`GitBrowserError::ZeroPageSize`] when no row is visible.
pub fn pagination(
    item_count: usize,
    visible_item_count: usize,
    selected_index: usize,
) -> Result<Page> {
    if visible_item_count == 0 {
        return Err(GitBrowserError::ZeroPageSize);
    }
    let start = selected_index - selected_index % visible_item_count;
    Ok(Page {
        page: start / visible_item_count,
        page_count: item_count.div_ceil(visible_item_count),
        start,
    })
}

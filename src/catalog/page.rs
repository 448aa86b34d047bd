//! "Load more" pagination.
//!
//! The storefront never jumps between pages. It shows the first N items and a
//! button that grows N by one page. A `Page` is a view of that state.

/// Items the product grid starts with, and grows by.
pub const GRID_PAGE_SIZE: usize = 8;

/// Items the search results page starts with, and grows by.
pub const SEARCH_PAGE_SIZE: usize = 12;

/// The visible prefix of a result list.
#[derive(Debug, Clone)]
pub struct Page<'a, T> {
    /// The items currently shown.
    pub items: &'a [T],
    /// Total items available.
    pub total: usize,
    /// Whether a "load more" button is shown.
    pub has_more: bool,
}

impl<'a, T> Page<'a, T> {
    /// The first `visible` items of `all`.
    pub fn of(all: &'a [T], visible: usize) -> Self {
        let shown = visible.min(all.len());
        Self {
            items: &all[..shown],
            total: all.len(),
            has_more: visible < all.len(),
        }
    }

    /// "Showing 8 of 20 products"
    pub fn summary(&self) -> String {
        format!("Showing {} of {} products", self.items.len(), self.total)
    }
}

/// Visible count after pressing "load more" once.
pub fn load_more(visible: usize, page_size: usize) -> usize {
    visible.saturating_add(page_size)
}

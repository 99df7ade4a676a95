//! Page arithmetic for the employee table.

use std::ops::Range;

/// Page counts at or below this are listed without compression.
pub const MAX_UNCOMPRESSED_PAGES: usize = 7;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Entry in the rendered page sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Current page (1-based) over a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    total_items: usize,
}

impl Pagination {
    /// Creates pagination on page 1 with no items.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    #[must_use]
    pub fn with_total_items(mut self, total_items: usize) -> Self {
        self.set_total_items(total_items);
        self
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Updates item count, pulling the current page back into range.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.page = self.page.clamp(1, self.total_pages().max(1));
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    #[must_use]
    pub const fn contains_page(&self, page: usize) -> bool {
        page >= 1 && page <= self.total_pages()
    }

    /// Moves to `page` if it exists. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        if !self.contains_page(page) || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Index range of the current page within the full item list.
    #[must_use]
    pub fn item_range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// Page sequence to display, with ellipsis compression for long runs.
    #[must_use]
    pub fn page_items(&self) -> Vec<PageItem> {
        let total = self.total_pages();
        let current = self.page;

        if total <= MAX_UNCOMPRESSED_PAGES {
            return (1..=total).map(PageItem::Page).collect();
        }

        let mut items = Vec::with_capacity(MAX_UNCOMPRESSED_PAGES);
        if current <= 3 {
            items.extend((1..=5).map(PageItem::Page));
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total));
        } else if current >= total - 2 {
            items.push(PageItem::Page(1));
            items.push(PageItem::Ellipsis);
            items.extend((total - 4..=total).map(PageItem::Page));
        } else {
            items.push(PageItem::Page(1));
            items.push(PageItem::Ellipsis);
            items.extend((current - 1..=current + 1).map(PageItem::Page));
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total));
        }
        items
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

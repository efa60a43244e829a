//! Pagination
//!
//! Page slicing for the filtered view plus the page-bar model consumed by
//! the listing UI.

use crate::constants::MAX_VISIBLE_PAGES;

/// Number of pages needed for `len` rows (`0` when there are no rows)
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Rows of 1-based `page`
///
/// Out-of-range pages (including page 0) yield an empty slice.
pub fn paginate<T>(filtered: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let Some(start) = (page - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= filtered.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(filtered.len());
    &filtered[start..end]
}

/// 1-based `(first, last)` row numbers for a "Showing X-Y of N" label
///
/// An empty result gives `(0, 0)`.
pub fn visible_range(page: usize, page_size: usize, len: usize) -> (usize, usize) {
    let page = page.max(1);
    let first = (page - 1)
        .saturating_mul(page_size)
        .saturating_add(1)
        .min(len);
    let last = page.saturating_mul(page_size).min(len);
    (first, last)
}

/// One slot in the page bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page-bar layout
///
/// Up to seven pages are listed in full. Beyond that the bar shows page 1,
/// an ellipsis when `current > 4`, the window `current-1..=current+1`, an
/// ellipsis when `current < total-3`, and the last page.
pub fn page_buttons(current: usize, total: usize) -> Vec<PageItem> {
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let mut items = vec![PageItem::Page(1)];
    if current > 4 {
        items.push(PageItem::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    items.extend((start..=end).map(PageItem::Page));

    if current + 3 < total {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

/// Pagination model for one filtered view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
    total_items: usize,
    page_size: usize,
}

impl Pagination {
    /// Create a pagination model; `current_page` is clamped into range
    pub fn new(current_page: usize, page_size: usize, total_items: usize) -> Self {
        let total_pages = total_pages(total_items, page_size);
        Self {
            current_page: current_page.clamp(1, total_pages.max(1)),
            total_pages,
            total_items,
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn can_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// The bar is hidden when everything fits on one page
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn buttons(&self) -> Vec<PageItem> {
        page_buttons(self.current_page, self.total_pages)
    }

    pub fn visible_range(&self) -> (usize, usize) {
        visible_range(self.current_page, self.page_size, self.total_items)
    }
}

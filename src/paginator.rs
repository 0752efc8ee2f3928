//! Pagination state for the product listing.
//!
//! This component calculates page windows and renders the page indicator.
//! It does not render rows itself; the listing asks it for slice bounds and
//! applies them to the filtered rows.
//!
//! Unlike a general-purpose pager, an empty result set has **zero** pages: no
//! page is current, both controls are disabled and the indicator shows the
//! no-results message instead of a page number.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};

/// Key bindings for moving between pages.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }
}

/// A paginator model.
///
/// `page` is 0-indexed; everything user-facing (the indicator and
/// [`Model::current_page`]) is 1-indexed.
///
/// # Examples
///
/// ```rust
/// use product_table::paginator::Model;
///
/// let mut paginator = Model::new().with_per_page(5).with_total_items(6);
/// assert_eq!(paginator.total_pages, 2);
/// assert_eq!(paginator.view(), "Page 1 of 2");
/// assert!(paginator.prev_disabled());
///
/// paginator.next_page();
/// assert_eq!(paginator.get_slice_bounds(6), (5, 6));
/// assert!(paginator.next_disabled());
///
/// paginator.set_total_items(0);
/// assert_eq!(paginator.current_page(), None);
/// assert_eq!(paginator.view(), "No products found");
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The current page, 0-indexed.
    pub page: usize,
    /// The number of items per page.
    pub per_page: usize,
    /// The total number of pages; zero when there is nothing to show.
    pub total_pages: usize,
    /// Indicator format; the first `%d` is the page, the second the total.
    pub page_format: String,
    /// Indicator text when there are no pages.
    pub no_results: String,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    /// Five items per page, no items, English indicator texts.
    fn default() -> Self {
        Self {
            page: 0,
            per_page: crate::config::DEFAULT_PAGE_SIZE,
            total_pages: 0,
            page_format: "Page %d of %d".to_string(),
            no_results: "No products found".to_string(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a paginator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total number of items and recalculates pages (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the number of items per page (builder pattern).
    ///
    /// Values below 1 are clamped to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Sets the indicator texts (builder pattern).
    pub fn with_labels(mut self, page_format: &str, no_results: &str) -> Self {
        self.page_format = page_format.to_string();
        self.no_results = no_results.to_string();
        self
    }

    /// Calculates total pages from an item count.
    ///
    /// `ceil(items / per_page)`, so zero items give zero pages. If the
    /// current page falls out of range it moves to the last page.
    ///
    /// ```rust
    /// use product_table::paginator::Model;
    ///
    /// let mut paginator = Model::new().with_per_page(5);
    /// paginator.set_total_items(10);
    /// assert_eq!(paginator.total_pages, 2);
    /// paginator.set_total_items(11);
    /// assert_eq!(paginator.total_pages, 3);
    /// paginator.set_total_items(0);
    /// assert_eq!(paginator.total_pages, 0);
    /// ```
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = items.div_ceil(self.per_page);
        if self.page >= self.total_pages {
            self.page = self.total_pages.saturating_sub(1);
        }
    }

    /// The current page, 1-indexed, or `None` when there are no pages.
    pub fn current_page(&self) -> Option<usize> {
        (self.total_pages > 0).then_some(self.page + 1)
    }

    /// Number of items on the current page.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        if total_items == 0 {
            return 0;
        }
        let (start, end) = self.get_slice_bounds(total_items);
        end - start
    }

    /// Slice bounds `[start, end)` of the current page for `length` items.
    ///
    /// ```rust
    /// use product_table::paginator::Model;
    ///
    /// let items: Vec<u32> = (1..=12).collect();
    /// let mut paginator = Model::new().with_per_page(5).with_total_items(items.len());
    /// paginator.page = 2;
    /// let (start, end) = paginator.get_slice_bounds(items.len());
    /// assert_eq!(&items[start..end], &[11, 12]);
    /// ```
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Moves to the previous page; no-op on the first page.
    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
        }
    }

    /// Moves to the next page; no-op on the last page or with no pages.
    pub fn next_page(&mut self) {
        if self.total_pages > 0 && !self.on_last_page() {
            self.page += 1;
        }
    }

    /// True on the first page.
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// True on the last page, or when there are no pages.
    pub fn on_last_page(&self) -> bool {
        self.page + 1 >= self.total_pages
    }

    /// The "previous" control is disabled on page 1 and when there are no pages.
    pub fn prev_disabled(&self) -> bool {
        self.total_pages == 0 || self.on_first_page()
    }

    /// The "next" control is disabled on the last page and when there are no pages.
    pub fn next_disabled(&self) -> bool {
        self.total_pages == 0 || self.on_last_page()
    }

    /// Handles the previous/next key bindings.
    ///
    /// Returns true if the page changed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        let before = self.page;
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            }
        }
        before != self.page
    }

    /// The page indicator text.
    pub fn view(&self) -> String {
        match self.current_page() {
            Some(page) => self
                .page_format
                .replacen("%d", &page.to_string(), 1)
                .replacen("%d", &self.total_pages.to_string(), 1),
            None => self.no_results.clone(),
        }
    }
}

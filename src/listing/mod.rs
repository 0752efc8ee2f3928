//! Searchable, paginated product listing.
//!
//! The listing owns the full row set, the current search term and the
//! pagination state. Every change goes through one of its handlers:
//!
//! - [`Model::on_search_changed`] recomputes the filtered view and returns to
//!   page 1.
//! - [`Model::render_page`] shows exactly one page window of the filtered
//!   rows and hides every other row.
//! - [`Model::on_previous`] / [`Model::on_next`] move one page, guarding the
//!   first and last page themselves even though the matching controls are
//!   disabled there.
//!
//! [`Model::update`] wires these handlers to key messages for bubbletea-rs
//! applications, and [`Model::view`] renders the search box, the visible rows
//! and the pager line.
//!
//! Deletes are confirmed before they reach the host. With a [`Confirm`]
//! installed through [`Model::with_confirm`] the answer is taken on the spot;
//! otherwise the listing shows the prompt itself and waits for the next key.
//!
//! # Examples
//!
//! ```rust
//! use product_table::config::Config;
//! use product_table::listing::Model;
//! use product_table::table::{Column, Model as Table, Row};
//!
//! let rows = ["A", "B", "C", "D", "E", "F"]
//!     .iter()
//!     .map(|n| Row::new(vec![n.to_string()]))
//!     .collect();
//! let table = Table::new(vec![Column::new("Name")], rows);
//! let mut listing = Model::new(table, Config::default()).unwrap();
//!
//! assert_eq!(listing.total_pages(), 2);
//! assert_eq!(listing.indicator(), "Page 1 of 2");
//! assert!(listing.prev_disabled());
//!
//! listing.on_next();
//! assert_eq!(listing.visible_rows().len(), 1);
//! assert!(listing.next_disabled());
//!
//! listing.on_search_changed("zzz");
//! assert_eq!(listing.indicator(), "No products found");
//! assert!(listing.visible_rows().is_empty());
//! ```

mod filtering;
mod keys;
mod rendering;
mod style;

#[cfg(test)]
mod tests;

pub use filtering::matching_indices;
pub use keys::ListingKeyMap;
pub use style::{ListingStyles, NEXT_LABEL, PREV_LABEL};

use crate::config::Config;
use crate::confirm::{Activation, Confirm, DeleteAction, DeleteGuard};
use crate::error::Result;
use crate::paginator::Model as Paginator;
use crate::table::{self, Row};
use crate::textinput::{self, Model as TextInput};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use tracing::{debug, trace, warn};

/// Sent when a delete was confirmed; the host carries out the deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteMsg(pub DeleteAction);

/// The table filter paginator.
pub struct Model {
    table: table::Model,
    paginator: Paginator,
    search: TextInput,
    guard: DeleteGuard,
    confirm: Option<Box<dyn Confirm + Send>>,
    pending: Option<DeleteAction>,
    filtered: Vec<usize>,
    term: String,
    cursor: usize,
    /// Key bindings other than page navigation.
    pub keymap: ListingKeyMap,
    /// Pager line and help styles.
    pub styles: ListingStyles,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("rows", &self.table.len())
            .field("term", &self.term)
            .field("filtered", &self.filtered.len())
            .field("page", &self.paginator.current_page())
            .field("total_pages", &self.paginator.total_pages)
            .field("cursor", &self.cursor)
            .field("pending", &self.pending)
            .finish()
    }
}

impl Model {
    /// Captures the rows and shows page 1 of the unfiltered view.
    ///
    /// Fails if the configuration is invalid or the table has no column
    /// titled `config.name_column`; the listing cannot work without either.
    pub fn new(mut table: table::Model, config: Config) -> Result<Self> {
        config.validate()?;
        table.set_name_column(&config.name_column)?;

        let paginator = Paginator::new()
            .with_per_page(config.page_size)
            .with_labels(&config.page_format, &config.no_results)
            .with_total_items(table.len());
        let filtered = (0..table.len()).collect();

        let mut model = Self {
            table,
            paginator,
            search: textinput::new().with_placeholder("type to filter by name"),
            guard: DeleteGuard::with_prompt(config.delete_prompt),
            confirm: None,
            pending: None,
            filtered,
            term: String::new(),
            cursor: 0,
            keymap: ListingKeyMap::default(),
            styles: ListingStyles::default(),
        };
        model.render_page(1);
        Ok(model)
    }

    /// Installs the capability asked before delete actions (builder pattern).
    ///
    /// Without one, the delete key puts the prompt in the view and the next
    /// key press answers it.
    pub fn with_confirm(mut self, confirm: impl Confirm + Send + 'static) -> Self {
        self.confirm = Some(Box::new(confirm));
        self
    }

    /// Shows page `page` (1-indexed) of the filtered rows.
    ///
    /// Exactly the filtered rows with index in
    /// `[(page - 1) * page_size, page * page_size)` stay visible; every other
    /// row, filtered out or not, is hidden. With no pages at all the indicator
    /// switches to the no-results text and nothing is shown. Pages outside
    /// `1..=total_pages` are clamped.
    pub fn render_page(&mut self, page: usize) {
        self.table.hide_all();
        self.cursor = 0;

        let total = self.paginator.total_pages;
        if total == 0 {
            self.sync_bindings();
            trace!("render: no results");
            return;
        }

        let clamped = page.clamp(1, total);
        if clamped != page {
            warn!(page, total, "page out of range, clamped to {clamped}");
        }
        self.paginator.page = clamped - 1;

        let (start, end) = self.paginator.get_slice_bounds(self.filtered.len());
        for &row in &self.filtered[start..end] {
            self.table.set_visible(row, true);
        }
        self.sync_bindings();
        trace!(page = clamped, total, start, end, "render page");
    }

    /// Goes back one page; no-op on the first page or with no results.
    pub fn on_previous(&mut self) {
        match self.paginator.current_page() {
            Some(page) if page > 1 => self.render_page(page - 1),
            _ => {}
        }
    }

    /// Goes forward one page; no-op on the last page or with no results.
    pub fn on_next(&mut self) {
        match self.paginator.current_page() {
            Some(page) if page < self.paginator.total_pages => self.render_page(page + 1),
            _ => {}
        }
    }

    // Disabled controls also disable their keys.
    fn sync_bindings(&mut self) {
        let prev = !self.prev_disabled();
        let next = !self.next_disabled();
        self.paginator.keymap.prev_page.set_enabled(prev);
        self.paginator.keymap.next_page.set_enabled(next);
        let has_rows = !self.page_rows().is_empty();
        self.keymap.delete.set_enabled(has_rows);
        self.keymap.cursor_up.set_enabled(has_rows);
        self.keymap.cursor_down.set_enabled(has_rows);
    }

    /// The current page, or `None` when nothing matches.
    pub fn current_page(&self) -> Option<usize> {
        self.paginator.current_page()
    }

    /// Number of pages of the filtered view; zero when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.paginator.per_page
    }

    /// Page indicator text, e.g. `"Page 1 of 2"`.
    pub fn indicator(&self) -> String {
        self.paginator.view()
    }

    /// Whether the "previous" control is disabled.
    pub fn prev_disabled(&self) -> bool {
        self.paginator.prev_disabled()
    }

    /// Whether the "next" control is disabled.
    pub fn next_disabled(&self) -> bool {
        self.paginator.next_disabled()
    }

    /// The term the filtered view was computed from.
    pub fn search_term(&self) -> &str {
        &self.term
    }

    /// The underlying table, including hidden rows.
    pub fn table(&self) -> &table::Model {
        &self.table
    }

    /// Row-set indices of the filtered view, in table order.
    pub fn filtered_indices(&self) -> &[usize] {
        &self.filtered
    }

    /// Rows matching the search term, on any page.
    pub fn filtered_rows(&self) -> Vec<&Row> {
        self.filtered
            .iter()
            .filter_map(|&i| self.table.row(i))
            .collect()
    }

    /// The rows currently shown, in table order.
    pub fn visible_rows(&self) -> Vec<&Row> {
        self.table
            .visible_indices()
            .into_iter()
            .filter_map(|i| self.table.row(i))
            .collect()
    }

    /// Row-set indices of the current page window.
    fn page_rows(&self) -> &[usize] {
        if self.paginator.total_pages == 0 {
            return &[];
        }
        let (start, end) = self.paginator.get_slice_bounds(self.filtered.len());
        &self.filtered[start..end]
    }

    /// Row-set index of the row under the cursor.
    pub fn selected_index(&self) -> Option<usize> {
        self.page_rows().get(self.cursor).copied()
    }

    /// The row under the cursor.
    pub fn selected_row(&self) -> Option<&Row> {
        self.selected_index().and_then(|i| self.table.row(i))
    }

    /// Moves the cursor up one row within the page.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one row within the page.
    pub fn cursor_down(&mut self) {
        let last = self.page_rows().len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
    }

    /// The delete action for the selected row, if any row is shown.
    pub fn delete_action(&self) -> Option<DeleteAction> {
        let row = self.selected_index()?;
        Some(DeleteAction {
            row,
            key: self.table.row(row).and_then(|r| r.key.clone()),
            name: self.table.name(row).to_string(),
        })
    }

    /// Asks `confirm` before deleting the selected row.
    ///
    /// Rows are never removed here; a confirmed action is handed back for the
    /// host to carry out.
    pub fn request_delete<C: Confirm + ?Sized>(&self, confirm: &mut C) -> Activation {
        match self.delete_action() {
            Some(action) => self.guard.activate(confirm, action),
            None => Activation::Cancelled,
        }
    }

    /// The delete waiting for a yes/no key, if the prompt is showing.
    pub fn pending_delete(&self) -> Option<&DeleteAction> {
        self.pending.as_ref()
    }

    /// The guard in front of delete actions.
    pub fn delete_guard(&self) -> &DeleteGuard {
        &self.guard
    }

    /// Routes a message to the matching handler.
    ///
    /// While the search input is focused, keys edit the term and every change
    /// of the value calls [`Model::on_search_changed`]. Otherwise the paginator
    /// keys turn pages, the cursor keys move within the page, `/` focuses the
    /// search and the delete key runs the confirmation. A confirmed delete
    /// returns a command that yields [`DeleteMsg`].
    ///
    /// While a delete prompt is showing, the next key answers it: the confirm
    /// key accepts and any other key declines.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if let Some(action) = self.pending.take() {
            let answer = self.keymap.confirm.matches(key_msg);
            let mut reply = |_: &str| answer;
            return self.finish_delete(&mut reply, action);
        }

        if self.search.focused() {
            if self.keymap.blur_search.matches(key_msg) {
                self.search.blur();
            } else if self.search.update(msg) {
                let term = self.search.value();
                self.on_search_changed(&term);
            }
            return None;
        }

        if self.keymap.focus_search.matches(key_msg) {
            return self.search.focus();
        }
        if self.paginator.keymap.prev_page.matches(key_msg) {
            self.on_previous();
        } else if self.paginator.keymap.next_page.matches(key_msg) {
            self.on_next();
        } else if self.keymap.cursor_up.matches(key_msg) {
            self.cursor_up();
        } else if self.keymap.cursor_down.matches(key_msg) {
            self.cursor_down();
        } else if self.keymap.delete.matches(key_msg) {
            let action = self.delete_action()?;
            let Some(mut confirm) = self.confirm.take() else {
                debug!(row = action.row, "delete awaiting confirmation");
                self.pending = Some(action);
                return None;
            };
            let cmd = self.finish_delete(confirm.as_mut(), action);
            self.confirm = Some(confirm);
            return cmd;
        }
        None
    }

    fn finish_delete<C: Confirm + ?Sized>(
        &self,
        confirm: &mut C,
        action: DeleteAction,
    ) -> Option<Cmd> {
        match self.guard.activate(confirm, action) {
            Activation::Proceed(action) => {
                let cmd: Cmd = Box::pin(async move { Some(Box::new(DeleteMsg(action)) as Msg) });
                Some(cmd)
            }
            Activation::Cancelled => None,
        }
    }
}

impl Component for Model {
    /// Focuses the search input.
    fn focus(&mut self) -> Option<Cmd> {
        self.search.focus()
    }

    fn blur(&mut self) {
        self.search.blur();
    }

    fn focused(&self) -> bool {
        self.search.focused()
    }
}

//! Search-term filtering.
//!
//! A row matches when its product name contains the term, both compared in
//! lowercase. Rows without a name cell have an empty name, so they only match
//! the empty term. The result keeps table order.

use super::Model;
use crate::table;
use tracing::debug;

/// Indices of the rows whose name contains `term`, case-insensitively.
pub fn matching_indices(table: &table::Model, term: &str) -> Vec<usize> {
    let needle = term.to_lowercase();
    (0..table.len())
        .filter(|&index| table.name(index).to_lowercase().contains(&needle))
        .collect()
}

impl Model {
    /// Recomputes the filtered view for a new search term.
    ///
    /// Always returns to page 1 of the new results, whatever page was shown
    /// before. Any term is valid; a term that matches nothing leaves the
    /// listing in its empty state.
    pub fn on_search_changed(&mut self, term: &str) {
        self.term = term.to_string();
        self.filtered = matching_indices(&self.table, term);
        self.paginator.page = 0;
        self.paginator.set_total_items(self.filtered.len());
        debug!(
            term,
            matches = self.filtered.len(),
            pages = self.paginator.total_pages,
            "search changed"
        );
        self.render_page(1);
    }
}

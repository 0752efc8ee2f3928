//! Key bindings for the listing.
//!
//! Page navigation keys live on the paginator; this map covers everything
//! else: moving the row cursor, entering and leaving the search box,
//! deleting the selected product and answering the delete prompt.

use crate::key::{self, KeyMap};

#[derive(Debug, Clone)]
pub struct ListingKeyMap {
    pub cursor_up: key::Binding,
    pub cursor_down: key::Binding,
    /// Moves focus into the search input.
    pub focus_search: key::Binding,
    /// Leaves the search input, keeping the current term.
    pub blur_search: key::Binding,
    pub delete: key::Binding,
    /// Accepts the delete prompt; any other key declines it.
    pub confirm: key::Binding,
}

impl Default for ListingKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::new_binding(vec![
                key::with_keys_str(&["up", "k"]),
                key::with_help("↑/k", "up"),
            ]),
            cursor_down: key::new_binding(vec![
                key::with_keys_str(&["down", "j"]),
                key::with_help("↓/j", "down"),
            ]),
            focus_search: key::new_binding(vec![
                key::with_keys_str(&["/"]),
                key::with_help("/", "search"),
            ]),
            blur_search: key::new_binding(vec![
                key::with_keys_str(&["esc", "enter"]),
                key::with_help("esc", "done"),
            ]),
            delete: key::new_binding(vec![
                key::with_keys_str(&["d", "delete"]),
                key::with_help("d", "delete"),
            ]),
            confirm: key::new_binding(vec![
                key::with_keys_str(&["y", "Y"]),
                key::with_help("y", "confirm"),
            ]),
        }
    }
}

impl KeyMap for ListingKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.cursor_up, &self.cursor_down, &self.focus_search, &self.delete]
    }
}

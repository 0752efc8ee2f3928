//! # product-table
//!
//! A searchable, paginated product table for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications, with a confirmation prompt in front of delete actions.
//!
//! The rows are supplied once, when the listing is built. Typing in the
//! search box filters them by product name (case-insensitive substring) and
//! the result is shown five rows at a time with previous/next controls and a
//! `Page 1 of 3` indicator.
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`listing::Model`] | Filter + pagination over a product table |
//! | [`table::Model`] | Columns, rows and per-row visibility |
//! | [`paginator::Model`] | Page arithmetic and the page indicator |
//! | [`textinput::Model`] | The search box |
//! | [`confirm::DeleteGuard`] | Asks before a delete proceeds |
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use product_table::prelude::*;
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct App {
//!     listing: Listing,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let json = r#"[{"id": 1, "nome": "Apple", "loginuser": "ana", "qtde": 2, "preco": 1.5}]"#;
//!         let table = product::table_from_json(json).unwrap();
//!         let listing = Listing::new(table, Config::default()).unwrap();
//!         (Self { listing }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.listing.update(&msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.listing.view()
//!     }
//! }
//! ```

pub mod config;
pub mod confirm;
pub mod error;
pub mod key;
pub mod listing;
pub mod paginator;
pub mod product;
pub mod table;
pub mod textinput;

use bubbletea_rs::Cmd;

/// Components that can take keyboard focus.
///
/// A focused component receives key input and renders its active state; a
/// blurred one ignores input.
///
/// ```rust
/// use product_table::prelude::*;
///
/// let mut input = textinput::new();
/// assert!(!input.focused());
/// input.focus();
/// assert!(input.focused());
/// input.blur();
/// assert!(!input.focused());
/// ```
pub trait Component {
    /// Gives the component focus. May return a command to run on focus.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus.
    fn blur(&mut self);

    /// Whether the component has focus.
    fn focused(&self) -> bool;
}

pub use config::Config;
pub use confirm::{Activation, Confirm, DeleteAction, DeleteGuard, TerminalConfirm};
pub use error::{Error, Result};
pub use listing::{DeleteMsg, Model as Listing};
pub use paginator::Model as Paginator;
pub use table::Model as Table;
pub use textinput::Model as TextInput;

/// Common imports.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::confirm::{Activation, Confirm, DeleteAction, DeleteGuard, TerminalConfirm};
    pub use crate::error::{Error, Result};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::listing::{DeleteMsg, Model as Listing};
    pub use crate::paginator::Model as Paginator;
    pub use crate::table::{Column, Model as Table, Row};
    pub use crate::textinput::{self, Model as TextInput};
    pub use crate::{product, Component};
}

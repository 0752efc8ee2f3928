//! Listing configuration.
//!
//! Defaults reproduce the stock product page: five rows per page, a `Name`
//! column used for search, and the English indicator and prompt texts.

use crate::error::{Error, Result};
use serde::Deserialize;

/// Default number of rows shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Prompt shown before a delete action proceeds.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this product?";

/// Settings for a [`crate::listing::Model`].
///
/// # Examples
///
/// ```rust
/// use product_table::config::Config;
///
/// let config = Config::from_json(r#"{ "page_size": 10 }"#).unwrap();
/// assert_eq!(config.page_size, 10);
/// assert_eq!(config.name_column, "Name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows per page. Must be at least 1.
    pub page_size: usize,
    /// Title of the column searched by the filter.
    pub name_column: String,
    /// Indicator format; the first `%d` is the page, the second the total.
    pub page_format: String,
    /// Indicator text when nothing matches the search term.
    pub no_results: String,
    /// Question asked before a delete proceeds.
    pub delete_prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            name_column: "Name".to_string(),
            page_format: "Page %d of %d".to_string(),
            no_results: "No products found".to_string(),
            delete_prompt: DELETE_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Parses a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the page size (builder pattern).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the searched column title (builder pattern).
    pub fn with_name_column(mut self, title: impl Into<String>) -> Self {
        self.name_column = title.into();
        self
    }

    /// Checks that the values can drive a listing.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidConfig("page_size must be at least 1".into()));
        }
        if self.page_format.matches("%d").count() != 2 {
            return Err(Error::InvalidConfig(format!(
                "page_format {:?} needs exactly two %d placeholders",
                self.page_format
            )));
        }
        Ok(())
    }
}

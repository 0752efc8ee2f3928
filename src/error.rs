//! Error type shared by the crate.
//!
//! Only construction and loading can fail. Once a listing is built, every
//! handler is infallible: any search term is valid and navigation past either
//! end is a no-op.

use thiserror::Error;

/// Errors raised while assembling a listing.
#[derive(Debug, Error)]
pub enum Error {
    /// The table has no column with the requested title.
    #[error("table has no column titled {0:?}")]
    MissingColumn(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A product listing file could not be read.
    #[error("cannot read product listing: {0}")]
    Io(#[from] std::io::Error),

    /// The product listing or configuration could not be decoded.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

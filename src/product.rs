//! Product records and their table rows.
//!
//! The listing backend serves products as a JSON array. Keys may be English
//! (`name`, `owner`, ...) or the backend's own (`nome`, `loginuser`, `qtde`,
//! `preco`).

use crate::error::Result;
use crate::table::{self, Column, Row};
use serde::Deserialize;
use std::path::Path;

/// Title of the column holding product names.
pub const NAME_COLUMN: &str = "Name";

/// One record of the product listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "loginuser", default)]
    pub owner: String,
    #[serde(alias = "qtde", default)]
    pub quantity: i64,
    #[serde(alias = "preco", default)]
    pub price: f64,
}

impl Product {
    /// The table row: id, name, owner, quantity and the price with two decimals.
    pub fn to_row(&self) -> Row {
        Row::new(vec![
            self.id.to_string(),
            self.name.clone(),
            self.owner.clone(),
            self.quantity.to_string(),
            format!("{:.2}", self.price),
        ])
        .with_key(self.id.to_string())
    }
}

/// Columns of the product table; the numeric ones keep a stable width.
pub fn columns() -> Vec<Column> {
    vec![
        Column::new("ID").with_width(4),
        Column::new(NAME_COLUMN),
        Column::new("Owner"),
        Column::new("Qty").with_width(5),
        Column::new("Price").with_width(8),
    ]
}

/// Builds the product table, in listing order, from a JSON array.
pub fn table_from_json(json: &str) -> Result<table::Model> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    table_from_products(&products)
}

/// Reads a JSON product listing from disk.
pub fn table_from_file(path: impl AsRef<Path>) -> Result<table::Model> {
    let json = std::fs::read_to_string(path)?;
    table_from_json(&json)
}

/// Builds the product table from decoded records.
pub fn table_from_products(products: &[Product]) -> Result<table::Model> {
    let rows = products.iter().map(Product::to_row).collect();
    table::Model::new(columns(), rows).with_name_column(NAME_COLUMN)
}

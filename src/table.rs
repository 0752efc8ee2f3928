//! Tabular display of a fixed set of rows.
//!
//! The table owns the RowSet: rows are supplied once at construction and are
//! never added or removed afterwards. What changes is the visibility mask,
//! which the listing recomputes on every render.

use crate::error::{Error, Result};
use unicode_width::UnicodeWidthStr;

/// A column header.
#[derive(Debug, Clone)]
pub struct Column {
    pub title: String,
    /// Minimum display width; the widest cell is used when unset.
    pub width: Option<usize>,
}

impl Column {
    /// A column sized to its content.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: None,
        }
    }

    /// Reserves at least `width` cells for the column (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}

/// One record. `key` identifies the record to delete actions.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: Option<String>,
    pub cells: Vec<String>,
}

impl Row {
    /// A row without a key.
    pub fn new(cells: Vec<String>) -> Self {
        Self { key: None, cells }
    }

    /// Sets the record key (builder pattern).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// The text of cell `index`, if the row has that many cells.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

/// Columns, the fixed rows and which of them are shown.
#[derive(Debug, Clone)]
pub struct Model {
    columns: Vec<Column>,
    rows: Vec<Row>,
    name_column: Option<usize>,
    visible: Vec<bool>,
}

impl Model {
    /// Creates a table with every row visible.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        let visible = vec![true; rows.len()];
        Self {
            columns,
            rows,
            name_column: None,
            visible,
        }
    }

    /// Designates the column whose text is matched by searches.
    pub fn with_name_column(mut self, title: &str) -> Result<Self> {
        self.set_name_column(title)?;
        Ok(self)
    }

    /// In-place form of [`Model::with_name_column`].
    pub fn set_name_column(&mut self, title: &str) -> Result<()> {
        let index = self
            .columns
            .iter()
            .position(|c| c.title == title)
            .ok_or_else(|| Error::MissingColumn(title.to_string()))?;
        self.name_column = Some(index);
        Ok(())
    }

    /// Row `index` of the row set.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Number of rows, shown or not.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The product name of a row; empty when the row has no name cell.
    pub fn name(&self, index: usize) -> &str {
        self.name_column
            .and_then(|col| self.rows.get(index).and_then(|row| row.cell(col)))
            .unwrap_or("")
    }

    /// Hides every row.
    pub fn hide_all(&mut self) {
        self.visible.iter_mut().for_each(|v| *v = false);
    }

    /// Shows or hides one row; out-of-range indices are ignored.
    pub fn set_visible(&mut self, index: usize, visible: bool) {
        if let Some(v) = self.visible.get_mut(index) {
            *v = visible;
        }
    }

    /// Whether row `index` is shown.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Indices of visible rows in table order.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.then_some(i))
            .collect()
    }

    fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                column.width.unwrap_or_else(|| {
                    self.rows
                        .iter()
                        .filter_map(|r| r.cell(i))
                        .map(UnicodeWidthStr::width)
                        .chain(std::iter::once(column.title.width()))
                        .max()
                        .unwrap_or(0)
                })
            })
            .collect()
    }

    /// Renders the header and the visible rows; `selected` gets a `>` marker.
    ///
    /// Widths are computed over all rows so columns don't jump between pages.
    pub fn view_rows(&self, selected: Option<usize>) -> String {
        let widths = self.column_widths();
        let mut output = String::new();

        output.push_str("  ");
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(&c.title, *w))
            .collect();
        output.push_str(header.join(" | ").trim_end());
        output.push('\n');

        output.push_str("  ");
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        output.push_str(&separator.join("-+-"));
        output.push('\n');

        for index in self.visible_indices() {
            let row = &self.rows[index];
            output.push_str(if selected == Some(index) { "> " } else { "  " });
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| pad(row.cell(i).unwrap_or(""), *w))
                .collect();
            output.push_str(cells.join(" | ").trim_end());
            output.push('\n');
        }

        output
    }
}

fn pad(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - used))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_table() -> Model {
        Model::new(
            vec![Column::new("ID"), Column::new("Name")],
            vec![
                Row::new(vec!["1".into(), "Apple".into()]).with_key("1"),
                Row::new(vec!["2".into()]).with_key("2"),
                Row::new(vec!["3".into(), "Kiwi".into()]),
            ],
        )
        .with_name_column("Name")
        .unwrap()
    }

    #[test]
    fn test_missing_name_column() {
        let err = Model::new(vec![Column::new("ID")], vec![])
            .with_name_column("Name")
            .unwrap_err();
        assert!(matches!(err, Error::MissingColumn(ref t) if t == "Name"));
    }

    #[test]
    fn test_short_row_has_empty_name() {
        let table = fruit_table();
        assert_eq!(table.name(0), "Apple");
        assert_eq!(table.name(1), "");
        assert_eq!(table.name(99), "");
    }

    #[test]
    fn test_visibility_mask() {
        let mut table = fruit_table();
        assert_eq!(table.visible_indices(), vec![0, 1, 2]);
        table.hide_all();
        table.set_visible(2, true);
        table.set_visible(42, true);
        assert_eq!(table.visible_indices(), vec![2]);
        assert!(!table.is_visible(42));
    }

    #[test]
    fn test_view_shows_only_visible_rows() {
        let mut table = fruit_table();
        table.hide_all();
        table.set_visible(2, true);
        let view = table.view_rows(Some(2));
        assert!(view.contains("> 3  | Kiwi"));
        assert!(!view.contains("Apple"));
        assert!(view.starts_with("  ID | Name"));
    }

    #[test]
    fn test_column_width_is_a_minimum() {
        let table = Model::new(
            vec![Column::new("ID"), Column::new("Name").with_width(8)],
            vec![Row::new(vec!["1".into(), "Apple".into()])],
        );
        let view = table.view_rows(None);
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines[1], format!("  ---+-{}", "-".repeat(8)));
        assert_eq!(lines[2], "  1  | Apple");

        let narrow = Model::new(
            vec![Column::new("Name").with_width(2)],
            vec![Row::new(vec!["Avocado".into()])],
        );
        assert!(narrow.view_rows(None).contains("  Avocado"));
    }
}

use crate::errors::TableError;

// @module: In-memory table model

/// A rectangular table of optional string cells
///
/// Cells are `Option<String>`: `None` is an explicit missing value and is
/// distinct from an empty string. The merge logic relies on this distinction
/// to leave untouched cells alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    // @field: Ordered column names
    columns: Vec<String>,

    // @field: Row-major cells, one Vec per row
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Create an empty table with the given column names
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a table from column names and pre-built rows
    ///
    /// Every row must have exactly one cell per column.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Result<Self, TableError> {
        let mut table = Table::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row, validating its width against the header
    pub fn push_row(&mut self, cells: Vec<Option<String>>) -> Result<(), TableError> {
        if cells.len() != self.columns.len() {
            return Err(TableError::ShapeMismatch {
                row: self.rows.len(),
                found: cells.len(),
                expected: self.columns.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Get the position of a named column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Get the position of a named column, or a typed error
    pub fn require_column(&self, name: &str) -> Result<usize, TableError> {
        self.column_index(name)
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))
    }

    /// Get a cell value, `None` for a missing value or out-of-range position
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)
            .and_then(|r| r.get(column))
            .and_then(|c| c.as_deref())
    }

    /// Overwrite a cell value
    ///
    /// Out-of-range positions are ignored rather than panicking; the merge
    /// logic only addresses positions resolved against this table.
    pub fn set_cell(&mut self, row: usize, column: usize, value: Option<String>) {
        if let Some(r) = self.rows.get_mut(row) {
            if let Some(cell) = r.get_mut(column) {
                *cell = value;
            }
        }
    }

    /// Column names in table order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows in table order
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

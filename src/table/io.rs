use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use log::debug;

use crate::errors::TableError;
use crate::table::model::Table;

// @module: CSV import and export for tables

/// Read a table from a CSV file
///
/// The first record is the header. Empty fields become missing values;
/// rows shorter than the header are padded with missing values, longer rows
/// are rejected.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Table, TableError> {
    let file = File::open(path.as_ref())
        .map_err(|e| TableError::Io(format!("{}: {}", path.as_ref().display(), e)))?;
    read_csv_from(file)
}

/// Read a table from any CSV source
pub fn read_csv_from<R: Read>(reader: R) -> Result<Table, TableError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader.headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let mut table = Table::new(columns);

    for (row_pos, record) in csv_reader.records().enumerate() {
        let record = record?;
        if record.len() > table.column_count() {
            return Err(TableError::ShapeMismatch {
                row: row_pos,
                found: record.len(),
                expected: table.column_count(),
            });
        }

        let mut cells: Vec<Option<String>> = record.iter()
            .map(|field| if field.is_empty() { None } else { Some(field.to_string()) })
            .collect();
        cells.resize(table.column_count(), None);
        table.push_row(cells)?;
    }

    debug!("Read table with {} rows and {} columns", table.row_count(), table.column_count());
    Ok(table)
}

/// Write a table to a CSV file
///
/// Missing values are written as empty fields.
pub fn write_csv<P: AsRef<Path>>(table: &Table, path: P) -> Result<(), TableError> {
    let file = File::create(path.as_ref())
        .map_err(|e| TableError::Io(format!("{}: {}", path.as_ref().display(), e)))?;
    write_csv_to(table, file)
}

/// Write a table to any CSV sink
pub fn write_csv_to<W: Write>(table: &Table, writer: W) -> Result<(), TableError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(table.columns())?;
    for row in table.rows() {
        csv_writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }

    csv_writer.flush().map_err(|e| TableError::Io(e.to_string()))?;
    Ok(())
}

/*!
 * Tests for the table model, schema discovery and CSV I/O
 */

use tempfile::TempDir;
use yattwai::Table;
use yattwai::errors::TableError;
use yattwai::table::io::{read_csv, read_csv_from, write_csv};
use yattwai::table::schema::{LanguageColumns, discover_languages, language_column};
use yattwai::translation::core::PayloadKind;

use crate::common::table_from;

#[test]
fn test_push_row_withWrongWidth_shouldReturnShapeMismatch() {
    let mut table = Table::new(vec!["a".to_string(), "b".to_string()]);
    let result = table.push_row(vec![Some("1".to_string())]);
    assert!(matches!(
        result,
        Err(TableError::ShapeMismatch { row: 0, found: 1, expected: 2 })
    ));
}

#[test]
fn test_cell_withMissingValue_shouldDistinguishFromEmptyTable() {
    let table = table_from(&["a", "b"], &[&["x", ""]]);
    assert_eq!(table.cell(0, 0), Some("x"));
    assert_eq!(table.cell(0, 1), None);
    assert_eq!(table.cell(5, 0), None);
}

#[test]
fn test_require_column_withUnknownName_shouldReturnColumnNotFound() {
    let table = Table::new(vec!["description".to_string()]);
    assert!(table.column_index("description").is_some());
    assert!(matches!(
        table.require_column("name"),
        Err(TableError::ColumnNotFound(_))
    ));
}

#[test]
fn test_set_cell_withValue_shouldOverwriteOnlyThatCell() {
    let mut table = table_from(&["a", "b"], &[&["1", "2"], &["3", "4"]]);
    table.set_cell(1, 0, Some("patched".to_string()));
    assert_eq!(table.cell(1, 0), Some("patched"));
    assert_eq!(table.cell(0, 0), Some("1"));
    assert_eq!(table.cell(1, 1), Some("4"));
}

#[test]
fn test_language_column_withCodeAndKind_shouldFollowConvention() {
    assert_eq!(language_column("fr", PayloadKind::Description), "fr description");
    assert_eq!(language_column("zh_CN", PayloadKind::Name), "zh_CN name");
}

#[test]
fn test_discover_languages_withRealisticHeader_shouldReturnCodesInColumnOrder() {
    let table = Table::new(
        ["index", "description", "zh_CN description", "fr description", "de name"]
            .iter().map(|c| c.to_string()).collect(),
    );
    assert_eq!(
        discover_languages(&table, PayloadKind::Description),
        vec!["zh_CN", "fr"]
    );
    assert_eq!(discover_languages(&table, PayloadKind::Name), vec!["de"]);
}

#[test]
fn test_resolve_strict_withAllColumnsPresent_shouldMapEveryCode() {
    let table = Table::new(
        ["description", "fr description", "de description"]
            .iter().map(|c| c.to_string()).collect(),
    );
    let codes = vec!["fr".to_string(), "de".to_string()];
    let resolved = LanguageColumns::resolve_strict(&table, &codes, PayloadKind::Description)
        .expect("all requested languages have columns");
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved.codes(), vec!["fr", "de"]);
}

#[test]
fn test_csv_roundtrip_withMissingValues_shouldPreserveTable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("skills.csv");

    let table = table_from(
        &["description", "fr description"],
        &[&["Leads teams.", "Dirige des équipes."], &["Writes code.", ""]],
    );
    write_csv(&table, &path).unwrap();

    let read_back = read_csv(&path).unwrap();
    assert_eq!(read_back, table);
    assert_eq!(read_back.cell(1, 1), None);
}

#[test]
fn test_read_csv_from_withShortRow_shouldPadWithMissingValues() {
    let data = "a,b,c\n1,2\n";
    let table = read_csv_from(data.as_bytes()).unwrap();
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.cell(0, 0), Some("1"));
    assert_eq!(table.cell(0, 2), None);
}

#[test]
fn test_read_csv_withMissingFile_shouldReturnIoError() {
    let result = read_csv("/nonexistent/skills.csv");
    assert!(matches!(result, Err(TableError::Io(_))));
}

/*!
 * Common test utilities shared by the unit and integration tests
 */


use yattwai::Table;

/// Route log output through env_logger so failures show the retry and
/// dispatch warnings (RUST_LOG=debug for the full trace)
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a table from string literals, treating "" as a missing value
pub fn table_from(columns: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(columns.iter().map(|c| c.to_string()).collect());
    for row in rows {
        let cells = row.iter()
            .map(|cell| if cell.is_empty() { None } else { Some(cell.to_string()) })
            .collect();
        table.push_row(cells).expect("row width matches header");
    }
    table
}

/*!
 * End-to-end tests for the translation job pipeline:
 * units -> dispatcher -> merger -> table
 */

use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::watch;

use yattwai::errors::TranslationError;
use yattwai::table::io::{read_csv, write_csv};
use yattwai::table::merge::merge;
use yattwai::translation::core::{PayloadKind, RetryPolicy, TranslationUnit};
use yattwai::translation::dispatch::BatchDispatcher;

use crate::common::mock_chains::{MockBehavior, MockChain};
use crate::common::{init_test_logging, table_from};

fn codes(list: &[&str]) -> Vec<String> {
    list.iter().map(|c| c.to_string()).collect()
}

fn description_units(texts: &[&str]) -> Vec<TranslationUnit> {
    texts.iter().enumerate()
        .map(|(i, t)| TranslationUnit::description(i, t.to_string()))
        .collect()
}

fn no_progress(_done: usize, _total: usize) {}

/// Three rows, two target languages, one row's call permanently fails:
/// the output keeps all three rows in order, the failing row keeps
/// missing values in both language columns, the other rows are filled.
#[tokio::test]
async fn test_job_withOnePermanentlyFailingRow_shouldMergeHolesOnlyForThatRow() {
    init_test_logging();
    let table = table_from(
        &["description", "fr description", "de description"],
        &[
            &["Leads teams.", "", ""],
            &["Breaks everything.", "", ""],
            &["Writes code.", "", ""],
        ],
    );
    let language_codes = codes(&["fr", "de"]);

    let chain = MockChain::new(MockBehavior::FailForText("Breaks everything.".to_string()));
    let factory = move || chain.clone();
    let dispatcher = BatchDispatcher::new(2)
        .with_retry(RetryPolicy { attempts: 3, delay: Duration::ZERO });
    let (_cancel_tx, cancel_rx) = watch::channel(false);

    let results = dispatcher
        .dispatch(
            factory,
            description_units(&["Leads teams.", "Breaks everything.", "Writes code."]),
            &language_codes,
            cancel_rx,
            no_progress,
        )
        .await
        .expect("per-unit failure must not fail the job");

    assert_eq!(results.len(), 3);
    assert!(results[1].is_absent());

    let merged = merge(&table, &results, &language_codes, PayloadKind::Description);

    assert_eq!(merged.row_count(), 3);
    // Failing row keeps missing values in both language columns
    assert_eq!(merged.cell(1, 1), None);
    assert_eq!(merged.cell(1, 2), None);
    // The other rows are fully populated
    assert_eq!(merged.cell(0, 1), Some(MockChain::echo("Leads teams.", "fr")).as_deref());
    assert_eq!(merged.cell(0, 2), Some(MockChain::echo("Leads teams.", "de")).as_deref());
    assert_eq!(merged.cell(2, 1), Some(MockChain::echo("Writes code.", "fr")).as_deref());
    // Source column and row order unchanged
    assert_eq!(merged.cell(1, 0), Some("Breaks everything."));
}

/// An interrupt delivered mid-dispatch fails the job and leaves the
/// table unmodified: no patch is ever built from a cancelled job.
#[tokio::test]
async fn test_job_withInterruptMidDispatch_shouldLeaveTableUnmodified() {
    init_test_logging();
    let table = table_from(
        &["description", "fr description"],
        &[&["One.", ""], &["Two.", ""], &["Three.", ""]],
    );
    let original = table.clone();

    let chain = MockChain::new(MockBehavior::Slow(Duration::from_secs(60)));
    let factory = move || chain.clone();
    let dispatcher = BatchDispatcher::new(4);
    let (cancel_tx, cancel_rx) = watch::channel(false);

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        let _ = cancel_tx.send(true);
    });

    let outcome = dispatcher
        .dispatch(
            factory,
            description_units(&["One.", "Two.", "Three.", "Four.", "Five.",
                                "Six.", "Seven.", "Eight.", "Nine.", "Ten."]),
            &codes(&["fr"]),
            cancel_rx,
            no_progress,
        )
        .await;

    assert!(matches!(outcome, Err(TranslationError::Cancelled)));
    assert_eq!(table, original);
}

/// Full job against files on disk: read the CSV, translate, merge,
/// write, and read the result back.
#[tokio::test]
async fn test_job_withCsvFiles_shouldFillLanguageColumnsOnDisk() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("skills.csv");
    let output_path = temp_dir.path().join("skills.translated.csv");

    let table = table_from(
        &["index", "description", "fr description"],
        &[&["0", "Leads teams.", ""], &["1", "Writes code.", ""]],
    );
    write_csv(&table, &input_path).unwrap();

    let table = read_csv(&input_path).unwrap();
    let description_column = table.require_column("description").unwrap();
    let units: Vec<TranslationUnit> = (0..table.row_count())
        .filter_map(|row| {
            table.cell(row, description_column)
                .map(|text| TranslationUnit::description(row, text.to_string()))
        })
        .collect();

    let chain = MockChain::new(MockBehavior::Echo);
    let factory = move || chain.clone();
    let dispatcher = BatchDispatcher::new(2);
    let (_cancel_tx, cancel_rx) = watch::channel(false);
    let language_codes = codes(&["fr"]);

    let results = dispatcher
        .dispatch(factory, units, &language_codes, cancel_rx, no_progress)
        .await
        .unwrap();

    let merged = merge(&table, &results, &language_codes, PayloadKind::Description);
    write_csv(&merged, &output_path).unwrap();

    let read_back = read_csv(&output_path).unwrap();
    assert_eq!(read_back.row_count(), 2);
    assert_eq!(
        read_back.cell(0, 2),
        Some(MockChain::echo("Leads teams.", "fr")).as_deref()
    );
    assert_eq!(
        read_back.cell(1, 2),
        Some(MockChain::echo("Writes code.", "fr")).as_deref()
    );
}

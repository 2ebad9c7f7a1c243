use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::watch;

use crate::app_config::Config;
use crate::table::{self, Table, merge};
use crate::table::schema::{self, LanguageColumns};
use crate::translation::chain::ChainBuilder;
use crate::translation::core::{PayloadKind, TranslationResult, TranslationUnit};
use crate::translation::dispatch::BatchDispatcher;

// @module: Application controller for table translation jobs

/// Main application controller for table translation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run one translation job end to end
    ///
    /// Reads the input table, translates the requested field for every row
    /// that has a source value, merges the results and writes the patched
    /// table. Ctrl-C during dispatch cancels the job; the output file is
    /// only written after a successful merge.
    pub async fn run(
        &self,
        input_file: PathBuf,
        output_file: PathBuf,
        kind: PayloadKind,
        source_column: Option<String>,
        force_overwrite: bool,
    ) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !input_file.exists() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }
        if output_file.exists() && !force_overwrite {
            return Err(anyhow!(
                "Output file already exists: {:?} (use -f to force overwrite)",
                output_file
            ));
        }

        let table = table::io::read_csv(&input_file)
            .with_context(|| format!("Failed to read table from {:?}", input_file))?;
        info!("Read {} rows from {:?}", table.row_count(), input_file);

        let language_codes = self.resolve_languages(&table, kind)?;
        info!("Translating '{}' into {} languages: {}",
            kind, language_codes.len(), language_codes.join(", "));

        let units = Self::collect_units(&table, kind, source_column.as_deref())?;
        if units.is_empty() {
            warn!("No rows with a source value to translate");
            table::io::write_csv(&table, &output_file)?;
            return Ok(());
        }
        let unit_count = units.len();
        info!("Collected {} translation units", unit_count);

        let results = self.dispatch_units(units, &language_codes, kind).await?;

        let failed_rows: Vec<usize> = results.iter()
            .filter(|r| r.is_absent())
            .map(|r| r.index)
            .collect();
        if failed_rows.is_empty() {
            info!("All {} units translated", unit_count);
        } else {
            warn!(
                "{} of {} units failed and keep missing values (rows: {})",
                failed_rows.len(),
                unit_count,
                failed_rows.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
            );
        }

        let merged = merge(&table, &results, &language_codes, kind);
        table::io::write_csv(&merged, &output_file)
            .with_context(|| format!("Failed to write table to {:?}", output_file))?;

        info!(
            "Wrote {:?} ({} rows, {} languages) in {:.1}s",
            output_file,
            merged.row_count(),
            language_codes.len(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(())
    }

    /// Resolve the target languages for a job
    ///
    /// Explicitly configured languages are validated strictly against the
    /// table's output columns; with no configured list the languages are
    /// discovered from the columns themselves.
    fn resolve_languages(&self, table: &Table, kind: PayloadKind) -> Result<Vec<String>> {
        if !self.config.languages.is_empty() {
            LanguageColumns::resolve_strict(table, &self.config.languages, kind)?;
            return Ok(self.config.languages.clone());
        }

        let discovered = schema::discover_languages(table, kind);
        if discovered.is_empty() {
            return Err(anyhow!(
                "No '{{language_code}} {}' output columns found and no languages configured",
                kind.field_label()
            ));
        }
        Ok(discovered)
    }

    /// Build one unit per row that has a source value
    ///
    /// Rows with a missing or empty source cell get no unit and stay
    /// untouched. Name units pick up the description column as context
    /// when the table has one.
    fn collect_units(
        table: &Table,
        kind: PayloadKind,
        source_column: Option<&str>,
    ) -> Result<Vec<TranslationUnit>> {
        let column_name = source_column.unwrap_or_else(|| kind.field_label());
        let column = table.require_column(column_name)?;
        let context_column = match kind {
            PayloadKind::Name => table.column_index(PayloadKind::Description.field_label()),
            PayloadKind::Description => None,
        };

        let mut units = Vec::new();
        for row in 0..table.row_count() {
            let Some(text) = table.cell(row, column).filter(|t| !t.trim().is_empty()) else {
                continue;
            };
            let context = context_column
                .and_then(|c| table.cell(row, c))
                .map(|c| c.to_string());
            units.push(match kind {
                PayloadKind::Name => TranslationUnit::name(row, text, context),
                PayloadKind::Description => TranslationUnit::description(row, text),
            });
        }
        Ok(units)
    }

    /// Dispatch units across the worker pool with a progress bar and a
    /// Ctrl-C cancellation watcher
    async fn dispatch_units(
        &self,
        units: Vec<TranslationUnit>,
        language_codes: &[String],
        kind: PayloadKind,
    ) -> Result<Vec<TranslationResult>> {
        let builder = ChainBuilder::new(self.config.translation.model_config(), kind);
        let dispatcher = BatchDispatcher::new(self.config.workers)
            .with_retry(self.config.translation.retry_policy());

        let (cancel_tx, cancel_rx) = watch::channel(false);
        let ctrl_c_watcher = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, cancelling job");
                let _ = cancel_tx.send(true);
            }
        });

        let progress_bar = Self::build_progress_bar(units.len());
        let progress_bar = Arc::new(progress_bar);
        let progress = {
            let progress_bar = progress_bar.clone();
            move |done: usize, _total: usize| {
                progress_bar.set_position(done as u64);
            }
        };

        let outcome = dispatcher
            .dispatch(move || builder.build(), units, language_codes, cancel_rx, progress)
            .await;
        ctrl_c_watcher.abort();

        match outcome {
            Ok(results) => {
                progress_bar.finish_and_clear();
                Ok(results)
            }
            Err(e) => {
                progress_bar.abandon();
                Err(e.into())
            }
        }
    }

    fn build_progress_bar(total: usize) -> ProgressBar {
        let progress_bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} units ({percent}%) {eta}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));
        progress_bar
    }
}

/// Derive the default output path for an input table
///
/// "skills.csv" becomes "skills.translated.csv" next to the input.
pub fn default_output_path(input_file: &Path) -> PathBuf {
    let stem = input_file.file_stem().unwrap_or_default().to_string_lossy();
    let file_name = match input_file.extension() {
        Some(ext) => format!("{}.translated.{}", stem, ext.to_string_lossy()),
        None => format!("{}.translated", stem),
    };
    input_file.with_file_name(file_name)
}

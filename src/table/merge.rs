/*!
 * Merging translation results back into the source table.
 *
 * Results come back as a flat list aligned with the submitted units. This
 * module turns that list into a sparse patch addressed by row index and
 * output column, then applies the patch without disturbing any cell it does
 * not explicitly cover.
 */

use log::warn;

use crate::table::model::Table;
use crate::table::schema::LanguageColumns;
use crate::translation::core::{PayloadKind, TranslationResult};

/// A sparse set of translated cells, addressed by row index and column
///
/// Only cells that actually received a translation are present. Applying a
/// patch twice yields the same table as applying it once.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationPatch {
    // @field: (row, column, value) triples in result order
    cells: Vec<(usize, usize, String)>,
}

impl TranslationPatch {
    /// Build a patch from per-unit results
    ///
    /// Columns are resolved leniently: a requested language without a
    /// matching output column contributes no cells. Absent results (units
    /// whose retries were exhausted) contribute no cells either, leaving the
    /// original row untouched.
    pub fn build(
        table: &Table,
        results: &[TranslationResult],
        language_codes: &[String],
        kind: PayloadKind,
    ) -> Self {
        let columns = LanguageColumns::resolve_lenient(table, language_codes, kind);
        let mut cells = Vec::new();

        for result in results {
            let Some(translations) = &result.translations else {
                continue;
            };

            if result.index >= table.row_count() {
                warn!("Dropping result for row {} beyond table bounds", result.index);
                continue;
            }

            for entry in columns.entries() {
                if let Some(translation) = translations.get(entry.request_pos) {
                    cells.push((result.index, entry.column, translation.clone()));
                }
            }
        }

        TranslationPatch { cells }
    }

    /// Apply the patch to a table, returning the patched copy
    ///
    /// Only cells present in the patch are overwritten; every other cell of
    /// the original keeps its value, including pre-existing translations in
    /// rows whose unit failed.
    pub fn apply(&self, table: &Table) -> Table {
        let mut patched = table.clone();
        for (row, column, value) in &self.cells {
            patched.set_cell(*row, *column, Some(value.clone()));
        }
        patched
    }

    /// Number of cells the patch covers
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the patch covers no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Merge translation results into a table
///
/// Builds the sparse patch for `language_codes` and `kind` and applies it
/// non-destructively, returning the patched table.
pub fn merge(
    table: &Table,
    results: &[TranslationResult],
    language_codes: &[String],
    kind: PayloadKind,
) -> Table {
    TranslationPatch::build(table, results, language_codes, kind).apply(table)
}

/*!
 * Tabular data handling.
 *
 * This module contains the in-memory table model and the operations the
 * translation workflow performs on it:
 * - `model`: The table itself, with missing-value aware cells
 * - `schema`: The "{language_code} {field}" output column convention
 * - `merge`: Non-destructive application of translation results
 * - `io`: CSV import and export
 */

pub mod model;
pub mod schema;
pub mod merge;
pub mod io;

pub use model::Table;
pub use schema::LanguageColumns;
pub use merge::{TranslationPatch, merge};

/*!
 * # YATTwAI - Yet Another Table Translator with AI
 *
 * A Rust library for translating tabular records into multiple languages
 * using AI.
 *
 * ## Features
 *
 * - Read and write CSV tables with missing-value aware cells
 * - Translate a name or description column into many languages at once,
 *   one batched model call per row
 * - Fixed-size parallel worker pool with bounded retries and cooperative
 *   cancellation
 * - Non-destructive merge of results into "{language_code} {field}"
 *   output columns
 * - Configurable model, temperature, retry policy and worker count
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `table`: Tabular data handling:
 *   - `table::model`: The in-memory table
 *   - `table::schema`: The output column naming convention
 *   - `table::merge`: Non-destructive result merging
 *   - `table::io`: CSV import and export
 * - `translation`: AI-powered translation:
 *   - `translation::core`: Work items, results and the retrying unit caller
 *   - `translation::chain`: Request chain construction
 *   - `translation::dispatch`: The parallel worker pool
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `providers`: Client implementation for the OpenAI API
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod table;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use table::{Table, merge};
pub use translation::{BatchDispatcher, ChainBuilder, TranslationResult, TranslationUnit};
pub use language_utils::{get_language_name, language_codes_match, validate_language_code};
pub use errors::{AppError, ProviderError, TableError, TranslationError};

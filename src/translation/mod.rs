/*!
 * AI-powered translation of table rows.
 *
 * The module is organized as follows:
 * - `core`: Work items, results, model configuration and the retrying
 *   unit caller
 * - `chain`: Request chain construction (prompt + client + parser)
 * - `prompts`: Prompt templates for the name and description intents
 * - `dispatch`: The fixed-size parallel worker pool
 */

pub mod core;
pub mod chain;
pub mod prompts;
pub mod dispatch;

pub use core::{ModelConfig, PayloadKind, RetryPolicy, TranslationResult, TranslationUnit, translate_unit};
pub use chain::{Chain, ChainBuilder, TranslationChain};
pub use dispatch::BatchDispatcher;

/*!
 * Core translation types and the retrying unit caller.
 *
 * This module contains the per-row work item, the per-job model
 * configuration shared by all workers, and `translate_unit`, which wraps a
 * chain invocation in the bounded fixed-delay retry loop.
 */

use std::time::Duration;
use log::{error, warn};

use super::chain::Chain;

/// Which field of a row a unit translates
///
/// The kind selects both the prompt template and the output column pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// A short label, translated on its own
    Name,
    /// A longer free-text description
    Description,
}

impl PayloadKind {
    /// The field part of the "{language_code} {field}" column convention
    pub fn field_label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
        }
    }
}

impl std::fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_label())
    }
}

/// Model configuration shared read-only by all workers
///
/// Plain data: contains no live client, so it can be cloned freely into
/// workers, each of which builds its own chain from it.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model name (e.g. "gpt-4o-mini")
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// API key for the provider
    pub api_key: String,

    /// Provider endpoint, empty for the public API
    pub endpoint: String,
}

/// One row's one field submitted for translation into N languages
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationUnit {
    /// Stable row identity, assigned at table-read time; unique within a job
    pub index: usize,

    /// Which field this unit translates
    pub kind: PayloadKind,

    /// The source-language value to translate
    pub text: String,

    /// Untranslated auxiliary context, only used for name units
    pub context: Option<String>,
}

impl TranslationUnit {
    /// Create a description unit
    pub fn description(index: usize, text: impl Into<String>) -> Self {
        TranslationUnit {
            index,
            kind: PayloadKind::Description,
            text: text.into(),
            context: None,
        }
    }

    /// Create a name unit, optionally with description context
    pub fn name(index: usize, text: impl Into<String>, context: Option<String>) -> Self {
        TranslationUnit {
            index,
            kind: PayloadKind::Name,
            text: text.into(),
            context,
        }
    }
}

/// The outcome of translating one unit
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    /// The index of the originating unit
    pub index: usize,

    /// One translation per requested language code, in request order, or
    /// `None` when every retry for the unit failed
    pub translations: Option<Vec<String>>,
}

impl TranslationResult {
    /// Whether the unit produced no translations
    pub fn is_absent(&self) -> bool {
        self.translations.is_none()
    }
}

/// Retry policy for unit translation
///
/// The delay is fixed between attempts; there is deliberately no
/// exponential backoff.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first
    pub attempts: u32,

    /// Delay between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            attempts: 3,
            delay: Duration::from_secs(5),
        }
    }
}

/// Translate one unit into all requested languages, with bounded retries
///
/// Issues one batched chain call per attempt. Failures are logged and
/// retried after the fixed delay; when the final attempt fails the unit
/// degrades to `None` rather than propagating an error. Absence is the
/// failure signal at this boundary.
pub async fn translate_unit<C: Chain + ?Sized>(
    chain: &C,
    unit: &TranslationUnit,
    language_codes: &[String],
    retry: &RetryPolicy,
) -> Option<Vec<String>> {
    for attempt in 1..=retry.attempts {
        match chain.run(&unit.text, unit.context.as_deref(), language_codes).await {
            Ok(translations) => return Some(translations),
            Err(e) => {
                warn!("Attempt {} of {} failed for row {}: {}", attempt, retry.attempts, unit.index, e);
                if attempt < retry.attempts {
                    tokio::time::sleep(retry.delay).await;
                }
            }
        }
    }

    error!("Giving up on row {} after {} attempts", unit.index, retry.attempts);
    None
}

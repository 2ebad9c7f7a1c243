/*!
 * Request chain construction.
 *
 * A chain binds one translation intent (name or description) and one model
 * configuration into a reusable request pipeline: prompt template, provider
 * client and response parser. Live clients are not shared between workers;
 * each worker rebuilds its chain from the plain `ChainBuilder` data.
 */

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::providers::openai::{OpenAI, OpenAIRequest};
use crate::translation::core::{ModelConfig, PayloadKind};
use crate::translation::prompts::{self, PromptTemplate};

/// A single-purpose translation pipeline
///
/// One call translates one value into all requested languages. This is the
/// seam the dispatcher and retry layer work against; tests substitute their
/// own implementations.
#[async_trait]
pub trait Chain: Send + Sync {
    /// Run one batched translation call
    ///
    /// # Arguments
    /// * `text` - The source value to translate
    /// * `context` - Untranslated auxiliary context, if the intent uses one
    /// * `language_codes` - Target languages, in output order
    ///
    /// # Returns
    /// * One translation per requested language, in request order
    async fn run(
        &self,
        text: &str,
        context: Option<&str>,
        language_codes: &[String],
    ) -> Result<Vec<String>, ProviderError>;
}

/// Plain, transferable recipe for building a chain
///
/// Holds only configuration data. Building is pure given the builder's
/// fields, and is done independently inside each worker because the built
/// chain owns a live HTTP client.
#[derive(Debug, Clone)]
pub struct ChainBuilder {
    config: ModelConfig,
    kind: PayloadKind,
}

impl ChainBuilder {
    /// Create a builder for the given model configuration and intent
    pub fn new(config: ModelConfig, kind: PayloadKind) -> Self {
        ChainBuilder { config, kind }
    }

    /// The intent this builder is bound to
    pub fn kind(&self) -> PayloadKind {
        self.kind
    }

    /// Build the chain: prompt template plus provider client
    pub fn build(&self) -> TranslationChain {
        TranslationChain {
            client: OpenAI::new(
                self.config.api_key.clone(),
                self.config.endpoint.clone(),
                self.config.model.clone(),
            ),
            template: PromptTemplate::for_kind(self.kind),
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            kind: self.kind,
        }
    }
}

/// The OpenAI-backed chain
pub struct TranslationChain {
    client: OpenAI,
    template: PromptTemplate,
    model: String,
    temperature: f32,
    kind: PayloadKind,
}

impl TranslationChain {
    /// Parse the model's reply into one translation per requested language
    ///
    /// The reply must be a JSON array of strings of exactly the requested
    /// length. Code fences around the array are tolerated; anything else is
    /// a parse failure, which the retry layer treats like any other
    /// transient error.
    fn parse_translations(payload: &str, expected: usize) -> Result<Vec<String>, ProviderError> {
        let trimmed = payload.trim();
        let trimmed = trimmed
            .strip_prefix("```json")
            .or_else(|| trimmed.strip_prefix("```"))
            .unwrap_or(trimmed);
        let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed).trim();

        let translations: Vec<String> = serde_json::from_str(trimmed)
            .map_err(|e| ProviderError::ParseError(format!("Expected a JSON array of strings: {}", e)))?;

        if translations.len() != expected {
            return Err(ProviderError::ParseError(format!(
                "Expected {} translations, got {}",
                expected,
                translations.len()
            )));
        }

        Ok(translations)
    }
}

#[async_trait]
impl Chain for TranslationChain {
    async fn run(
        &self,
        text: &str,
        context: Option<&str>,
        language_codes: &[String],
    ) -> Result<Vec<String>, ProviderError> {
        let request = OpenAIRequest::new(&self.model)
            .temperature(self.temperature)
            .add_message("system", self.template.render(language_codes))
            .add_message("user", prompts::render_user_message(self.kind, text, context));

        let response = self.client.complete_request(request).await?;
        let reply = OpenAI::extract_text_from_response(&response);

        Self::parse_translations(&reply, language_codes.len())
    }
}

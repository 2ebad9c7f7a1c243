/*!
 * Prompt templates for table translation.
 *
 * One template per payload kind. Both ask for the translations of a single
 * value into every requested language in one response, as a JSON array in
 * request order, so that a unit costs one round-trip regardless of how many
 * languages are requested.
 */

use crate::language_utils;
use crate::translation::core::PayloadKind;

/// System prompt template for one translation intent
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// The system prompt for translating descriptions.
    pub const DESCRIPTION_TRANSLATOR: &'static str = "\
You are an excellent multilingual translator. Translate the description you \
are given into each of the following languages:

{language_list}

Use clear, professional and formal language.

Return ONLY a JSON array of {language_count} strings: one translation per \
language, in the order listed above. Do not include any text outside the \
JSON array.";

    /// The system prompt for translating skill names.
    pub const NAME_TRANSLATOR: &'static str = "\
You are an excellent multilingual translator. You are given a skill name, \
and possibly a description of the skill for context. Translate only the \
skill name into each of the following languages:

{language_list}

Do not translate the description. Use a clear, professional and formal \
translation for the skill name.

Return ONLY a JSON array of {language_count} strings: one translated skill \
name per language, in the order listed above. Do not include any text \
outside the JSON array.";

    /// Create a new prompt template
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// The template for a payload kind
    pub fn for_kind(kind: PayloadKind) -> Self {
        match kind {
            PayloadKind::Description => Self::new(Self::DESCRIPTION_TRANSLATOR),
            PayloadKind::Name => Self::new(Self::NAME_TRANSLATOR),
        }
    }

    /// Render the template for the requested languages
    pub fn render(&self, language_codes: &[String]) -> String {
        self.template
            .replace("{language_list}", &render_language_list(language_codes))
            .replace("{language_count}", &language_codes.len().to_string())
    }
}

/// Render the numbered language list shown in the system prompt
///
/// Codes are expanded to display names so the model is never asked to
/// guess what "zh_CN" means.
pub fn render_language_list(language_codes: &[String]) -> String {
    language_codes.iter()
        .enumerate()
        .map(|(i, code)| format!("{}. {} ({})", i + 1, language_utils::get_language_name(code), code))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the user message carrying the value to translate
pub fn render_user_message(kind: PayloadKind, text: &str, context: Option<&str>) -> String {
    match (kind, context) {
        (PayloadKind::Name, Some(context)) => {
            format!("skill name: {}\ndescription: {}", text, context)
        }
        _ => text.to_string(),
    }
}

/*!
 * Tests for the chain builder, prompt selection and the retrying unit caller
 */

use std::time::Duration;

use yattwai::translation::chain::ChainBuilder;
use yattwai::translation::core::{
    ModelConfig, PayloadKind, RetryPolicy, TranslationUnit, translate_unit,
};
use yattwai::translation::prompts::PromptTemplate;

use crate::common::mock_chains::{MockBehavior, MockChain};

fn test_model_config() -> ModelConfig {
    ModelConfig {
        model: "gpt-4o-mini".to_string(),
        temperature: 0.0,
        api_key: "test-api-key".to_string(),
        endpoint: String::new(),
    }
}

fn no_delay(attempts: u32) -> RetryPolicy {
    RetryPolicy { attempts, delay: Duration::ZERO }
}

fn codes(list: &[&str]) -> Vec<String> {
    list.iter().map(|c| c.to_string()).collect()
}

#[test]
fn test_prompt_template_forKind_shouldSelectMatchingIntent() {
    let description = PromptTemplate::for_kind(PayloadKind::Description);
    let name = PromptTemplate::for_kind(PayloadKind::Name);

    let rendered_description = description.render(&codes(&["fr"]));
    let rendered_name = name.render(&codes(&["fr"]));

    assert!(rendered_description.contains("description"));
    assert!(rendered_name.contains("skill name"));
    assert!(rendered_name.contains("Do not translate the description"));
}

#[test]
fn test_chain_builder_withSameConfig_shouldBuildIndependentChains() {
    let builder = ChainBuilder::new(test_model_config(), PayloadKind::Description);
    assert_eq!(builder.kind(), PayloadKind::Description);

    // Building twice must work: each worker builds its own chain
    let _first = builder.build();
    let _second = builder.build();

    // The builder itself is plain data and can move across tasks
    let cloned = builder.clone();
    let handle = std::thread::spawn(move || cloned.build());
    handle.join().unwrap();
}

#[tokio::test]
async fn test_translate_unit_withSucceedingChain_shouldReturnOnePerLanguage() {
    let chain = MockChain::new(MockBehavior::Echo);
    let unit = TranslationUnit::description(0, "Leads teams.");
    let language_codes = codes(&["fr", "de", "ja"]);

    let translations = translate_unit(&chain, &unit, &language_codes, &no_delay(3)).await;

    let translations = translations.expect("echo chain always succeeds");
    assert_eq!(translations.len(), language_codes.len());
    assert_eq!(translations[0], MockChain::echo("Leads teams.", "fr"));
    assert_eq!(chain.call_count(), 1);
}

#[tokio::test]
async fn test_translate_unit_withPermanentFailure_shouldAttemptExactlyRetriesAndReturnNone() {
    let chain = MockChain::new(MockBehavior::AlwaysFail);
    let unit = TranslationUnit::description(3, "Leads teams.");

    let translations = translate_unit(&chain, &unit, &codes(&["fr"]), &no_delay(3)).await;

    assert!(translations.is_none());
    assert_eq!(chain.call_count(), 3);
}

#[tokio::test]
async fn test_translate_unit_withTransientFailure_shouldRecoverWithinRetryLimit() {
    let chain = MockChain::new(MockBehavior::FailTimes(2));
    let unit = TranslationUnit::description(0, "Writes code.");

    let translations = translate_unit(&chain, &unit, &codes(&["fr"]), &no_delay(3)).await;

    assert!(translations.is_some());
    assert_eq!(chain.call_count(), 3);
}

#[tokio::test]
async fn test_translate_unit_withOneMoreFailureThanRetries_shouldReturnNone() {
    let chain = MockChain::new(MockBehavior::FailTimes(3));
    let unit = TranslationUnit::description(0, "Writes code.");

    let translations = translate_unit(&chain, &unit, &codes(&["fr"]), &no_delay(3)).await;

    assert!(translations.is_none());
    assert_eq!(chain.call_count(), 3);
}

#[test]
fn test_translation_unit_constructors_shouldCarryKindAndContext() {
    let description = TranslationUnit::description(5, "Leads teams.");
    assert_eq!(description.kind, PayloadKind::Description);
    assert_eq!(description.index, 5);
    assert!(description.context.is_none());

    let name = TranslationUnit::name(7, "Leadership", Some("Leads teams.".to_string()));
    assert_eq!(name.kind, PayloadKind::Name);
    assert_eq!(name.context.as_deref(), Some("Leads teams."));
}

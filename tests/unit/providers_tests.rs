/*!
 * Tests for the OpenAI provider types
 */

use yattwai::providers::openai::{OpenAI, OpenAIRequest, OpenAIResponse};

#[test]
fn test_request_serialization_withMessagesAndTemperature_shouldMatchWireFormat() {
    let request = OpenAIRequest::new("gpt-4o-mini")
        .temperature(0.3)
        .add_message("system", "You are a translator.")
        .add_message("user", "Hello");

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["model"], "gpt-4o-mini");
    assert_eq!(value["temperature"], 0.3);
    assert_eq!(value["messages"][0]["role"], "system");
    assert_eq!(value["messages"][1]["content"], "Hello");
    // Unset optional fields stay off the wire
    assert!(value.get("max_tokens").is_none());
}

#[test]
fn test_response_parsing_withCannedJson_shouldExposeChoicesAndUsage() {
    let content = r#"{
        "choices": [
            { "message": { "role": "assistant", "content": "[\"Bonjour\"]" } }
        ],
        "usage": { "prompt_tokens": 12, "completion_tokens": 4, "total_tokens": 16 }
    }"#;

    let response: OpenAIResponse = serde_json::from_str(content).unwrap();
    assert_eq!(OpenAI::extract_text_from_response(&response), "[\"Bonjour\"]");
    assert_eq!(response.usage.as_ref().unwrap().total_tokens, 16);
}

#[test]
fn test_response_parsing_withoutUsage_shouldStillParse() {
    let content = r#"{ "choices": [ { "message": { "role": "assistant", "content": "ok" } } ] }"#;
    let response: OpenAIResponse = serde_json::from_str(content).unwrap();
    assert!(response.usage.is_none());
    assert_eq!(OpenAI::extract_text_from_response(&response), "ok");
}

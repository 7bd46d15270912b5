//! Unit Tests for OpenAI-Shared Utilities
//!
//! UNIT UNDER TEST: Utility functions in openai_shared/utils.rs
//!
//! BUSINESS RESPONSIBILITY:
//!   - Build bearer-token headers
//!   - Build a chat request carrying the prompt as one user message
//!   - Extract the first choice's text from a chat completion
//!
//! TEST COVERAGE:
//!   - Header values and malformed keys
//!   - Request serialization with params
//!   - Choice extraction: normal, empty choices, null content, bad body

use super::super::types::*;
use super::super::utils::*;
use crate::config::GenerationParams;
use serde_json::json;

#[test]
fn test_build_auth_headers() {
    let headers = build_auth_headers("test-api-key").unwrap();

    assert_eq!(
        headers.get("authorization").unwrap().to_str().unwrap(),
        "Bearer test-api-key"
    );
    assert_eq!(headers.get("content-type").unwrap(), "application/json");
}

#[test]
fn test_build_auth_headers_invalid_key() {
    let result = build_auth_headers("invalid\nkey");

    assert!(result.is_err(), "Should reject invalid API key format");
}

#[test]
fn test_create_chat_request() {
    let params = GenerationParams {
        max_tokens: 1024,
        temperature: Some(0.5),
    };

    let request = create_chat_request("gpt-4o", "Write code", &params);

    assert_eq!(request.model, "gpt-4o");
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.messages[0].role, "user");
    assert_eq!(request.messages[0].content, "Write code");
    assert_eq!(request.max_tokens, Some(1024));
    assert_eq!(request.temperature, Some(0.5));
}

#[test]
fn test_encode_request_omits_unset_fields() {
    let request = OpenAIRequest {
        model: "gpt-4o".to_string(),
        messages: vec![],
        temperature: None,
        max_tokens: Some(10),
    };

    let body = encode_request("OpenAI", &request).unwrap();

    assert_eq!(body, json!({ "model": "gpt-4o", "messages": [], "max_tokens": 10 }));
}

#[test]
fn test_extract_choice_text_first_choice() {
    let body = json!({
        "choices": [
            { "message": { "role": "assistant", "content": "first" }, "finish_reason": "stop" },
            { "message": { "role": "assistant", "content": "second" }, "finish_reason": "stop" }
        ]
    })
    .to_string();

    assert_eq!(extract_choice_text("OpenAI", &body).unwrap(), "first");
}

#[test]
fn test_extract_choice_text_no_choices() {
    let body = json!({ "choices": [] }).to_string();

    let error = extract_choice_text("Windsurf", &body).unwrap_err();

    assert!(error.to_string().contains("No choices in Windsurf response"));
}

#[test]
fn test_extract_choice_text_null_content() {
    let body = json!({
        "choices": [{ "message": { "role": "assistant", "content": null } }]
    })
    .to_string();

    assert!(extract_choice_text("OpenAI", &body).is_err());
}

#[test]
fn test_extract_choice_text_invalid_body() {
    let error = extract_choice_text("OpenAI", "<html>502</html>").unwrap_err();

    assert!(error.to_string().contains("Invalid OpenAI response"));
}

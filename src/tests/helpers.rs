//! Test helper utilities shared across unit test modules.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

use crate::config::{BackendConfig, ProviderKind};
use crate::transport::TransportResponse;
use serde_json::json;

pub const PAGE_OBJECT: &str = "export class LoginPage {\n  constructor(private page: Page) {}\n}\n";
pub const STEP_DEFINITION: &str = "Given('I am on the login page', async function () {});\n";

/// Valid configuration for a provider with a fake credential.
pub fn create_test_config(provider: ProviderKind) -> BackendConfig {
    BackendConfig::new(provider, "test-api-key")
}

/// The JSON payload a well-behaved backend replies with.
pub fn generation_json() -> String {
    json!({
        "pageObject": PAGE_OBJECT,
        "stepDefinition": STEP_DEFINITION,
    })
    .to_string()
}

/// Anthropic Messages API success body carrying `text`.
pub fn anthropic_body(text: &str) -> String {
    json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-5-sonnet-20241022",
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn",
        "stop_sequence": null,
        "usage": { "input_tokens": 120, "output_tokens": 80 }
    })
    .to_string()
}

/// Chat completions success body carrying `text`.
pub fn chat_body(text: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": text },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 120, "completion_tokens": 80, "total_tokens": 200 }
    })
    .to_string()
}

/// Success body in the envelope `provider` uses.
pub fn success_body(provider: ProviderKind, text: &str) -> String {
    match provider {
        ProviderKind::Anthropic => anthropic_body(text),
        ProviderKind::OpenAI | ProviderKind::Windsurf => chat_body(text),
    }
}

pub fn ok_response(body: String) -> TransportResponse {
    TransportResponse {
        status: 200,
        status_text: "OK".to_string(),
        body,
    }
}

pub fn error_response(status: u16, status_text: &str, body: &str) -> TransportResponse {
    TransportResponse {
        status,
        status_text: status_text.to_string(),
        body: body.to_string(),
    }
}

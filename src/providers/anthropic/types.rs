//! Anthropic API request and response type definitions

use serde::{Deserialize, Serialize};

/// Anthropic Messages API request structure
#[derive(Debug, Serialize, Clone)]
pub(super) struct AnthropicRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Anthropic message structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub(super) struct AnthropicMessage {
    pub role: String,
    pub content: String,
}

/// Anthropic content block structure
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type")]
pub(super) enum AnthropicContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Anthropic API response structure
///
/// Only the content array matters for generation; the remaining envelope
/// fields are kept for debug logging.
#[derive(Debug, Deserialize, Clone)]
pub(super) struct AnthropicResponse {
    pub content: Vec<AnthropicContentBlock>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<AnthropicUsage>,
}

/// Anthropic usage information
#[derive(Debug, Deserialize, Serialize, Clone)]
pub(super) struct AnthropicUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

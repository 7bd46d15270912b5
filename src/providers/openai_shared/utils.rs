//! Utility functions for OpenAI-compatible providers

use super::types::{OpenAIMessage, OpenAIRequest, OpenAIResponse};
use crate::config::GenerationParams;
use crate::error::{CodegenError, CodegenResult};
use crate::logging::log_debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// Build bearer-token headers for an OpenAI-compatible endpoint
pub fn build_auth_headers(api_key: &str) -> CodegenResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key.trim())).map_err(|e| {
            CodegenError::configuration_error(format!("Invalid API key format: {e}"))
        })?,
    );
    Ok(headers)
}

/// Chat request with the prompt as its single user message
pub fn create_chat_request(
    model: &str,
    prompt: &str,
    params: &GenerationParams,
) -> OpenAIRequest {
    OpenAIRequest {
        model: model.to_string(),
        messages: vec![OpenAIMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        temperature: params.temperature,
        max_tokens: Some(params.max_tokens),
    }
}

/// Encode a chat request as the JSON body sent on the wire
pub fn encode_request(
    provider: &str,
    request: &OpenAIRequest,
) -> CodegenResult<serde_json::Value> {
    serde_json::to_value(request).map_err(|e| {
        CodegenError::request_failed(
            format!("Failed to encode {provider} request: {e}"),
            Some(Box::new(e)),
        )
    })
}

/// Text of the first choice in a chat completion body
pub fn extract_choice_text(provider: &str, body: &str) -> CodegenResult<String> {
    let response: OpenAIResponse = serde_json::from_str(body).map_err(|e| {
        CodegenError::response_parsing_error(format!("Invalid {provider} response: {e}"))
    })?;

    log_debug!(
        provider = provider,
        choices = response.choices.len(),
        total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
        "Chat completion received"
    );

    let choice = response.choices.into_iter().next().ok_or_else(|| {
        CodegenError::response_parsing_error(format!("No choices in {provider} response"))
    })?;

    match choice.message.content {
        Some(content) if !content.trim().is_empty() => Ok(content),
        _ => Err(CodegenError::response_parsing_error(format!(
            "{provider} response missing message content"
        ))),
    }
}

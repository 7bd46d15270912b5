//! Anthropic backend implementation

use super::types::{AnthropicContentBlock, AnthropicMessage, AnthropicRequest, AnthropicResponse};
use crate::config::{BackendConfig, GenerationParams, ProviderKind};
use crate::error::{CodegenError, CodegenResult};
use crate::logging::log_debug;
use crate::providers::{Backend, BackendRequest};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic Claude backend descriptor
#[derive(Debug, Clone)]
pub struct AnthropicBackend {
    config: BackendConfig,
    params: GenerationParams,
}

impl AnthropicBackend {
    pub fn new(config: BackendConfig, params: GenerationParams) -> Self {
        log_debug!(
            provider = "anthropic",
            endpoint = %config.endpoint(),
            model = %config.model,
            max_tokens = params.max_tokens,
            "Anthropic backend initialized"
        );
        Self { config, params }
    }

    /// Headers required by the Anthropic API
    pub(super) fn build_headers(api_key: &str) -> CodegenResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key.trim()).map_err(|e| {
                CodegenError::configuration_error(format!("Invalid API key format: {e}"))
            })?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(ANTHROPIC_VERSION));
        Ok(headers)
    }

    pub(super) fn create_request(&self, prompt: &str) -> AnthropicRequest {
        AnthropicRequest {
            model: self.config.model.clone(),
            max_tokens: self.params.max_tokens,
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.params.temperature,
        }
    }

    /// Join the text blocks of a response, ignoring any other block types
    pub(super) fn collect_text(response: AnthropicResponse) -> CodegenResult<String> {
        let text = response
            .content
            .into_iter()
            .filter_map(|block| match block {
                AnthropicContentBlock::Text { text } => Some(text),
                AnthropicContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("\n");

        if text.trim().is_empty() {
            return Err(CodegenError::response_parsing_error(
                "Anthropic response missing text content",
            ));
        }
        Ok(text)
    }
}

impl Backend for AnthropicBackend {
    fn provider(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    fn build_request(&self, prompt: &str) -> CodegenResult<BackendRequest> {
        let headers = Self::build_headers(&self.config.credential)?;
        let body = serde_json::to_value(self.create_request(prompt)).map_err(|e| {
            CodegenError::request_failed(
                format!("Failed to encode Anthropic request: {e}"),
                Some(Box::new(e)),
            )
        })?;

        Ok(BackendRequest {
            url: self.config.endpoint().to_string(),
            headers,
            body,
        })
    }

    fn extract_text(&self, body: &str) -> CodegenResult<String> {
        let response: AnthropicResponse = serde_json::from_str(body).map_err(|e| {
            CodegenError::response_parsing_error(format!("Invalid Anthropic response: {e}"))
        })?;

        log_debug!(
            provider = "anthropic",
            model = ?response.model,
            stop_reason = ?response.stop_reason,
            input_tokens = response.usage.as_ref().map(|u| u.input_tokens),
            output_tokens = response.usage.as_ref().map(|u| u.output_tokens),
            "Anthropic response received"
        );

        Self::collect_text(response)
    }
}

//! OpenAI backend implementation
//!
//! This backend uses the OpenAI-compatible shared structures and utilities.

use super::openai_shared::{
    build_auth_headers, create_chat_request, encode_request, extract_choice_text,
};
use crate::config::{BackendConfig, GenerationParams, ProviderKind};
use crate::error::CodegenResult;
use crate::logging::log_debug;
use crate::providers::{Backend, BackendRequest};

/// OpenAI backend descriptor
#[derive(Debug, Clone)]
pub struct OpenAIBackend {
    config: BackendConfig,
    params: GenerationParams,
}

impl OpenAIBackend {
    pub fn new(config: BackendConfig, params: GenerationParams) -> Self {
        log_debug!(
            provider = "openai",
            endpoint = %config.endpoint(),
            model = %config.model,
            max_tokens = params.max_tokens,
            "OpenAI backend initialized"
        );
        Self { config, params }
    }
}

impl Backend for OpenAIBackend {
    fn provider(&self) -> ProviderKind {
        ProviderKind::OpenAI
    }

    fn build_request(&self, prompt: &str) -> CodegenResult<BackendRequest> {
        let headers = build_auth_headers(&self.config.credential)?;
        let request = create_chat_request(&self.config.model, prompt, &self.params);

        Ok(BackendRequest {
            url: self.config.endpoint().to_string(),
            headers,
            body: encode_request("OpenAI", &request)?,
        })
    }

    fn extract_text(&self, body: &str) -> CodegenResult<String> {
        extract_choice_text("OpenAI", body)
    }
}

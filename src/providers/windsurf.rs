//! Windsurf backend implementation
//!
//! Windsurf speaks the OpenAI-compatible chat dialect. Unlike the other
//! backends its endpoint can be overridden with `WINDSURF_API_URL`, and its
//! error responses carry their body into the reported error. Requests are
//! tagged with a fixed `User-Agent`.

use super::openai_shared::{
    build_auth_headers, create_chat_request, encode_request, extract_choice_text,
};
use crate::config::{BackendConfig, GenerationParams, ProviderKind};
use crate::error::CodegenResult;
use crate::logging::log_debug;
use crate::providers::{Backend, BackendRequest};
use reqwest::header::{HeaderValue, USER_AGENT};

const WINDSURF_USER_AGENT: &str = "QECopilot/1.0";

/// Windsurf backend descriptor
#[derive(Debug, Clone)]
pub struct WindsurfBackend {
    config: BackendConfig,
    params: GenerationParams,
}

impl WindsurfBackend {
    pub fn new(config: BackendConfig, params: GenerationParams) -> Self {
        log_debug!(
            provider = "windsurf",
            endpoint = %config.endpoint(),
            endpoint_overridden = config.endpoint_override.is_some(),
            model = %config.model,
            max_tokens = params.max_tokens,
            "Windsurf backend initialized"
        );
        Self { config, params }
    }
}

impl Backend for WindsurfBackend {
    fn provider(&self) -> ProviderKind {
        ProviderKind::Windsurf
    }

    fn build_request(&self, prompt: &str) -> CodegenResult<BackendRequest> {
        let mut headers = build_auth_headers(&self.config.credential)?;
        headers.insert(USER_AGENT, HeaderValue::from_static(WINDSURF_USER_AGENT));
        let request = create_chat_request(&self.config.model, prompt, &self.params);

        Ok(BackendRequest {
            url: self.config.endpoint().to_string(),
            headers,
            body: encode_request("Windsurf", &request)?,
        })
    }

    fn extract_text(&self, body: &str) -> CodegenResult<String> {
        extract_choice_text("Windsurf", body)
    }

    fn includes_error_body(&self) -> bool {
        true
    }
}

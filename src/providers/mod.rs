//! Backend descriptors for the supported text-generation providers
//!
//! A descriptor knows how to turn a prompt into an HTTP request and how to
//! pull the assistant text back out of the provider's response envelope.
//! Everything else (sending, parsing the JSON payload, writing files) is
//! shared by the generator.
//!
//! ## Architecture
//!
//! ```text
//! openai_shared/      <- Shared OpenAI-compatible structures and utilities
//!      |        |
//!      |        |
//! openai.rs  windsurf.rs  <- Both use the `choices` envelope
//!
//! anthropic/          <- Uses Anthropic's native Messages API format
//! ```

pub mod anthropic;
pub mod openai;
pub mod openai_shared;
pub mod windsurf;

#[cfg(test)]
mod tests;

use crate::config::{BackendConfig, GenerationParams, ProviderKind};
use crate::error::CodegenResult;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::fmt::Debug;

// Re-export the provider structs
pub use anthropic::AnthropicBackend;
pub use openai::OpenAIBackend;
pub use windsurf::WindsurfBackend;

/// A fully described outbound request: one POST with a JSON body.
#[derive(Debug, Clone)]
pub struct BackendRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Provider-specific request construction and response unwrapping.
pub trait Backend: Send + Sync + Debug {
    /// Which provider this descriptor talks to.
    fn provider(&self) -> ProviderKind;

    /// Build the request carrying `prompt` as the single user message.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CodegenError::ConfigurationError`] if the credential
    /// cannot be encoded as a header value.
    fn build_request(&self, prompt: &str) -> CodegenResult<BackendRequest>;

    /// Pull the assistant text out of a success response body.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CodegenError::ResponseParsingError`] if the body is not
    /// the provider's envelope or carries no text.
    fn extract_text(&self, body: &str) -> CodegenResult<String>;

    /// Whether non-success responses should carry their body into the error.
    fn includes_error_body(&self) -> bool {
        false
    }
}

/// Create the descriptor matching `config.provider`.
pub fn backend_for(config: BackendConfig, params: GenerationParams) -> Box<dyn Backend> {
    match config.provider {
        ProviderKind::Anthropic => Box::new(AnthropicBackend::new(config, params)),
        ProviderKind::OpenAI => Box::new(OpenAIBackend::new(config, params)),
        ProviderKind::Windsurf => Box::new(WindsurfBackend::new(config, params)),
    }
}

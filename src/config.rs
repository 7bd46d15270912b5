//! Run configuration populated once at process start.
//!
//! The credential check happens here, before any file or network I/O. The
//! environment is read through a lookup closure so callers (and tests) can
//! supply their own source instead of the process environment.

use crate::error::{CodegenError, CodegenResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The supported text-generation backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Anthropic,
    OpenAI,
    Windsurf,
}

impl ProviderKind {
    /// Environment variable holding the provider credential.
    pub fn credential_var(self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
            ProviderKind::OpenAI => "OPENAI_API_KEY",
            ProviderKind::Windsurf => "WINDSURF_API_KEY",
        }
    }

    /// Environment variable that overrides the endpoint URL, if the provider has one.
    pub fn endpoint_override_var(self) -> Option<&'static str> {
        match self {
            ProviderKind::Windsurf => Some("WINDSURF_API_URL"),
            ProviderKind::Anthropic | ProviderKind::OpenAI => None,
        }
    }

    pub fn default_endpoint(self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "https://api.anthropic.com/v1/messages",
            ProviderKind::OpenAI => "https://api.openai.com/v1/chat/completions",
            ProviderKind::Windsurf => "https://api.windsurf.ai/v1/chat/completions",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "claude-3-5-sonnet-20241022",
            ProviderKind::OpenAI => "gpt-4",
            ProviderKind::Windsurf => "windsurf-swe",
        }
    }

    /// Sampling temperature sent when none is given. Anthropic sends none.
    pub fn default_temperature(self) -> Option<f64> {
        match self {
            ProviderKind::Anthropic => None,
            ProviderKind::OpenAI => Some(0.3),
            ProviderKind::Windsurf => Some(0.7),
        }
    }

    /// Human-readable provider name used in messages.
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "Anthropic",
            ProviderKind::OpenAI => "OpenAI",
            ProviderKind::Windsurf => "Windsurf",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Anthropic => write!(f, "anthropic"),
            ProviderKind::OpenAI => write!(f, "openai"),
            ProviderKind::Windsurf => write!(f, "windsurf"),
        }
    }
}

/// Output budget and sampling parameters sent with every request.
///
/// A `None` temperature is left off the wire so the provider applies its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl GenerationParams {
    pub const DEFAULT_MAX_TOKENS: u32 = 4000;

    /// The budget and sampling each provider uses unless overridden.
    pub fn for_provider(provider: ProviderKind) -> Self {
        Self {
            max_tokens: Self::DEFAULT_MAX_TOKENS,
            temperature: provider.default_temperature(),
        }
    }
}

/// Provider connection settings.
#[derive(Clone, PartialEq)]
pub struct BackendConfig {
    pub provider: ProviderKind,
    pub credential: String,
    pub endpoint_override: Option<String>,
    pub model: String,
}

// Keeps the credential out of logs.
impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("provider", &self.provider)
            .field("credential", &"<redacted>")
            .field("endpoint_override", &self.endpoint_override)
            .field("model", &self.model)
            .finish()
    }
}

impl BackendConfig {
    /// Build a config with the provider's default endpoint and model.
    pub fn new(provider: ProviderKind, credential: impl Into<String>) -> Self {
        Self {
            provider,
            credential: credential.into(),
            endpoint_override: None,
            model: provider.default_model().to_string(),
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::ConfigurationError`] if the provider credential
    /// is unset or blank.
    pub fn from_env(provider: ProviderKind) -> CodegenResult<Self> {
        Self::from_lookup(provider, |key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(provider: ProviderKind, lookup: F) -> CodegenResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential_var = provider.credential_var();
        let credential = lookup(credential_var).unwrap_or_default();

        let endpoint_override = provider
            .endpoint_override_var()
            .and_then(|var| lookup(var))
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let config = Self {
            endpoint_override,
            ..Self::new(provider, credential)
        };
        config.validate()?;

        log_debug!(
            provider = %provider,
            has_endpoint_override = config.endpoint_override.is_some(),
            model = %config.model,
            "Backend configuration loaded"
        );

        Ok(config)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint_override = Some(endpoint.into());
        self
    }

    /// Validate the configuration is complete.
    pub fn validate(&self) -> CodegenResult<()> {
        if self.credential.trim().is_empty() {
            return Err(CodegenError::configuration_error(format!(
                "{} must be set for the {} provider",
                self.provider.credential_var(),
                self.provider.display_name()
            )));
        }
        if self.model.trim().is_empty() {
            return Err(CodegenError::configuration_error(format!(
                "A model identifier is required for the {} provider",
                self.provider.display_name()
            )));
        }
        Ok(())
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        self.endpoint_override
            .as_deref()
            .unwrap_or_else(|| self.provider.default_endpoint())
    }
}

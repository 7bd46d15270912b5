//! Provider Tests Module
//!
//! Checks that every backend descriptor honors the same contract:
//! one user message carrying the prompt, a bounded token budget, and an
//! envelope unwrapped to a single block of text. Provider-specific details
//! are tested next to each provider (`anthropic/tests`, `openai_shared/tests`).
//!
//! HTTP round trips against a mock server live in tests/.

use super::{backend_for, Backend};
use crate::config::{GenerationParams, ProviderKind};
use crate::tests::helpers::{create_test_config, success_body};

const ALL_PROVIDERS: [ProviderKind; 3] = [
    ProviderKind::Anthropic,
    ProviderKind::OpenAI,
    ProviderKind::Windsurf,
];

fn backend(provider: ProviderKind) -> Box<dyn Backend> {
    backend_for(
        create_test_config(provider),
        GenerationParams::for_provider(provider),
    )
}

#[test]
fn test_backend_for_selects_matching_provider() {
    for provider in ALL_PROVIDERS {
        assert_eq!(backend(provider).provider(), provider);
    }
}

#[test]
fn test_every_backend_sends_single_user_message() {
    for provider in ALL_PROVIDERS {
        let request = backend(provider).build_request("PROMPT TEXT").unwrap();

        let messages = request.body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1, "provider {provider}");
        assert_eq!(messages[0]["role"], "user", "provider {provider}");
        assert_eq!(messages[0]["content"], "PROMPT TEXT", "provider {provider}");
        assert_eq!(request.body["max_tokens"], 4000, "provider {provider}");
        assert_eq!(
            request.body["model"],
            provider.default_model(),
            "provider {provider}"
        );
    }
}

#[test]
fn test_each_backend_sends_its_own_temperature() {
    let anthropic = backend(ProviderKind::Anthropic).build_request("p").unwrap();
    let openai = backend(ProviderKind::OpenAI).build_request("p").unwrap();
    let windsurf = backend(ProviderKind::Windsurf).build_request("p").unwrap();

    assert!(
        anthropic.body.get("temperature").is_none(),
        "Anthropic requests carry no temperature"
    );
    assert_eq!(openai.body["temperature"], 0.3);
    assert_eq!(windsurf.body["temperature"], 0.7);
}

#[test]
fn test_only_windsurf_sets_user_agent() {
    let windsurf = backend(ProviderKind::Windsurf).build_request("p").unwrap();

    assert_eq!(windsurf.headers.get("user-agent").unwrap(), "QECopilot/1.0");
    for provider in [ProviderKind::Anthropic, ProviderKind::OpenAI] {
        let request = backend(provider).build_request("p").unwrap();
        assert!(request.headers.get("user-agent").is_none(), "provider {provider}");
    }
}

#[test]
fn test_every_backend_targets_its_endpoint() {
    for provider in ALL_PROVIDERS {
        let request = backend(provider).build_request("p").unwrap();

        assert_eq!(request.url, provider.default_endpoint());
    }
}

#[test]
fn test_every_backend_extracts_its_own_envelope() {
    for provider in ALL_PROVIDERS {
        let text = backend(provider)
            .extract_text(&success_body(provider, "{\"ok\": true}"))
            .unwrap();

        assert_eq!(text, "{\"ok\": true}", "provider {provider}");
    }
}

#[test]
fn test_envelopes_are_not_interchangeable() {
    let anthropic = backend(ProviderKind::Anthropic);
    let openai = backend(ProviderKind::OpenAI);

    assert!(anthropic
        .extract_text(&success_body(ProviderKind::OpenAI, "x"))
        .is_err());
    assert!(openai
        .extract_text(&success_body(ProviderKind::Anthropic, "x"))
        .is_err());
}

#[test]
fn test_only_windsurf_reports_error_body() {
    assert!(!backend(ProviderKind::Anthropic).includes_error_body());
    assert!(!backend(ProviderKind::OpenAI).includes_error_body());
    assert!(backend(ProviderKind::Windsurf).includes_error_body());
}

#[test]
fn test_invalid_credential_is_configuration_error() {
    for provider in ALL_PROVIDERS {
        let config = crate::config::BackendConfig::new(provider, "bad\nkey");
        let backend = backend_for(config, GenerationParams::for_provider(provider));

        let error = backend.build_request("p").unwrap_err();

        assert_eq!(
            error.category(),
            crate::error::ErrorCategory::Configuration,
            "provider {provider}"
        );
    }
}

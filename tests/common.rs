//! Test helper utilities for feature-codegen integration tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use feature_codegen::ProviderKind;
use serde_json::json;
use std::path::{Path, PathBuf};
use wiremock::ResponseTemplate;

pub const FEATURE: &str = "\
Feature: Login
  Scenario: Successful login
    Given I am on the login page
    When I sign in as \"alice\"
    Then I see the dashboard
";

pub const INSTRUCTIONS: &str = "\
Use Playwright with TypeScript.
Prefer getByTestId locators.
";

pub const PAGE_OBJECT: &str = "\
import { Page } from '@playwright/test';

export class LoginPage {
  constructor(private readonly page: Page) {}

  async signIn(user: string) {
    await this.page.getByTestId(\"user\").fill(user);
  }
}
";

pub const STEP_DEFINITION: &str = "\
import { Given, When, Then } from '@cucumber/cucumber';

Given('I am on the login page', async function () {});
When('I sign in as {string}', async function (user: string) {});
Then('I see the dashboard', async function () {});
";

/// Feature and instructions files laid out the way a project keeps them.
pub struct Inputs {
    pub feature: PathBuf,
    pub instructions: PathBuf,
}

pub fn write_inputs(root: &Path) -> Inputs {
    let features = root.join("features").join("auth");
    std::fs::create_dir_all(&features).expect("create features dir");
    let feature = features.join("login.feature");
    let instructions = root.join("INSTRUCTIONS.md");
    std::fs::write(&feature, FEATURE).expect("write feature");
    std::fs::write(&instructions, INSTRUCTIONS).expect("write instructions");
    Inputs {
        feature,
        instructions,
    }
}

/// The JSON text a well-behaved backend replies with.
pub fn generation_json() -> String {
    json!({
        "pageObject": PAGE_OBJECT,
        "stepDefinition": STEP_DEFINITION,
    })
    .to_string()
}

/// Path the provider's API is mounted at on the mock server.
pub fn api_path(provider: ProviderKind) -> &'static str {
    match provider {
        ProviderKind::Anthropic => "/v1/messages",
        ProviderKind::OpenAI | ProviderKind::Windsurf => "/v1/chat/completions",
    }
}

/// Success response in the provider's envelope carrying `text`.
pub fn success_response(provider: ProviderKind, text: &str) -> ResponseTemplate {
    let body = match provider {
        ProviderKind::Anthropic => json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "model": "claude-3-5-sonnet-20241022",
            "content": [{ "type": "text", "text": text }],
            "stop_reason": "end_turn",
            "stop_sequence": null,
            "usage": { "input_tokens": 321, "output_tokens": 654 }
        }),
        ProviderKind::OpenAI | ProviderKind::Windsurf => json!({
            "id": "chatcmpl-01",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": text },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 321, "completion_tokens": 654, "total_tokens": 975 }
        }),
    };
    ResponseTemplate::new(200).set_body_json(body)
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

//! Response parsing for structured JSON replies
//!
//! Best-effort recovery of a single JSON object from free text, with a
//! 2-tier strategy to tolerate backends that wrap their JSON in prose or
//! Markdown fences.

use crate::error::{CodegenError, CodegenResult};
use crate::logging::{log_debug, log_warn};

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Greedy match from the first `{` to the last `}`, across lines.
static OBJECT_SPAN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").ok());

const PREVIEW_CHARS: usize = 200;

/// Response parser with fallback strategies
pub struct ResponseParser;

impl ResponseParser {
    /// Parse backend output into a JSON object
    ///
    /// 1. Try direct JSON parse
    /// 2. Extract the greedy `{...}` span and parse that
    ///
    /// Fails with a clear error if neither yields a JSON object.
    pub fn parse_llm_output(raw: &str) -> CodegenResult<Value> {
        log_debug!(
            content_length = raw.len(),
            content_preview = raw.chars().take(PREVIEW_CHARS).collect::<String>(),
            "Parsing backend output for structured JSON"
        );

        // 1. Try direct JSON parse
        if let Some(structured) = Self::parse_direct(raw) {
            log_debug!("Successfully parsed JSON directly");
            return Self::validate_and_return(structured);
        }

        // 2. Extract JSON object from mixed content
        if let Some(json_str) = Self::extract_greedy_object(raw) {
            log_debug!(
                extracted_length = json_str.len(),
                "Extracted JSON object span from mixed content"
            );

            if let Ok(structured) = serde_json::from_str::<Value>(json_str) {
                log_debug!("Successfully parsed JSON after extraction");
                return Self::validate_and_return(structured);
            }
        }

        let preview = raw.chars().take(PREVIEW_CHARS).collect::<String>();
        log_warn!(
            content_preview = preview,
            "Failed to parse structured response from backend output"
        );

        Err(CodegenError::response_parsing_error(format!(
            "no JSON object found in: {}{}",
            preview,
            if raw.chars().count() > PREVIEW_CHARS {
                "..."
            } else {
                ""
            }
        )))
    }

    /// Parse the whole text as JSON.
    pub fn parse_direct(raw: &str) -> Option<Value> {
        serde_json::from_str::<Value>(raw.trim()).ok()
    }

    /// The span from the first `{` to the last `}`, if any.
    pub fn extract_greedy_object(content: &str) -> Option<&str> {
        OBJECT_SPAN.as_ref()?.find(content).map(|m| m.as_str())
    }

    fn validate_and_return(response: Value) -> CodegenResult<Value> {
        if !response.is_object() {
            return Err(CodegenError::response_parsing_error(
                "structured response must be a JSON object",
            ));
        }
        Ok(response)
    }
}

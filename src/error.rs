//! Error types for code generation runs.
//!
//! Every failure of a run is terminal: nothing is retried and nothing is
//! partially recovered. The binaries turn any [`CodegenError`] into a single
//! human-readable line on stderr and a non-zero exit status.
//!
//! # Error Categories
//!
//! | Variant | Category |
//! |---------|----------|
//! | `ConfigurationError` | Configuration |
//! | `InputError` | Input |
//! | `RequestFailed` | Transport |
//! | `HttpStatus` | Transport |
//! | `ResponseParsingError` | ContractViolation |
//! | `MissingField` | ContractViolation |
//! | `OutputError` | Output |
//!
//! # Example
//!
//! ```rust
//! use feature_codegen::{CodegenError, CodegenResult};
//! use feature_codegen::error::ErrorCategory;
//!
//! fn require_key(key: Option<&str>) -> CodegenResult<&str> {
//!     key.ok_or_else(|| CodegenError::configuration_error("OPENAI_API_KEY is not set"))
//! }
//!
//! let err = require_key(None).unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Configuration);
//! ```

use crate::logging::{log_error, log_warn};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// High-level classification of a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing credential or invalid command-line arguments.
    ///
    /// Detected before any file or network I/O.
    Configuration,

    /// An input file could not be read or named.
    Input,

    /// Network failure or non-success HTTP status from the backend.
    Transport,

    /// The backend answered, but not in the expected shape.
    ContractViolation,

    /// Generated artifacts could not be written.
    Output,
}

/// Convenient result type for code generation.
pub type CodegenResult<T> = std::result::Result<T, CodegenError>;

/// Errors that can terminate a generation run.
///
/// Use the constructor methods, which log the error at creation time.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Required configuration is missing or unusable.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// An input file could not be read.
    #[error("Failed to read {}: {message}", .path.display())]
    InputError {
        /// The offending path.
        path: PathBuf,
        /// Description of the failure.
        message: String,
        /// The underlying I/O error, if any.
        #[source]
        source: Option<std::io::Error>,
    },

    /// The HTTP request could not be completed.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend answered with a non-success status.
    #[error("{provider} API error: {status} {status_text}{}", body_suffix(.body))]
    HttpStatus {
        /// Provider display name.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        status_text: String,
        /// Response body, for backends that report it.
        body: Option<String>,
    },

    /// The backend reply could not be turned into a JSON object.
    #[error("Could not parse JSON response: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },

    /// The recovered JSON lacks a required non-empty string field.
    #[error("Response is missing required field `{field}`")]
    MissingField {
        /// The JSON key that was absent, empty, or not a string.
        field: String,
    },

    /// A generated artifact could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    OutputError {
        /// The path being created or written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) if !body.is_empty() => format!(" - {body}"),
        _ => String::new(),
    }
}

impl CodegenError {
    /// Classify the error according to the run's failure taxonomy.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Configuration,
            Self::InputError { .. } => ErrorCategory::Input,
            Self::RequestFailed { .. } | Self::HttpStatus { .. } => ErrorCategory::Transport,
            Self::ResponseParsingError { .. } | Self::MissingField { .. } => {
                ErrorCategory::ContractViolation
            }
            Self::OutputError { .. } => ErrorCategory::Output,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Code generation configuration invalid"
        );
        Self::ConfigurationError { message }
    }

    pub fn input_error(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        log_error!(
            error_type = "input_error",
            path = %path.display(),
            error = %source,
            "Input file unreadable"
        );
        Self::InputError {
            path,
            message: source.to_string(),
            source: Some(source),
        }
    }

    pub fn invalid_input(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        let path = path.as_ref().to_path_buf();
        let message = message.into();
        log_error!(
            error_type = "input_error",
            path = %path.display(),
            message = %message,
            "Input path rejected"
        );
        Self::InputError {
            path,
            message,
            source: None,
        }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "Backend request failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn http_status(
        provider: impl Into<String>,
        status: u16,
        status_text: impl Into<String>,
        body: Option<String>,
    ) -> Self {
        let provider = provider.into();
        let status_text = status_text.into();
        log_error!(
            error_type = "http_status",
            provider = %provider,
            status = status,
            status_text = %status_text,
            has_body = body.is_some(),
            "Backend returned non-success status"
        );
        Self::HttpStatus {
            provider,
            status,
            status_text,
            body,
        }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "Backend response format invalid"
        );
        Self::ResponseParsingError { message }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        log_warn!(
            error_type = "missing_field",
            field = %field,
            "Backend response lacks required field"
        );
        Self::MissingField { field }
    }

    pub fn output_error(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        log_error!(
            error_type = "output_error",
            path = %path.display(),
            error = %source,
            "Failed to write generated artifact"
        );
        Self::OutputError { path, source }
    }
}

//! # feature-codegen
//!
//! Generate a page object and step definitions from a behavioral test
//! feature file by asking an LLM backend (Anthropic, OpenAI, or Windsurf).
//!
//! ## Key Features
//!
//! - **One pipeline, three backends**: providers differ only in how a request
//!   is built and how the reply text is unwrapped
//! - **Tolerant parsing**: JSON replies wrapped in prose or Markdown fences are
//!   still recovered
//! - **Fail loudly**: missing credentials, HTTP errors, unparseable replies, and
//!   missing fields all stop the run before anything is written
//!
//! ## Example
//!
//! ```rust,no_run
//! use feature_codegen::{BackendConfig, CodeGenerator, GenerationParams, OutputLayout, ProviderKind};
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = BackendConfig::from_env(ProviderKind::Anthropic)?;
//! let params = GenerationParams::for_provider(config.provider);
//! let generator = CodeGenerator::from_config(config, params, OutputLayout::default())?;
//!
//! let written = generator
//!     .generate(Path::new("features/login.feature"), Path::new("INSTRUCTIONS.md"))
//!     .await?;
//! println!("{}", written.page_object.display());
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod prompt;
pub mod providers;
pub mod response_parser;
pub mod transport;


// Re-export main types
pub use config::{BackendConfig, GenerationParams, ProviderKind};
pub use error::{CodegenError, CodegenResult};
pub use generator::CodeGenerator;
pub use output::{GenerationResult, OutputArtifact, OutputLayout, WrittenArtifacts};
pub use prompt::{GenerationRequest, PromptTemplate};
pub use providers::{AnthropicBackend, Backend, BackendRequest, OpenAIBackend, WindsurfBackend};
pub use response_parser::ResponseParser;
pub use transport::{HttpTransport, Transport, TransportResponse};

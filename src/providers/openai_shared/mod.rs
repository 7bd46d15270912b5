//! Shared OpenAI-compatible API structures and utilities
//!
//! This module contains the common request/response structures used by
//! providers speaking the chat-completions dialect: OpenAI itself and
//! Windsurf.
//!
//! - `types` - Request and response envelopes
//! - `utils` - Header construction, request building, text extraction

pub mod types;
pub mod utils;


pub use types::*;
pub use utils::*;

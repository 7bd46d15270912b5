//! Anthropic Claude backend
//!
//! This backend uses Anthropic's native Messages API format.
//!
//! ## Module Organization
//!
//! - `types`: Request/response structures for Anthropic API
//! - `provider`: Request construction and response unwrapping

mod provider;
mod types;

#[cfg(test)]
mod tests;

pub use provider::AnthropicBackend;

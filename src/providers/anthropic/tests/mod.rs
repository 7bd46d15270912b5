//! Test modules for the Anthropic backend
//!
//! - `provider.rs` - Header construction, request body, and content extraction

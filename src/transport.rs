//! HTTP transport for backend calls
//!
//! A single POST per run: no retry, no streaming, and no timeout beyond the
//! client default. Status handling is left to the caller so that every
//! backend shares one error path.

use crate::error::{CodegenError, CodegenResult};
use crate::logging::{log_debug, log_error};
use crate::providers::BackendRequest;
use std::time::Instant;

/// Raw outcome of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a fully built backend request.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Perform the request and return whatever the server answered.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::RequestFailed`] if no response was received
    /// (connection, DNS, or body read failure).
    async fn send(&self, request: BackendRequest) -> CodegenResult<TransportResponse>;
}

/// reqwest-backed transport
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: BackendRequest) -> CodegenResult<TransportResponse> {
        let start_time = Instant::now();

        let response = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .json(&request.body)
            .send()
            .await
            .map_err(|e| {
                log_error!(
                    url = %request.url,
                    error = %e,
                    "HTTP request failed"
                );
                CodegenError::request_failed(
                    format!("request to {} failed: {e}", request.url),
                    Some(Box::new(e)),
                )
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            CodegenError::request_failed(
                format!("failed to read response body: {e}"),
                Some(Box::new(e)),
            )
        })?;

        log_debug!(
            url = %request.url,
            status = status.as_u16(),
            body_length = body.len(),
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Backend responded"
        );

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body,
        })
    }
}

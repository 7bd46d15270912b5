//! The code generation pipeline.
//!
//! One run is strictly linear: load inputs, render the prompt, make one
//! backend call, recover the JSON payload, validate it, write two files.
//! Any failure ends the run, and nothing is written unless the backend reply
//! was fully validated.

use crate::config::{BackendConfig, GenerationParams};
use crate::error::{CodegenError, CodegenResult};
use crate::logging::{log_debug, log_info};
use crate::output::{GenerationResult, OutputLayout, WrittenArtifacts};
use crate::prompt::GenerationRequest;
use crate::providers::{backend_for, Backend};
use crate::response_parser::ResponseParser;
use crate::transport::{HttpTransport, Transport};
use std::path::Path;
use std::time::Instant;

/// Generates a page object and step definition from a feature file.
pub struct CodeGenerator {
    backend: Box<dyn Backend>,
    transport: Box<dyn Transport>,
    layout: OutputLayout,
}

impl std::fmt::Debug for CodeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeGenerator")
            .field("backend", &self.backend)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl CodeGenerator {
    /// Assemble a generator from its parts.
    pub fn new(
        backend: Box<dyn Backend>,
        transport: Box<dyn Transport>,
        layout: OutputLayout,
    ) -> Self {
        Self {
            backend,
            transport,
            layout,
        }
    }

    /// Generator for `config.provider` over a real HTTP transport.
    ///
    /// The configuration is validated before anything else is built.
    pub fn from_config(
        config: BackendConfig,
        params: GenerationParams,
        layout: OutputLayout,
    ) -> CodegenResult<Self> {
        config.validate()?;
        Ok(Self::new(
            backend_for(config, params),
            Box::new(HttpTransport::new()),
            layout,
        ))
    }

    /// Run the whole pipeline for one feature file.
    pub async fn generate(
        &self,
        feature_path: &Path,
        instructions_path: &Path,
    ) -> CodegenResult<WrittenArtifacts> {
        let provider = self.backend.provider();
        log_info!(
            provider = %provider,
            feature = %feature_path.display(),
            instructions = %instructions_path.display(),
            "Starting code generation"
        );

        // Fail on an unusable feature name before the backend call.
        OutputLayout::feature_name(feature_path)?;

        let request = GenerationRequest::load(feature_path, instructions_path).await?;
        let result = self.request_generation(&request).await?;
        let artifacts = self.layout.artifacts_for(feature_path, result)?;
        self.layout.write_all(artifacts).await
    }

    /// Make the backend call and validate its reply. Writes nothing.
    pub async fn request_generation(
        &self,
        request: &GenerationRequest,
    ) -> CodegenResult<GenerationResult> {
        let provider = self.backend.provider();
        let prompt = request.render();
        let backend_request = self.backend.build_request(&prompt)?;

        log_debug!(
            provider = %provider,
            url = %backend_request.url,
            prompt_length = prompt.len(),
            "Sending generation request"
        );

        let start_time = Instant::now();
        let response = self.transport.send(backend_request).await?;

        if !response.is_success() {
            let body = self
                .backend
                .includes_error_body()
                .then(|| response.body.clone());
            return Err(CodegenError::http_status(
                provider.display_name(),
                response.status,
                response.status_text,
                body,
            ));
        }

        let text = self.backend.extract_text(&response.body)?;
        let value = ResponseParser::parse_llm_output(&text)?;
        let result = GenerationResult::from_json(&value)?;

        log_debug!(
            provider = %provider,
            duration_ms = start_time.elapsed().as_millis() as u64,
            page_object_length = result.page_object.len(),
            step_definition_length = result.step_definition.len(),
            "Generation response validated"
        );

        Ok(result)
    }
}

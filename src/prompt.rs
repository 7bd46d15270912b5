//! Prompt construction for page-object and step-definition generation.

use crate::error::{CodegenError, CodegenResult};
use crate::logging::log_debug;
use std::path::Path;

/// The two texts a generation run is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    feature_text: String,
    instructions_text: String,
}

impl GenerationRequest {
    pub fn new(feature_text: impl Into<String>, instructions_text: impl Into<String>) -> Self {
        Self {
            feature_text: feature_text.into(),
            instructions_text: instructions_text.into(),
        }
    }

    /// Load both inputs from disk.
    ///
    /// Both files are read before anything else happens; the first failure
    /// aborts the run.
    pub async fn load(feature_path: &Path, instructions_path: &Path) -> CodegenResult<Self> {
        let feature_text = tokio::fs::read_to_string(feature_path)
            .await
            .map_err(|e| CodegenError::input_error(feature_path, e))?;
        let instructions_text = tokio::fs::read_to_string(instructions_path)
            .await
            .map_err(|e| CodegenError::input_error(instructions_path, e))?;

        log_debug!(
            feature = %feature_path.display(),
            feature_len = feature_text.len(),
            instructions = %instructions_path.display(),
            instructions_len = instructions_text.len(),
            "Loaded generation inputs"
        );

        Ok(Self::new(feature_text, instructions_text))
    }

    pub fn feature_text(&self) -> &str {
        &self.feature_text
    }

    pub fn instructions_text(&self) -> &str {
        &self.instructions_text
    }

    /// Render the prompt for this request.
    pub fn render(&self) -> String {
        PromptTemplate::render(&self.feature_text, &self.instructions_text)
    }
}

/// The fixed prompt sent to every backend.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Shape the backend is told to answer with.
    pub const OUTPUT_SCHEMA: &'static str = r#"{
  "pageObject": "<full TypeScript source of the page object>",
  "stepDefinition": "<full TypeScript source of the step definitions>"
}"#;

    /// Interpolate both texts verbatim into the template.
    pub fn render(feature_text: &str, instructions_text: &str) -> String {
        format!(
            "You are an expert test automation engineer.\n\
             \n\
             Follow these instructions:\n\
             {instructions_text}\n\
             \n\
             Here is the feature file:\n\
             {feature_text}\n\
             \n\
             Task: generate a Playwright page object class and the Cucumber step \
             definitions that implement every step of the feature file above.\n\
             \n\
             Respond with a single JSON object and nothing else, using exactly this shape:\n\
             {schema}\n",
            schema = Self::OUTPUT_SCHEMA,
        )
    }
}

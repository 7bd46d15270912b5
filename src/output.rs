//! Generated artifacts and where they land on disk.

use crate::error::{CodegenError, CodegenResult};
use crate::logging::{log_debug, log_info};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub const PAGES_DIR: &str = "pages";
pub const STEPS_DIR: &str = "steps";
pub const FEATURE_EXTENSION: &str = ".feature";

/// The two sources a backend reply must provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub page_object: String,
    pub step_definition: String,
}

impl GenerationResult {
    pub const PAGE_OBJECT_KEY: &'static str = "pageObject";
    pub const STEP_DEFINITION_KEY: &'static str = "stepDefinition";

    /// Pull both sources out of a recovered JSON object.
    ///
    /// Content is kept verbatim; a field that is absent, not a string, or
    /// blank is a [`CodegenError::MissingField`].
    pub fn from_json(value: &Value) -> CodegenResult<Self> {
        Ok(Self {
            page_object: Self::required_text(value, Self::PAGE_OBJECT_KEY)?,
            step_definition: Self::required_text(value, Self::STEP_DEFINITION_KEY)?,
        })
    }

    fn required_text(value: &Value, key: &str) -> CodegenResult<String> {
        match value.get(key).and_then(Value::as_str) {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(CodegenError::missing_field(key)),
        }
    }
}

/// One file to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub path: PathBuf,
    pub content: String,
}

/// Paths written by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifacts {
    pub page_object: PathBuf,
    pub step_definition: PathBuf,
}

/// Root under which `pages/` and `steps/` are created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(".")
    }
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Base name used for both artifacts: the feature file name with a
    /// trailing `.feature` removed. Any other name is kept whole, and the
    /// directory the feature lives in plays no part.
    pub fn feature_name(feature_path: &Path) -> CodegenResult<String> {
        let file_name = feature_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                CodegenError::invalid_input(feature_path, "feature path has no usable file name")
            })?;

        let name = match file_name.strip_suffix(FEATURE_EXTENSION) {
            Some(stem) if !stem.is_empty() => stem,
            _ => file_name,
        };
        Ok(name.to_string())
    }

    pub fn page_object_path(&self, name: &str) -> PathBuf {
        self.root.join(PAGES_DIR).join(format!("{name}.page.ts"))
    }

    pub fn step_definition_path(&self, name: &str) -> PathBuf {
        self.root.join(STEPS_DIR).join(format!("{name}.steps.ts"))
    }

    /// The page-object and step-definition artifacts, in write order.
    pub fn artifacts_for(
        &self,
        feature_path: &Path,
        result: GenerationResult,
    ) -> CodegenResult<[OutputArtifact; 2]> {
        let name = Self::feature_name(feature_path)?;
        Ok([
            OutputArtifact {
                path: self.page_object_path(&name),
                content: result.page_object,
            },
            OutputArtifact {
                path: self.step_definition_path(&name),
                content: result.step_definition,
            },
        ])
    }

    /// Create the destination directories and write both artifacts,
    /// overwriting whatever is there.
    pub async fn write_all(
        &self,
        artifacts: [OutputArtifact; 2],
    ) -> CodegenResult<WrittenArtifacts> {
        for dir in [self.root.join(PAGES_DIR), self.root.join(STEPS_DIR)] {
            tokio::fs::create_dir_all(&dir)
                .await
                .map_err(|e| CodegenError::output_error(&dir, e))?;
        }

        let [page_object, step_definition] = artifacts;
        for artifact in [&page_object, &step_definition] {
            tokio::fs::write(&artifact.path, artifact.content.as_bytes())
                .await
                .map_err(|e| CodegenError::output_error(&artifact.path, e))?;
            log_debug!(
                path = %artifact.path.display(),
                bytes = artifact.content.len(),
                "Wrote artifact"
            );
        }

        log_info!(
            page_object = %page_object.path.display(),
            step_definition = %step_definition.path.display(),
            "Generated artifacts written"
        );

        Ok(WrittenArtifacts {
            page_object: page_object.path,
            step_definition: step_definition.path,
        })
    }
}

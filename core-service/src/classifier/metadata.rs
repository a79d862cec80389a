//! Model Metadata Sidecar
//!
//! Small JSON document written next to the trained model describing what the
//! model expects: input width, optional decision threshold, and the feature
//! layout it was trained against.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;
use crate::features::layout::validate_layout;

/// Metadata persisted alongside the ONNX model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Fused input width the model was trained with (text dim + features).
    pub input_dim: usize,
    /// Free-form model family tag, for logs only.
    #[serde(default)]
    pub model_type: Option<String>,
    /// Decision threshold when the graph emits scores instead of labels.
    #[serde(default)]
    pub threshold: Option<f32>,
    /// Feature layout version the model was trained against.
    #[serde(default)]
    pub feature_version: Option<u8>,
    /// CRC32 layout hash the model was trained against.
    #[serde(default)]
    pub feature_layout_hash: Option<u32>,
}

impl ModelMetadata {
    /// Load and validate the sidecar.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        if !path.exists() {
            return Err(ArtifactError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let metadata: ModelMetadata = serde_json::from_str(&content)?;
        metadata.validate()?;

        Ok(metadata)
    }

    /// Reject metadata that is internally impossible or was produced against
    /// a different feature layout.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.input_dim == 0 {
            return Err(ArtifactError::Invalid("input_dim must be non-zero".to_string()));
        }

        if let (Some(version), Some(hash)) = (self.feature_version, self.feature_layout_hash) {
            validate_layout(version, hash).map_err(|e| ArtifactError::LayoutMismatch {
                expected_version: e.expected_version,
                expected_hash: e.expected_hash,
                actual_version: e.actual_version,
                actual_hash: e.actual_hash,
            })?;
        }

        Ok(())
    }

    pub fn threshold(&self) -> f32 {
        self.threshold.unwrap_or(0.5)
    }
}

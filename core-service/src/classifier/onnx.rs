//! ONNX Classifier - ONNX Runtime Integration
//!
//! Loads the trained model once at startup and runs per-call inference on
//! the fused vector. The session sits behind a mutex because the runtime
//! takes it mutably; model state itself never changes after load.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use super::metadata::ModelMetadata;
use super::{Classifier, LABEL_BENIGN, LABEL_MALICIOUS};
use crate::error::{ArtifactError, ScanError};

/// Classifier backed by an ONNX Runtime session.
pub struct OnnxClassifier {
    session: Mutex<Session>,
    metadata: ModelMetadata,
}

impl OnnxClassifier {
    /// Load the model and its metadata sidecar.
    ///
    /// Fatal on a missing or unloadable model, a missing sidecar, or a
    /// sidecar trained against a different feature layout. There is no
    /// fallback classifier: a process that cannot load its model does not
    /// serve.
    pub fn load(model_path: &Path, metadata_path: &Path) -> Result<Self, ArtifactError> {
        log::info!("Loading ONNX model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(ArtifactError::NotFound(model_path.to_path_buf()));
        }

        let metadata = ModelMetadata::load(metadata_path)?;

        let session = Session::builder()
            .map_err(|e| ArtifactError::SessionError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ArtifactError::SessionError(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| ArtifactError::SessionError(format!("Failed to load model: {}", e)))?;

        log::info!(
            "ONNX model loaded: input_dim={}, type={}",
            metadata.input_dim,
            metadata.model_type.as_deref().unwrap_or("unknown")
        );

        Ok(Self {
            session: Mutex::new(session),
            metadata,
        })
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn run_session(&self, fused: &[f32]) -> Result<u8, ScanError> {
        let mut session = self.session.lock();

        let input_array = Array2::<f32>::from_shape_vec((1, fused.len()), fused.to_vec())
            .map_err(|e| ScanError::InferenceError(format!("Array error: {}", e)))?;

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| ScanError::InferenceError("No output defined".to_string()))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ScanError::InferenceError(format!("Tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ScanError::InferenceError(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| ScanError::InferenceError("No output".to_string()))?;

        // Converted scikit-learn pipelines emit an i64 label tensor; other
        // exports emit a single f32 score. Accept both.
        if let Ok(labels) = output.try_extract_tensor::<i64>() {
            let data = labels.1;
            let raw = data
                .first()
                .ok_or_else(|| ScanError::InferenceError("Empty label tensor".to_string()))?;
            return Ok(if *raw != 0 { LABEL_MALICIOUS } else { LABEL_BENIGN });
        }

        let scores = output
            .try_extract_tensor::<f32>()
            .map_err(|e| ScanError::InferenceError(format!("Extract error: {}", e)))?;
        let data = scores.1;
        let score = data
            .first()
            .ok_or_else(|| ScanError::InferenceError("Empty score tensor".to_string()))?;

        Ok(if *score >= self.metadata.threshold() {
            LABEL_MALICIOUS
        } else {
            LABEL_BENIGN
        })
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, fused: &[f32]) -> Result<u8, ScanError> {
        if fused.len() != self.metadata.input_dim {
            return Err(ScanError::DimensionMismatch {
                expected: self.metadata.input_dim,
                actual: fused.len(),
            });
        }

        self.run_session(fused)
    }

    fn input_dim(&self) -> usize {
        self.metadata.input_dim
    }
}

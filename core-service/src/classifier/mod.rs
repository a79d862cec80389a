//! Classifier Module - Binary URL Classifier
//!
//! The trait is the seam between the scoring pipeline and the inference
//! runtime, so the pipeline can be exercised with injected fixtures and the
//! backend can be swapped without touching the orchestrator.

pub mod metadata;
pub mod onnx;

use crate::error::ScanError;

pub use metadata::ModelMetadata;
pub use onnx::OnnxClassifier;

/// Labels emitted by the trained model.
pub const LABEL_BENIGN: u8 = 0;
pub const LABEL_MALICIOUS: u8 = 1;

/// Binary classifier over a fused feature vector.
///
/// `predict` is a pure mapping given a loaded model: same vector in, same
/// label out. Label 1 is malicious, 0 is benign.
pub trait Classifier: Send + Sync {
    /// Classify a fused vector. The vector width must equal `input_dim`;
    /// anything else is an error, never truncated or padded.
    fn predict(&self, fused: &[f32]) -> Result<u8, ScanError>;

    /// Input width the model was trained with.
    fn input_dim(&self) -> usize;
}

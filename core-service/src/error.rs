//! Error types for the scoring core.
//!
//! Startup failures ([`ArtifactError`]) are a distinct type from per-call
//! failures ([`ScanError`]): a process that cannot load its artifacts never
//! becomes ready, while a scan failure is reported to the one caller.

use std::path::PathBuf;

// ============================================================================
// ARTIFACT ERRORS (startup, fatal)
// ============================================================================

/// Failure to load or validate a model artifact at startup.
#[derive(Debug)]
pub enum ArtifactError {
    /// Artifact file does not exist.
    NotFound(PathBuf),
    IoError(std::io::Error),
    /// Artifact file exists but is not valid JSON for its schema.
    ParseError(serde_json::Error),
    /// Artifact parsed but its contents are internally inconsistent.
    Invalid(String),
    /// ONNX Runtime failed to build a session from the model file.
    SessionError(String),
    /// Artifact was produced against a different feature layout.
    LayoutMismatch {
        expected_version: u8,
        expected_hash: u32,
        actual_version: u8,
        actual_hash: u32,
    },
    /// Classifier input width disagrees with text dim + feature count.
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactError::NotFound(path) => write!(f, "Artifact not found: {}", path.display()),
            ArtifactError::IoError(e) => write!(f, "IO Error: {}", e),
            ArtifactError::ParseError(e) => write!(f, "Parse Error: {}", e),
            ArtifactError::Invalid(msg) => write!(f, "Invalid artifact: {}", msg),
            ArtifactError::SessionError(msg) => write!(f, "Session Error: {}", msg),
            ArtifactError::LayoutMismatch { expected_version, expected_hash, actual_version, actual_hash } => {
                write!(f, "Feature Layout Mismatch: Expected v{} ({:x}), Got v{} ({:x})",
                    expected_version, expected_hash, actual_version, actual_hash)
            }
            ArtifactError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension Mismatch: classifier expects {}, artifacts produce {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for ArtifactError {}

impl From<std::io::Error> for ArtifactError {
    fn from(err: std::io::Error) -> Self {
        ArtifactError::IoError(err)
    }
}

impl From<serde_json::Error> for ArtifactError {
    fn from(err: serde_json::Error) -> Self {
        ArtifactError::ParseError(err)
    }
}

// ============================================================================
// STORAGE ERRORS (history document)
// ============================================================================

/// Failure to read or write the history document.
#[derive(Debug)]
pub enum StorageError {
    IoError(std::io::Error),
    /// Document exists but does not parse as a history entry list.
    Corrupt(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::IoError(e) => write!(f, "History IO Error: {}", e),
            StorageError::Corrupt(e) => write!(f, "History document corrupt: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::IoError(err)
    }
}

// ============================================================================
// SCAN ERRORS (per call)
// ============================================================================

/// Failure of a single scoring call.
#[derive(Debug)]
pub enum ScanError {
    /// Missing or empty URL. Nothing is processed or recorded.
    EmptyUrl,
    /// Fused vector width disagrees with the classifier input width.
    DimensionMismatch { expected: usize, actual: usize },
    /// Inference failed inside the runtime.
    InferenceError(String),
    /// The verdict was computed but could not be recorded.
    StorageError(StorageError),
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::EmptyUrl => write!(f, "URL is required"),
            ScanError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension Mismatch: classifier expects {}, got {}", expected, actual)
            }
            ScanError::InferenceError(msg) => write!(f, "InferenceError: {}", msg),
            ScanError::StorageError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ScanError {}

impl From<StorageError> for ScanError {
    fn from(err: StorageError) -> Self {
        ScanError::StorageError(err)
    }
}

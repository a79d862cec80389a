//! TF-IDF Text Vectorizer
//!
//! Maps a token sequence onto the fixed-dimension representation the
//! classifier was trained with. The transform itself is fitted offline; this
//! module only loads the fitted artifact and applies it.
//!
//! Artifact schema (JSON):
//!
//! ```json
//! {
//!   "vocabulary": { "token": 0, ... },
//!   "idf": [1.2, ...],
//!   "lowercase": true,
//!   "l2_normalize": true
//! }
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;

fn default_true() -> bool {
    true
}

/// On-disk form of the fitted transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct VectorizerArtifact {
    /// Token to column index.
    vocabulary: HashMap<String, usize>,
    /// IDF weight per column. Length defines the output dimensionality.
    idf: Vec<f32>,
    #[serde(default = "default_true")]
    lowercase: bool,
    #[serde(default = "default_true")]
    l2_normalize: bool,
}

/// Fitted TF-IDF transform, immutable after load.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    lowercase: bool,
    l2_normalize: bool,
}

impl TfidfVectorizer {
    /// Load the fitted transform from disk, validating internal consistency.
    ///
    /// A missing or corrupt artifact is fatal: the scoring pipeline cannot
    /// serve without it.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        log::info!("Loading vectorizer artifact from: {}", path.display());

        if !path.exists() {
            return Err(ArtifactError::NotFound(path.to_path_buf()));
        }

        let data = std::fs::read(path)?;
        let artifact: VectorizerArtifact = serde_json::from_slice(&data)?;

        if artifact.idf.is_empty() {
            return Err(ArtifactError::Invalid("empty IDF table".to_string()));
        }
        if artifact.vocabulary.len() != artifact.idf.len() {
            return Err(ArtifactError::Invalid(format!(
                "vocabulary has {} entries but IDF table has {}",
                artifact.vocabulary.len(),
                artifact.idf.len()
            )));
        }
        if let Some((token, &index)) = artifact
            .vocabulary
            .iter()
            .find(|(_, &index)| index >= artifact.idf.len())
        {
            return Err(ArtifactError::Invalid(format!(
                "vocabulary index {} for token {:?} out of range (dim {})",
                index,
                token,
                artifact.idf.len()
            )));
        }

        log::info!("Vectorizer loaded: {} terms", artifact.idf.len());

        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            lowercase: artifact.lowercase,
            l2_normalize: artifact.l2_normalize,
        })
    }

    /// Output dimensionality, fixed at load time.
    pub fn dim(&self) -> usize {
        self.idf.len()
    }

    /// Apply the fitted transform to a token sequence.
    ///
    /// Term counts over the vocabulary, weighted by IDF, then L2-normalized.
    /// Unseen tokens contribute nothing; an empty sequence yields the zero
    /// vector. Never fails.
    pub fn transform(&self, tokens: &[String]) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.idf.len()];

        for token in tokens {
            let term: Cow<'_, str> = if self.lowercase {
                Cow::Owned(token.to_lowercase())
            } else {
                Cow::Borrowed(token.as_str())
            };

            if let Some(&index) = self.vocabulary.get(term.as_ref()) {
                vector[index] += 1.0;
            }
        }

        for (value, idf) in vector.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        if self.l2_normalize {
            let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
            if norm > 0.0 {
                for value in &mut vector {
                    *value /= norm;
                }
            }
        }

        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn write_artifact(dir: &tempfile::TempDir, json: &str) -> std::path::PathBuf {
        let path = dir.path().join("vectorizer.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    fn fixture(dir: &tempfile::TempDir) -> TfidfVectorizer {
        let path = write_artifact(
            dir,
            r#"{
                "vocabulary": {"https": 0, "example": 1, "com": 2},
                "idf": [1.0, 2.0, 1.0],
                "lowercase": true,
                "l2_normalize": false
            }"#,
        );
        TfidfVectorizer::load(&path).unwrap()
    }

    #[test]
    fn missing_artifact_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = TfidfVectorizer::load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(ArtifactError::NotFound(_))));
    }

    #[test]
    fn corrupt_artifact_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(&dir, "{ not json");
        assert!(matches!(TfidfVectorizer::load(&path), Err(ArtifactError::ParseError(_))));
    }

    #[test]
    fn out_of_range_index_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(&dir, r#"{"vocabulary": {"a": 5}, "idf": [1.0]}"#);
        assert!(matches!(TfidfVectorizer::load(&path), Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn vocabulary_and_idf_width_must_agree() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(&dir, r#"{"vocabulary": {"a": 0}, "idf": [1.0, 1.0]}"#);
        assert!(matches!(TfidfVectorizer::load(&path), Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn transform_counts_and_weights_terms() {
        let dir = tempfile::tempdir().unwrap();
        let v = fixture(&dir);

        let tokens = tokenize("https://example.example.com");
        // "example" appears twice, idf 2.0.
        assert_eq!(v.transform(&tokens), vec![1.0, 4.0, 1.0]);
    }

    #[test]
    fn unseen_tokens_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let v = fixture(&dir);

        let out = v.transform(&tokenize("ftp://warez.biz"));
        assert_eq!(out, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_sequence_yields_zero_vector() {
        let dir = tempfile::tempdir().unwrap();
        let v = fixture(&dir);

        assert_eq!(v.transform(&[]), vec![0.0, 0.0, 0.0]);
        assert_eq!(v.dim(), 3);
    }

    #[test]
    fn l2_normalization_scales_to_unit_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(
            &dir,
            r#"{"vocabulary": {"a": 0, "b": 1}, "idf": [1.0, 1.0]}"#,
        );
        let v = TfidfVectorizer::load(&path).unwrap();

        let out = v.transform(&["a".to_string(), "b".to_string()]);
        let norm = out.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);

        // The zero vector stays zero instead of dividing by zero.
        assert_eq!(v.transform(&[]), vec![0.0, 0.0]);
    }

    #[test]
    fn lowercase_folds_case_before_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let v = fixture(&dir);

        let out = v.transform(&["HTTPS".to_string()]);
        assert_eq!(out, vec![1.0, 0.0, 0.0]);
    }
}

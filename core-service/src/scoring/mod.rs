//! Scoring Orchestrator
//!
//! Composes the pipeline into a single `score(url)` operation and owns the
//! two invariants with teeth: fusion order (text vector first, lexical
//! features last) and override precedence (trust list before inference).

mod verdict;


use std::sync::Arc;

use crate::classifier::Classifier;
use crate::error::{ArtifactError, ScanError};
use crate::features::{LexicalFeatures, FEATURE_COUNT};
use crate::history::{HistoryEntry, HistoryStore};
use crate::tokenizer::tokenize;
use crate::trustlist::TrustList;
use crate::vectorizer::TfidfVectorizer;

pub use verdict::{Label, Risk, Verdict, REASON_BENIGN, REASON_MALICIOUS, REASON_TRUSTED};

/// Concatenate the text vector and the lexical features, in that order.
///
/// The classifier's trained weights assume this exact order.
pub fn fuse(text_vector: &[f32], features: &LexicalFeatures) -> Vec<f32> {
    let mut fused = Vec::with_capacity(text_vector.len() + FEATURE_COUNT);
    fused.extend_from_slice(text_vector);
    fused.extend_from_slice(features.as_slice());
    fused
}

/// Loaded scoring pipeline: vectorizer, classifier, trust list, and the
/// history store every verdict is recorded to.
///
/// Constructed once at startup and shared read-only across requests; no
/// component mutates the model artifacts after load.
pub struct ScanEngine {
    vectorizer: TfidfVectorizer,
    classifier: Box<dyn Classifier>,
    trusted: TrustList,
    history: Arc<HistoryStore>,
}

impl ScanEngine {
    /// Assemble the engine, checking the one startup invariant that makes
    /// every later prediction meaningful: the classifier's input width must
    /// equal the vectorizer width plus the lexical feature count.
    pub fn new(
        vectorizer: TfidfVectorizer,
        classifier: Box<dyn Classifier>,
        trusted: TrustList,
        history: Arc<HistoryStore>,
    ) -> Result<Self, ArtifactError> {
        let expected = classifier.input_dim();
        let actual = vectorizer.dim() + FEATURE_COUNT;

        if expected != actual {
            return Err(ArtifactError::DimensionMismatch { expected, actual });
        }

        log::info!(
            "Scan engine ready: text_dim={}, features={}, trusted_domains={}",
            vectorizer.dim(),
            FEATURE_COUNT,
            trusted.domains().len()
        );

        Ok(Self {
            vectorizer,
            classifier,
            trusted,
            history,
        })
    }

    /// Score one URL and record the verdict.
    ///
    /// Trusted domains short-circuit before any tokenization or inference.
    /// Every non-rejected call records exactly one history entry; a record
    /// failure surfaces instead of silently losing audit history.
    pub fn score(&self, url: &str) -> Result<Verdict, ScanError> {
        if url.is_empty() {
            return Err(ScanError::EmptyUrl);
        }

        if self.trusted.matches(url) {
            log::debug!("Trusted domain match, skipping inference: {}", url);
            let verdict = Verdict::trusted(url);
            self.record(&verdict)?;
            return Ok(verdict);
        }

        let tokens = tokenize(url);
        let features = LexicalFeatures::extract(url);
        let text_vector = self.vectorizer.transform(&tokens);
        let fused = fuse(&text_vector, &features);

        let raw_label = self.classifier.predict(&fused)?;
        let verdict = Verdict::from_label(url, raw_label);

        log::debug!("Scored {}: {:?} ({})", url, verdict.label, verdict.reason);

        self.record(&verdict)?;
        Ok(verdict)
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn trusted(&self) -> &TrustList {
        &self.trusted
    }

    fn record(&self, verdict: &Verdict) -> Result<(), ScanError> {
        self.history
            .record(HistoryEntry::new(&verdict.url, verdict.label, &verdict.reason))?;
        Ok(())
    }
}

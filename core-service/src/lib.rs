//! Vantage Scoring Core
//!
//! URL scoring pipeline: tokenization, lexical feature extraction, TF-IDF
//! text vectors, classifier inference, trusted-domain short-circuit, and the
//! append-only scan history.
//!
//! The pipeline is assembled into a [`ScanEngine`], an explicitly constructed
//! context object that owns the loaded model artifacts and is shared
//! read-only across requests. The HTTP surface lives in a separate crate.

pub mod classifier;
pub mod error;
pub mod features;
pub mod history;
pub mod scoring;
pub mod tokenizer;
pub mod trustlist;
pub mod vectorizer;

pub use classifier::{Classifier, ModelMetadata, OnnxClassifier};
pub use error::{ArtifactError, ScanError, StorageError};
pub use features::{LexicalFeatures, FEATURE_COUNT};
pub use history::{HistoryEntry, HistoryStore, ScanStats};
pub use scoring::{Label, Risk, ScanEngine, Verdict};
pub use tokenizer::tokenize;
pub use trustlist::TrustList;
pub use vectorizer::TfidfVectorizer;

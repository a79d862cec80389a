//! Configuration module

use std::env;

use vantage_core::history::default_history_path;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Trained classifier model (ONNX)
    pub model_path: String,

    /// Classifier metadata sidecar (JSON)
    pub model_meta_path: String,

    /// Fitted TF-IDF vectorizer artifact (JSON)
    pub vectorizer_path: String,

    /// History document path
    pub history_path: String,

    /// Gemini API key (chat endpoint fails upstream when unset)
    pub gemini_api_key: String,

    /// Gemini model name
    pub gemini_model: String,

    /// Timeout for assistant calls
    pub gemini_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            model_path: env::var("VANTAGE_MODEL_PATH")
                .unwrap_or_else(|_| "vantage_url_model.onnx".to_string()),

            model_meta_path: env::var("VANTAGE_MODEL_META_PATH")
                .unwrap_or_else(|_| "vantage_url_model.meta.json".to_string()),

            vectorizer_path: env::var("VANTAGE_VECTORIZER_PATH")
                .unwrap_or_else(|_| "vantage_vectorizer.json".to_string()),

            history_path: env::var("VANTAGE_HISTORY_PATH")
                .unwrap_or_else(|_| default_history_path().to_string_lossy().into_owned()),

            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),

            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-flash-lite-latest".to_string()),

            gemini_timeout_seconds: env::var("GEMINI_TIMEOUT_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
        }
    }
}

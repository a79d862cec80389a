//! Security Assistant - Gemini REST client
//!
//! Forwards free-text security questions to the Gemini `generateContent`
//! API, passing the scanned URL as optional context. Lives entirely outside
//! the scoring path: a slow or failing upstream call can never delay a scan.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Assistant configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub timeout_seconds: u64,
}

/// Gemini API client
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: reqwest::Client,
}

// Request/Response types

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Upstream assistant failure.
#[derive(Debug)]
pub struct AssistantError(pub String);

impl std::fmt::Display for AssistantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AssistantError: {}", self.0)
    }
}

impl std::error::Error for AssistantError {}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        AssistantError(err.to_string())
    }
}

impl From<AssistantError> for crate::AppError {
    fn from(err: AssistantError) -> Self {
        crate::AppError::ExternalServiceError(err.0)
    }
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Ask the assistant a question, with the scanned URL as optional
    /// context.
    pub async fn ask(&self, message: &str, url: Option<&str>) -> Result<String, AssistantError> {
        if self.config.api_key.is_empty() {
            return Err(AssistantError("GEMINI_API_KEY is not configured".to_string()));
        }

        let prompt = build_prompt(message, url);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let endpoint = format!(
            "{}/models/{}:generateContent",
            GEMINI_API_BASE, self.config.model
        );

        let response = self
            .http_client
            .post(&endpoint)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError(format!("Gemini API returned {}: {}", status, body)));
        }

        let payload: GenerateContentResponse = response.json().await?;

        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| AssistantError("Gemini API returned no candidates".to_string()))
    }
}

fn build_prompt(message: &str, url: Option<&str>) -> String {
    match url {
        Some(url) => format!(
            "You are a cybersecurity assistant.\n\n\
             URL: {}\n\
             User Question: {}\n\n\
             Give short, clear, security-focused answer.",
            url, message
        ),
        None => format!(
            "You are a cybersecurity assistant.\n\
             User Question: {}\n\
             Give short, clear, security-focused answer.",
            message
        ),
    }
}

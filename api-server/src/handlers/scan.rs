//! URL scan handler

use axum::{extract::State, Json};
use serde::Deserialize;

use vantage_core::Verdict;

use crate::{AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Score a URL. A missing or empty URL is a 400; the verdict body carries
/// `{url, prediction, risk, reason}`.
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> AppResult<Json<Verdict>> {
    let url = request.url.unwrap_or_default();
    let verdict = state.engine.score(&url)?;

    tracing::info!("Scanned {}: {:?}", verdict.url, verdict.label);

    Ok(Json(verdict))
}

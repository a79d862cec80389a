//! History and stats handlers

use axum::{extract::State, Json};

use vantage_core::{HistoryEntry, ScanStats};

use crate::{AppResult, AppState};

/// All scan history entries, in insertion order. A history that has not been
/// written yet reads as empty.
pub async fn history(State(state): State<AppState>) -> AppResult<Json<Vec<HistoryEntry>>> {
    let entries = state.history.all()?;
    Ok(Json(entries))
}

/// Aggregate counts over the whole history.
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<ScanStats>> {
    let stats = state.history.stats()?;
    Ok(Json(stats))
}

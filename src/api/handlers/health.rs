//! Liveness probe handler.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::error::AppError;
use crate::state::AppState;

/// Reports whether the service can reach its store.
///
/// # Endpoint
///
/// `GET /health` — 200 `{"status":"ok"}` when a trivial database
/// round-trip succeeds, 500 otherwise.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    sqlx::query("SELECT 1")
        .execute(&state.db)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "health check failed");
            AppError::Internal
        })?;

    Ok(Json(json!({ "status": "ok" })))
}

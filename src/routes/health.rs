use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{
    error::{Error, Result},
    AppState,
};

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse> {
    sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "Health check query failed");
            Error::Internal("Database unavailable".to_string())
        })?;

    let body = json!({
        "status": "ok",
    });
    Ok((StatusCode::OK, Json(body)))
}

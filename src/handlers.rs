use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::startup::AppState;

/// Handler for the daily digest
pub async fn summarize_handler(State(state): State<AppState>) -> Response {
    let request_id = Uuid::new_v4();
    let span = info_span!("summarize", %request_id);

    match state.digest.run().instrument(span).await {
        Ok(digest) => {
            info!(%request_id, "Digest generated");
            (StatusCode::OK, Json(digest)).into_response()
        }
        Err(failure) => {
            error!(%request_id, category = %failure.category(), "Digest failed: {}", failure);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": failure.to_string() })),
            )
                .into_response()
        }
    }
}

/// Handler for the liveness check
pub async fn ping_handler() -> &'static str {
    "pong"
}

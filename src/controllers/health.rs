use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::pipeline::PipelineService;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness reports whether text generation can run and which speech
/// provider is wired in. A missing credential does not make the service
/// unready; generation requests are rejected individually instead.
pub async fn health_ready(State(pipeline): State<Arc<PipelineService>>) -> impl IntoResponse {
    let text_generation = if pipeline.text_generation_available() {
        "configured"
    } else {
        "missing_credential"
    };

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "text_generation": text_generation,
            "tts": pipeline.tts_provider()
        })),
    )
}

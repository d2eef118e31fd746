use axum::{
    body::{Body, Bytes},
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::pipeline::{AudioResponse, GenerateAudioRequest, PipelineService, PipelineServiceApi},
    error::{AppError, AppResult},
};

pub const PLAYBACK_PATH: &str = "/api/audio";
pub const DOWNLOAD_PATH: &str = "/api/audio/download";

pub struct AudioController {
    pipeline_service: Arc<PipelineService>,
    file_name: String,
}

impl AudioController {
    pub fn new(pipeline_service: Arc<PipelineService>, file_name: String) -> Self {
        Self {
            pipeline_service,
            file_name,
        }
    }

    /// POST /api/sessions/{sessionId}/audio - Narrate the current summary text
    pub async fn generate_audio(
        State(controller): State<Arc<AudioController>>,
        Path(session_id): Path<Uuid>,
        body: Bytes,
    ) -> AppResult<Json<AudioResponse>> {
        let request = parse_audio_request(&body)?;

        let artifact = controller
            .pipeline_service
            .generate_audio(session_id, request.text)
            .await?;

        Ok(Json(AudioResponse {
            file_name: controller.file_name.clone(),
            size_bytes: artifact.size_bytes,
            playback_url: PLAYBACK_PATH.to_string(),
            download_url: DOWNLOAD_PATH.to_string(),
        }))
    }

    /// GET /api/audio - Stream the latest audio for inline playback
    pub async fn play(
        State(controller): State<Arc<AudioController>>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let audio_data = controller.pipeline_service.load_audio().await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));
        headers.insert(header::CONTENT_DISPOSITION, HeaderValue::from_static("inline"));

        Ok((StatusCode::OK, headers, Body::from(audio_data)))
    }

    /// GET /api/audio/download - Offer the latest audio as a file download
    pub async fn download(
        State(controller): State<Arc<AudioController>>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let audio_data = controller.pipeline_service.load_audio().await?;

        let disposition = format!("attachment; filename=\"{}\"", controller.file_name);
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_str(&disposition)
                .map_err(|e| AppError::Internal(format!("Invalid file name header: {}", e)))?,
        );

        Ok((StatusCode::OK, headers, Body::from(audio_data)))
    }
}

/// An empty body means "narrate the stored text"; anything else must be a
/// valid `GenerateAudioRequest`.
fn parse_audio_request(body: &[u8]) -> AppResult<GenerateAudioRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GenerateAudioRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid audio request body: {}", e)))
}

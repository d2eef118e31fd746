use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        pipeline::{
            EditSummaryRequest, GenerateSummaryRequest, LanguageOption, ModelOption,
            OptionsResponse, PipelineService, PipelineServiceApi,
        },
        session::SessionResponse,
        summary::{Language, ModelTier},
    },
    error::AppResult,
};

pub struct SessionController {
    pipeline_service: Arc<PipelineService>,
}

impl SessionController {
    pub fn new(pipeline_service: Arc<PipelineService>) -> Self {
        Self { pipeline_service }
    }

    /// GET /api/options - Languages and models available for generation
    pub async fn get_options(
        State(controller): State<Arc<SessionController>>,
    ) -> Json<OptionsResponse> {
        let languages = Language::ALL
            .into_iter()
            .map(|language| LanguageOption {
                code: language,
                label: language.label().to_string(),
                closing_sentence: language.closing_sentence(),
            })
            .collect();

        let models = ModelTier::ALL
            .into_iter()
            .map(|model| ModelOption {
                id: model,
                label: model.label().to_string(),
                model_id: model.model_id().to_string(),
            })
            .collect();

        Json(OptionsResponse {
            languages,
            models,
            text_generation_available: controller.pipeline_service.text_generation_available(),
        })
    }

    /// POST /api/sessions - Start a new session
    pub async fn create_session(
        State(controller): State<Arc<SessionController>>,
    ) -> (StatusCode, Json<SessionResponse>) {
        let session = controller.pipeline_service.create_session().await;
        (StatusCode::CREATED, Json(SessionResponse::from(&session)))
    }

    /// GET /api/sessions/{sessionId} - Current session state
    pub async fn get_session(
        State(controller): State<Arc<SessionController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<Json<SessionResponse>> {
        let session = controller.pipeline_service.get_session(session_id).await?;
        Ok(Json(SessionResponse::from(&session)))
    }

    /// POST /api/sessions/{sessionId}/summary - Scrape the page and generate a summary
    pub async fn generate_summary(
        State(controller): State<Arc<SessionController>>,
        Path(session_id): Path<Uuid>,
        Json(request): Json<GenerateSummaryRequest>,
    ) -> AppResult<Json<SessionResponse>> {
        let session = controller
            .pipeline_service
            .generate_summary(session_id, request)
            .await?;
        Ok(Json(SessionResponse::from(&session)))
    }

    /// PUT /api/sessions/{sessionId}/summary - Replace the summary with an edited text
    pub async fn edit_summary(
        State(controller): State<Arc<SessionController>>,
        Path(session_id): Path<Uuid>,
        Json(request): Json<EditSummaryRequest>,
    ) -> AppResult<Json<SessionResponse>> {
        let session = controller
            .pipeline_service
            .edit_summary(session_id, request.text)
            .await?;
        Ok(Json(SessionResponse::from(&session)))
    }
}

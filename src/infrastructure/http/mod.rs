pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    audio::{AudioController, DOWNLOAD_PATH, PLAYBACK_PATH},
    health,
    session::SessionController,
};
use crate::domain::pipeline::PipelineService;
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the application router with all routes configured
pub fn create_router(pipeline_service: Arc<PipelineService>, audio_file_name: String) -> Router {
    let session_controller = Arc::new(SessionController::new(pipeline_service.clone()));
    let audio_controller = Arc::new(AudioController::new(
        pipeline_service.clone(),
        audio_file_name,
    ));

    // Session routes: generate, edit and inspect the summary
    let session_routes = Router::new()
        .route("/api/options", get(SessionController::get_options))
        .route("/api/sessions", post(SessionController::create_session))
        .route("/api/sessions/:session_id", get(SessionController::get_session))
        .route(
            "/api/sessions/:session_id/summary",
            post(SessionController::generate_summary).put(SessionController::edit_summary),
        )
        .with_state(session_controller);

    // Audio routes: narrate, then play back or download the file
    let audio_routes = Router::new()
        .route(
            "/api/sessions/:session_id/audio",
            post(AudioController::generate_audio),
        )
        .route(PLAYBACK_PATH, get(AudioController::play))
        .route(DOWNLOAD_PATH, get(AudioController::download))
        .with_state(audio_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pipeline_service)
        .merge(session_routes)
        .merge(audio_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server
pub async fn start_http_server(config: &Config, app: Router) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

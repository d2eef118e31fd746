use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use product_narrator::domain::narration::Narrator;
use product_narrator::domain::pipeline::PipelineService;
use product_narrator::domain::session::SessionStore;
use product_narrator::domain::summary::ApiKey;
use product_narrator::infrastructure::config::{Config, LogFormat, TtsProvider};
use product_narrator::infrastructure::http::{create_router, start_http_server};
use product_narrator::infrastructure::repositories::{
    GeminiSummaryRepository, GoogleTtsRepository, HttpPageRepository, OpenAiTtsRepository,
    TtsRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Product Narrator on {}:{}",
        config.host,
        config.port
    );

    // The credential is read once; without it the service still runs but
    // refuses text generation
    let api_key = config.gemini_api_key.clone().map(ApiKey::new);
    if api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set. Text generation is disabled until it is configured.");
    }

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    tracing::info!("Instantiating repositories...");
    let page_repo = Arc::new(HttpPageRepository::new()?);
    let summary_repo = Arc::new(GeminiSummaryRepository::new(config.gemini_base_url.clone()));
    let tts_repo: Arc<dyn TtsRepository> = match config.tts_provider {
        TtsProvider::Google => Arc::new(GoogleTtsRepository::new(
            config.google_tts_base_url.clone(),
        )),
        TtsProvider::OpenAi => {
            let api_key = config.openai_api_key.as_deref().unwrap_or_default();
            Arc::new(OpenAiTtsRepository::new(
                Arc::new(OpenAiTtsRepository::build_client(api_key)),
                config.openai_tts_model.clone(),
                config.openai_tts_voice.clone(),
            ))
        }
    };
    tracing::info!(provider = tts_repo.provider(), "TTS provider configured");

    // 2. Instantiate services
    tracing::info!("Instantiating services...");
    let sessions = SessionStore::new(
        config.session_max_capacity,
        Duration::from_secs(config.session_idle_minutes * 60),
    );
    let pipeline_service = Arc::new(PipelineService::new(
        page_repo,
        summary_repo,
        Narrator::new(tts_repo),
        sessions,
        api_key,
        config.product_labels.labels(),
        config.audio_output_path.clone(),
    ));

    tracing::info!(
        audio_output_path = %config.audio_output_path.display(),
        development = config.is_development(),
        "Pipeline ready"
    );

    // 3. Start HTTP server with all routes
    let app = create_router(pipeline_service, config.audio_file_name());
    start_http_server(&config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "product_narrator=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "product_narrator=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

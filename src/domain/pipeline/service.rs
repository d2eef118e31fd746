use super::dto::GenerateSummaryRequest;
use super::error::PipelineError;
use crate::domain::narration::Narrator;
use crate::domain::product::{extract_product_text, ProductLabels};
use crate::domain::session::{Session, SessionStore, Summary};
use crate::domain::summary::{build_prompt, ApiKey};
use crate::infrastructure::repositories::{PageRepository, SummaryRepository};
use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;
use uuid::Uuid;

/// Result of a successful narration
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    pub path: PathBuf,
    pub size_bytes: u64,
}

pub struct PipelineService {
    page_repo: Arc<dyn PageRepository>,
    summary_repo: Arc<dyn SummaryRepository>,
    narrator: Narrator,
    sessions: SessionStore,
    api_key: Option<ApiKey>,
    labels: ProductLabels,
    audio_path: PathBuf,
}

impl PipelineService {
    pub fn new(
        page_repo: Arc<dyn PageRepository>,
        summary_repo: Arc<dyn SummaryRepository>,
        narrator: Narrator,
        sessions: SessionStore,
        api_key: Option<ApiKey>,
        labels: ProductLabels,
        audio_path: PathBuf,
    ) -> Self {
        Self {
            page_repo,
            summary_repo,
            narrator,
            sessions,
            api_key,
            labels,
            audio_path,
        }
    }

    pub fn text_generation_available(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn tts_provider(&self) -> &'static str {
        self.narrator.provider()
    }

    pub fn audio_path(&self) -> &PathBuf {
        &self.audio_path
    }
}

#[async_trait]
pub trait PipelineServiceApi: Send + Sync {
    /// Start a new session with no summary
    async fn create_session(&self) -> Session;

    async fn get_session(&self, session_id: Uuid) -> Result<Session, PipelineError>;

    /// Fetch the product page, extract its text and generate a summary.
    ///
    /// On success the session holds the new summary, replacing any previous
    /// one. On failure the session is left exactly as it was.
    async fn generate_summary(
        &self,
        session_id: Uuid,
        request: GenerateSummaryRequest,
    ) -> Result<Session, PipelineError>;

    /// Replace the summary text with a human edit
    async fn edit_summary(&self, session_id: Uuid, text: String) -> Result<Session, PipelineError>;

    /// Narrate the session's current summary text into the audio file.
    /// `edited_text`, when given, is stored as an edit first.
    async fn generate_audio(
        &self,
        session_id: Uuid,
        edited_text: Option<String>,
    ) -> Result<AudioArtifact, PipelineError>;

    /// Bytes of the most recently generated audio file
    async fn load_audio(&self) -> Result<Vec<u8>, PipelineError>;
}

#[async_trait]
impl PipelineServiceApi for PipelineService {
    async fn create_session(&self) -> Session {
        self.sessions.create().await
    }

    async fn get_session(&self, session_id: Uuid) -> Result<Session, PipelineError> {
        self.sessions
            .get(session_id)
            .await
            .ok_or(PipelineError::SessionNotFound)
    }

    async fn generate_summary(
        &self,
        session_id: Uuid,
        request: GenerateSummaryRequest,
    ) -> Result<Session, PipelineError> {
        self.get_session(session_id).await?;

        // 1. Validate before any network call
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(PipelineError::MissingCredential)?;
        let url = validate_url(&request.url)?;

        tracing::info!(
            session_id = %session_id,
            url = %url,
            language = %request.language,
            model = %request.model,
            "Generating product summary"
        );

        // 2. Fetch
        let markup = self
            .page_repo
            .fetch(url.as_str())
            .await
            .map_err(PipelineError::Fetch)?;

        // 3. Extract
        let product_text = extract_product_text(&markup, &self.labels);
        tracing::debug!(product_text = %product_text, "Product text extracted");

        // 4. Summarize
        let prompt = build_prompt(request.language, &product_text);
        let text = self
            .summary_repo
            .summarize(&prompt, api_key, request.model.model_id())
            .await
            .map_err(PipelineError::Generation)?;

        // 5. Only a complete run changes the session. Re-read it so an edit
        // made meanwhile is ordered before this generation, and a session
        // that expired during the calls stays gone.
        let mut session = self.get_session(session_id).await?;
        session.apply_generated(Summary {
            text,
            language: request.language,
            model: request.model,
            source_url: url.to_string(),
            generated_at: Utc::now(),
            edited: false,
        });
        self.sessions.save(session.clone()).await;

        tracing::info!(session_id = %session_id, "Summary stored in session");

        Ok(session)
    }

    async fn edit_summary(&self, session_id: Uuid, text: String) -> Result<Session, PipelineError> {
        let mut session = self.get_session(session_id).await?;

        if !session.apply_edit(text) {
            return Err(PipelineError::NoSummary);
        }
        self.sessions.save(session.clone()).await;

        tracing::info!(session_id = %session_id, "Summary edited");

        Ok(session)
    }

    async fn generate_audio(
        &self,
        session_id: Uuid,
        edited_text: Option<String>,
    ) -> Result<AudioArtifact, PipelineError> {
        let mut session = self.get_session(session_id).await?;
        if session.summary().is_none() {
            return Err(PipelineError::NoSummary);
        }

        if let Some(text) = edited_text {
            if text.trim().is_empty() {
                return Err(PipelineError::Validation(
                    "Text to narrate cannot be empty".to_string(),
                ));
            }
            session.apply_edit(text);
            self.sessions.save(session.clone()).await;
        }

        let summary = session.summary().ok_or(PipelineError::NoSummary)?;
        if summary.text.trim().is_empty() {
            return Err(PipelineError::Validation(
                "Text to narrate cannot be empty".to_string(),
            ));
        }

        tracing::info!(
            session_id = %session_id,
            language = %summary.language,
            text_length = summary.text.len(),
            edited = summary.edited,
            "Generating audio"
        );

        let path = self
            .narrator
            .narrate(&summary.text, summary.language, &self.audio_path)
            .await?;

        let size_bytes = tokio::fs::metadata(&path)
            .await
            .with_context(|| format!("Failed to inspect audio file {}", path.display()))?
            .len();

        Ok(AudioArtifact { path, size_bytes })
    }

    async fn load_audio(&self) -> Result<Vec<u8>, PipelineError> {
        match tokio::fs::read(&self.audio_path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(PipelineError::AudioNotReady),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!(
                    "Failed to read audio file {}",
                    self.audio_path.display()
                ))
                .into()),
        }
    }
}

/// Accept only absolute http(s) URLs with a host
fn validate_url(raw: &str) -> Result<Url, PipelineError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(PipelineError::Validation(
            "Please enter a product page URL".to_string(),
        ));
    }

    let url = Url::parse(raw)
        .map_err(|e| PipelineError::Validation(format!("Invalid URL '{}': {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        _ => Err(PipelineError::Validation(format!(
            "URL must start with http:// or https://: {}",
            raw
        ))),
    }
}

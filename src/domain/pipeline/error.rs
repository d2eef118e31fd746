use crate::domain::narration::AudioError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{0}")]
    Validation(String),
    #[error("text generation is unavailable: no API key is configured")]
    MissingCredential,
    #[error("failed to fetch product page: {0}")]
    Fetch(String),
    #[error("failed to generate summary: {0}")]
    Generation(String),
    #[error("failed to generate audio: {0}")]
    Audio(#[from] AudioError),
    #[error("session not found")]
    SessionNotFound,
    #[error("no summary has been generated yet")]
    NoSummary,
    #[error("no audio has been generated yet")]
    AudioNotReady,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        let message = err.to_string();
        match err {
            PipelineError::Validation(_) | PipelineError::MissingCredential => {
                AppError::BadRequest(message)
            }
            PipelineError::Fetch(_) | PipelineError::Generation(_) => {
                AppError::ExternalService(message)
            }
            PipelineError::Audio(AudioError::EmptyText) => AppError::BadRequest(message),
            PipelineError::Audio(AudioError::TextTooLong(_)) => AppError::PayloadTooLarge(message),
            PipelineError::Audio(AudioError::Synthesis(_)) => AppError::ExternalService(message),
            PipelineError::Audio(AudioError::Write { .. }) => AppError::Internal(message),
            PipelineError::SessionNotFound | PipelineError::AudioNotReady => {
                AppError::NotFound(message)
            }
            PipelineError::NoSummary => AppError::Conflict(message),
            PipelineError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}

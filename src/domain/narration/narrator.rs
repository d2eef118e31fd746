use crate::domain::summary::Language;
use crate::infrastructure::repositories::TtsRepository;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Longest text accepted for a single narration
pub const MAX_NARRATION_CHARS: usize = 10_000;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("text is empty")]
    EmptyText,
    #[error("text too long: {0} characters (limit {limit})", limit = MAX_NARRATION_CHARS)]
    TextTooLong(usize),
    #[error("speech synthesis failed: {0}")]
    Synthesis(String),
    #[error("failed to write audio file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Turns text into an MP3 file through a TTS provider
pub struct Narrator {
    tts_repo: Arc<dyn TtsRepository>,
}

impl Narrator {
    pub fn new(tts_repo: Arc<dyn TtsRepository>) -> Self {
        Self { tts_repo }
    }

    pub fn provider(&self) -> &'static str {
        self.tts_repo.provider()
    }

    /// Synthesize `text` and write the audio to `destination`, replacing any
    /// previous content. Returns the destination path.
    pub async fn narrate(
        &self,
        text: &str,
        language: Language,
        destination: &Path,
    ) -> Result<PathBuf, AudioError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AudioError::EmptyText);
        }
        let char_count = text.chars().count();
        if char_count > MAX_NARRATION_CHARS {
            return Err(AudioError::TextTooLong(char_count));
        }

        let audio_data = self
            .tts_repo
            .synthesize(text, language)
            .await
            .map_err(AudioError::Synthesis)?;

        tokio::fs::write(destination, &audio_data)
            .await
            .map_err(|source| AudioError::Write {
                path: destination.to_path_buf(),
                source,
            })?;

        tracing::info!(
            path = %destination.display(),
            language = %language,
            char_count = char_count,
            audio_size_bytes = audio_data.len(),
            "Audio file written"
        );

        Ok(destination.to_path_buf())
    }
}

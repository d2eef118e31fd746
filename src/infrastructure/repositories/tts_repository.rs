use crate::domain::summary::Language;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (Google Translate TTS, OpenAI)
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Splitting text into batches if needed
/// - Merging audio chunks into a single audio stream
/// - Provider-specific voice selection
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech for a given language
    ///
    /// Returns merged audio data ready for playback (MP3 format)
    ///
    /// # Errors
    /// Returns error if synthesis fails or provider is unavailable
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, String>;

    /// Short provider name for logs and readiness checks
    fn provider(&self) -> &'static str;
}

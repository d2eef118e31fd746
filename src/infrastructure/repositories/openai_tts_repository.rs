use super::text_batches::split_into_batches;
use super::tts_repository::TtsRepository;
use crate::domain::summary::Language;
use async_openai::{
    config::OpenAIConfig,
    types::{CreateSpeechRequest, SpeechModel, Voice},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Longest input the speech endpoint accepts in one request
const MAX_BATCH_SIZE: usize = 4096;

/// OpenAI speech endpoint, used when `TTS_PROVIDER=openai`
pub struct OpenAiTtsRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: SpeechModel,
    voice_override: Option<Voice>,
}

impl OpenAiTtsRepository {
    /// `voice` overrides the per-language voice; an empty or unknown name
    /// keeps the per-language choice.
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String, voice: String) -> Self {
        let model = match model.as_str() {
            "tts-1" => SpeechModel::Tts1,
            "tts-1-hd" => SpeechModel::Tts1Hd,
            _ => SpeechModel::Other(model),
        };

        Self {
            client,
            model,
            voice_override: parse_voice(&voice),
        }
    }

    /// Build an OpenAI client that reports failures immediately instead of
    /// backing off and retrying
    pub fn build_client(api_key: &str) -> Client<OpenAIConfig> {
        let no_retry = backoff::ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        Client::with_config(OpenAIConfig::new().with_api_key(api_key)).with_backoff(no_retry)
    }

    fn voice_for(&self, language: Language) -> Voice {
        self.voice_override
            .clone()
            .unwrap_or_else(|| default_voice(language))
    }

    async fn speak(&self, text: &str, voice: Voice, index: usize) -> Result<Vec<u8>, String> {
        let request = CreateSpeechRequest {
            model: self.model.clone(),
            input: text.to_string(),
            voice,
            response_format: None, // MP3
            speed: None,
        };

        let response = self.client.audio().speech(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                batch_index = index,
                text_length = text.len(),
                "OpenAI speech call failed"
            );
            format!("OpenAI TTS error: {}", e)
        })?;

        Ok(response.bytes.to_vec())
    }
}

fn default_voice(language: Language) -> Voice {
    match language {
        Language::Polish => Voice::Nova,
        Language::English => Voice::Alloy,
        Language::German => Voice::Onyx,
    }
}

fn parse_voice(name: &str) -> Option<Voice> {
    match name.trim().to_lowercase().as_str() {
        "alloy" => Some(Voice::Alloy),
        "echo" => Some(Voice::Echo),
        "fable" => Some(Voice::Fable),
        "onyx" => Some(Voice::Onyx),
        "nova" => Some(Voice::Nova),
        "shimmer" => Some(Voice::Shimmer),
        _ => None,
    }
}

#[async_trait]
impl TtsRepository for OpenAiTtsRepository {
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, String> {
        let start_time = Instant::now();

        let batches = split_into_batches(text, MAX_BATCH_SIZE);
        if batches.is_empty() {
            return Err("No text to synthesize".to_string());
        }

        let voice = self.voice_for(language);
        tracing::info!(
            language = %language,
            voice = ?voice,
            batch_count = batches.len(),
            "Starting OpenAI TTS synthesis"
        );

        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            merged_audio.extend(self.speak(batch, voice.clone(), index).await?);
        }

        tracing::info!(
            provider = "openai",
            language = %language,
            latency_ms = start_time.elapsed().as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }

    fn provider(&self) -> &'static str {
        "openai"
    }
}

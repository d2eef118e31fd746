use super::text_batches::split_into_batches;
use super::tts_repository::TtsRepository;
use crate::domain::summary::Language;
use async_trait::async_trait;
use std::time::Instant;

/// Google Translate TTS accepts at most 100 characters per request
const MAX_BATCH_SIZE: usize = 100;

/// Google Translate TTS implementation of TTS repository
pub struct GoogleTtsRepository {
    http_client: reqwest::Client,
    base_url: String,
}

impl GoogleTtsRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the MP3 for a single batch
    async fn call_google(
        &self,
        text: &str,
        language: Language,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, String> {
        let index_param = index.to_string();
        let total_param = total.to_string();
        let length_param = text.chars().count().to_string();

        let response = self
            .http_client
            .get(format!("{}/translate_tts", self.base_url))
            .header("Referer", "http://translate.google.com/")
            .header("User-Agent", "Mozilla/5.0")
            .query(&[
                ("ie", "UTF-8"),
                ("q", text),
                ("tl", language.speech_code()),
                ("client", "tw-ob"),
                ("idx", index_param.as_str()),
                ("total", total_param.as_str()),
                ("textlen", length_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| format!("Google TTS request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                language = %language,
                batch_index = index,
                "Google TTS call failed"
            );
            return Err(format!("Google TTS error: HTTP {}", status));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read Google TTS audio: {}", e))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, String> {
        let start_time = Instant::now();

        let batches = split_into_batches(text, MAX_BATCH_SIZE);
        if batches.is_empty() {
            return Err("No text to synthesize".to_string());
        }

        tracing::info!(
            language = %language,
            batch_count = batches.len(),
            text_length = text.len(),
            "Starting Google TTS synthesis"
        );

        // MP3 frames can be concatenated as-is
        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            let audio_data = self
                .call_google(batch, language, index, batches.len())
                .await?;
            merged_audio.extend(audio_data);
        }

        tracing::info!(
            provider = "google",
            language = %language,
            latency_ms = start_time.elapsed().as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }

    fn provider(&self) -> &'static str {
        "google"
    }
}

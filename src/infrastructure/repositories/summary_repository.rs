use crate::domain::summary::ApiKey;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Repository for remote text generation.
#[async_trait]
pub trait SummaryRepository: Send + Sync {
    /// Send `prompt` to the model `model_id` and return the generated text
    /// unmodified.
    ///
    /// # Errors
    /// Authentication, quota, malformed request and network failures, all
    /// reported as the upstream message.
    async fn summarize(&self, prompt: &str, api_key: &ApiKey, model_id: &str)
        -> Result<String, String>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiError,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
    status: Option<String>,
}

/// Google Gemini `generateContent` implementation
pub struct GeminiSummaryRepository {
    http_client: reqwest::Client,
    base_url: String,
}

impl GeminiSummaryRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, model_id: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model_id)
    }
}

#[async_trait]
impl SummaryRepository for GeminiSummaryRepository {
    async fn summarize(
        &self,
        prompt: &str,
        api_key: &ApiKey,
        model_id: &str,
    ) -> Result<String, String> {
        let start_time = Instant::now();

        tracing::info!(
            model = %model_id,
            prompt_length = prompt.len(),
            "Calling Gemini generateContent"
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(self.endpoint(model_id))
            .header("x-goog-api-key", api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Gemini request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = match serde_json::from_str::<GeminiErrorEnvelope>(&body) {
                Ok(envelope) => match envelope.error.status {
                    Some(code) => format!("{} ({})", envelope.error.message, code),
                    None => envelope.error.message,
                },
                Err(_) => body,
            };
            tracing::error!(
                model = %model_id,
                status = status.as_u16(),
                error = %message,
                "Gemini API call failed"
            );
            return Err(format!("Gemini API error {}: {}", status.as_u16(), message));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse Gemini response: {}", e))?;

        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| "Gemini returned no candidates".to_string())?;

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(format!(
                "Gemini returned an empty candidate (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            ));
        }

        tracing::info!(
            provider = "gemini",
            model = %model_id,
            latency_ms = start_time.elapsed().as_millis(),
            summary_length = text.len(),
            "Summary generated"
        );

        Ok(text)
    }
}

use async_trait::async_trait;
use std::time::Instant;

/// Browser-like identification; some shops reject requests without one
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Retrieves raw page markup for a URL.
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Fetch the markup behind `url`.
    ///
    /// # Errors
    /// Network failures and non-2xx responses, described as a message.
    async fn fetch(&self, url: &str) -> Result<String, String>;
}

/// Plain HTTP GET implementation backed by `reqwest`
pub struct HttpPageRepository {
    http_client: reqwest::Client,
}

impl HttpPageRepository {
    pub fn new() -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl PageRepository for HttpPageRepository {
    async fn fetch(&self, url: &str) -> Result<String, String> {
        let start_time = Instant::now();

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("Request to {} failed: {}", url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {} for {}", status, url));
        }

        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response body: {}", e))?;

        tracing::info!(
            url = %url,
            status = status.as_u16(),
            body_length = body.len(),
            latency_ms = start_time.elapsed().as_millis(),
            "Product page fetched"
        );

        Ok(body)
    }
}

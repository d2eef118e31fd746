use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::domain::product::ProductLabels;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Gemini text generation
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    // Speech synthesis
    pub tts_provider: TtsProvider,
    pub google_tts_base_url: String,
    pub openai_api_key: Option<String>,
    pub openai_tts_model: String,
    pub openai_tts_voice: String,
    // Output and extraction
    pub audio_output_path: PathBuf,
    pub product_labels: LabelLanguage,
    // Sessions
    pub session_idle_minutes: u64,
    pub session_max_capacity: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    Google,
    OpenAi,
}

/// Working language of the scraped shop, used for the product text labels
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LabelLanguage {
    Pl,
    En,
}

impl LabelLanguage {
    pub fn labels(&self) -> ProductLabels {
        match self {
            LabelLanguage::Pl => ProductLabels::polish(),
            LabelLanguage::En => ProductLabels::english(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            gemini_api_key: non_empty_var("GEMINI_API_KEY"),
            gemini_base_url: env::var("GEMINI_BASE_URL").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".to_string()
            }),
            tts_provider: parse_tts_provider(
                &env::var("TTS_PROVIDER").unwrap_or_else(|_| "google".to_string()),
            )?,
            google_tts_base_url: env::var("GOOGLE_TTS_BASE_URL")
                .unwrap_or_else(|_| "https://translate.google.com".to_string()),
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            openai_tts_model: env::var("OPENAI_TTS_MODEL").unwrap_or_else(|_| "tts-1".to_string()),
            openai_tts_voice: env::var("OPENAI_TTS_VOICE").unwrap_or_default(),
            audio_output_path: env::var("AUDIO_OUTPUT_PATH")
                .unwrap_or_else(|_| "podsumowanie_produktu.mp3".to_string())
                .into(),
            product_labels: match env::var("PRODUCT_LABELS")
                .unwrap_or_else(|_| "pl".to_string())
                .to_lowercase()
                .as_str()
            {
                "en" => LabelLanguage::En,
                _ => LabelLanguage::Pl,
            },
            session_idle_minutes: env::var("SESSION_IDLE_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            session_max_capacity: env::var("SESSION_MAX_CAPACITY")
                .unwrap_or_else(|_| "100".to_string())
                .parse()?,
        };

        if config.tts_provider == TtsProvider::OpenAi && config.openai_api_key.is_none() {
            return Err("OPENAI_API_KEY is required when TTS_PROVIDER=openai".into());
        }

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// File name offered to the user when downloading the audio
    pub fn audio_file_name(&self) -> String {
        self.audio_output_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.mp3".to_string())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_tts_provider(value: &str) -> Result<TtsProvider, String> {
    match value.trim().to_lowercase().as_str() {
        "google" | "gtts" => Ok(TtsProvider::Google),
        "openai" => Ok(TtsProvider::OpenAi),
        other => Err(format!("Unknown TTS_PROVIDER: {}", other)),
    }
}

use crate::domain::summary::{Language, ModelTier};
use serde::{Deserialize, Serialize};

/// Request for POST /api/sessions/:session_id/summary
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateSummaryRequest {
    pub url: String,
    pub language: Language,
    #[serde(default)]
    pub model: ModelTier,
}

/// Request for PUT /api/sessions/:session_id/summary
#[derive(Debug, Serialize, Deserialize)]
pub struct EditSummaryRequest {
    pub text: String,
}

/// Request for POST /api/sessions/:session_id/audio
///
/// `text` carries the current contents of the edit field; when omitted the
/// stored summary is narrated.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GenerateAudioRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response for POST /api/sessions/:session_id/audio
#[derive(Debug, Serialize, Deserialize)]
pub struct AudioResponse {
    pub file_name: String,
    pub size_bytes: u64,
    pub playback_url: String,
    pub download_url: String,
}

/// Response for GET /api/options
#[derive(Debug, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub languages: Vec<LanguageOption>,
    pub models: Vec<ModelOption>,
    pub text_generation_available: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageOption {
    pub code: Language,
    pub label: String,
    pub closing_sentence: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelOption {
    pub id: ModelTier,
    pub label: String,
    pub model_id: String,
}

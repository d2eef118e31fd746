use serde::{Deserialize, Serialize};

/// Text generation models offered for summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Fast,
    Thorough,
}

impl ModelTier {
    pub const ALL: [ModelTier; 2] = [ModelTier::Fast, ModelTier::Thorough];

    /// Model identifier sent to the generation API
    pub fn model_id(&self) -> &'static str {
        match self {
            ModelTier::Fast => "gemini-2.5-flash",
            ModelTier::Thorough => "gemini-2.5-pro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelTier::Fast => "Gemini 2.5 Flash (szybki)",
            ModelTier::Thorough => "Gemini 2.5 Pro (dokładny)",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTier::Fast => "fast",
            ModelTier::Thorough => "thorough",
        }
    }
}

impl Default for ModelTier {
    fn default() -> Self {
        ModelTier::Fast
    }
}

impl std::fmt::Display for ModelTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

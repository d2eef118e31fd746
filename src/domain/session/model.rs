use crate::domain::summary::{Language, ModelTier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a session stands in the generate → edit → narrate flow
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Nothing generated yet; only text generation is available
    NoSummary,
    /// A summary exists and can be edited or narrated
    SummaryPresent(Summary),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub text: String,
    pub language: Language,
    pub model: ModelTier,
    pub source_url: String,
    pub generated_at: DateTime<Utc>,
    pub edited: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            state: SessionState::NoSummary,
        }
    }

    pub fn summary(&self) -> Option<&Summary> {
        match &self.state {
            SessionState::NoSummary => None,
            SessionState::SummaryPresent(summary) => Some(summary),
        }
    }

    /// Store a freshly generated summary, discarding any previous text and
    /// edits
    pub fn apply_generated(&mut self, summary: Summary) {
        self.state = SessionState::SummaryPresent(summary);
    }

    /// Replace the summary text with a human edit. Returns `false` when
    /// there is no summary to edit.
    pub fn apply_edit(&mut self, text: String) -> bool {
        match &mut self.state {
            SessionState::NoSummary => false,
            SessionState::SummaryPresent(summary) => {
                if summary.text != text {
                    summary.text = text;
                    summary.edited = true;
                }
                true
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Session as returned by the API
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub state: SessionStateName,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryResponse>,
    pub can_generate_audio: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStateName {
    NoSummary,
    SummaryPresent,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub text: String,
    pub language: Language,
    pub model: ModelTier,
    pub source_url: String,
    pub generated_at: DateTime<Utc>,
    pub edited: bool,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        let summary = session.summary().map(|summary| SummaryResponse {
            text: summary.text.clone(),
            language: summary.language,
            model: summary.model,
            source_url: summary.source_url.clone(),
            generated_at: summary.generated_at,
            edited: summary.edited,
        });

        Self {
            session_id: session.id,
            state: match session.state {
                SessionState::NoSummary => SessionStateName::NoSummary,
                SessionState::SummaryPresent(_) => SessionStateName::SummaryPresent,
            },
            created_at: session.created_at,
            can_generate_audio: summary.is_some(),
            summary,
        }
    }
}

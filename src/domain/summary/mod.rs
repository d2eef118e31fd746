pub mod language;
pub mod model;
pub mod prompt;

pub use language::{Language, SHOP_DOMAIN};
pub use model::ModelTier;
pub use prompt::build_prompt;

/// API credential for the text generation service.
///
/// Passed explicitly with every generation call; the client never keeps it
/// in global state.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

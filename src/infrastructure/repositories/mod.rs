pub mod google_tts_repository;
pub mod openai_tts_repository;
pub mod page_repository;
pub mod summary_repository;
pub mod text_batches;
pub mod tts_repository;

pub use google_tts_repository::GoogleTtsRepository;
pub use openai_tts_repository::OpenAiTtsRepository;
pub use page_repository::{HttpPageRepository, PageRepository};
pub use summary_repository::{GeminiSummaryRepository, SummaryRepository};
pub use tts_repository::TtsRepository;

pub mod dto;
pub mod error;
pub mod service;

pub use dto::{
    AudioResponse, EditSummaryRequest, GenerateAudioRequest, GenerateSummaryRequest,
    LanguageOption, ModelOption, OptionsResponse,
};
pub use error::PipelineError;
pub use service::{AudioArtifact, PipelineService, PipelineServiceApi};

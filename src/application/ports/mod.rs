mod interaction_repository;
mod llm_client;
mod repository_error;
mod transcription_provider;
mod upload_staging;

pub use interaction_repository::InteractionRepository;
pub use llm_client::{LlmClient, LlmClientError};
pub use repository_error::RepositoryError;
pub use transcription_provider::{
    MediaStream, MediaUpload, TranscriptRequest, TranscriptSnapshot, TranscriptionProvider,
    TranscriptionProviderError,
};
pub use upload_staging::{UploadStaging, UploadStagingError};

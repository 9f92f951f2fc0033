mod interaction;
mod prompt_context;
mod sentiment_segment;
mod staged_upload;
mod transcript_status;
mod transcription_job;
mod transcription_result;

pub use interaction::{Interaction, InteractionFile, InteractionId};
pub use prompt_context::{FileCategory, PromptContext};
pub use sentiment_segment::SentimentSegment;
pub use staged_upload::StagedUpload;
pub use transcript_status::TranscriptStatus;
pub use transcription_job::{SourceRef, TranscriptionJob};
pub use transcription_result::TranscriptionResult;

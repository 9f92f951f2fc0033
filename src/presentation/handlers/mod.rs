mod error;
mod health;
mod query;
mod transcription;

pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use query::query_handler;
pub use transcription::{process_video_handler, upload_audio_handler};

mod context_parser;
mod job_submitter;
mod query_service;
mod result_mapper;
mod transcript_poller;
mod transcription_service;

pub use context_parser::{ContextParseError, ParsedPrompt, parse_prompt, try_parse_prompt};
pub use job_submitter::{JobSubmitter, MediaSource};
pub use query_service::{NO_RESPONSE_FALLBACK, QueryService, QueryServiceError};
pub use result_mapper::map_result;
pub use transcript_poller::{PollingPolicy, TranscriptPoller};
pub use transcription_service::{TranscriptionService, TranscriptionServiceError};

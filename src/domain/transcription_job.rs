use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use super::{SentimentSegment, TranscriptStatus};

/// Where the provider reads the media for a job from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    LocalPath(PathBuf),
    RemoteUrl(String),
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRef::LocalPath(path) => write!(f, "file:{}", path.display()),
            SourceRef::RemoteUrl(url) => f.write_str(url),
        }
    }
}

/// A provider-side transcription job as observed through polling.
#[derive(Debug, Clone)]
pub struct TranscriptionJob {
    pub id: String,
    pub source_ref: SourceRef,
    pub status: TranscriptStatus,
    pub created_at: DateTime<Utc>,
    pub text: Option<String>,
    pub sentiment_analysis_results: Option<Vec<SentimentSegment>>,
    pub summary: Option<String>,
    pub error: Option<String>,
}

impl TranscriptionJob {
    pub fn new(id: String, source_ref: SourceRef) -> Self {
        Self {
            id,
            source_ref,
            status: TranscriptStatus::Queued,
            created_at: Utc::now(),
            text: None,
            sentiment_analysis_results: None,
            summary: None,
            error: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

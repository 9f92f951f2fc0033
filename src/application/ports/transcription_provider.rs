use std::io;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

use crate::domain::{SentimentSegment, TranscriptStatus};

pub type MediaStream = BoxStream<'static, Result<Bytes, io::Error>>;

/// Raw media bytes handed to the provider's upload endpoint.
pub struct MediaUpload {
    pub stream: MediaStream,
    pub size_bytes: u64,
}

/// Body of the provider's "create transcript" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptRequest {
    pub audio_url: String,
    pub sentiment_analysis: bool,
    pub summarization: bool,
    pub summary_model: String,
    pub summary_type: String,
}

impl TranscriptRequest {
    /// Requests sentiment analysis and an informative bullet-point summary.
    pub fn with_insights(audio_url: impl Into<String>) -> Self {
        Self {
            audio_url: audio_url.into(),
            sentiment_analysis: true,
            summarization: true,
            summary_model: "informative".to_string(),
            summary_type: "bullets".to_string(),
        }
    }
}

/// One status observation of a provider job.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptSnapshot {
    #[serde(default)]
    pub id: String,
    pub status: TranscriptStatus,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub sentiment_analysis_results: Option<Vec<SentimentSegment>>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    /// Streams media to the provider and returns the URL it can be read from.
    async fn upload(&self, media: MediaUpload) -> Result<String, TranscriptionProviderError>;

    /// Creates a transcription job and returns its identifier.
    async fn create_transcript(
        &self,
        request: &TranscriptRequest,
    ) -> Result<String, TranscriptionProviderError>;

    async fn fetch_transcript(
        &self,
        transcript_id: &str,
    ) -> Result<TranscriptSnapshot, TranscriptionProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionProviderError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl TranscriptionProviderError {
    /// Provider-supplied detail when available, otherwise the full error text.
    pub fn detail(&self) -> String {
        match self {
            TranscriptionProviderError::Rejected { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_transient(&self) -> bool {
        match self {
            TranscriptionProviderError::RequestFailed(_) => true,
            TranscriptionProviderError::Rejected { status, .. } => {
                *status == 429 || *status >= 500
            }
            TranscriptionProviderError::InvalidResponse(_) => false,
        }
    }
}

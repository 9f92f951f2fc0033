use super::SentimentSegment;

/// Normalized outcome of a completed transcription job.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionResult {
    pub id: String,
    pub text: String,
    pub sentiment: Option<Vec<SentimentSegment>>,
    pub summary: Option<String>,
}

use crate::domain::{TranscriptionJob, TranscriptionResult};

/// Copies the provider payload of a completed job into a result.
///
/// Fields the provider left out stay empty: a missing transcript becomes an
/// empty string, missing sentiment or summary stay `None`.
pub fn map_result(job: TranscriptionJob) -> TranscriptionResult {
    TranscriptionResult {
        id: job.id,
        text: job.text.unwrap_or_default(),
        sentiment: job.sentiment_analysis_results,
        summary: job.summary,
    }
}

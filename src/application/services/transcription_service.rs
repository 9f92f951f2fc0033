use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::application::ports::{TranscriptionProvider, UploadStaging};
use crate::domain::{StagedUpload, TranscriptionResult};

use super::job_submitter::{JobSubmitter, MediaSource};
use super::result_mapper::map_result;
use super::transcript_poller::{PollingPolicy, TranscriptPoller};

/// Runs a media file or URL through submit, poll and map.
pub struct TranscriptionService<P>
where
    P: TranscriptionProvider,
{
    submitter: JobSubmitter<P>,
    poller: TranscriptPoller<P>,
}

impl<P> TranscriptionService<P>
where
    P: TranscriptionProvider,
{
    pub fn new(provider: Arc<P>, staging: Arc<dyn UploadStaging>, policy: PollingPolicy) -> Self {
        Self {
            submitter: JobSubmitter::new(Arc::clone(&provider), staging),
            poller: TranscriptPoller::new(provider, policy),
        }
    }

    pub async fn transcribe_upload(
        &self,
        upload: Option<StagedUpload>,
        cancel: &CancellationToken,
    ) -> Result<TranscriptionResult, TranscriptionServiceError> {
        let upload = upload.ok_or_else(|| {
            TranscriptionServiceError::Validation("No file uploaded".to_string())
        })?;
        self.run(MediaSource::Upload(upload), "audio_upload", cancel)
            .await
    }

    pub async fn transcribe_url(
        &self,
        url: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<TranscriptionResult, TranscriptionServiceError> {
        let url = url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| {
                TranscriptionServiceError::Validation("YouTube URL is required".to_string())
            })?;
        self.run(MediaSource::RemoteUrl(url), "remote_url", cancel)
            .await
    }

    async fn run(
        &self,
        source: MediaSource,
        flow: &'static str,
        cancel: &CancellationToken,
    ) -> Result<TranscriptionResult, TranscriptionServiceError> {
        let span = tracing::info_span!("transcription", flow, job_id = tracing::field::Empty);

        async move {
            let job = self.submitter.submit(source, cancel).await?;
            tracing::Span::current().record("job_id", job.id.as_str());
            tracing::info!(source = %job.source_ref, "Transcription job submitted");

            let completed = self.poller.poll(job, cancel).await?;
            tracing::info!("Transcription completed");

            Ok(map_result(completed))
        }
        .instrument(span)
        .await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Submission(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailure(String),
    #[error("status fetch failed: {0}")]
    StatusFetch(String),
    #[error("transcription did not finish within {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("transcription cancelled")]
    Cancelled,
}

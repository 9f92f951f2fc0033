use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::application::ports::{TranscriptRequest, TranscriptionProvider, UploadStaging};
use crate::domain::{SourceRef, StagedUpload, TranscriptionJob};

use super::transcription_service::TranscriptionServiceError;

/// Media handed to the provider for transcription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    Upload(StagedUpload),
    RemoteUrl(String),
}

impl MediaSource {
    pub fn source_ref(&self) -> SourceRef {
        match self {
            MediaSource::Upload(upload) => SourceRef::LocalPath(upload.path.clone()),
            MediaSource::RemoteUrl(url) => SourceRef::RemoteUrl(url.clone()),
        }
    }
}

pub struct JobSubmitter<P>
where
    P: TranscriptionProvider,
{
    provider: Arc<P>,
    staging: Arc<dyn UploadStaging>,
}

impl<P> JobSubmitter<P>
where
    P: TranscriptionProvider,
{
    pub fn new(provider: Arc<P>, staging: Arc<dyn UploadStaging>) -> Self {
        Self { provider, staging }
    }

    pub async fn submit(
        &self,
        source: MediaSource,
        cancel: &CancellationToken,
    ) -> Result<TranscriptionJob, TranscriptionServiceError> {
        let source_ref = source.source_ref();
        let audio_url = match source {
            MediaSource::Upload(upload) => self.upload_staged(&upload, cancel).await?,
            MediaSource::RemoteUrl(url) => url,
        };

        let request = TranscriptRequest::with_insights(audio_url);
        let created = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(TranscriptionServiceError::Cancelled),
            created = self.provider.create_transcript(&request) => created,
        };
        let id = created.map_err(|e| {
            TranscriptionServiceError::Submission(format!(
                "Failed to request transcription: {}",
                e.detail()
            ))
        })?;

        Ok(TranscriptionJob::new(id, source_ref))
    }

    /// Uploads the staged file, then discards it whatever the outcome.
    async fn upload_staged(
        &self,
        upload: &StagedUpload,
        cancel: &CancellationToken,
    ) -> Result<String, TranscriptionServiceError> {
        let outcome = self.transfer(upload, cancel).await;

        if let Err(e) = self.staging.discard(upload).await {
            tracing::warn!(
                error = %e,
                path = %upload.path.display(),
                "Failed to delete staged upload"
            );
        }

        outcome
    }

    async fn transfer(
        &self,
        upload: &StagedUpload,
        cancel: &CancellationToken,
    ) -> Result<String, TranscriptionServiceError> {
        let media = self.staging.open(upload).await.map_err(|e| {
            TranscriptionServiceError::Submission(format!("Failed to read staged upload: {}", e))
        })?;

        tracing::debug!(
            file_name = %upload.file_name,
            bytes = upload.size_bytes,
            "Uploading media to transcription provider"
        );

        let uploaded = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(TranscriptionServiceError::Cancelled),
            uploaded = self.provider.upload(media) => uploaded,
        };

        uploaded.map_err(|e| {
            TranscriptionServiceError::Submission(format!(
                "Failed to upload to transcription provider: {}",
                e.detail()
            ))
        })
    }
}

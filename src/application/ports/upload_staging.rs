use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::StagedUpload;

use super::MediaUpload;

#[async_trait::async_trait]
pub trait UploadStaging: Send + Sync {
    /// Writes an incoming upload to temporary storage.
    async fn stage(
        &self,
        file_name: &str,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<StagedUpload, UploadStagingError>;

    async fn open(&self, upload: &StagedUpload) -> Result<MediaUpload, UploadStagingError>;

    /// Removes the staged file. Removing a file that is already gone succeeds.
    async fn discard(&self, upload: &StagedUpload) -> Result<(), UploadStagingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadStagingError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("staged file not found: {0}")]
    NotFound(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

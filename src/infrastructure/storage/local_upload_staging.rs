use std::io;
use std::path::PathBuf;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;
use uuid::Uuid;

use crate::application::ports::{MediaUpload, UploadStaging, UploadStagingError};
use crate::domain::StagedUpload;

pub struct LocalUploadStaging {
    base_path: PathBuf,
}

impl LocalUploadStaging {
    pub fn new(base_path: PathBuf) -> Result<Self, UploadStagingError> {
        std::fs::create_dir_all(&base_path).map_err(UploadStagingError::Io)?;
        Ok(Self { base_path })
    }

    fn staged_path(&self, file_name: &str) -> PathBuf {
        let id = Uuid::new_v4().simple().to_string();
        self.base_path.join(format!(
            "{}-{}-{}",
            chrono::Utc::now().timestamp_millis(),
            &id[..8],
            sanitize_file_name(file_name)
        ))
    }
}

/// Keeps only the final path component and replaces characters that are
/// unsafe in file names.
fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    let cleaned: String = base
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[async_trait::async_trait]
impl UploadStaging for LocalUploadStaging {
    async fn stage(
        &self,
        file_name: &str,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<StagedUpload, UploadStagingError> {
        let path = self.staged_path(file_name);
        let mut file = tokio::fs::File::create(&path).await?;
        let mut total_bytes: u64 = 0;

        let written: Result<(), io::Error> = async {
            while let Some(chunk) = stream.next().await {
                let bytes = chunk?;
                total_bytes += bytes.len() as u64;
                file.write_all(&bytes).await?;
            }
            file.flush().await
        }
        .await;

        if let Err(e) = written {
            drop(file);
            if let Err(cleanup) = tokio::fs::remove_file(&path).await {
                tracing::warn!(error = %cleanup, path = %path.display(), "Failed to remove partial upload");
            }
            return Err(UploadStagingError::WriteFailed(e.to_string()));
        }

        tracing::debug!(path = %path.display(), bytes = total_bytes, "Upload staged");
        Ok(StagedUpload::new(path, file_name.to_string(), total_bytes))
    }

    async fn open(&self, upload: &StagedUpload) -> Result<MediaUpload, UploadStagingError> {
        let file = tokio::fs::File::open(&upload.path)
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    UploadStagingError::NotFound(upload.path.display().to_string())
                }
                _ => UploadStagingError::Io(e),
            })?;
        let size_bytes = file.metadata().await?.len();

        Ok(MediaUpload {
            stream: ReaderStream::new(file).boxed(),
            size_bytes,
        })
    }

    async fn discard(&self, upload: &StagedUpload) -> Result<(), UploadStagingError> {
        match tokio::fs::remove_file(&upload.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(UploadStagingError::DeleteFailed(e.to_string())),
        }
    }
}

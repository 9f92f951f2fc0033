use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::application::ports::{LlmClient, TranscriptionProvider, UploadStaging};
use crate::application::services::{QueryService, TranscriptionService};

pub struct AppState<P, L>
where
    P: TranscriptionProvider,
    L: LlmClient,
{
    pub transcription_service: Arc<TranscriptionService<P>>,
    pub query_service: Arc<QueryService<L>>,
    pub upload_staging: Arc<dyn UploadStaging>,
    /// Cancelled on server shutdown; requests derive child tokens from it.
    pub shutdown: CancellationToken,
    pub body_limit_bytes: usize,
}

impl<P, L> Clone for AppState<P, L>
where
    P: TranscriptionProvider,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            query_service: Arc::clone(&self.query_service),
            upload_staging: Arc::clone(&self.upload_staging),
            shutdown: self.shutdown.clone(),
            body_limit_bytes: self.body_limit_bytes,
        }
    }
}

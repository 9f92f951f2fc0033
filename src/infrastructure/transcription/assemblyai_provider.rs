use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH};
use serde::Deserialize;

use crate::application::ports::{
    MediaUpload, TranscriptRequest, TranscriptSnapshot, TranscriptionProvider,
    TranscriptionProviderError,
};

pub const DEFAULT_ASSEMBLYAI_BASE_URL: &str = "https://api.assemblyai.com";

pub struct AssemblyAiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AssemblyAiProvider {
    pub fn new(api_key: &str, base_url: Option<&str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url
                .unwrap_or(DEFAULT_ASSEMBLYAI_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v2/{}", self.base_url, path)
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Deserialize)]
struct CreateTranscriptResponse {
    id: String,
}

async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, TranscriptionProviderError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(TranscriptionProviderError::Rejected { status, body })
}

#[async_trait]
impl TranscriptionProvider for AssemblyAiProvider {
    async fn upload(&self, media: MediaUpload) -> Result<String, TranscriptionProviderError> {
        tracing::debug!(bytes = media.size_bytes, "Streaming media to AssemblyAI upload");

        let response = self
            .client
            .post(self.url("upload"))
            .header(AUTHORIZATION, &self.api_key)
            .header(CONTENT_LENGTH, media.size_bytes)
            .body(reqwest::Body::wrap_stream(media.stream))
            .send()
            .await
            .map_err(|e| TranscriptionProviderError::RequestFailed(format!("upload: {}", e)))?;

        let uploaded: UploadResponse = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| TranscriptionProviderError::InvalidResponse(format!("upload: {}", e)))?;

        Ok(uploaded.upload_url)
    }

    async fn create_transcript(
        &self,
        request: &TranscriptRequest,
    ) -> Result<String, TranscriptionProviderError> {
        let response = self
            .client
            .post(self.url("transcript"))
            .header(AUTHORIZATION, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| TranscriptionProviderError::RequestFailed(format!("create: {}", e)))?;

        let created: CreateTranscriptResponse = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| TranscriptionProviderError::InvalidResponse(format!("create: {}", e)))?;

        tracing::info!(transcript_id = %created.id, "AssemblyAI transcript requested");
        Ok(created.id)
    }

    async fn fetch_transcript(
        &self,
        transcript_id: &str,
    ) -> Result<TranscriptSnapshot, TranscriptionProviderError> {
        let response = self
            .client
            .get(self.url(&format!("transcript/{}", transcript_id)))
            .header(AUTHORIZATION, &self.api_key)
            .send()
            .await
            .map_err(|e| TranscriptionProviderError::RequestFailed(format!("status: {}", e)))?;

        ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| TranscriptionProviderError::InvalidResponse(format!("status: {}", e)))
    }
}

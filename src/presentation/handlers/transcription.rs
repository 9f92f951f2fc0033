use std::future::Future;
use std::io;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use futures::{StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::application::ports::{LlmClient, TranscriptionProvider};
use crate::application::services::TranscriptionServiceError;
use crate::domain::{SentimentSegment, StagedUpload, TranscriptionResult};
use crate::presentation::state::AppState;

use super::error::ApiError;

const UPLOAD_FIELD: &str = "file";

#[derive(Serialize)]
pub struct TranscriptionResponse {
    pub id: String,
    pub text: String,
    pub sentiment_analysis_results: Option<Vec<SentimentSegment>>,
    pub summary: Option<String>,
}

impl From<TranscriptionResult> for TranscriptionResponse {
    fn from(result: TranscriptionResult) -> Self {
        Self {
            id: result.id,
            text: result.text,
            sentiment_analysis_results: result.sentiment,
            summary: result.summary,
        }
    }
}

#[derive(Deserialize)]
pub struct ProcessVideoRequest {
    #[serde(rename = "youtubeUrl", default)]
    pub youtube_url: Option<String>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_audio_handler<P, L>(
    State(state): State<AppState<P, L>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError>
where
    P: TranscriptionProvider + 'static,
    L: LlmClient + 'static,
{
    let upload = stage_upload(&state, &mut multipart).await?;
    if upload.is_none() {
        tracing::warn!("Audio upload request with no file");
    }

    let service = std::sync::Arc::clone(&state.transcription_service);
    let result = run_detached(&state.shutdown, move |cancel| async move {
        service.transcribe_upload(upload, &cancel).await
    })
    .await
    .map_err(|e| ApiError::from_transcription(e, "Failed to process audio"))?;

    Ok((StatusCode::OK, Json(TranscriptionResponse::from(result))))
}

#[tracing::instrument(skip(state, request))]
pub async fn process_video_handler<P, L>(
    State(state): State<AppState<P, L>>,
    Json(request): Json<ProcessVideoRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    P: TranscriptionProvider + 'static,
    L: LlmClient + 'static,
{
    let service = std::sync::Arc::clone(&state.transcription_service);
    let result = run_detached(&state.shutdown, move |cancel| async move {
        service.transcribe_url(request.youtube_url, &cancel).await
    })
    .await
    .map_err(|e| ApiError::from_transcription(e, "Failed to process YouTube video"))?;

    Ok((StatusCode::OK, Json(TranscriptionResponse::from(result))))
}

/// Writes the first `file` field to staging. Other fields are skipped.
async fn stage_upload<P, L>(
    state: &AppState<P, L>,
    multipart: &mut Multipart,
) -> Result<Option<StagedUpload>, ApiError>
where
    P: TranscriptionProvider,
    L: LlmClient,
{
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return Err(ApiError::bad_request(format!(
                    "Failed to read multipart: {}",
                    e
                )));
            }
        };

        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let mut rejected: Option<StatusCode> = None;
        let stream = field
            .map_err(|e| {
                rejected = Some(e.status());
                io::Error::other(e)
            })
            .boxed();

        let outcome = state.upload_staging.stage(&file_name, stream).await;
        let staged = match outcome {
            Ok(staged) => staged,
            Err(e) => {
                tracing::error!(error = %e, "Failed to stage upload");
                return Err(match rejected {
                    Some(status) => ApiError::new(
                        status,
                        "Failed to read multipart",
                        Some(e.to_string()),
                    ),
                    None => ApiError::internal("Failed to process audio", e.to_string()),
                });
            }
        };

        tracing::debug!(file_name = %file_name, bytes = staged.size_bytes, "Upload received");
        return Ok(Some(staged));
    }
}

/// Runs the pipeline on its own task so cleanup finishes even if the client
/// goes away. Dropping the request future cancels the pipeline.
async fn run_detached<F, Fut, T>(
    shutdown: &CancellationToken,
    pipeline: F,
) -> Result<T, TranscriptionServiceError>
where
    F: FnOnce(CancellationToken) -> Fut,
    Fut: Future<Output = Result<T, TranscriptionServiceError>> + Send + 'static,
    T: Send + 'static,
{
    let cancel = shutdown.child_token();
    let _cancel_on_drop = cancel.clone().drop_guard();

    match tokio::spawn(pipeline(cancel)).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "Transcription task aborted");
            Err(TranscriptionServiceError::Cancelled)
        }
    }
}

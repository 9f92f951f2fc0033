use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, TranscriptionProvider};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Serialize)]
pub struct QueryResponse {
    pub answer: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn query_handler<P, L>(
    State(state): State<AppState<P, L>>,
    Json(request): Json<QueryRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    P: TranscriptionProvider + 'static,
    L: LlmClient + 'static,
{
    tracing::debug!(
        prompt = %sanitize_prompt(request.prompt.as_deref().unwrap_or_default()),
        "Processing query"
    );

    let interaction = state
        .query_service
        .answer(request.prompt.as_deref())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Query failed"))?;

    Ok((
        StatusCode::OK,
        Json(QueryResponse {
            answer: interaction.response,
        }),
    ))
}

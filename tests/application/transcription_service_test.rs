use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use multimodal_proxy::application::ports::UploadStaging;
use multimodal_proxy::application::services::{TranscriptionService, TranscriptionServiceError};
use multimodal_proxy::domain::TranscriptStatus;

use crate::helpers::{
    MockProvider, TRANSCRIPT_ID, completed_snapshot, create_staging, error_snapshot, fast_policy,
    snapshot, stage_bytes, staged_file_count,
};

#[tokio::test]
async fn given_no_file_when_transcribing_upload_then_validation_error_without_provider_calls() {
    let (_dir, staging) = create_staging();
    let provider = Arc::new(MockProvider::new());
    let service = TranscriptionService::new(
        Arc::clone(&provider),
        staging as Arc<dyn UploadStaging>,
        fast_policy(),
    );

    let err = service
        .transcribe_upload(None, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, TranscriptionServiceError::Validation(_)));
    assert_eq!(err.to_string(), "No file uploaded");
    assert_eq!(provider.calls().total(), 0);
}

#[tokio::test]
async fn given_blank_url_when_transcribing_url_then_validation_error_without_provider_calls() {
    let (_dir, staging) = create_staging();
    let provider = Arc::new(MockProvider::new());
    let service = TranscriptionService::new(
        Arc::clone(&provider),
        staging as Arc<dyn UploadStaging>,
        fast_policy(),
    );

    for url in [None, Some(String::new()), Some("   ".to_string())] {
        let err = service
            .transcribe_url(url, &CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "YouTube URL is required");
    }
    assert_eq!(provider.calls().total(), 0);
}

#[tokio::test]
async fn given_uploaded_file_when_transcribed_then_returns_result_and_cleans_up() {
    let (dir, staging) = create_staging();
    let upload = stage_bytes(&staging, "meeting.wav", b"RIFF....").await;
    let provider = Arc::new(MockProvider::new().with_statuses(vec![
        Ok(snapshot(TranscriptStatus::Processing)),
        Ok(completed_snapshot("welcome everyone")),
    ]));
    let service = TranscriptionService::new(
        Arc::clone(&provider),
        Arc::clone(&staging) as Arc<dyn UploadStaging>,
        fast_policy(),
    );

    let result = service
        .transcribe_upload(Some(upload), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.id, TRANSCRIPT_ID);
    assert_eq!(result.text, "welcome everyone");
    assert_eq!(result.summary.as_deref(), Some("- a short summary"));
    assert_eq!(result.sentiment.map(|s| s.len()), Some(1));
    assert_eq!(provider.calls().fetched.len(), 2);
    assert_eq!(staged_file_count(&dir), 0);
}

#[tokio::test]
async fn given_url_with_whitespace_when_transcribed_then_trimmed_url_is_submitted() {
    let (_dir, staging) = create_staging();
    let provider =
        Arc::new(MockProvider::new().with_statuses(vec![Ok(completed_snapshot("video words"))]));
    let service = TranscriptionService::new(
        Arc::clone(&provider),
        staging as Arc<dyn UploadStaging>,
        fast_policy(),
    );

    let result = service
        .transcribe_url(
            Some("  https://youtu.be/abc  ".to_string()),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(result.text, "video words");
    assert_eq!(provider.calls().created[0].audio_url, "https://youtu.be/abc");
}

#[tokio::test]
async fn given_provider_error_when_transcribing_then_failure_carries_provider_message() {
    let (_dir, staging) = create_staging();
    let provider =
        Arc::new(MockProvider::new().with_statuses(vec![Ok(error_snapshot("unsupported codec"))]));
    let service = TranscriptionService::new(
        provider,
        staging as Arc<dyn UploadStaging>,
        fast_policy(),
    );

    let err = service
        .transcribe_url(
            Some("https://youtu.be/abc".to_string()),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "transcription failed: unsupported codec");
}

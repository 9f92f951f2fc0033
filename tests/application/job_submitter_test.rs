use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use multimodal_proxy::application::ports::{TranscriptRequest, UploadStaging};
use multimodal_proxy::application::services::{
    JobSubmitter, MediaSource, TranscriptionServiceError,
};
use multimodal_proxy::domain::{SourceRef, TranscriptStatus};

use crate::helpers::{
    MockProvider, TRANSCRIPT_ID, UPLOAD_URL, create_staging, stage_bytes, staged_file_count,
};

#[tokio::test]
async fn given_staged_upload_when_submitted_then_upload_url_is_forwarded_and_file_removed() {
    let (dir, staging) = create_staging();
    let upload = stage_bytes(&staging, "clip.mp3", b"fake-audio").await;
    let provider = Arc::new(MockProvider::new());
    let submitter = JobSubmitter::new(
        Arc::clone(&provider),
        Arc::clone(&staging) as Arc<dyn UploadStaging>,
    );

    let job = submitter
        .submit(MediaSource::Upload(upload.clone()), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(job.id, TRANSCRIPT_ID);
    assert_eq!(job.status, TranscriptStatus::Queued);
    assert_eq!(job.source_ref, SourceRef::LocalPath(upload.path.clone()));

    let calls = provider.calls();
    assert_eq!(calls.uploads, vec![b"fake-audio".to_vec()]);
    assert_eq!(calls.created, vec![TranscriptRequest::with_insights(UPLOAD_URL)]);
    assert!(!upload.path.exists());
    assert_eq!(staged_file_count(&dir), 0);
}

#[test]
fn given_insights_request_when_built_then_asks_for_sentiment_and_bullet_summary() {
    let request = TranscriptRequest::with_insights("https://cdn.example.test/a");

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({
            "audio_url": "https://cdn.example.test/a",
            "sentiment_analysis": true,
            "summarization": true,
            "summary_model": "informative",
            "summary_type": "bullets"
        })
    );
}

#[tokio::test]
async fn given_upload_rejected_when_submitted_then_submission_error_and_file_removed() {
    let (dir, staging) = create_staging();
    let upload = stage_bytes(&staging, "clip.mp3", b"fake-audio").await;
    let provider = Arc::new(MockProvider::new().with_upload_failure(500, "storage unavailable"));
    let submitter = JobSubmitter::new(
        Arc::clone(&provider),
        Arc::clone(&staging) as Arc<dyn UploadStaging>,
    );

    let err = submitter
        .submit(MediaSource::Upload(upload.clone()), &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        TranscriptionServiceError::Submission(message) => {
            assert!(message.contains("storage unavailable"))
        }
        other => panic!("expected Submission, got {:?}", other),
    }
    assert!(provider.calls().created.is_empty());
    assert!(!upload.path.exists());
    assert_eq!(staged_file_count(&dir), 0);
}

#[tokio::test]
async fn given_remote_url_when_submitted_then_no_upload_is_made() {
    let (_dir, staging) = create_staging();
    let provider = Arc::new(MockProvider::new());
    let submitter = JobSubmitter::new(Arc::clone(&provider), staging as Arc<dyn UploadStaging>);

    let job = submitter
        .submit(
            MediaSource::RemoteUrl("https://youtu.be/abc".to_string()),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    let calls = provider.calls();
    assert!(calls.uploads.is_empty());
    assert_eq!(calls.created[0].audio_url, "https://youtu.be/abc");
    assert_eq!(
        job.source_ref,
        SourceRef::RemoteUrl("https://youtu.be/abc".to_string())
    );
}

#[tokio::test]
async fn given_create_rejected_when_submitted_then_submission_error_carries_provider_detail() {
    let (_dir, staging) = create_staging();
    let provider =
        Arc::new(MockProvider::new().with_create_failure(400, "audio_url is not reachable"));
    let submitter = JobSubmitter::new(provider, staging as Arc<dyn UploadStaging>);

    let err = submitter
        .submit(
            MediaSource::RemoteUrl("https://youtu.be/missing".to_string()),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to request transcription: audio_url is not reachable"
    );
}

#[tokio::test]
async fn given_cancelled_token_when_submitting_upload_then_cancelled_and_file_removed() {
    let (dir, staging) = create_staging();
    let upload = stage_bytes(&staging, "clip.mp3", b"fake-audio").await;
    let provider = Arc::new(MockProvider::new());
    let submitter = JobSubmitter::new(
        Arc::clone(&provider),
        Arc::clone(&staging) as Arc<dyn UploadStaging>,
    );
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = submitter
        .submit(MediaSource::Upload(upload), &cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, TranscriptionServiceError::Cancelled));
    assert_eq!(provider.calls().total(), 0);
    assert_eq!(staged_file_count(&dir), 0);
}

#[tokio::test]
async fn given_staged_file_already_gone_when_submitted_then_submission_error() {
    let (_dir, staging) = create_staging();
    let upload = stage_bytes(&staging, "clip.mp3", b"fake-audio").await;
    std::fs::remove_file(&upload.path).unwrap();
    let provider = Arc::new(MockProvider::new());
    let submitter = JobSubmitter::new(
        Arc::clone(&provider),
        staging as Arc<dyn UploadStaging>,
    );

    let err = submitter
        .submit(MediaSource::Upload(upload), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, TranscriptionServiceError::Submission(_)));
    assert_eq!(provider.calls().total(), 0);
}

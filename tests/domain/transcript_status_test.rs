use multimodal_proxy::domain::TranscriptStatus;

#[test]
fn given_known_status_strings_when_parsed_then_map_to_variants() {
    assert_eq!(TranscriptStatus::from("queued"), TranscriptStatus::Queued);
    assert_eq!(
        TranscriptStatus::from("processing"),
        TranscriptStatus::Processing
    );
    assert_eq!(
        TranscriptStatus::from("completed"),
        TranscriptStatus::Completed
    );
    assert_eq!(TranscriptStatus::from("error"), TranscriptStatus::Error);
}

#[test]
fn given_unknown_status_when_parsed_then_kept_verbatim() {
    let status: TranscriptStatus = "transcribing".parse().unwrap();
    assert_eq!(status, TranscriptStatus::Other("transcribing".to_string()));
    assert_eq!(status.to_string(), "transcribing");
    assert!(!status.is_terminal());
}

#[test]
fn given_completed_or_error_when_checked_then_terminal() {
    assert!(TranscriptStatus::Completed.is_terminal());
    assert!(TranscriptStatus::Error.is_terminal());
    assert!(!TranscriptStatus::Queued.is_terminal());
    assert!(!TranscriptStatus::Processing.is_terminal());
}

#[test]
fn given_json_status_when_deserialized_then_unknown_values_do_not_fail() {
    let statuses: Vec<TranscriptStatus> =
        serde_json::from_str(r#"["completed", "paused"]"#).unwrap();
    assert_eq!(
        statuses,
        vec![
            TranscriptStatus::Completed,
            TranscriptStatus::Other("paused".to_string())
        ]
    );
}

use multimodal_proxy::infrastructure::observability::sanitize_prompt;

#[test]
fn given_blank_prompt_when_sanitized_then_marked_empty() {
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitized_then_unchanged() {
    assert_eq!(sanitize_prompt("  What is this?  "), "What is this?");
}

#[test]
fn given_long_prompt_when_sanitized_then_truncated_with_total_length() {
    let prompt = "é".repeat(150);

    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.starts_with(&"é".repeat(100)));
    assert!(sanitized.ends_with("... (150 chars total)"));
}

#[test]
fn given_credentials_in_prompt_when_sanitized_then_values_are_redacted() {
    let sanitized =
        sanitize_prompt("call with key=abc123&x=1 and Bearer sk-live-999 then password=hunter2");

    assert!(!sanitized.contains("abc123"));
    assert!(!sanitized.contains("sk-live-999"));
    assert!(!sanitized.contains("hunter2"));
    assert!(sanitized.contains("key=[REDACTED]&x=1"));
    assert!(sanitized.contains("Bearer [REDACTED]"));
}

#[test]
fn given_repeated_secret_markers_when_sanitized_then_every_value_is_redacted() {
    let sanitized = sanitize_prompt("token=one token=two");

    assert_eq!(sanitized, "token=[REDACTED] token=[REDACTED]");
}

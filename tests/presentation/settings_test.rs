use std::time::Duration;

use multimodal_proxy::presentation::config::{
    InteractionSettings, LlmSettings, LoggingSettings, ProviderSettings, ServerSettings, UploadSettings,
};
use multimodal_proxy::presentation::{Settings, SettingsError};

fn valid_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 5000,
            body_limit_mb: 50,
        },
        provider: ProviderSettings {
            api_key: "assembly-key".to_string(),
            base_url: None,
            poll_interval_ms: 3000,
            max_wait_secs: 900,
            max_fetch_retries: 3,
        },
        llm: LlmSettings {
            api_key: "gemini-key".to_string(),
            model: "gemini-2.0-flash".to_string(),
            base_url: None,
        },
        uploads: UploadSettings {
            dir: "uploads".to_string(),
        },
        interactions: InteractionSettings { capacity: 1000 },
        logging: LoggingSettings {
            json: false,
            directives: None,
        },
    }
}

#[test]
fn given_complete_settings_when_validated_then_ok() {
    assert!(valid_settings().validate().is_ok());
}

#[test]
fn given_missing_provider_key_when_validated_then_invalid() {
    let mut settings = valid_settings();
    settings.provider.api_key = "  ".to_string();

    let err = settings.validate().unwrap_err();

    assert!(matches!(err, SettingsError::Invalid(ref m) if m.contains("ASSEMBLYAI_KEY")));
}

#[test]
fn given_missing_llm_key_when_validated_then_invalid() {
    let mut settings = valid_settings();
    settings.llm.api_key = String::new();

    let err = settings.validate().unwrap_err();

    assert!(matches!(err, SettingsError::Invalid(ref m) if m.contains("GEMINI_API_KEY")));
}

#[test]
fn given_zero_poll_interval_when_validated_then_invalid() {
    let mut settings = valid_settings();
    settings.provider.poll_interval_ms = 0;

    assert!(settings.validate().is_err());
}

#[test]
fn given_zero_interaction_capacity_when_validated_then_invalid() {
    let mut settings = valid_settings();
    settings.interactions.capacity = 0;

    let err = settings.validate().unwrap_err();

    assert!(matches!(err, SettingsError::Invalid(ref m) if m.contains("interactions.capacity")));
}

#[test]
fn given_zero_body_limit_when_validated_then_invalid() {
    let mut settings = valid_settings();
    settings.server.body_limit_mb = 0;

    assert!(settings.validate().is_err());
}

#[test]
fn given_provider_settings_when_policy_derived_then_units_are_converted() {
    let policy = valid_settings().provider.polling_policy();

    assert_eq!(policy.interval, Duration::from_secs(3));
    assert_eq!(policy.max_wait, Some(Duration::from_secs(900)));
    assert_eq!(policy.max_fetch_retries, 3);
}

#[test]
fn given_zero_max_wait_when_policy_derived_then_polling_is_unbounded() {
    let mut settings = valid_settings();
    settings.provider.max_wait_secs = 0;

    assert_eq!(settings.provider.polling_policy().max_wait, None);
}

#[test]
fn given_body_limit_in_megabytes_when_converted_then_bytes() {
    assert_eq!(valid_settings().server.body_limit_bytes(), 50 * 1024 * 1024);
}

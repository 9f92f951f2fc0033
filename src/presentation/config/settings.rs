use std::time::Duration;

use config::{Config, ConfigBuilder, File, builder::DefaultState};
use serde::Deserialize;

use crate::application::services::PollingPolicy;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    pub llm: LlmSettings,
    pub uploads: UploadSettings,
    pub interactions: InteractionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub body_limit_mb: usize,
}

/// Transcription provider access and polling behaviour.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub poll_interval_ms: u64,
    /// Zero disables the time budget.
    pub max_wait_secs: u64,
    pub max_fetch_retries: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub dir: String,
}

/// Bounds the in-memory interaction history.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionSettings {
    pub capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
    pub directives: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid setting: {0}")]
    Invalid(String),
}

impl ServerSettings {
    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb * 1024 * 1024
    }
}

impl ProviderSettings {
    pub fn polling_policy(&self) -> PollingPolicy {
        PollingPolicy {
            interval: Duration::from_millis(self.poll_interval_ms),
            max_wait: (self.max_wait_secs > 0).then(|| Duration::from_secs(self.max_wait_secs)),
            max_fetch_retries: self.max_fetch_retries,
        }
    }
}

impl Settings {
    /// Layers defaults, `appsettings.<env>.toml`, `APP__*` variables and the
    /// well-known key variables, then validates the result.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let builder = with_defaults(Config::builder())?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("provider.api_key", std::env::var("ASSEMBLYAI_KEY").ok())?
            .set_override_option("llm.api_key", std::env::var("GEMINI_API_KEY").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("logging.json", log_format_is_json())?;

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.provider.api_key.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "provider.api_key is required (set ASSEMBLYAI_KEY)".to_string(),
            ));
        }
        if self.llm.api_key.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "llm.api_key is required (set GEMINI_API_KEY)".to_string(),
            ));
        }
        if self.provider.poll_interval_ms == 0 {
            return Err(SettingsError::Invalid(
                "provider.poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.interactions.capacity == 0 {
            return Err(SettingsError::Invalid(
                "interactions.capacity must be greater than zero".to_string(),
            ));
        }
        if self.server.body_limit_mb == 0 {
            return Err(SettingsError::Invalid(
                "server.body_limit_mb must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("server.body_limit_mb", 50)?
        .set_default("provider.api_key", "")?
        .set_default("provider.poll_interval_ms", 3000)?
        .set_default("provider.max_wait_secs", 900)?
        .set_default("provider.max_fetch_retries", 3)?
        .set_default("llm.api_key", "")?
        .set_default("llm.model", "gemini-2.0-flash")?
        .set_default("uploads.dir", "uploads")?
        .set_default("interactions.capacity", 1000)?
        .set_default("logging.json", false)
}

fn log_format_is_json() -> Option<bool> {
    std::env::var("LOG_FORMAT")
        .ok()
        .map(|v| v.eq_ignore_ascii_case("json"))
}

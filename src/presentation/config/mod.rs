mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    InteractionSettings, LlmSettings, LoggingSettings, ProviderSettings, ServerSettings, Settings, SettingsError,
    UploadSettings,
};

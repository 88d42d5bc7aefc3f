mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AuthSettings, DatabaseSettings, LoggingSettings, ProviderSettings, ServerSettings, Settings,
    SettingsError, UploadSettings,
};

use std::env;
use std::path::PathBuf;

use super::Environment;

#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub provider: ProviderSettings,
    pub auth: AuthSettings,
    pub upload: UploadSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub token_secret: String,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub max_file_size_mb: u64,
    pub storage_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {message}")]
    Invalid {
        name: &'static str,
        message: String,
    },
}

impl UploadSettings {
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb * 1024 * 1024
    }
}

impl Settings {
    /// Assemble settings from the process environment. Optional knobs fall
    /// back to development defaults; credentials and the database URL do not.
    pub fn from_env() -> Result<Self, SettingsError> {
        let environment = Environment::try_from(
            env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
        )
        .map_err(|message| SettingsError::Invalid {
            name: "APP_ENVIRONMENT",
            message,
        })?;

        let port = match env::var("SERVER_PORT") {
            Ok(raw) => raw.parse().map_err(|_| SettingsError::Invalid {
                name: "SERVER_PORT",
                message: format!("not a valid port: {}", raw),
            })?,
            Err(_) => 3000,
        };

        Ok(Self {
            environment,
            server: ServerSettings {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
            },
            database: DatabaseSettings {
                url: env::var("DATABASE_URL")
                    .map_err(|_| SettingsError::Missing("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            },
            provider: ProviderSettings {
                api_key: env::var("GEMINI_API_KEY")
                    .map_err(|_| SettingsError::Missing("GEMINI_API_KEY"))?,
                model: env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            },
            auth: AuthSettings {
                token_secret: env::var("AUTH_TOKEN_SECRET")
                    .map_err(|_| SettingsError::Missing("AUTH_TOKEN_SECRET"))?,
            },
            upload: UploadSettings {
                max_file_size_mb: env::var("MAX_UPLOAD_SIZE_MB")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(16),
                storage_dir: env::var("UPLOAD_STORAGE_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("uploads")),
            },
            logging: LoggingSettings {
                enable_json: env::var("LOG_JSON")
                    .map(|v| v.to_lowercase() == "true" || v == "1")
                    .unwrap_or(false),
            },
        })
    }
}

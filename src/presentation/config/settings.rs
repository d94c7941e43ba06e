use std::time::Duration;

use config::{Config, File};
use serde::Deserialize;

use super::{Environment, ScaffoldSettings};
use crate::application::services::PollingPolicy;
use crate::infrastructure::speech::DEFAULT_ASSEMBLYAI_BASE_URL;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{0}")]
    Environment(String),
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(skip)]
    pub environment: Environment,
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    pub polling: PollingSettings,
    pub logging: LoggingSettings,
    pub scaffold: ScaffoldSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_body_bytes: 25 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub language_code: String,
    pub request_timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ASSEMBLYAI_BASE_URL.to_string(),
            api_key: None,
            language_code: "en".to_string(),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollingSettings {
    pub interval_ms: u64,
    pub max_attempts: u32,
}

impl PollingSettings {
    pub fn policy(&self) -> PollingPolicy {
        PollingPolicy::new(Duration::from_millis(self.interval_ms), self.max_attempts)
    }
}

impl Default for PollingSettings {
    fn default() -> Self {
        let policy = PollingPolicy::default();
        Self {
            interval_ms: policy.interval.as_millis() as u64,
            max_attempts: policy.max_attempts,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}

impl Settings {
    /// Layered load: `.env`, then `appsettings.<env>` (optional), then `APP_*` variables,
    /// then the well-known unprefixed variables.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(SettingsError::Environment)?;

        let configuration = Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut settings = Self::from_config(configuration)?;
        settings.environment = environment;
        settings.apply_env_overrides();

        Ok(settings)
    }

    pub fn from_config(configuration: Config) -> Result<Self, SettingsError> {
        let settings: Settings = configuration.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.polling.max_attempts == 0 {
            return Err(SettingsError::Invalid(
                "polling.max_attempts must be at least 1".to_string(),
            ));
        }
        if self.provider.language_code.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "provider.language_code must not be empty".to_string(),
            ));
        }
        if self.server.max_body_bytes == 0 {
            return Err(SettingsError::Invalid(
                "server.max_body_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if self.provider.api_key.is_none() {
            self.provider.api_key = std::env::var("ASSEMBLYAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty());
        }
        if let Some(port) = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
        {
            self.server.port = port;
        }
        self.scaffold.apply_env_overrides();
    }
}

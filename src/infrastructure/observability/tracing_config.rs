use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub default_level: String,
    pub json_format: bool,
}

impl TracingConfig {
    /// Builds from settings, then lets `LOG_FORMAT` pick the output format.
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        Self {
            environment,
            default_level: logging.level.clone(),
            json_format: logging.enable_json,
        }
        .with_log_format(std::env::var("LOG_FORMAT").ok().as_deref())
    }

    /// `json` selects JSON output, any other value selects text. `None` keeps the setting.
    pub fn with_log_format(mut self, log_format: Option<&str>) -> Self {
        if let Some(format) = log_format.map(str::trim).filter(|f| !f.is_empty()) {
            self.json_format = format.eq_ignore_ascii_case("json");
        }
        self
    }

    /// Filter used when `RUST_LOG` is absent.
    pub fn default_filter(&self) -> String {
        format!(
            "{},transcript_relay=debug,tower_http=debug",
            self.default_level
        )
    }
}

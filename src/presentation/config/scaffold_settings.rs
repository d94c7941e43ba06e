use serde::Deserialize;

/// Scaffold mode swaps the real provider for an in-process mock so the front end can be
/// exercised without an API key.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScaffoldSettings {
    pub enabled: bool,
    pub mock_transcript: String,
    pub mock_response_delay_ms: u64,
}

impl ScaffoldSettings {
    /// `SCAFFOLD_MODE` and `MOCK_RESPONSE_DELAY` take precedence over file settings.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SCAFFOLD_MODE") {
            self.enabled = v.to_lowercase() == "true" || v == "1";
        }
        if let Some(delay) = std::env::var("MOCK_RESPONSE_DELAY")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.mock_response_delay_ms = delay;
        }
    }
}

impl Default for ScaffoldSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            mock_transcript: "Hello from scaffold mode.".to_string(),
            mock_response_delay_ms: 0,
        }
    }
}

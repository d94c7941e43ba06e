use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ProviderError, SpeechToTextProvider};
use crate::presentation::config::{ProviderSettings, ScaffoldSettings};

use super::assemblyai_client::AssemblyAiClient;
use super::mock_speech_provider::MockSpeechProvider;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeechProviderKind {
    AssemblyAi,
    Scaffold,
}

impl SpeechProviderKind {
    pub fn from_scaffold(scaffold: &ScaffoldSettings) -> Self {
        if scaffold.enabled {
            SpeechProviderKind::Scaffold
        } else {
            SpeechProviderKind::AssemblyAi
        }
    }
}

pub struct SpeechProviderFactory;

impl SpeechProviderFactory {
    pub fn create(
        kind: SpeechProviderKind,
        provider: &ProviderSettings,
        scaffold: &ScaffoldSettings,
    ) -> Result<Arc<dyn SpeechToTextProvider>, ProviderError> {
        match kind {
            SpeechProviderKind::AssemblyAi => {
                let client = AssemblyAiClient::new(
                    provider.api_key.clone(),
                    Some(provider.base_url.clone()),
                    Duration::from_secs(provider.request_timeout_secs),
                )?;
                if !client.has_credential() {
                    tracing::warn!(
                        "ASSEMBLYAI_API_KEY is not set; transcription requests will fail until it is configured"
                    );
                }
                Ok(Arc::new(client))
            }
            SpeechProviderKind::Scaffold => {
                tracing::info!("Scaffold mode: using in-process mock speech provider");
                let mock = MockSpeechProvider::completed(scaffold.mock_transcript.clone())
                    .with_poll_delay(Duration::from_millis(scaffold.mock_response_delay_ms))
                    .without_recording();
                Ok(Arc::new(mock))
            }
        }
    }
}

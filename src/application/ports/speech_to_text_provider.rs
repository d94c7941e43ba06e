use async_trait::async_trait;

use super::ProviderError;
use crate::domain::{AudioPayload, Transcript, TranscriptId, UploadUrl};

/// Remote speech-to-text service that works through upload, job creation and status polling.
#[async_trait]
pub trait SpeechToTextProvider: Send + Sync {
    async fn upload(&self, audio: &AudioPayload) -> Result<UploadUrl, ProviderError>;

    async fn request_transcript(
        &self,
        audio_url: &UploadUrl,
        language_code: &str,
    ) -> Result<TranscriptId, ProviderError>;

    async fn get_transcript(&self, id: &TranscriptId) -> Result<Transcript, ProviderError>;
}

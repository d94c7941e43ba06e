use std::sync::Arc;

use crate::application::ports::{ProviderError, SpeechToTextProvider};
use crate::domain::{AudioPayload, Transcript, TranscriptId, TranscriptStatus};
use crate::infrastructure::observability::transcript_preview;

use super::{PollingPolicy, TranscriptionError};

/// Runs one audio payload through the provider: upload, job creation, then polling until
/// the job reaches a terminal state or the attempt budget runs out.
pub struct TranscriptionService {
    provider: Arc<dyn SpeechToTextProvider>,
    language_code: String,
    polling: PollingPolicy,
}

impl TranscriptionService {
    pub fn new(
        provider: Arc<dyn SpeechToTextProvider>,
        language_code: impl Into<String>,
        polling: PollingPolicy,
    ) -> Self {
        Self {
            provider,
            language_code: language_code.into(),
            polling,
        }
    }

    /// Returns the transcript text, or the no-speech fallback for an empty result.
    #[tracing::instrument(skip(self, audio), fields(bytes = audio.len()))]
    pub async fn transcribe(&self, audio: &AudioPayload) -> Result<String, TranscriptionError> {
        let upload_url = self
            .provider
            .upload(audio)
            .await
            .map_err(|e| classify(e, TranscriptionError::Upload))?;

        tracing::debug!("Audio uploaded to provider");

        let transcript_id = self
            .provider
            .request_transcript(&upload_url, &self.language_code)
            .await
            .map_err(|e| classify(e, TranscriptionError::JobCreation))?;

        tracing::info!(
            transcript_id = %transcript_id,
            language_code = %self.language_code,
            "Transcription job created"
        );

        let transcript = self.wait_for_completion(&transcript_id).await?;

        match transcript.status {
            TranscriptStatus::Completed => {
                let text = transcript.text_or_fallback();
                tracing::info!(
                    transcript_id = %transcript_id,
                    chars = text.len(),
                    preview = %transcript_preview(&text),
                    "Transcription completed"
                );
                Ok(text)
            }
            _ => Err(TranscriptionError::ProviderReported {
                reason: transcript.error,
            }),
        }
    }

    /// The attempt ceiling is checked before the status, so the final poll never succeeds.
    async fn wait_for_completion(
        &self,
        id: &TranscriptId,
    ) -> Result<Transcript, TranscriptionError> {
        let mut attempts = 0;

        loop {
            tokio::time::sleep(self.polling.interval).await;

            let transcript = self
                .provider
                .get_transcript(id)
                .await
                .map_err(|e| classify(e, TranscriptionError::Unexpected))?;
            attempts += 1;

            tracing::debug!(
                transcript_id = %id,
                attempt = attempts,
                status = %transcript.status,
                "Polled transcription status"
            );

            if attempts >= self.polling.max_attempts {
                tracing::warn!(
                    transcript_id = %id,
                    attempts,
                    status = %transcript.status,
                    "Transcription did not finish within the polling budget"
                );
                return Err(TranscriptionError::Timeout { attempts });
            }

            if transcript.status.is_terminal() {
                return Ok(transcript);
            }
        }
    }
}

/// Credential and malformed-body failures keep their own category whatever step raised them.
fn classify(
    error: ProviderError,
    step: fn(ProviderError) -> TranscriptionError,
) -> TranscriptionError {
    match error {
        ProviderError::MissingCredential => TranscriptionError::MissingCredential,
        e @ ProviderError::MalformedResponse(_) => TranscriptionError::Unexpected(e),
        e => step(e),
    }
}

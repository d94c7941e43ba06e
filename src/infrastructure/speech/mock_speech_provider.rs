use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{ProviderError, SpeechToTextProvider};
use crate::domain::{AudioPayload, Transcript, TranscriptId, TranscriptStatus, UploadUrl};

const MOCK_UPLOAD_URL: &str = "https://cdn.mock.local/upload/audio";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Upload { bytes: usize },
    RequestTranscript { audio_url: String, language_code: String },
    GetTranscript { id: String },
}

/// In-process provider that plays back a scripted status sequence per transcript id. The last
/// status repeats once the script is exhausted; a terminal status resets the script for that id.
pub struct MockSpeechProvider {
    transcript_id: String,
    statuses: Vec<TranscriptStatus>,
    text: Option<String>,
    error: Option<String>,
    upload_failure: Option<u16>,
    job_creation_failure: Option<u16>,
    poll_delay: Duration,
    recording: bool,
    calls: Mutex<Vec<RecordedCall>>,
    progress: Mutex<HashMap<String, usize>>,
}

impl MockSpeechProvider {
    pub fn completed(text: impl Into<String>) -> Self {
        Self::with_statuses(vec![TranscriptStatus::Completed]).with_text(text)
    }

    pub fn with_statuses(statuses: Vec<TranscriptStatus>) -> Self {
        Self {
            transcript_id: "job123".to_string(),
            statuses,
            text: None,
            error: None,
            upload_failure: None,
            job_creation_failure: None,
            poll_delay: Duration::ZERO,
            recording: true,
            calls: Mutex::new(Vec::new()),
            progress: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_transcript_id(mut self, id: impl Into<String>) -> Self {
        self.transcript_id = id.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_upload_failure(mut self, status: u16) -> Self {
        self.upload_failure = Some(status);
        self
    }

    pub fn with_job_creation_failure(mut self, status: u16) -> Self {
        self.job_creation_failure = Some(status);
        self
    }

    pub fn with_poll_delay(mut self, delay: Duration) -> Self {
        self.poll_delay = delay;
        self
    }

    /// Stops keeping a call log. Used when the mock serves a long-running process.
    pub fn without_recording(mut self) -> Self {
        self.recording = false;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock_calls().clone()
    }

    pub fn poll_count(&self) -> usize {
        self.lock_calls()
            .iter()
            .filter(|c| matches!(c, RecordedCall::GetTranscript { .. }))
            .count()
    }

    /// Jobs still mid-script.
    pub fn pending_jobs(&self) -> usize {
        self.lock_progress().len()
    }

    fn record(&self, call: RecordedCall) {
        if self.recording {
            self.lock_calls().push(call);
        }
    }

    fn lock_calls(&self) -> MutexGuard<'_, Vec<RecordedCall>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_progress(&self) -> MutexGuard<'_, HashMap<String, usize>> {
        self.progress.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn next_status(&self, id: &TranscriptId) -> TranscriptStatus {
        let mut progress = self.lock_progress();
        let step = progress.entry(id.to_string()).or_insert(0);

        let status = self
            .statuses
            .get(*step)
            .or_else(|| self.statuses.last())
            .copied()
            .unwrap_or(TranscriptStatus::Queued);
        *step += 1;

        if status.is_terminal() {
            progress.remove(id.as_str());
        }

        status
    }
}

#[async_trait]
impl SpeechToTextProvider for MockSpeechProvider {
    async fn upload(&self, audio: &AudioPayload) -> Result<UploadUrl, ProviderError> {
        self.record(RecordedCall::Upload { bytes: audio.len() });

        if let Some(status) = self.upload_failure {
            return Err(ProviderError::Status {
                status,
                body: "mock upload failure".to_string(),
            });
        }

        UploadUrl::parse(MOCK_UPLOAD_URL)
            .ok_or_else(|| ProviderError::MalformedResponse("missing upload_url".to_string()))
    }

    async fn request_transcript(
        &self,
        audio_url: &UploadUrl,
        language_code: &str,
    ) -> Result<TranscriptId, ProviderError> {
        self.record(RecordedCall::RequestTranscript {
            audio_url: audio_url.to_string(),
            language_code: language_code.to_string(),
        });

        if let Some(status) = self.job_creation_failure {
            return Err(ProviderError::Status {
                status,
                body: "mock job creation failure".to_string(),
            });
        }

        TranscriptId::parse(self.transcript_id.clone())
            .ok_or_else(|| ProviderError::MalformedResponse("missing transcript id".to_string()))
    }

    async fn get_transcript(&self, id: &TranscriptId) -> Result<Transcript, ProviderError> {
        self.record(RecordedCall::GetTranscript { id: id.to_string() });

        if !self.poll_delay.is_zero() {
            tokio::time::sleep(self.poll_delay).await;
        }

        let status = self.next_status(id);

        Ok(Transcript {
            id: id.clone(),
            status,
            text: self.text.clone().filter(|_| status == TranscriptStatus::Completed),
            error: self.error.clone().filter(|_| status == TranscriptStatus::Error),
        })
    }
}

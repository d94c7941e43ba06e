use super::{TranscriptId, TranscriptStatus};

pub const NO_SPEECH_FALLBACK: &str = "No speech detected in audio.";

/// Snapshot of a transcription job as last reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub id: TranscriptId,
    pub status: TranscriptStatus,
    pub text: Option<String>,
    pub error: Option<String>,
}

impl Transcript {
    pub fn new(id: TranscriptId, status: TranscriptStatus) -> Self {
        Self {
            id,
            status,
            text: None,
            error: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Text to hand back to the caller, falling back when the provider heard nothing.
    pub fn text_or_fallback(&self) -> String {
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => NO_SPEECH_FALLBACK.to_string(),
        }
    }
}

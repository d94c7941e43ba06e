use crate::application::ports::ProviderError;

/// Failures of the upload → request → poll pipeline. The `Display` text is what the
/// caller sees; provider detail stays in `source()` for logs.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("API key not configured")]
    MissingCredential,
    #[error("Failed to upload audio")]
    Upload(#[source] ProviderError),
    #[error("Failed to request transcription")]
    JobCreation(#[source] ProviderError),
    #[error("Transcription timeout")]
    Timeout { attempts: u32 },
    #[error("Transcription failed{}", failure_suffix(.reason))]
    ProviderReported { reason: Option<String> },
    #[error("Unexpected provider response: {0}")]
    Unexpected(#[source] ProviderError),
}

impl TranscriptionError {
    pub fn kind(&self) -> &'static str {
        match self {
            TranscriptionError::MissingCredential => "missing_credential",
            TranscriptionError::Upload(_) => "upload_failure",
            TranscriptionError::JobCreation(_) => "job_creation_failure",
            TranscriptionError::Timeout { .. } => "polling_timeout",
            TranscriptionError::ProviderReported { .. } => "provider_reported_error",
            TranscriptionError::Unexpected(_) => "unexpected",
        }
    }
}

fn failure_suffix(reason: &Option<String>) -> String {
    match reason.as_deref() {
        Some(r) if !r.trim().is_empty() => format!(": {}", r),
        _ => String::new(),
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::TranscriptStatus;

#[derive(Debug, Deserialize)]
pub(super) struct UploadResponse {
    pub upload_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct CreateTranscriptRequest<'a> {
    pub audio_url: &'a str,
    pub language_code: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreateTranscriptResponse {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TranscriptResponse {
    pub id: Option<String>,
    pub status: Option<TranscriptStatus>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

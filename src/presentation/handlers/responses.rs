use serde::Serialize;

use crate::application::services::TranscriptionError;

#[derive(Debug, Serialize)]
pub struct TranscribeSuccessResponse {
    pub success: bool,
    pub text: String,
}

impl TranscribeSuccessResponse {
    pub fn new(text: String) -> Self {
        Self {
            success: true,
            text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TranscribeFailureResponse {
    pub success: bool,
    pub error: String,
}

impl From<&TranscriptionError> for TranscribeFailureResponse {
    fn from(error: &TranscriptionError) -> Self {
        Self {
            success: false,
            error: error.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn method_not_allowed() -> Self {
        Self {
            error: "Method not allowed".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub const HEALTHY: Self = Self { status: "healthy" };
}

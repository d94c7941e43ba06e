mod health;
mod responses;
mod transcribe;

pub use health::health_handler;
pub use responses::{
    ErrorResponse, HealthResponse, TranscribeFailureResponse, TranscribeSuccessResponse,
};
pub use transcribe::{method_not_allowed_handler, preflight_handler, transcribe_handler};

mod polling_policy;
mod transcription_error;
mod transcription_service;

pub use polling_policy::PollingPolicy;
pub use transcription_error::TranscriptionError;
pub use transcription_service::TranscriptionService;

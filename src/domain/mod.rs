mod audio_payload;
mod transcript;
mod transcript_id;
mod transcript_status;
mod upload_url;

pub use audio_payload::AudioPayload;
pub use transcript::{NO_SPEECH_FALLBACK, Transcript};
pub use transcript_id::TranscriptId;
pub use transcript_status::TranscriptStatus;
pub use upload_url::UploadUrl;

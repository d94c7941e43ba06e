mod provider_error;
mod speech_to_text_provider;

pub use provider_error::ProviderError;
pub use speech_to_text_provider::SpeechToTextProvider;

mod assemblyai_client;
mod assemblyai_types;
mod mock_speech_provider;
mod speech_provider_factory;

pub use assemblyai_client::{AssemblyAiClient, DEFAULT_ASSEMBLYAI_BASE_URL};
pub use mock_speech_provider::{MockSpeechProvider, RecordedCall};
pub use speech_provider_factory::{SpeechProviderFactory, SpeechProviderKind};

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::assemblyai_types::{
    CreateTranscriptRequest, CreateTranscriptResponse, TranscriptResponse, UploadResponse,
};
use crate::application::ports::{ProviderError, SpeechToTextProvider};
use crate::domain::{AudioPayload, Transcript, TranscriptId, UploadUrl};

pub const DEFAULT_ASSEMBLYAI_BASE_URL: &str = "https://api.assemblyai.com/v2";

pub struct AssemblyAiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl AssemblyAiClient {
    pub fn new(
        api_key: Option<String>,
        base_url: Option<String>,
        request_timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| ProviderError::Request(format!("client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_ASSEMBLYAI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key.as_deref().ok_or(ProviderError::MissingCredential)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ProviderError> {
        let response = request
            .header(reqwest::header::AUTHORIZATION, self.api_key()?)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ProviderError> {
    let body = response
        .bytes()
        .await
        .map_err(|e| ProviderError::Request(format!("body: {}", e)))?;

    serde_json::from_slice(&body).map_err(|e| ProviderError::MalformedResponse(e.to_string()))
}

#[async_trait]
impl SpeechToTextProvider for AssemblyAiClient {
    async fn upload(&self, audio: &AudioPayload) -> Result<UploadUrl, ProviderError> {
        let url = format!("{}/upload", self.base_url);

        tracing::debug!(
            bytes = audio.len(),
            content_type = audio.content_type().unwrap_or("unknown"),
            "Uploading audio to AssemblyAI"
        );

        let response = self
            .send(self.client.post(&url).body(audio.data().clone()))
            .await?;

        let result: UploadResponse = parse_json(response).await?;

        result
            .upload_url
            .and_then(UploadUrl::parse)
            .ok_or_else(|| ProviderError::MalformedResponse("missing upload_url".to_string()))
    }

    async fn request_transcript(
        &self,
        audio_url: &UploadUrl,
        language_code: &str,
    ) -> Result<TranscriptId, ProviderError> {
        let url = format!("{}/transcript", self.base_url);
        let body = CreateTranscriptRequest {
            audio_url: audio_url.as_str(),
            language_code,
        };

        let response = self.send(self.client.post(&url).json(&body)).await?;
        let result: CreateTranscriptResponse = parse_json(response).await?;

        result
            .id
            .and_then(TranscriptId::parse)
            .ok_or_else(|| ProviderError::MalformedResponse("missing transcript id".to_string()))
    }

    async fn get_transcript(&self, id: &TranscriptId) -> Result<Transcript, ProviderError> {
        let url = format!("{}/transcript/{}", self.base_url, id);

        let response = self.send(self.client.get(&url)).await?;
        let result: TranscriptResponse = parse_json(response).await?;

        let status = result
            .status
            .ok_or_else(|| ProviderError::MalformedResponse("missing status".to_string()))?;

        if let Some(reported) = result.id.as_deref() {
            if reported != id.as_str() {
                tracing::warn!(
                    expected = %id,
                    reported,
                    "Provider returned a different transcript id"
                );
            }
        }

        Ok(Transcript {
            id: id.clone(),
            status,
            text: result.text,
            error: result.error,
        })
    }
}

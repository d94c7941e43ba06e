#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider API key not configured")]
    MissingCredential,
    #[error("request failed: {0}")]
    Request(String),
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use transcript_relay::application::ports::{ProviderError, SpeechToTextProvider};
use transcript_relay::application::services::{PollingPolicy, TranscriptionService};
use transcript_relay::domain::{AudioPayload, TranscriptId, TranscriptStatus};
use transcript_relay::infrastructure::speech::MockSpeechProvider;

#[tokio::test]
async fn given_status_script_when_exhausted_then_last_status_repeats() {
    let provider = MockSpeechProvider::with_statuses(vec![
        TranscriptStatus::Queued,
        TranscriptStatus::Processing,
    ]);
    let id = TranscriptId::parse("job123").unwrap();

    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(provider.get_transcript(&id).await.unwrap().status);
    }

    assert_eq!(
        seen,
        vec![
            TranscriptStatus::Queued,
            TranscriptStatus::Processing,
            TranscriptStatus::Processing,
            TranscriptStatus::Processing,
        ]
    );
    assert_eq!(provider.poll_count(), 4);
}

#[tokio::test]
async fn given_text_when_job_not_completed_then_text_is_withheld() {
    let provider = MockSpeechProvider::with_statuses(vec![
        TranscriptStatus::Processing,
        TranscriptStatus::Completed,
    ])
    .with_text("hello");
    let id = TranscriptId::parse("job123").unwrap();

    assert!(provider.get_transcript(&id).await.unwrap().text.is_none());
    assert_eq!(
        provider.get_transcript(&id).await.unwrap().text.as_deref(),
        Some("hello")
    );
}

#[tokio::test]
async fn given_upload_failure_when_uploading_then_returns_status_error() {
    let provider = MockSpeechProvider::completed("x").with_upload_failure(503);
    let audio = AudioPayload::new(Bytes::from_static(b"a"), None);

    let result = provider.upload(&audio).await;

    assert!(matches!(
        result,
        Err(ProviderError::Status { status: 503, .. })
    ));
}

#[tokio::test]
async fn given_custom_transcript_id_when_requesting_then_returns_it() {
    let provider = MockSpeechProvider::completed("x").with_transcript_id("abc-1");
    let audio = AudioPayload::new(Bytes::from_static(b"a"), None);

    let url = provider.upload(&audio).await.unwrap();
    let id = provider.request_transcript(&url, "en").await.unwrap();

    assert_eq!(id.as_str(), "abc-1");
}

#[tokio::test]
async fn given_terminal_status_when_same_job_polled_again_then_script_restarts() {
    let provider = MockSpeechProvider::with_statuses(vec![
        TranscriptStatus::Processing,
        TranscriptStatus::Completed,
    ]);
    let id = TranscriptId::parse("job123").unwrap();

    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(provider.get_transcript(&id).await.unwrap().status);
    }

    assert_eq!(
        seen,
        vec![
            TranscriptStatus::Processing,
            TranscriptStatus::Completed,
            TranscriptStatus::Processing,
            TranscriptStatus::Completed,
        ]
    );
    assert_eq!(provider.pending_jobs(), 0);
}

#[tokio::test]
async fn given_recording_disabled_when_serving_many_requests_then_keeps_no_call_log() {
    let provider = Arc::new(
        MockSpeechProvider::with_statuses(vec![
            TranscriptStatus::Processing,
            TranscriptStatus::Completed,
        ])
        .with_text("again")
        .without_recording(),
    );
    let service = TranscriptionService::new(
        provider.clone(),
        "en",
        PollingPolicy::new(Duration::from_millis(1), 5),
    );
    let audio = AudioPayload::new(Bytes::from_static(b"a"), None);

    for _ in 0..3 {
        assert_eq!(service.transcribe(&audio).await.unwrap(), "again");
    }

    assert!(provider.calls().is_empty());
    assert_eq!(provider.poll_count(), 0);
    assert_eq!(provider.pending_jobs(), 0);
}

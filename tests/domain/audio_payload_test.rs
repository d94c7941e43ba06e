use bytes::Bytes;
use transcript_relay::domain::AudioPayload;

#[test]
fn given_raw_bytes_when_wrapping_then_exposes_length_and_content_type() {
    let payload = AudioPayload::new(Bytes::from_static(b"RIFF...."), Some("audio/wav".into()));

    assert_eq!(payload.len(), 8);
    assert!(!payload.is_empty());
    assert_eq!(payload.content_type(), Some("audio/wav"));
}

#[test]
fn given_empty_body_when_wrapping_then_payload_is_accepted_as_is() {
    let payload = AudioPayload::new(Bytes::new(), None);

    assert!(payload.is_empty());
    assert_eq!(payload.content_type(), None);
    assert!(payload.into_bytes().is_empty());
}

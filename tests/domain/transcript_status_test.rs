use transcript_relay::domain::TranscriptStatus;

#[test]
fn given_completed_or_error_when_checking_terminal_then_true() {
    assert!(TranscriptStatus::Completed.is_terminal());
    assert!(TranscriptStatus::Error.is_terminal());
}

#[test]
fn given_pending_statuses_when_checking_terminal_then_false() {
    assert!(!TranscriptStatus::Queued.is_terminal());
    assert!(!TranscriptStatus::Processing.is_terminal());
    assert!(!TranscriptStatus::Unknown.is_terminal());
}

#[test]
fn given_provider_json_status_when_deserializing_then_maps_to_variant() {
    let status: TranscriptStatus = serde_json::from_str(r#""processing""#).unwrap();
    assert_eq!(status, TranscriptStatus::Processing);
}

#[test]
fn given_unrecognised_json_status_when_deserializing_then_unknown() {
    let status: TranscriptStatus = serde_json::from_str(r#""throttled""#).unwrap();
    assert_eq!(status, TranscriptStatus::Unknown);
}

#[test]
fn given_status_when_displayed_then_matches_provider_spelling() {
    assert_eq!(TranscriptStatus::Queued.to_string(), "queued");
    assert_eq!(TranscriptStatus::Completed.as_str(), "completed");
}

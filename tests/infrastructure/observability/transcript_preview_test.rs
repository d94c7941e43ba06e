use transcript_relay::infrastructure::observability::transcript_preview;

#[test]
fn given_blank_text_when_previewing_then_marks_empty() {
    assert_eq!(transcript_preview("   "), "[EMPTY]");
}

#[test]
fn given_short_text_when_previewing_then_returns_trimmed_text() {
    assert_eq!(transcript_preview("  hello world \n"), "hello world");
}

#[test]
fn given_long_text_when_previewing_then_truncates_with_total() {
    let text = "a".repeat(150);

    let preview = transcript_preview(&text);

    assert!(preview.starts_with(&"a".repeat(100)));
    assert!(preview.ends_with("... (150 chars total)"));
}

#[test]
fn given_multibyte_text_when_truncating_then_does_not_split_characters() {
    let text = "é".repeat(120);

    let preview = transcript_preview(&text);

    assert!(preview.starts_with(&"é".repeat(100)));
    assert!(preview.contains("(120 chars total)"));
}

#[test]
fn given_dictated_secret_when_previewing_then_value_is_redacted() {
    let preview = transcript_preview("my password=hunter2 and token=abc123 ok");

    assert_eq!(
        preview,
        "my password=[REDACTED] and token=[REDACTED] ok"
    );
}

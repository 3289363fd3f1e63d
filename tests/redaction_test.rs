use intake::application::services::redact_contact_details;

#[test]
fn given_email_address_when_redacting_then_address_is_masked() {
    let redacted = redact_contact_details("Reach Pat Doe at pat.doe+work@example.com for details.");

    assert_eq!(
        redacted,
        "Reach Pat Doe at [email redacted] for details."
    );
}

#[test]
fn given_common_phone_formats_when_redacting_then_numbers_are_masked() {
    for input in [
        "call 702-555-0100 today",
        "call (702) 555-0100 today",
        "call +1 702 555 0100 today",
        "call 702.555.0100 today",
    ] {
        let redacted = redact_contact_details(input);
        assert_eq!(redacted, "call [phone redacted] today", "input: {input}");
    }
}

#[test]
fn given_dates_and_timestamps_when_redacting_then_they_pass_through_unchanged() {
    for input in [
        "2026-08-30",
        r#"{"timestamp": "2026-08-30T12:00:00+00:00"}"#,
        "roadmap_20260830_120000.pdf",
        "signed on 08-30-2026",
    ] {
        assert_eq!(redact_contact_details(input), input, "input: {input}");
    }
}

#[test]
fn given_contact_details_next_to_a_timestamp_when_redacting_then_only_contacts_change() {
    let input = "submitted 2026-08-30T12:00:00+00:00 by pat@example.com, 702-555-0100";

    let redacted = redact_contact_details(input);

    assert_eq!(
        redacted,
        "submitted 2026-08-30T12:00:00+00:00 by [email redacted], [phone redacted]"
    );
}

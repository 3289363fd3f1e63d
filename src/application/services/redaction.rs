use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

// Requires the 3-3-4 digit grouping with separators, so RFC 3339 dates and
// timestamps (4-2-2 groups, colon-separated times) never match.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?\d{0,2}[-.\s]?\(?\d{3}\)?[-.\s]\d{3}[-.\s]\d{4}\b").unwrap()
});

/// Masks email addresses and phone numbers before text reaches the logs.
/// Prompts embed the submitter's contact details verbatim, so anything
/// logged at debug level goes through here first.
pub fn redact_contact_details(text: &str) -> String {
    let without_email = EMAIL.replace_all(text, "[email redacted]");
    PHONE
        .replace_all(&without_email, "[phone redacted]")
        .into_owned()
}

/// Strips a surrounding Markdown code fence, if present.
///
/// Models regularly fence the structured output they were asked for, with
/// or without a "json" language tag, even when told not to. The fenced body
/// is what the strict parser gets to see; unfenced input passes through
/// trimmed.
pub(crate) fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };

    // Drop a language tag like "json" on the opening fence line.
    match body.split_once('\n') {
        Some((first_line, remainder)) if !first_line.trim().is_empty() => {
            if first_line.trim().chars().all(|c| c.is_ascii_alphanumeric()) {
                remainder.trim()
            } else {
                body.trim()
            }
        }
        _ => body.trim(),
    }
}

use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};

use super::llm_text::strip_code_fence;

/// Cleans up a single free-text vendor field through the LLM.
///
/// The response is returned verbatim (trimmed); parsing into a display
/// string is deferred to [`to_display_string`] so storage can fall back to
/// the raw text when the model ignores the requested format.
pub struct VendorNormalizer<L: LlmClient> {
    llm: Arc<L>,
}

impl<L: LlmClient> VendorNormalizer<L> {
    pub fn new(llm: Arc<L>) -> Self {
        Self { llm }
    }

    pub async fn normalize(
        &self,
        field_label: &str,
        raw_text: &str,
    ) -> Result<String, LlmClientError> {
        let prompt = normalize_prompt(field_label, raw_text);
        let response = self.llm.complete(&prompt).await?;
        Ok(response.trim().to_string())
    }
}

fn normalize_prompt(field_label: &str, raw_text: &str) -> String {
    format!(
        r#"You are a data cleaning assistant. Your job is to extract and standardize vendor names from text fields.
Field: {field_label}
Raw Input: "{raw_text}"

Return a JSON array of clean, distinct vendor names mentioned in the input. Use proper casing and official names when possible.
Example output format: ["SmartCAMA", "EagleView", "Tyler Technologies"]
Only output the JSON array."#
    )
}

/// Turns the normalizer's output into a flat display string.
///
/// A valid JSON array of strings becomes its elements joined with ", ".
/// Anything else comes back unchanged: malformed model output must degrade
/// to storing the raw text, never abort the submission.
pub fn to_display_string(list_text: &str) -> String {
    match serde_json::from_str::<Vec<String>>(strip_code_fence(list_text)) {
        Ok(vendors) => vendors.join(", "),
        Err(_) => list_text.to_string(),
    }
}

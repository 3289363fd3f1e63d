use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::VendorCategoryMap;

use super::llm_text::strip_code_fence;

/// Result of one categorization pass. A parse failure is not an error:
/// the submission proceeds with no category columns and the warning is
/// surfaced to the caller.
#[derive(Debug, Default)]
pub struct CategoryOutcome {
    pub categories: VendorCategoryMap,
    pub warning: Option<String>,
}

/// Asks the LLM to group vendor names under category labels of its own
/// choosing.
pub struct VendorCategorizer<L: LlmClient> {
    llm: Arc<L>,
}

impl<L: LlmClient> VendorCategorizer<L> {
    pub fn new(llm: Arc<L>) -> Self {
        Self { llm }
    }

    /// One LLM call over the combined vendor text. Transport errors
    /// propagate; a response that is not the requested JSON object
    /// fails open to an empty map.
    pub async fn categorize(&self, combined_text: &str) -> Result<CategoryOutcome, LlmClientError> {
        let prompt = categorize_prompt(combined_text);
        let response = self.llm.complete(&prompt).await?;

        match serde_json::from_str::<VendorCategoryMap>(strip_code_fence(&response)) {
            Ok(categories) => Ok(CategoryOutcome {
                categories,
                warning: None,
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Categorizer returned malformed JSON");
                Ok(CategoryOutcome {
                    categories: VendorCategoryMap::new(),
                    warning: Some(format!("vendor categorization returned malformed data: {e}")),
                })
            }
        }
    }
}

fn categorize_prompt(combined_text: &str) -> String {
    format!(
        r#"You're an AI assistant helping categorize vendor types from onboarding form submissions.
Below is a block of text from multiple vendor fields. Return a JSON object mapping vendor category
(e.g., "CAMA Vendor", "Imagery Vendor", "Website Vendor", "Other") to an array of vendor names.
You are not limited to the example categories.

Input:
{combined_text}

Output format:
{{
  "CAMA Vendor": ["SmartCAMA"],
  "Imagery Vendor": ["EagleView"],
  "Website Vendor": ["Revize"],
  "Other Vendor": ["GISinc", "Spatial Data Logic"],
  "Mapping Vendor": ["MapLogic"]
}}
Only return a valid JSON object."#
    )
}

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError, RenderError, RoadmapRenderer};
use crate::application::services::redaction::redact_contact_details;
use crate::domain::{FormInput, SubmissionRecord};

/// Produces the narrative roadmap PDF for a stored submission.
pub struct RoadmapService<L: LlmClient, R: RoadmapRenderer> {
    llm: Arc<L>,
    renderer: Arc<R>,
    output_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum RoadmapError {
    #[error("llm: {0}")]
    Llm(#[from] LlmClientError),
    #[error("render: {0}")]
    Render(#[from] RenderError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("record serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl<L: LlmClient, R: RoadmapRenderer> RoadmapService<L, R> {
    pub fn new(llm: Arc<L>, renderer: Arc<R>, output_dir: PathBuf) -> Self {
        Self {
            llm,
            renderer,
            output_dir,
        }
    }

    /// Asks the LLM for a roadmap narrative, renders it and writes
    /// `roadmap_<timestamp>.pdf` under the submissions directory. The
    /// response is opaque prose; nothing in it is parsed.
    pub async fn generate(
        &self,
        form: &FormInput,
        record: &SubmissionRecord,
        document_text: &str,
    ) -> Result<PathBuf, RoadmapError> {
        let prompt = roadmap_prompt(form, record, document_text)?;
        tracing::debug!(prompt = %redact_contact_details(&prompt), "Requesting roadmap");

        let narrative = self.llm.complete(&prompt).await?;
        let pdf_bytes = self.renderer.render(narrative.trim())?;

        let filename = format!(
            "roadmap_{}.pdf",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        );
        let output_path = self.output_dir.join(filename);

        tokio::fs::create_dir_all(&self.output_dir).await?;
        tokio::fs::write(&output_path, pdf_bytes).await?;

        tracing::info!(path = %output_path.display(), "Roadmap PDF written");
        Ok(output_path)
    }
}

fn roadmap_prompt(
    form: &FormInput,
    record: &SubmissionRecord,
    document_text: &str,
) -> Result<String, serde_json::Error> {
    let record_json = serde_json::to_string_pretty(record)?;

    Ok(format!(
        r#"You are a consulting AI working for a firm that helps local appraiser offices.
The office '{office}' has reported the following pain points: {issues}.
They use: CAMA: {cama}; Imagery: {imagery}; Website: {website}; Other: {other}.
Their key contracts are: {files}.
Draft a roadmap summary of what they have so far, with key areas for improvement.
Based on the following onboarding information and attached documents, create a high-level technology roadmap
for a county appraisal district. Be sure to consider contract terms, current vendors, challenges, and opportunities.

Form submission data:
{record_json}

Contract and document contents:
{document_text}"#,
        office = form.office_name,
        issues = form.other_issues,
        cama = form.software_cama,
        imagery = form.software_imagery,
        website = form.website_provider,
        other = form.other_providers,
        files = form.upload_names().join(", "),
    ))
}

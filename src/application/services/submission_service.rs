use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{
    FileLoader, LlmClient, LlmClientError, RoadmapRenderer, SubmissionStore, SubmissionStoreError,
};
use crate::domain::{FormInput, SubmissionRecord};

use super::document_service::DocumentService;
use super::record_builder::{NormalizedVendorFields, RecordBuildError, build_record};
use super::roadmap_service::RoadmapService;
use super::vendor_categorizer::VendorCategorizer;
use super::vendor_normalizer::VendorNormalizer;

/// What the caller gets back after a submission is stored.
///
/// `category_warning` carries the categorizer's non-fatal parse failure;
/// the roadmap fields report the post-storage generation step, which never
/// turns a stored submission into a failure.
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub record: SubmissionRecord,
    pub category_warning: Option<String>,
    pub roadmap_path: Option<PathBuf>,
    pub roadmap_error: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("llm: {0}")]
    Llm(#[from] LlmClientError),
    #[error("record: {0}")]
    Record(#[from] RecordBuildError),
    #[error("store: {0}")]
    Store(#[from] SubmissionStoreError),
}

/// Orchestrates one submission end to end: document extraction, vendor
/// normalization, categorization, record building, the tabular append and
/// finally roadmap generation. All steps run strictly in sequence.
pub struct SubmissionService<L, F, S, R>
where
    L: LlmClient,
    F: FileLoader,
    S: SubmissionStore,
    R: RoadmapRenderer,
{
    documents: DocumentService<F>,
    normalizer: VendorNormalizer<L>,
    categorizer: VendorCategorizer<L>,
    store: Arc<S>,
    roadmap: RoadmapService<L, R>,
}

impl<L, F, S, R> SubmissionService<L, F, S, R>
where
    L: LlmClient,
    F: FileLoader,
    S: SubmissionStore,
    R: RoadmapRenderer,
{
    pub fn new(
        llm: Arc<L>,
        file_loader: Arc<F>,
        store: Arc<S>,
        renderer: Arc<R>,
        submissions_dir: PathBuf,
    ) -> Self {
        Self {
            documents: DocumentService::new(file_loader),
            normalizer: VendorNormalizer::new(Arc::clone(&llm)),
            categorizer: VendorCategorizer::new(Arc::clone(&llm)),
            store,
            roadmap: RoadmapService::new(llm, renderer, submissions_dir),
        }
    }

    pub async fn submit(&self, form: FormInput) -> Result<SubmissionOutcome, SubmissionError> {
        let document_text = self.documents.extract_combined_text(&form.uploads).await;

        let vendors = NormalizedVendorFields {
            software_cama: self
                .normalizer
                .normalize("CAMA System", &form.software_cama)
                .await?,
            software_imagery: self
                .normalizer
                .normalize("Imagery", &form.software_imagery)
                .await?,
            website_provider: self
                .normalizer
                .normalize("Website Vendor", &form.website_provider)
                .await?,
            other_providers: self
                .normalizer
                .normalize("Other Providers", &form.other_providers)
                .await?,
        };

        let combined_vendor_text = format!(
            "CAMA: {}\nImagery: {}\nWebsite: {}\nOther: {}",
            form.software_cama, form.software_imagery, form.website_provider, form.other_providers
        );
        let category_outcome = self.categorizer.categorize(&combined_vendor_text).await?;

        let timestamp = chrono::Utc::now().to_rfc3339();
        let record = build_record(&form, &timestamp, &vendors, &category_outcome.categories)?;

        self.store.append(&record).await?;
        tracing::info!(columns = record.len(), "Submission stored");

        // The record is persisted at this point; a roadmap failure is
        // reported, not raised.
        let (roadmap_path, roadmap_error) =
            match self.roadmap.generate(&form, &record, &document_text).await {
                Ok(path) => (Some(path), None),
                Err(e) => {
                    tracing::error!(error = %e, "Roadmap generation failed");
                    (None, Some(e.to_string()))
                }
            };

        Ok(SubmissionOutcome {
            record,
            category_warning: category_outcome.warning,
            roadmap_path,
            roadmap_error,
        })
    }
}

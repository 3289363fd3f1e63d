mod document_service;
mod llm_text;
mod record_builder;
mod redaction;
mod roadmap_service;
mod submission_service;
mod vendor_categorizer;
mod vendor_normalizer;

pub use document_service::DocumentService;
pub use record_builder::{NormalizedVendorFields, RecordBuildError, build_record};
pub use redaction::redact_contact_details;
pub use roadmap_service::{RoadmapError, RoadmapService};
pub use submission_service::{SubmissionError, SubmissionOutcome, SubmissionService};
pub use vendor_categorizer::{CategoryOutcome, VendorCategorizer};
pub use vendor_normalizer::{VendorNormalizer, to_display_string};

use crate::domain::{FormInput, SubmissionRecord, VendorCategoryMap};

use super::vendor_normalizer::to_display_string;

/// The four vendor free-text fields after normalization, still in the
/// LLM's raw list form.
#[derive(Debug, Clone, Default)]
pub struct NormalizedVendorFields {
    pub software_cama: String,
    pub software_imagery: String,
    pub website_provider: String,
    pub other_providers: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RecordBuildError {
    #[error("vendor category label collides with submission field: {0}")]
    CategoryCollision(String),
}

/// Assembles the flat record for one submission.
///
/// Fixed fields are copied verbatim, normalized vendor texts go through
/// [`to_display_string`], and each vendor category becomes its own
/// top-level field with the names joined by ", ". A category label equal
/// to an existing field name is rejected outright rather than silently
/// overwriting.
pub fn build_record(
    form: &FormInput,
    timestamp: &str,
    vendors: &NormalizedVendorFields,
    categories: &VendorCategoryMap,
) -> Result<SubmissionRecord, RecordBuildError> {
    let mut record = SubmissionRecord::new();

    record.insert("timestamp", timestamp);
    record.insert("office_county", &form.office_county);
    record.insert("office_state", form.office_state.as_str());
    record.insert("contact_person", &form.contact_person);
    record.insert("email", &form.email);
    record.insert("phone", &form.phone);
    record.insert("software_cama", to_display_string(&vendors.software_cama));
    record.insert(
        "software_imagery",
        to_display_string(&vendors.software_imagery),
    );
    record.insert(
        "website_provider",
        to_display_string(&vendors.website_provider),
    );
    record.insert(
        "other_providers",
        to_display_string(&vendors.other_providers),
    );
    record.insert("other_issues", &form.other_issues);
    record.insert("uploaded_files", form.upload_names().join(", "));

    for (label, names) in categories {
        if record.contains(label) {
            return Err(RecordBuildError::CategoryCollision(label.clone()));
        }
        record.insert(label, names.join(", "));
    }

    Ok(record)
}

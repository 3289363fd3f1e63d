use super::us_state::UsState;

/// One file attached to a submission, held in memory until extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// Everything the form surface collects for a single submission.
///
/// The office name only feeds the roadmap prompt; it is not part of the
/// stored record.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    pub office_name: String,
    pub office_county: String,
    pub office_state: UsState,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub software_cama: String,
    pub software_imagery: String,
    pub website_provider: String,
    pub other_providers: String,
    pub other_issues: String,
    pub uploads: Vec<UploadedFile>,
}

impl FormInput {
    pub fn upload_names(&self) -> Vec<&str> {
        self.uploads.iter().map(|file| file.name.as_str()).collect()
    }
}

mod document;
mod form;
mod submission;
mod table;
mod us_state;

pub use document::{ContentType, Document};
pub use form::{FormInput, UploadedFile};
pub use submission::{SubmissionRecord, VendorCategoryMap};
pub use table::SubmissionTable;
pub use us_state::{US_STATES, UsState};

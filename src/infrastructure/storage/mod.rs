mod csv_submission_store;

pub use csv_submission_store::CsvSubmissionStore;

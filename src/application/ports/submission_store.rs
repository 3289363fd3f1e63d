use async_trait::async_trait;

use crate::domain::SubmissionRecord;

/// Persists submission records as rows of a single table, reconciling the
/// column set on every append.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn append(&self, record: &SubmissionRecord) -> Result<(), SubmissionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionStoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("table: {0}")]
    Table(#[from] csv::Error),
    #[error("task failed: {0}")]
    TaskFailed(String),
}

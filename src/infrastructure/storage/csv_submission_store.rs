use std::fs::File;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{SubmissionStore, SubmissionStoreError};
use crate::domain::{SubmissionRecord, SubmissionTable};

/// CSV-backed submission table.
///
/// Every append reads the whole file, reconciles the column set with the
/// incoming record, appends the row at the tail and rewrites the file. An
/// in-process mutex serializes appends; concurrent writers from other
/// processes are not coordinated.
pub struct CsvSubmissionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvSubmissionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full table back; an absent file is an empty table.
    pub async fn load(&self) -> Result<SubmissionTable, SubmissionStoreError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || {
            if path.exists() {
                read_table(&path)
            } else {
                Ok(SubmissionTable::new())
            }
        })
        .await
        .map_err(|e| SubmissionStoreError::TaskFailed(e.to_string()))?
    }
}

#[async_trait]
impl SubmissionStore for CsvSubmissionStore {
    #[tracing::instrument(skip(self, record), fields(path = %self.path.display()))]
    async fn append(&self, record: &SubmissionRecord) -> Result<(), SubmissionStoreError> {
        let _guard = self.write_lock.lock().await;

        let path = self.path.clone();
        let record = record.clone();
        tokio::task::spawn_blocking(move || append_blocking(&path, &record))
            .await
            .map_err(|e| SubmissionStoreError::TaskFailed(e.to_string()))??;

        tracing::info!("Submission row appended");
        Ok(())
    }
}

fn append_blocking(path: &Path, record: &SubmissionRecord) -> Result<(), SubmissionStoreError> {
    let mut table = if path.exists() {
        read_table(path)?
    } else {
        SubmissionTable::new()
    };

    table.append(record);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    write_table(path, &table)
}

fn read_table(path: &Path) -> Result<SubmissionTable, SubmissionStoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(File::open(path)?);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(SubmissionTable::from_parts(columns, rows))
}

fn write_table(path: &Path, table: &SubmissionTable) -> Result<(), SubmissionStoreError> {
    let mut writer = csv::Writer::from_writer(File::create(path)?);

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush().map_err(SubmissionStoreError::Io)?;

    Ok(())
}

use super::submission::SubmissionRecord;

/// A rectangular, append-only table of submissions.
///
/// Columns are discovered at append time: the column list is the union of
/// every column ever appended, in first-seen order. Every row carries a value
/// (possibly empty) for every column, including columns introduced by later
/// submissions. Rows are never reordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SubmissionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a table from persisted parts. Rows shorter than the header
    /// are padded with empty values; excess trailing values are dropped.
    pub fn from_parts(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Appends one record, reconciling its column set with the table's.
    ///
    /// Columns the table has not seen before are added at the tail of the
    /// header and backfilled with empty values in every existing row; columns
    /// the record lacks come out empty in the new row.
    pub fn append(&mut self, record: &SubmissionRecord) {
        for column in record.columns() {
            if !self.columns.iter().any(|existing| existing == column) {
                self.columns.push(column.to_string());
                for row in &mut self.rows {
                    row.push(String::new());
                }
            }
        }

        let row = self
            .columns
            .iter()
            .map(|column| record.get(column).unwrap_or_default().to_string())
            .collect();
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

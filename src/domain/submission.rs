use indexmap::IndexMap;
use serde::Serialize;

/// Category label -> vendor names, as produced by the categorizer for one
/// submission. The label set is open: the model may invent categories.
pub type VendorCategoryMap = IndexMap<String, Vec<String>>;

/// One flat submission row: field name -> scalar value, in insertion order.
///
/// Values are always plain strings; list-valued inputs are joined with ", "
/// before they reach the record. Field names are unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubmissionRecord {
    fields: IndexMap<String, String>,
}

impl SubmissionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, replacing any previous value under the same name.
    /// Callers that must not overwrite check [`contains`](Self::contains)
    /// first.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubmissionRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

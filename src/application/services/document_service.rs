use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::domain::{ContentType, Document, UploadedFile};

/// Extracts and concatenates text from a submission's uploads.
///
/// Nothing here fails the submission: unsupported formats and broken files
/// of a supported format both degrade to placeholder strings that flow into
/// the downstream prompts as-is.
pub struct DocumentService<F: FileLoader> {
    loader: Arc<F>,
}

impl<F: FileLoader> DocumentService<F> {
    pub fn new(loader: Arc<F>) -> Self {
        Self { loader }
    }

    pub async fn extract_combined_text(&self, uploads: &[UploadedFile]) -> String {
        let mut combined = String::new();

        for upload in uploads {
            combined.push_str(&format!("\n\n--- Content from {} ---\n", upload.name));
            combined.push_str(&self.extract_one(upload).await);
        }

        combined
    }

    async fn extract_one(&self, upload: &UploadedFile) -> String {
        let Some(content_type) = ContentType::from_filename(&upload.name) else {
            return format!("[Unsupported file type: {}]", upload.name);
        };

        let document = Document::new(upload.name.clone(), content_type);
        match self.loader.extract_text(&upload.data, &document).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(filename = %upload.name, error = %e, "Document extraction failed");
                format!("[Could not extract text from {}]", upload.name)
            }
        }
    }
}

use std::path::Path;

/// An uploaded contract document, as received from the form surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub filename: String,
    pub content_type: ContentType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Docx,
}

impl ContentType {
    /// Dispatch on the file name's extension, case-insensitive.
    /// Returns `None` for anything that is not one of the two supported
    /// document formats; callers degrade those to a placeholder string.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_ascii_lowercase();

        match extension.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl Document {
    pub fn new(filename: String, content_type: ContentType) -> Self {
        Self {
            filename,
            content_type,
        }
    }
}

use std::io::Cursor;
use std::sync::Arc;

use docx_rs::{Docx, Paragraph, Run};

use intake::application::ports::{FileLoader, FileLoaderError, RoadmapRenderer};
use intake::application::services::DocumentService;
use intake::domain::{ContentType, Document, UploadedFile};
use intake::infrastructure::reporting::LopdfRoadmapRenderer;
use intake::infrastructure::text_processing::{CompositeFileLoader, DocxAdapter, PdfAdapter};

fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let mut docx = Docx::new();
    for text in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
    }
    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).unwrap();
    buffer.into_inner()
}

#[test]
fn given_filename_when_dispatching_then_extension_decides_content_type() {
    assert_eq!(
        ContentType::from_filename("contract.pdf"),
        Some(ContentType::Pdf)
    );
    assert_eq!(
        ContentType::from_filename("NOTES.DOCX"),
        Some(ContentType::Docx)
    );
    assert_eq!(ContentType::from_filename("scan.tiff"), None);
    assert_eq!(ContentType::from_filename("no_extension"), None);
}

#[tokio::test]
async fn given_docx_bytes_when_extracting_then_paragraphs_are_newline_joined() {
    let adapter = DocxAdapter::new();
    let data = docx_bytes(&["First paragraph", "Second paragraph"]);
    let document = Document::new("notes.docx".to_string(), ContentType::Docx);

    let text = adapter.extract_text(&data, &document).await.unwrap();

    assert!(text.contains("First paragraph"));
    assert!(text.contains("Second paragraph"));
    assert!(text.contains('\n'));
}

#[tokio::test]
async fn given_corrupt_docx_when_extracting_then_extraction_failed() {
    let adapter = DocxAdapter::new();
    let garbage = b"not a docx";
    let document = Document::new("broken.docx".to_string(), ContentType::Docx);

    let result = adapter.extract_text(garbage, &document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_rendered_pdf_when_extracting_then_text_round_trips() {
    let pdf = LopdfRoadmapRenderer::new()
        .render("Technology roadmap for Travis County appraisal office")
        .unwrap();

    let adapter = PdfAdapter::new();
    let document = Document::new("roadmap.pdf".to_string(), ContentType::Pdf);
    let text = adapter.extract_text(&pdf, &document).await.unwrap();

    assert!(text.contains("Travis County"));
}

#[tokio::test]
async fn given_corrupt_pdf_when_extracting_then_extraction_failed() {
    let adapter = PdfAdapter::new();
    let garbage = b"not a pdf at all";
    let document = Document::new("corrupt.pdf".to_string(), ContentType::Pdf);

    let result = adapter.extract_text(garbage, &document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_mismatched_content_type_when_extracting_then_unsupported() {
    let adapter = PdfAdapter::new();
    let data = docx_bytes(&["whatever"]);
    let document = Document::new("notes.docx".to_string(), ContentType::Docx);

    let result = adapter.extract_text(&data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}

#[tokio::test]
async fn given_unsupported_extension_when_extracting_then_placeholder_names_the_file() {
    let service = DocumentService::new(Arc::new(CompositeFileLoader::with_default_adapters()));
    let uploads = vec![UploadedFile {
        name: "scan.tiff".to_string(),
        data: vec![0u8; 16],
    }];

    let text = service.extract_combined_text(&uploads).await;

    assert!(text.contains("[Unsupported file type: scan.tiff]"));
    assert!(text.contains("--- Content from scan.tiff ---"));
}

#[tokio::test]
async fn given_broken_supported_file_when_extracting_then_placeholder_instead_of_error() {
    let service = DocumentService::new(Arc::new(CompositeFileLoader::with_default_adapters()));
    let uploads = vec![UploadedFile {
        name: "broken.pdf".to_string(),
        data: b"garbage".to_vec(),
    }];

    let text = service.extract_combined_text(&uploads).await;

    assert!(text.contains("[Could not extract text from broken.pdf]"));
}

#[tokio::test]
async fn given_no_uploads_when_extracting_then_combined_text_is_empty() {
    let service = DocumentService::new(Arc::new(CompositeFileLoader::with_default_adapters()));

    let text = service.extract_combined_text(&[]).await;

    assert!(text.is_empty());
}

#[tokio::test]
async fn given_mixed_uploads_when_extracting_then_each_file_is_labelled() {
    let service = DocumentService::new(Arc::new(CompositeFileLoader::with_default_adapters()));
    let uploads = vec![
        UploadedFile {
            name: "contract.docx".to_string(),
            data: docx_bytes(&["Renewal date: 2027-01-01"]),
        },
        UploadedFile {
            name: "photo.png".to_string(),
            data: vec![1, 2, 3],
        },
    ];

    let text = service.extract_combined_text(&uploads).await;

    assert!(text.contains("--- Content from contract.docx ---"));
    assert!(text.contains("Renewal date: 2027-01-01"));
    assert!(text.contains("[Unsupported file type: photo.png]"));
}

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::application::ports::{RenderError, RoadmapRenderer};

// US Letter, 1in margins, Helvetica 11pt.
const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN: i64 = 72;
const FONT_SIZE: i64 = 11;
const LINE_HEIGHT: i64 = 14;
const MAX_CHARS_PER_LINE: usize = 92;
const LINES_PER_PAGE: usize = ((PAGE_HEIGHT - 2 * MARGIN) / LINE_HEIGHT) as usize;

/// Renders plain prose into a paginated PDF: fixed font and margins, long
/// lines wrapped at word boundaries, page breaks inserted automatically.
#[derive(Default)]
pub struct LopdfRoadmapRenderer;

impl LopdfRoadmapRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl RoadmapRenderer for LopdfRoadmapRenderer {
    fn render(&self, text: &str) -> Result<Vec<u8>, RenderError> {
        let lines = wrap_lines(text, MAX_CHARS_PER_LINE);
        let empty_page: &[String] = &[];
        let pages: Vec<&[String]> = if lines.is_empty() {
            vec![empty_page]
        } else {
            lines.chunks(LINES_PER_PAGE).collect()
        };

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for page_lines in &pages {
            let mut operations = vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
                Operation::new("TL", vec![LINE_HEIGHT.into()]),
                Operation::new("Td", vec![MARGIN.into(), (PAGE_HEIGHT - MARGIN).into()]),
            ];
            for line in *page_lines {
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(line.as_str())],
                ));
                operations.push(Operation::new("T*", vec![]));
            }
            operations.push(Operation::new("ET", vec![]));

            let content = Content { operations };
            let encoded = content
                .encode()
                .map_err(|e| RenderError::RenderFailed(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| RenderError::RenderFailed(e.to_string()))?;

        Ok(buffer)
    }
}

/// Word-wraps prose to `max_chars` columns, preserving paragraph breaks.
/// Words longer than a full line are split hard.
fn wrap_lines(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        let trimmed = raw_line.trim_end();
        if trimmed.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in trimmed.split_whitespace() {
            let mut word = word;
            while word.chars().count() > max_chars {
                let split_at = word
                    .char_indices()
                    .nth(max_chars)
                    .map(|(i, _)| i)
                    .unwrap_or(word.len());
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                lines.push(word[..split_at].to_string());
                word = &word[split_at..];
            }

            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > max_chars && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

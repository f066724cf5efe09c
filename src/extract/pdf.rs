//! PDF content extraction
//!
//! Extracts per-page text in page order and the document-info metadata
//! (title, author, and friends) from a PDF byte buffer.

use crate::extract::{clean_text, ExtractError};
use lopdf::{Document, Object};
use std::collections::BTreeMap;

/// Info-dictionary keys captured into record metadata
const INFO_KEYS: &[(&[u8], &str)] = &[
    (b"Title", "title"),
    (b"Author", "author"),
    (b"Subject", "subject"),
    (b"Creator", "creator"),
    (b"Producer", "producer"),
];

/// Extracted fields of one PDF document
#[derive(Debug, Clone)]
pub struct PdfContent {
    /// Cleaned text of all pages, in page order
    pub content: String,

    /// Document-info metadata; absent fields are omitted
    pub metadata: BTreeMap<String, String>,
}

/// Extracts text and metadata from a PDF byte buffer
///
/// Page texts are concatenated in page order, joined by newlines, then
/// cleaned. A buffer that does not parse as a PDF is an [`ExtractError`];
/// a single page whose text cannot be decoded is skipped with a debug log
/// rather than failing the whole document.
pub fn extract_pdf(bytes: &[u8]) -> Result<PdfContent, ExtractError> {
    let doc = Document::load_mem(bytes)?;

    let pages = doc.get_pages();
    let mut page_texts = Vec::with_capacity(pages.len());
    for &number in pages.keys() {
        match doc.extract_text(&[number]) {
            Ok(text) => page_texts.push(text),
            Err(e) => {
                tracing::debug!("failed to extract text from page {}: {}", number, e);
            }
        }
    }

    let content = clean_text(&page_texts.join("\n"));
    let metadata = extract_metadata(&doc);

    Ok(PdfContent { content, metadata })
}

/// Reads the document-info dictionary, best-effort
fn extract_metadata(doc: &Document) -> BTreeMap<String, String> {
    let mut metadata = BTreeMap::new();

    let info = doc
        .trailer
        .get(b"Info")
        .ok()
        .and_then(|obj| match obj {
            Object::Reference(id) => doc.get_object(*id).ok(),
            other => Some(other),
        })
        .and_then(|obj| obj.as_dict().ok());

    if let Some(dict) = info {
        for &(key, label) in INFO_KEYS {
            if let Ok(Object::String(raw, _)) = dict.get(key) {
                let value = String::from_utf8_lossy(raw).trim().to_string();
                if !value.is_empty() {
                    metadata.insert(label.to_string(), value);
                }
            }
        }
    }

    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Stream};

    /// Builds a minimal one-page PDF containing the given text
    fn pdf_with_text(text: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_extract_simple_pdf() {
        let bytes = pdf_with_text("Hello PDF");
        let pdf = extract_pdf(&bytes).unwrap();
        assert!(pdf.content.contains("Hello PDF"), "got: {}", pdf.content);
    }

    #[test]
    fn test_metadata_absent_when_no_info_dict() {
        let bytes = pdf_with_text("x");
        let pdf = extract_pdf(&bytes).unwrap();
        assert!(pdf.metadata.is_empty());
    }

    #[test]
    fn test_garbage_bytes_fail() {
        let result = extract_pdf(b"definitely not a pdf");
        assert!(matches!(result.unwrap_err(), ExtractError::Pdf(_)));
    }

    #[test]
    fn test_empty_buffer_fails() {
        assert!(extract_pdf(b"").is_err());
    }

    #[test]
    fn test_truncated_pdf_fails() {
        let mut bytes = pdf_with_text("Hello");
        bytes.truncate(40);
        assert!(extract_pdf(&bytes).is_err());
    }
}

//! PDF to plain text.

use lopdf::Document;

use super::{ExtractedText, RawDocument};
use crate::{Error, Result, TRACING_TARGET_EXTRACT};

/// Extracts the text of every page of `document`.
///
/// Fails with [`ErrorKind::Parse`] when the bytes are not a loadable PDF. A
/// page whose content cannot be decoded contributes an empty segment instead of
/// failing the whole document.
///
/// [`ErrorKind::Parse`]: crate::ErrorKind::Parse
pub fn extract_text(document: &RawDocument) -> Result<ExtractedText> {
    if document.is_empty() {
        return Err(Error::parse().with_message("uploaded document is empty"));
    }

    let pdf = Document::load_mem(document.as_bytes()).map_err(|err| {
        tracing::warn!(
            target: TRACING_TARGET_EXTRACT,
            error = %err,
            file_name = document.file_name(),
            size = document.len(),
            "failed to load pdf"
        );
        Error::parse()
            .with_message("uploaded file is not a readable PDF")
            .with_source(err)
    })?;

    let page_numbers: Vec<u32> = pdf.get_pages().into_keys().collect();
    let pages = page_numbers.iter().map(|&page_number| {
        pdf.extract_text(&[page_number]).unwrap_or_else(|err| {
            tracing::debug!(
                target: TRACING_TARGET_EXTRACT,
                page_number,
                error = %err,
                "page has no extractable text"
            );
            String::new()
        })
    });

    let text = ExtractedText::from_pages(pages);

    tracing::debug!(
        target: TRACING_TARGET_EXTRACT,
        file_name = document.file_name(),
        page_count = text.page_count(),
        char_count = text.char_count(),
        "extracted pdf text"
    );

    Ok(text)
}

#[cfg(test)]
pub(crate) mod tests {
    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};

    use super::*;
    use crate::ErrorKind;

    /// Builds an in-memory PDF with one page per entry; `None` is a blank page.
    pub(crate) fn pdf_with_pages(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page in pages {
            let operations = match page {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("content encodes"),
            ));
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
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).expect("pdf saves");
        buffer
    }

    #[test]
    fn extracts_pages_in_order() {
        let bytes = pdf_with_pages(&[Some("Reading comprehension"), Some("Listening section")]);
        let text = extract_text(&RawDocument::new(bytes)).unwrap();

        assert_eq!(text.page_count(), 2);
        let first = text.as_str().find("Reading").unwrap();
        let second = text.as_str().find("Listening").unwrap();
        assert!(first < second);
    }

    #[test]
    fn blank_pages_contribute_empty_segments() {
        let bytes = pdf_with_pages(&[Some("Alpha"), None, Some("Omega")]);
        let text = extract_text(&RawDocument::new(bytes)).unwrap();

        assert_eq!(text.page_count(), 3);
        let segments: Vec<&str> = text.as_str().split('\n').collect();
        assert!(segments[0].contains("Alpha"));
        assert!(segments.last().unwrap().contains("Omega"));
        assert!(segments.iter().any(|segment| segment.trim().is_empty()));
    }

    #[test]
    fn rejects_non_pdf_bytes() {
        let doc = RawDocument::new(b"definitely not a pdf".to_vec()).with_file_name("notes.txt");
        let err = extract_text(&doc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn rejects_empty_upload() {
        let err = extract_text(&RawDocument::new(Vec::new())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}

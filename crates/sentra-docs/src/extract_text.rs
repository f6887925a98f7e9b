//! Upload validation and text extraction.
//!
//! The engine consumes a flat text string; this module is the boundary
//! that turns an uploaded file into one. Uploads are validated by
//! declared MIME type or extension, then decoded as UTF-8 (lossily).
//! Binary formats that yield no readable text fall below the length
//! floor and are rejected as unreadable.

use crate::analyzer::DocsError;

/// Declared MIME types accepted for analysis.
const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/msword",
    "text/plain",
];

/// Accepted file extensions (lower-cased comparison).
const ALLOWED_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx", ".txt"];

/// An uploaded document before extraction.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    pub file_name: String,
    /// Declared MIME type, if the transport provided one
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl DocumentSource {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type,
            bytes,
        }
    }
}

/// Validating text extractor with a minimum-content floor.
#[derive(Debug, Clone)]
pub struct TextExtractor {
    min_text_chars: usize,
}

impl TextExtractor {
    pub fn new(min_text_chars: usize) -> Self {
        Self { min_text_chars }
    }

    /// Validate the source and produce its text.
    pub fn extract(&self, source: &DocumentSource) -> Result<String, DocsError> {
        if !is_allowed_type(source) {
            return Err(DocsError::UnsupportedType);
        }

        let text = String::from_utf8_lossy(&source.bytes).into_owned();

        if text.trim().len() < self.min_text_chars {
            return Err(DocsError::UnreadableDocument);
        }

        Ok(text)
    }
}

/// A source passes if either its declared MIME type or its extension is
/// in the allowed set.
fn is_allowed_type(source: &DocumentSource) -> bool {
    if let Some(mime) = &source.mime_type {
        if ALLOWED_MIME_TYPES.contains(&mime.as_str()) {
            return true;
        }
    }

    let lowered = source.file_name.to_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txt_source(name: &str, body: &str) -> DocumentSource {
        DocumentSource::new(name, Some("text/plain".to_string()), body.as_bytes().to_vec())
    }

    #[test]
    fn test_plain_text_extracts() {
        let extractor = TextExtractor::new(50);
        let body = "This agreement sets out the liability of each party in detail.";
        let text = extractor.extract(&txt_source("contract.txt", body)).unwrap();
        assert_eq!(text, body);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let extractor = TextExtractor::new(50);
        let source = DocumentSource::new(
            "picture.png",
            Some("image/png".to_string()),
            vec![0u8; 200],
        );
        assert!(matches!(
            extractor.extract(&source),
            Err(DocsError::UnsupportedType)
        ));
    }

    #[test]
    fn test_extension_rescues_missing_mime() {
        let extractor = TextExtractor::new(10);
        let source = DocumentSource::new(
            "Contract.TXT",
            None,
            b"agreement text long enough".to_vec(),
        );
        assert!(extractor.extract(&source).is_ok());
    }

    #[test]
    fn test_short_text_is_unreadable() {
        let extractor = TextExtractor::new(50);
        let source = txt_source("contract.txt", "too short");
        assert!(matches!(
            extractor.extract(&source),
            Err(DocsError::UnreadableDocument)
        ));
    }

    #[test]
    fn test_whitespace_does_not_count_toward_floor() {
        let extractor = TextExtractor::new(50);
        let padded = format!("tiny{}", " ".repeat(100));
        let source = txt_source("contract.txt", &padded);
        assert!(matches!(
            extractor.extract(&source),
            Err(DocsError::UnreadableDocument)
        ));
    }
}

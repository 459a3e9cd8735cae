//! Document text extraction: closed-set format dispatch over the uploaded
//! file name, one reader per format.

pub mod docx;
pub mod pdf;

use thiserror::Error;

/// Extraction failures. `Unsupported` is surfaced to the client; the parse
/// variants are recovered at the handler boundary by substituting empty text
/// so one bad file never aborts a batch.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    Unsupported(String),

    #[error("Malformed PDF: {0}")]
    Pdf(String),

    #[error("Malformed DOCX: {0}")]
    Docx(String),
}

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
}

impl FileKind {
    /// Resolves the declared format from the uploaded file name's extension
    /// (case-insensitive). Anything else is an explicit error, not a
    /// fallthrough.
    pub fn from_file_name(name: &str) -> Result<Self, ExtractError> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            Ok(FileKind::Pdf)
        } else if lower.ends_with(".docx") {
            Ok(FileKind::Docx)
        } else {
            Err(ExtractError::Unsupported(name.to_string()))
        }
    }
}

/// Extracts plain text from a document of the given kind.
pub fn extract_text(kind: FileKind, bytes: &[u8]) -> Result<String, ExtractError> {
    match kind {
        FileKind::Pdf => pdf::extract(bytes),
        FileKind::Docx => docx::extract(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_pdf_extension() {
        assert_eq!(FileKind::from_file_name("resume.pdf").unwrap(), FileKind::Pdf);
        assert_eq!(FileKind::from_file_name("RESUME.PDF").unwrap(), FileKind::Pdf);
    }

    #[test]
    fn test_kind_from_docx_extension() {
        assert_eq!(FileKind::from_file_name("resume.docx").unwrap(), FileKind::Docx);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        assert!(matches!(
            FileKind::from_file_name("resume.txt"),
            Err(ExtractError::Unsupported(_))
        ));
        assert!(matches!(
            FileKind::from_file_name("resume"),
            Err(ExtractError::Unsupported(_))
        ));
        // .doc is the legacy binary format, not WordprocessingML
        assert!(matches!(
            FileKind::from_file_name("resume.doc"),
            Err(ExtractError::Unsupported(_))
        ));
    }

    #[test]
    fn test_corrupt_pdf_is_a_recoverable_error() {
        assert!(matches!(
            extract_text(FileKind::Pdf, b"not a pdf"),
            Err(ExtractError::Pdf(_))
        ));
    }

    #[test]
    fn test_corrupt_docx_is_a_recoverable_error() {
        assert!(matches!(
            extract_text(FileKind::Docx, b"not a zip container"),
            Err(ExtractError::Docx(_))
        ));
    }
}

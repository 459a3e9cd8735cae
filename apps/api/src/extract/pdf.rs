//! PDF text extraction via `pdf-extract`.

use super::ExtractError;

/// Extracts the plain text of a PDF held in memory.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(extract(b"").is_err());
    }

    #[test]
    fn test_garbage_input_is_an_error() {
        assert!(extract(b"%PDF-1.7 truncated garbage").is_err());
    }
}

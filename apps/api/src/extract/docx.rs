//! DOCX text extraction.
//!
//! A .docx file is a ZIP container; the document body lives in
//! `word/document.xml` as WordprocessingML. Text content sits in `w:t` runs,
//! grouped into `w:p` paragraphs.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ExtractError;

/// Extracts the plain text of a DOCX held in memory, one line per paragraph.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::Docx(e.to_string()))?;
    let mut entry = archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Docx(e.to_string()))?;
    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;
    read_document_text(&xml)
}

/// Collects `w:t` text runs from a WordprocessingML body.
fn read_document_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                let run = e.unescape().map_err(|err| ExtractError::Docx(err.to_string()))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(ExtractError::Docx(err.to_string())),
        }
        buf.clear();
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Experienced Python developer</w:t></w:r></w:p>
    <w:p><w:r><w:t>Built &amp; shipped data pipelines</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extracts_paragraph_text() {
        let text = extract(&docx_bytes(DOCUMENT_XML)).unwrap();
        assert_eq!(text, "Experienced Python developer\nBuilt & shipped data pipelines\n");
    }

    #[test]
    fn test_read_document_text_ignores_non_text_nodes() {
        let xml = r#"<w:document xmlns:w="x"><w:body>
            <w:p><w:pPr><w:jc val="center"/></w:pPr><w:r><w:t>Hello</w:t></w:r></w:p>
        </w:body></w:document>"#;
        assert_eq!(read_document_text(xml).unwrap(), "Hello\n");
    }

    #[test]
    fn test_multiple_runs_in_one_paragraph_concatenate() {
        let xml = r#"<d><w:p><w:r><w:t>Rust </w:t></w:r><w:r><w:t>engineer</w:t></w:r></w:p></d>"#;
        assert_eq!(read_document_text(xml).unwrap(), "Rust engineer\n");
    }

    #[test]
    fn test_container_without_document_xml_is_an_error() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        assert!(matches!(extract(&bytes), Err(ExtractError::Docx(_))));
    }

    #[test]
    fn test_non_zip_bytes_are_an_error() {
        assert!(matches!(extract(b"plain text"), Err(ExtractError::Docx(_))));
    }
}

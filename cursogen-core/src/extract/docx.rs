//! DOCX text extraction
//!
//! Opens the ZIP container, reads `word/document.xml`, and concatenates
//! the text runs of each paragraph, one paragraph per line. Headers,
//! footers, and table layout are not preserved.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::warn;

pub fn extract(bytes: &[u8]) -> String {
    let xml = match document_xml(bytes) {
        Ok(xml) => xml,
        Err(e) => {
            warn!("DOCX container could not be read, continuing with empty text: {}", e);
            return String::new();
        }
    };
    paragraphs(&xml).join("\n")
}

fn document_xml(bytes: &[u8]) -> anyhow::Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut file = archive.by_name("word/document.xml")?;
    let mut xml = String::new();
    file.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Collect paragraph texts in document order. A `w:p` element becomes one
/// entry; its `w:t` runs are concatenated without separators.
fn paragraphs(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut result = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => current.clear(),
                b"w:t" => in_text_run = true,
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                current.push_str(&e.unescape().unwrap_or_default());
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => result.push(std::mem::take(&mut current)),
                b"w:t" => in_text_run = false,
                _ => {}
            },
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:p" => {
                result.push(String::new());
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                warn!("DOCX document.xml parse ended early: {}", e);
                break;
            }
            _ => {}
        }
    }

    result
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    /// Build an in-memory DOCX containing one paragraph per entry
    pub(crate) fn minimal_docx(lines: &[&str]) -> Vec<u8> {
        let mut body = String::new();
        for line in lines {
            let escaped = line.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;");
            body.push_str("<w:p><w:r><w:t>");
            body.push_str(&escaped);
            body.push_str("</w:t></w:r></w:p>");
        }
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{body}</w:body></w:document>"
        );

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file("word/document.xml", SimpleFileOptions::default()).unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_one_per_line() {
        let bytes = minimal_docx(&["first line", "second line"]);
        assert_eq!(extract(&bytes), "first line\nsecond line");
    }

    #[test]
    fn test_split_runs_are_joined() {
        let xml = "<w:document><w:body>\
                   <w:p><w:r><w:t>Intro to </w:t></w:r><w:r><w:t>Testing</w:t></w:r></w:p>\
                   </w:body></w:document>";
        assert_eq!(paragraphs(xml), vec!["Intro to Testing"]);
    }

    #[test]
    fn test_empty_paragraph_keeps_its_line() {
        let xml = "<w:document><w:body>\
                   <w:p><w:r><w:t>a</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>b</w:t></w:r></w:p>\
                   </w:body></w:document>";
        assert_eq!(paragraphs(xml), vec!["a", "", "b"]);
    }

    #[test]
    fn test_entities_are_unescaped() {
        let bytes = minimal_docx(&["P&D em Computação"]);
        assert_eq!(extract(&bytes), "P&D em Computação");
    }

    #[test]
    fn test_archive_without_document_xml_degrades() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file("unrelated.txt", SimpleFileOptions::default()).unwrap();
        writer.write_all(b"nothing").unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        assert_eq!(extract(&bytes), "");
    }
}

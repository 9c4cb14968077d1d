//! Document text extraction for uploaded course files
//!
//! Converts a raw uploaded document into plain UTF-8 text, best-effort.
//! Malformed but recognized content degrades to whatever text could be
//! recovered; only an unsupported file type is surfaced as an error.

mod docx;
#[cfg(feature = "ocr")]
mod image;
mod pdf;

use std::path::Path;

use thiserror::Error;

#[cfg(test)]
pub(crate) use docx::tests::minimal_docx;

/// Declared format of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Image,
}

impl DocumentKind {
    /// Infer the kind from a filename extension, case-insensitive.
    /// `.doc` routes through the DOCX handler.
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .ok_or_else(|| ExtractError::unsupported(filename))?;

        match extension.as_str() {
            "pdf" => Ok(Self::Pdf),
            "doc" | "docx" => Ok(Self::Docx),
            "png" | "jpg" | "jpeg" => Ok(Self::Image),
            _ => Err(ExtractError::unsupported(filename)),
        }
    }
}

/// Errors raised by the extraction boundary
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The declared file type is not one this system accepts
    #[error("Tipo de arquivo não suportado: {detail}")]
    UnsupportedFileType { detail: String },
}

impl ExtractError {
    pub fn unsupported(detail: impl Into<String>) -> Self {
        Self::UnsupportedFileType { detail: detail.into() }
    }
}

/// Extract UTF-8 text from a document of the given kind.
///
/// Pure over the byte slice: no filesystem access, no network, and
/// identical input always yields identical text.
pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::Pdf => Ok(pdf::extract(bytes)),
        DocumentKind::Docx => Ok(docx::extract(bytes)),
        #[cfg(feature = "ocr")]
        DocumentKind::Image => Ok(image::extract(bytes)),
        #[cfg(not(feature = "ocr"))]
        DocumentKind::Image => Err(ExtractError::unsupported(
            "imagens requerem suporte a OCR (recurso 'ocr')",
        )),
    }
}

/// Convenience for the upload boundary: infer the kind from the filename,
/// then extract.
pub fn extract_text_from_upload(filename: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let kind = DocumentKind::from_filename(filename)?;
    extract_text(bytes, kind)
}

//! PDF text extraction

use tracing::warn;

/// Extract all textual content in document order; columns and layout are
/// flattened to a linear stream.
pub fn extract(bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("PDF text extraction failed, continuing with empty text: {}", e);
            String::new()
        }
    }
}

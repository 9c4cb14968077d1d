//! Image OCR extraction, compiled in with the `ocr` feature

use tesseract_rs::TesseractAPI;
use tracing::warn;

/// Language pack used for recognition; course documents are Portuguese
const OCR_LANGUAGE: &str = "por";

/// Run OCR over a raster image. Accuracy is best-effort and never
/// validated downstream.
pub fn extract(bytes: &[u8]) -> String {
    match recognize(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("image OCR failed, continuing with empty text: {}", e);
            String::new()
        }
    }
}

fn recognize(bytes: &[u8]) -> anyhow::Result<String> {
    let img = image::load_from_memory(bytes)?.to_rgb8();
    let (width, height) = img.dimensions();

    let api = TesseractAPI::new();
    let datapath = std::env::var("TESSDATA_PREFIX").unwrap_or_default();
    api.init(&datapath, OCR_LANGUAGE)?;
    api.set_image(img.as_raw(), width as i32, height as i32, 3, 3 * width as i32)?;

    Ok(api.get_utf8_text()?)
}

//! Canvas export as a downloadable data URI.
//!
//! Pixels are encoded losslessly as PNG, but the URI declares a generic binary
//! MIME type so consumers treat it as a file to save rather than an image to
//! render inline.

use crate::error::{CropperError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

pub const PNG_MIME: &str = "image/png";
pub const DOWNLOAD_MIME: &str = "application/octet-stream";

/// Encode pixels as `data:application/octet-stream;base64,<png>`.
pub fn export_data_uri(pixels: &RgbaImage) -> Result<String> {
    let png = encode_png(pixels)?;
    let uri = format!("data:{};base64,{}", PNG_MIME, STANDARD.encode(&png));
    Ok(relabel_mime(&uri))
}

/// Decode the payload of a base64 data URI, whatever its declared MIME type.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| CropperError::InvalidDataUri("missing 'data:' scheme".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| CropperError::InvalidDataUri("missing ',' separator".to_string()))?;
    if !header.ends_with(";base64") {
        return Err(CropperError::InvalidDataUri(format!(
            "expected base64 payload, got header '{}'",
            header
        )));
    }
    Ok(STANDARD.decode(payload)?)
}

fn encode_png(pixels: &RgbaImage) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        pixels.as_raw(),
        pixels.width(),
        pixels.height(),
        ExtendedColorType::Rgba8,
    )?;
    log::debug!(
        "Encoded {}x{} export as {} PNG bytes",
        pixels.width(),
        pixels.height(),
        png.len()
    );
    Ok(png)
}

fn relabel_mime(uri: &str) -> String {
    uri.replacen(PNG_MIME, DOWNLOAD_MIME, 1)
}

//! QR code image decoding.

use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use image::ImageFormat;

use crate::error::PassError;

/// Decode the base64 payload of a `data:` URI.
///
/// Both the standard and the URL-safe alphabet are accepted, padding and
/// whitespace are ignored.
pub fn decode_base64(data: &str) -> Result<Vec<u8>, PassError> {
    let normalized: String = data
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && *c != '=')
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();

    Ok(STANDARD_NO_PAD.decode(normalized)?)
}

/// Decode a PNG and read the first QR code in it.
pub fn decode_qr_png(png: &[u8]) -> Result<String, PassError> {
    let image = image::load_from_memory_with_format(png, ImageFormat::Png)?.to_luma8();
    let (width, height) = image.dimensions();
    tracing::debug!(width, height, "decoded QR code image");

    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(width as usize, height as usize, |x, y| {
            image.get_pixel(x as u32, y as u32).0[0]
        });

    let grids = prepared.detect_grids();
    let grid = grids
        .first()
        .ok_or_else(|| PassError::QrDecode("no QR code in image".to_string()))?;

    let (_meta, content) = grid
        .decode()
        .map_err(|e| PassError::QrDecode(format!("{e:?}")))?;

    Ok(content)
}

//! Image payload encoding: raster content to a transmissible PNG form.
//!
//! The encoder is a deterministic function of the raster pixels. It embeds
//! no timestamps or other per-run data, so byte-identical raster input
//! always yields a byte-identical payload. The blank sentinel travels with
//! the payload so callers can refuse to submit an empty drawing.

#[cfg(test)]
#[path = "encode_test.rs"]
mod encode_test;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};
use serde::{Deserialize, Serialize};

use crate::raster::Raster;

/// MIME type of every payload produced by this encoder.
pub const PNG_MIME: &str = "image/png";

/// Canonical, retransmittable serialization of the surface's raster content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedImage {
    /// MIME type of the encoded bytes.
    pub mime: String,
    /// Base64-encoded image bytes (standard alphabet, padded).
    pub base64: String,
    /// True when the source raster contained no ink.
    pub blank: bool,
}

impl EncodedImage {
    /// Wire form of the payload: `data:<mime>;base64,<payload>`.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

/// Encode a raster as a base64 PNG payload.
///
/// # Errors
///
/// Returns `Err` if PNG encoding fails (e.g. a zero-sized raster).
pub fn encode(raster: &Raster) -> Result<EncodedImage, ImageError> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        raster.pixels(),
        raster.width(),
        raster.height(),
        ExtendedColorType::L8,
    )?;
    Ok(EncodedImage {
        mime: PNG_MIME.to_owned(),
        base64: BASE64.encode(&png),
        blank: raster.is_blank(),
    })
}

//! Preview encoders for palette images.
//!
//! Both encoders embed the palette, so every pixel of the written file is
//! exactly one of the palette colors.

pub mod bitmap;
pub mod png;

pub use self::bitmap::encode_bmp;
pub use self::png::encode_png;

use crate::models::PreviewFormat;
use epa_dither::PaletteImage;

/// Encode `image` in the given preview format.
pub fn encode_preview(
    image: &PaletteImage,
    format: PreviewFormat,
) -> Result<Vec<u8>, crate::error::ConvertError> {
    match format {
        PreviewFormat::Bmp => encode_bmp(image),
        PreviewFormat::Png => encode_png(image),
    }
}

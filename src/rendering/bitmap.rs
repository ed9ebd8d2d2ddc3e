use crate::error::ConvertError;
use epa_dither::PaletteImage;
use image::codecs::bmp::BmpEncoder;
use image::ExtendedColorType;

/// Encode a palette image as an uncompressed 8-bit indexed BMP.
pub fn encode_bmp(image: &PaletteImage) -> Result<Vec<u8>, ConvertError> {
    let width = dimension(image.width())?;
    let height = dimension(image.height())?;
    let palette = image.palette_entries();

    let mut buf = Vec::new();
    BmpEncoder::new(&mut buf)
        .encode_with_palette(
            image.indices(),
            width,
            height,
            ExtendedColorType::L8,
            Some(palette.as_slice()),
        )
        .map_err(|e| ConvertError::Encode(e.to_string()))?;
    Ok(buf)
}

pub(crate) fn dimension(value: usize) -> Result<u32, ConvertError> {
    u32::try_from(value).map_err(|_| ConvertError::Encode(format!("dimension {value} too large")))
}

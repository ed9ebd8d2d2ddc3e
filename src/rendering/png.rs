use super::bitmap::dimension;
use crate::error::ConvertError;
use epa_dither::{pack, EpaError, PaletteImage, RawLayout};
use std::io::Cursor;

/// Encode a palette image as a 4-bit indexed PNG with a PLTE chunk.
pub fn encode_png(image: &PaletteImage) -> Result<Vec<u8>, ConvertError> {
    let width = dimension(image.width())?;
    let height = dimension(image.height())?;
    let plte: Vec<u8> = image.palette_entries().into_iter().flatten().collect();
    // PNG 4-bit rows use the same high-nibble-first, byte-aligned layout
    let packed = pack(image, RawLayout::for_size(image.width(), image.height()))
        .map_err(EpaError::from)?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Four);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
        writer
            .write_image_data(packed.as_bytes())
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

use epa_dither::{Palette, RAW_LEN};

/// Assert the file is a raw display file
pub fn assert_raw_file(path: &Path) -> Vec<u8> {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected raw file {}: {e}", path.display()));
    assert_eq!(bytes.len(), RAW_LEN, "Raw file {} has wrong size", path.display());
    bytes
}

/// Assert the file is an image whose every pixel is a palette color
pub fn assert_palette_image(path: &Path, width: u32, height: u32) -> image::RgbImage {
    let img = image::open(path)
        .unwrap_or_else(|e| panic!("Expected image {}: {e}", path.display()))
        .into_rgb8();
    assert_eq!(img.dimensions(), (width, height));

    let palette = Palette::epaper7();
    for (x, y, p) in img.enumerate_pixels() {
        let color = epa_dither::Rgb::from_bytes(p.0);
        assert!(
            palette.index_of_exact(color).is_some(),
            "Pixel ({x}, {y}) is {color}, not a palette color"
        );
    }
    img
}

/// Assert no file exists at `path`
pub fn assert_absent(path: &Path) {
    assert!(!path.exists(), "Expected {} not to exist", path.display());
}

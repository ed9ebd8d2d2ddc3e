//! Palette-indexed image with dimension metadata.

use crate::color::Rgb;
use crate::palette::Palette;

/// A `width x height` grid of palette indices.
///
/// # Example
///
/// ```
/// use epa_dither::{Palette, PaletteImage, Rgb};
///
/// let image = PaletteImage::new(vec![0, 1, 1, 0], 2, 2, Palette::epaper7());
///
/// assert_eq!(image.index_at(1, 0), 1);
/// assert_eq!(image.color_at(0, 0), Rgb::new(0, 0, 0));
/// assert_eq!(image.to_rgb().len(), 2 * 2 * 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteImage {
    /// Palette indices, one per pixel, row-major order.
    indices: Vec<u8>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl PaletteImage {
    /// Create an image from row-major palette indices.
    ///
    /// # Panics
    ///
    /// Panics if `indices.len() != width * height` or if any index is not in
    /// `0..palette.len()`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= palette.len()) {
            panic!(
                "palette index {} out of range for {} colors",
                bad,
                palette.len()
            );
        }
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette index of pixel `(x, y)`.
    #[inline]
    pub fn index_at(&self, x: usize, y: usize) -> u8 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        self.indices[y * self.width + x]
    }

    /// Palette color of pixel `(x, y)`.
    #[inline]
    pub fn color_at(&self, x: usize, y: usize) -> Rgb {
        self.palette.color(self.index_at(x, y) as usize)
    }

    /// Flat `[R, G, B, R, G, B, ...]` bytes, `width * height * 3` long.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            rgb.extend_from_slice(&self.palette.color(idx as usize).to_bytes());
        }
        rgb
    }

    /// Palette colors as byte triples, for indexed containers.
    pub fn palette_entries(&self) -> Vec<[u8; 3]> {
        self.palette.colors().iter().map(|c| c.to_bytes()).collect()
    }
}

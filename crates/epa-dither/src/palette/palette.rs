//! Palette struct with nearest-color matching.

use std::collections::HashSet;

use super::error::PaletteError;
use crate::color::Rgb;

/// Largest palette a 4-bit raw index can address.
pub const MAX_PALETTE_LEN: usize = 16;

/// The 7 colors of the e-paper panel, in raw index order.
///
/// | Index | Color  | RGB           |
/// |-------|--------|---------------|
/// | 0     | Black  | (0, 0, 0)     |
/// | 1     | White  | (255,255,255) |
/// | 2     | Green  | (0, 255, 0)   |
/// | 3     | Blue   | (0, 0, 255)   |
/// | 4     | Red    | (255, 0, 0)   |
/// | 5     | Yellow | (255, 255, 0) |
/// | 6     | Orange | (255, 128, 0) |
pub const EPAPER_7_COLORS: [Rgb; 7] = [
    Rgb::new(0, 0, 0),
    Rgb::new(255, 255, 255),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 0, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 128, 0),
];

/// An ordered, validated set of reference colors.
///
/// A `Palette` is constructed once and never mutated. It is passed by
/// reference into every stage that needs it, so tests can supply a
/// different palette without touching any global state.
///
/// # Example
///
/// ```
/// use epa_dither::{Palette, Rgb};
///
/// let palette = Palette::epaper7();
/// assert_eq!(palette.len(), 7);
///
/// let (idx, _) = palette.find_nearest(Rgb::new(250, 120, 10));
/// assert_eq!(idx, 6); // orange
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from colors in index order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `colors` is empty ([`PaletteError::EmptyPalette`])
    /// - more than [`MAX_PALETTE_LEN`] colors are given ([`PaletteError::TooManyColors`])
    /// - a color appears twice ([`PaletteError::DuplicateColor`])
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > MAX_PALETTE_LEN {
            return Err(PaletteError::TooManyColors {
                count: colors.len(),
                max: MAX_PALETTE_LEN,
            });
        }

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// The fixed 7-color e-paper palette ([`EPAPER_7_COLORS`]).
    pub fn epaper7() -> Self {
        Self {
            colors: EPAPER_7_COLORS.to_vec(),
        }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// Get the color at the given index, or `None` if no such entry exists.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Rgb> {
        self.colors.get(idx).copied()
    }

    /// All colors in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Find the palette entry closest to `color` by squared Euclidean distance.
    ///
    /// Returns `(index, distance)`. The scan runs in index order and only a
    /// strictly smaller distance replaces the current best, so when two
    /// entries are equidistant the lower index wins.
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> (usize, u32) {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, &candidate) in self.colors.iter().enumerate() {
            let dist = color.distance_squared(candidate);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Index of a color that is exactly a palette entry.
    pub fn index_of_exact(&self, color: Rgb) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::epaper7()
    }
}

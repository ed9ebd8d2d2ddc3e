//! Output types for the conversion pipeline.
//!
//! [`PaletteImage`] is the canonical quantized form: one palette index per
//! pixel plus the owned palette. RGB bytes for previews and palette entries
//! for indexed containers are derived from it on demand.

mod palette_image;

pub use palette_image::PaletteImage;

//! Palette types
//!
//! The palette is an immutable, ordered list of reference colors. The
//! position of a color is its index in the raw format, so encode and decode
//! must be given the same palette.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, EPAPER_7_COLORS, MAX_PALETTE_LEN};

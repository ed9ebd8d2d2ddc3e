#![allow(clippy::module_inception)]

//! epa-dither: 7-color e-paper conversion
//!
//! This library converts an in-memory RGB image into the two artifacts an
//! 800x480 seven-color e-paper panel needs: a palette image for preview and
//! a nibble-packed raw buffer for upload. It also decodes raw buffers back
//! into palette images.
//!
//! # Quick Start
//!
//! The [`Pipeline`] builder is the primary entry point:
//!
//! ```
//! use epa_dither::{Palette, Pipeline, PixelBuffer, Rgb};
//!
//! let source = PixelBuffer::filled(64, 48, Rgb::new(255, 128, 0));
//! let result = Pipeline::new(Palette::epaper7()).convert(&source).unwrap();
//!
//! assert_eq!(result.output.raw.len(), 192_000);
//! assert!(result.output.raw.as_bytes().iter().all(|&b| b == 0x66));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelBuffer (any size)
//!     |
//!     v
//! resize_nearest          (800x480, or 480x800 for taller sources)
//!     |
//!     v
//! PortraitPolicy          (reject, or rotate clockwise into 800x480)
//!     |
//!     v
//! floyd_steinberg         (row-major error diffusion, integer arithmetic)
//!     |
//!     +--> PaletteImage   (indices + palette, for bitmap previews)
//!     +--> RawBuffer      (192000 bytes, two indices per byte)
//! ```
//!
//! The reverse path is [`unpack`], which reads a raw buffer at a given size
//! and returns a [`PaletteImage`].
//!
//! # Palette
//!
//! [`Palette::epaper7()`] is the panel's palette; its order defines the raw
//! index of each color. Nearest-color matching uses squared Euclidean
//! distance in RGB, and ties go to the lower index. The palette is passed
//! explicitly to every stage, never read from global state.
//!
//! # Raw Format
//!
//! See the [`raw`] module for the byte layout and the decode rules.

pub mod api;
pub mod buffer;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod preprocess;
pub mod raw;


pub use api::{Conversion, EpaError, Pipeline, PortraitPolicy};
pub use buffer::{BufferError, PixelBuffer};
pub use color::Rgb;
pub use dither::{floyd_steinberg, DitherOutput};
pub use output::PaletteImage;
pub use palette::{Palette, PaletteError, EPAPER_7_COLORS};
pub use preprocess::{resize_nearest, rotate_clockwise, target_geometry, Geometry, Orientation};
pub use raw::{
    pack, unpack, RawBuffer, RawDecode, RawError, RawLayout, LANDSCAPE_HEIGHT, LANDSCAPE_WIDTH,
    RAW_LEN,
};

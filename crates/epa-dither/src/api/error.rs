//! Unified error type for the epa-dither public API.
//!
//! [`EpaError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::buffer::BufferError;
use crate::palette::PaletteError;
use crate::raw::RawError;
use std::fmt;

/// Unified error type for the epa-dither public API.
///
/// # Example
///
/// ```
/// use epa_dither::{EpaError, Palette, Rgb};
///
/// fn two_tone() -> Result<Palette, EpaError> {
///     let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug)]
pub enum EpaError {
    /// Palette validation error (empty, too large, or duplicate)
    Palette(PaletteError),
    /// Pixel buffer construction error
    Buffer(BufferError),
    /// Raw encode/decode error
    Raw(RawError),
    /// A portrait canvas cannot be encoded with the landscape raw stride
    PortraitRawUnsupported {
        /// Canvas width in pixels
        width: usize,
        /// Canvas height in pixels
        height: usize,
    },
}

impl fmt::Display for EpaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpaError::Palette(err) => write!(f, "palette error: {}", err),
            EpaError::Buffer(err) => write!(f, "image error: {}", err),
            EpaError::Raw(err) => write!(f, "raw format error: {}", err),
            EpaError::PortraitRawUnsupported { width, height } => write!(
                f,
                "portrait {}x{} canvas cannot be encoded for the 800x480 display (rotate it first)",
                width, height
            ),
        }
    }
}

impl std::error::Error for EpaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EpaError::Palette(err) => Some(err),
            EpaError::Buffer(err) => Some(err),
            EpaError::Raw(err) => Some(err),
            EpaError::PortraitRawUnsupported { .. } => None,
        }
    }
}

impl From<PaletteError> for EpaError {
    fn from(err: PaletteError) -> Self {
        EpaError::Palette(err)
    }
}

impl From<BufferError> for EpaError {
    fn from(err: BufferError) -> Self {
        EpaError::Buffer(err)
    }
}

impl From<RawError> for EpaError {
    fn from(err: RawError) -> Self {
        EpaError::Raw(err)
    }
}

//! Error types for the raw codec

use std::fmt;

/// Error type for raw encode/decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawError {
    /// Input buffer is shorter than the canvas requires
    InsufficientData {
        /// Bytes required for the canvas
        expected: usize,
        /// Bytes supplied
        actual: usize,
    },
    /// The raw layout cannot address every pixel of the image
    LayoutTooSmall {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
        /// Bytes per row in the layout
        stride: usize,
        /// Total bytes in the layout
        len: usize,
    },
}

impl fmt::Display for RawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawError::InsufficientData { expected, actual } => {
                write!(
                    f,
                    "insufficient raw data: expected {} bytes, got {}",
                    expected, actual
                )
            }
            RawError::LayoutTooSmall {
                width,
                height,
                stride,
                len,
            } => {
                write!(
                    f,
                    "raw layout (stride {}, {} bytes) cannot address a {}x{} image",
                    stride, len, width, height
                )
            }
        }
    }
}

impl std::error::Error for RawError {}

//! Byte addressing of nibble-packed raw buffers.

use super::error::RawError;
use super::{LANDSCAPE_HEIGHT, LANDSCAPE_WIDTH};

/// Byte layout of a raw buffer.
///
/// Pixel `(x, y)` lives in byte `x / 2 + y * stride`; even `x` uses the high
/// nibble, odd `x` the low nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLayout {
    stride: usize,
    len: usize,
}

impl RawLayout {
    /// The display layout: stride 400, 192000 bytes.
    ///
    /// The stride is derived from the landscape width no matter which
    /// orientation the image was sized for.
    pub const fn landscape() -> Self {
        Self {
            stride: LANDSCAPE_WIDTH / 2,
            len: LANDSCAPE_WIDTH * LANDSCAPE_HEIGHT / 2,
        }
    }

    /// A tight layout for a `width x height` canvas.
    ///
    /// The stride is `ceil(width / 2)` so an odd last column still has a
    /// nibble. For even widths the length equals `width * height / 2`.
    ///
    /// ```
    /// use epa_dither::RawLayout;
    ///
    /// assert_eq!(RawLayout::for_size(800, 480), RawLayout::landscape());
    /// assert_eq!(RawLayout::for_size(2, 1).len(), 1);
    /// assert_eq!(RawLayout::for_size(3, 2).stride(), 2);
    /// ```
    pub const fn for_size(width: usize, height: usize) -> Self {
        let stride = width.div_ceil(2);
        Self {
            stride,
            len: stride * height,
        }
    }

    #[inline]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Total buffer length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Byte offset and nibble shift for pixel `(x, y)`.
    ///
    /// The shift is 4 for the high nibble and 0 for the low nibble.
    #[inline]
    pub const fn locate(&self, x: usize, y: usize) -> (usize, u32) {
        let offset = x / 2 + y * self.stride;
        let shift = if x % 2 == 0 { 4 } else { 0 };
        (offset, shift)
    }

    /// Check that every pixel of a `width x height` image has a nibble.
    pub fn check_covers(&self, width: usize, height: usize) -> Result<(), RawError> {
        let fits_row = width.div_ceil(2) <= self.stride;
        let fits_rows = height == 0 || (height - 1) * self.stride + width.div_ceil(2) <= self.len;
        if fits_row && fits_rows {
            Ok(())
        } else {
            Err(RawError::LayoutTooSmall {
                width,
                height,
                stride: self.stride,
                len: self.len,
            })
        }
    }
}

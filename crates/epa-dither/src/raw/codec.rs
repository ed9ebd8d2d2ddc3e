//! Pack and unpack palette indices to and from raw bytes.

use super::error::RawError;
use super::layout::RawLayout;
use crate::output::PaletteImage;
use crate::palette::Palette;

/// Decoded nibbles are reduced modulo this value before palette lookup.
const DECODE_INDEX_MODULUS: u8 = 8;

/// An owned, zero-initialised raw buffer with its layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBuffer {
    bytes: Vec<u8>,
    layout: RawLayout,
}

impl RawBuffer {
    /// Allocate `layout.len()` zero bytes.
    pub fn new(layout: RawLayout) -> Self {
        Self {
            bytes: vec![0; layout.len()],
            layout,
        }
    }

    /// Wrap existing bytes, keeping only the first `layout.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`RawError::InsufficientData`] if `bytes` is shorter than the
    /// layout.
    pub fn from_bytes(mut bytes: Vec<u8>, layout: RawLayout) -> Result<Self, RawError> {
        if bytes.len() < layout.len() {
            return Err(RawError::InsufficientData {
                expected: layout.len(),
                actual: bytes.len(),
            });
        }
        bytes.truncate(layout.len());
        Ok(Self { bytes, layout })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Store `index` in the nibble for pixel `(x, y)`.
    ///
    /// The target nibble is cleared before the new value is OR-ed in; the
    /// other nibble of the byte is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` addresses a byte outside the buffer.
    #[inline]
    pub fn set_index(&mut self, x: usize, y: usize, index: u8) {
        let (offset, shift) = self.layout.locate(x, y);
        let byte = &mut self.bytes[offset];
        *byte = (*byte & !(0x0F << shift)) | ((index & 0x0F) << shift);
    }

    /// Read the raw nibble for pixel `(x, y)` (0..=15, not reduced).
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` addresses a byte outside the buffer.
    #[inline]
    pub fn index_at(&self, x: usize, y: usize) -> u8 {
        let (offset, shift) = self.layout.locate(x, y);
        (self.bytes[offset] >> shift) & 0x0F
    }
}

impl AsRef<[u8]> for RawBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Result of decoding a raw buffer.
pub struct RawDecode {
    /// The decoded palette image.
    pub image: PaletteImage,
    /// Number of nibbles whose reduced value had no palette entry.
    ///
    /// These pixels are drawn with index 0.
    pub undefined: usize,
}

/// Pack an already-quantized image into a raw buffer.
///
/// Indices always fit a nibble since a palette holds at most 16 colors.
///
/// # Errors
///
/// Returns [`RawError::LayoutTooSmall`] if `layout` cannot address every
/// pixel.
pub fn pack(image: &PaletteImage, layout: RawLayout) -> Result<RawBuffer, RawError> {
    layout.check_covers(image.width(), image.height())?;

    let mut raw = RawBuffer::new(layout);
    let width = image.width();
    for (i, &index) in image.indices().iter().enumerate() {
        raw.set_index(i % width, i / width, index);
    }
    Ok(raw)
}

/// Decode raw bytes into a `width x height` palette image.
///
/// Bytes are consumed in order, two pixels per byte (high nibble first).
/// Input longer than required is accepted and the excess ignored.
///
/// # Errors
///
/// Returns [`RawError::InsufficientData`] if `bytes` holds fewer than
/// `ceil(width / 2) * height` bytes. Nothing is decoded in that case.
pub fn unpack(
    bytes: &[u8],
    palette: &Palette,
    width: usize,
    height: usize,
) -> Result<RawDecode, RawError> {
    let layout = RawLayout::for_size(width, height);
    if bytes.len() < layout.len() {
        return Err(RawError::InsufficientData {
            expected: layout.len(),
            actual: bytes.len(),
        });
    }

    let mut indices = Vec::with_capacity(width * height);
    let mut undefined = 0;
    for y in 0..height {
        for x in 0..width {
            let (offset, shift) = layout.locate(x, y);
            let nibble = (bytes[offset] >> shift) & 0x0F;
            let reduced = nibble % DECODE_INDEX_MODULUS;
            if (reduced as usize) < palette.len() {
                indices.push(reduced);
            } else {
                undefined += 1;
                indices.push(0);
            }
        }
    }

    Ok(RawDecode {
        image: PaletteImage::new(indices, width, height, palette.clone()),
        undefined,
    })
}

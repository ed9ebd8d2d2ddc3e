//! Pipeline builder, the primary entry point for the crate.
//!
//! [`Pipeline`] runs resize, orientation handling and dithering for one
//! source image and returns both the quantized image and its raw encoding.

use super::error::EpaError;
use crate::buffer::PixelBuffer;
use crate::dither::{floyd_steinberg, DitherOutput};
use crate::palette::Palette;
use crate::preprocess::{resize_to, rotate_clockwise, target_geometry, Geometry, Orientation};
use crate::raw::RawLayout;

/// What to do with a source that resizes onto the portrait canvas.
///
/// Raw addressing always uses the landscape stride, so a 480x800 canvas
/// cannot be encoded as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortraitPolicy {
    /// Fail with [`EpaError::PortraitRawUnsupported`].
    #[default]
    Reject,
    /// Rotate the resized canvas 90 degrees clockwise into 800x480.
    Rotate,
}

/// Result of [`Pipeline::convert`].
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Canvas the source was resized onto.
    pub geometry: Geometry,
    /// Whether the canvas was rotated into the landscape frame.
    pub rotated: bool,
    /// Quantized image (always 800x480) and raw buffer.
    pub output: DitherOutput,
}

/// Conversion builder for the 800x480 display.
///
/// The builder is reusable: [`convert()`](Self::convert) takes `&self`.
///
/// # Example
///
/// ```
/// use epa_dither::{Palette, Pipeline, PixelBuffer, PortraitPolicy, Rgb, RAW_LEN};
///
/// let pipeline = Pipeline::new(Palette::epaper7()).portrait(PortraitPolicy::Rotate);
///
/// let source = PixelBuffer::filled(40, 24, Rgb::new(255, 255, 255));
/// let result = pipeline.convert(&source).unwrap();
///
/// assert_eq!(result.output.image.width(), 800);
/// assert_eq!(result.output.raw.len(), RAW_LEN);
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    palette: Palette,
    portrait: PortraitPolicy,
}

impl Pipeline {
    /// Create a pipeline for `palette` that rejects portrait sources.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            portrait: PortraitPolicy::default(),
        }
    }

    /// Set the portrait handling policy.
    #[inline]
    pub fn portrait(mut self, policy: PortraitPolicy) -> Self {
        self.portrait = policy;
        self
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Resize, orient and dither `source` for the display.
    ///
    /// # Errors
    ///
    /// - [`EpaError::PortraitRawUnsupported`] for a portrait source under
    ///   [`PortraitPolicy::Reject`]; nothing is computed in that case
    /// - [`EpaError::Raw`] if the canvas does not fit the raw layout
    pub fn convert(&self, source: &PixelBuffer) -> Result<Conversion, EpaError> {
        let geometry = target_geometry(source.width(), source.height());
        let portrait = geometry.orientation() == Orientation::Portrait;
        if portrait && self.portrait == PortraitPolicy::Reject {
            return Err(EpaError::PortraitRawUnsupported {
                width: geometry.width,
                height: geometry.height,
            });
        }

        let resized = resize_to(source, geometry);
        let (frame, rotated) = if portrait {
            (rotate_clockwise(&resized), true)
        } else {
            (resized, false)
        };

        let output = floyd_steinberg(&frame, &self.palette, RawLayout::landscape())?;
        Ok(Conversion {
            geometry,
            rotated,
            output,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Palette::epaper7())
    }
}

//! Error diffusion dithering.
//!
//! [`floyd_steinberg`] quantizes an image to a [`Palette`](crate::Palette)
//! and encodes the chosen indices into a raw buffer in the same pass. The
//! diffusion kernel is described by [`Kernel`].

mod floyd_steinberg;
mod kernel;

pub use floyd_steinberg::floyd_steinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::output::PaletteImage;
use crate::raw::RawBuffer;

/// Quantized image plus its raw encoding.
#[derive(Debug, Clone)]
pub struct DitherOutput {
    pub image: PaletteImage,
    pub raw: RawBuffer,
}

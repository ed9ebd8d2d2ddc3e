//! Floyd-Steinberg error diffusion with inline raw encoding.

use super::kernel::{Kernel, FLOYD_STEINBERG};
use super::DitherOutput;
use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::output::PaletteImage;
use crate::palette::Palette;
use crate::raw::{RawBuffer, RawError, RawLayout};

/// Dither `image` to `palette` and encode the result into `layout`.
///
/// Pixels are visited in strict row-major order. Each pixel, as modified by
/// error already diffused into it, is replaced by its nearest palette color
/// and the per-channel error `old - new` is spread over the unvisited
/// neighbors:
///
/// ```text
///        X   7
///    3   5   1      (/16)
/// ```
///
/// Each share is truncated toward zero and the neighbor's channel is clamped
/// to `[0, 255]` when written. Neighbors outside the image are skipped and
/// their share is lost. The chosen index is written to the raw buffer as
/// each pixel is decided.
///
/// # Errors
///
/// Returns [`RawError::LayoutTooSmall`] before touching any pixel if
/// `layout` cannot address the whole image.
///
/// # Example
///
/// ```
/// use epa_dither::{floyd_steinberg, Palette, PixelBuffer, RawLayout, Rgb};
///
/// let image = PixelBuffer::new(2, 1, vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// let out = floyd_steinberg(&image, &Palette::epaper7(), RawLayout::for_size(2, 1)).unwrap();
///
/// assert_eq!(out.image.indices(), &[0, 1]);
/// assert_eq!(out.raw.as_bytes(), &[0x01]);
/// ```
pub fn floyd_steinberg(
    image: &PixelBuffer,
    palette: &Palette,
    layout: RawLayout,
) -> Result<DitherOutput, RawError> {
    dither_with_kernel(image, palette, layout, &FLOYD_STEINBERG)
}

pub(crate) fn dither_with_kernel(
    image: &PixelBuffer,
    palette: &Palette,
    layout: RawLayout,
    kernel: &Kernel,
) -> Result<DitherOutput, RawError> {
    let width = image.width();
    let height = image.height();
    layout.check_covers(width, height)?;

    // The input stays untouched; error accumulates in a working copy.
    let mut work: Vec<Rgb> = image.pixels().to_vec();
    let mut indices = vec![0u8; width * height];
    let mut raw = RawBuffer::new(layout);

    for y in 0..height {
        for x in 0..width {
            let old = work[y * width + x];
            let (index, _) = palette.find_nearest(old);
            let new = palette.color(index);

            indices[y * width + x] = index as u8;
            raw.set_index(x, y, index as u8);

            let error = [
                old.r as i32 - new.r as i32,
                old.g as i32 - new.g as i32,
                old.b as i32 - new.b as i32,
            ];
            if error != [0, 0, 0] {
                diffuse(&mut work, width, height, x, y, error, kernel);
            }
        }
    }

    Ok(DitherOutput {
        image: PaletteImage::new(indices, width, height, palette.clone()),
        raw,
    })
}

fn diffuse(
    work: &mut [Rgb],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    error: [i32; 3],
    kernel: &Kernel,
) {
    for &(dx, dy, weight) in kernel.entries {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
            continue;
        }
        let pixel = &mut work[ny as usize * width + nx as usize];
        pixel.r = spread(pixel.r, error[0], weight, kernel.divisor);
        pixel.g = spread(pixel.g, error[1], weight, kernel.divisor);
        pixel.b = spread(pixel.b, error[2], weight, kernel.divisor);
    }
}

#[inline]
fn spread(channel: u8, error: i32, weight: i32, divisor: i32) -> u8 {
    (channel as i32 + error * weight / divisor).clamp(0, 255) as u8
}

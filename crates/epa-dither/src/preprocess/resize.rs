//! Nearest-neighbor resize onto the fixed display canvas.

use crate::buffer::PixelBuffer;
use crate::raw::{LANDSCAPE_HEIGHT, LANDSCAPE_WIDTH};

/// Canvas orientation chosen for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// 800x480
    Landscape,
    /// 480x800
    Portrait,
}

/// Target canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
}

impl Geometry {
    /// The display's native 800x480 canvas.
    pub const LANDSCAPE: Self = Self {
        width: LANDSCAPE_WIDTH,
        height: LANDSCAPE_HEIGHT,
    };

    /// The 480x800 canvas used for sources taller than they are wide.
    pub const PORTRAIT: Self = Self {
        width: LANDSCAPE_HEIGHT,
        height: LANDSCAPE_WIDTH,
    };

    pub fn orientation(&self) -> Orientation {
        if *self == Self::PORTRAIT {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

/// Choose the canvas for a `src_width` x `src_height` source.
///
/// Only a strictly taller source gets the portrait canvas; square sources
/// stay landscape.
///
/// ```
/// use epa_dither::{target_geometry, Geometry};
///
/// assert_eq!(target_geometry(640, 480), Geometry::LANDSCAPE);
/// assert_eq!(target_geometry(500, 500), Geometry::LANDSCAPE);
/// assert_eq!(target_geometry(480, 640), Geometry::PORTRAIT);
/// ```
pub fn target_geometry(src_width: usize, src_height: usize) -> Geometry {
    if src_height > src_width {
        Geometry::PORTRAIT
    } else {
        Geometry::LANDSCAPE
    }
}

/// Resize `src` onto its target canvas by nearest-neighbor sampling.
///
/// Destination pixel `(x, y)` takes source pixel
/// `(x * src_w / dst_w, y * src_h / dst_h)` with truncating integer
/// division. The same formula duplicates pixels when upscaling, so there is
/// no separate path for small sources.
pub fn resize_nearest(src: &PixelBuffer) -> PixelBuffer {
    let geometry = target_geometry(src.width(), src.height());
    resize_to(src, geometry)
}

pub(crate) fn resize_to(src: &PixelBuffer, geometry: Geometry) -> PixelBuffer {
    let src_w = src.width();
    let src_h = src.height();
    let dst_w = geometry.width;
    let dst_h = geometry.height;

    PixelBuffer::from_fn(dst_w, dst_h, |x, y| {
        let src_x = x * src_w / dst_w;
        let src_y = y * src_h / dst_h;
        src.get(src_x, src_y)
    })
}

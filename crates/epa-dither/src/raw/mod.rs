//! Nibble-packed raw format consumed by the display.
//!
//! # Layout
//!
//! A raw file is exactly [`RAW_LEN`] bytes with no header. Each byte holds
//! two palette indices:
//!
//! ```text
//!   bit  7 6 5 4   3 2 1 0
//!       [ x even ] [ x odd ]
//! ```
//!
//! Byte `x / 2 + y * 400` holds pixels `x & !1` and `x | 1` of row `y`. The
//! stride comes from the 800-pixel landscape width and is used regardless of
//! the orientation the image was sized for (see [`RawLayout`]).
//!
//! # Decode
//!
//! [`unpack`] reads each nibble modulo 8. Values 8..=15 therefore wrap onto
//! 0..=7, and a value with no palette entry (7 for the e-paper palette) is
//! drawn as index 0 and counted in [`RawDecode::undefined`].

mod codec;
mod error;
mod layout;

pub use codec::{pack, unpack, RawBuffer, RawDecode};
pub use error::RawError;
pub use layout::RawLayout;

/// Width of the display's native canvas.
pub const LANDSCAPE_WIDTH: usize = 800;

/// Height of the display's native canvas.
pub const LANDSCAPE_HEIGHT: usize = 480;

/// Length in bytes of a display raw file (`800 * 480 / 2`).
pub const RAW_LEN: usize = LANDSCAPE_WIDTH * LANDSCAPE_HEIGHT / 2;

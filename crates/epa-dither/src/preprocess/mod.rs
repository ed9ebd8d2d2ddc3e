//! Geometry preprocessing ahead of dithering.
//!
//! - [`target_geometry`] picks the landscape or portrait canvas for a source
//! - [`resize_nearest`] samples the source onto that canvas
//! - [`rotate_clockwise`] turns a portrait canvas into the landscape frame

mod resize;
mod rotate;

pub(crate) use resize::resize_to;
pub use resize::{resize_nearest, target_geometry, Geometry, Orientation};
pub use rotate::rotate_clockwise;

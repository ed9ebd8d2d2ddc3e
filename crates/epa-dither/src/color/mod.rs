//! Color type used throughout the pipeline.
//!
//! All arithmetic in this crate happens on plain 8-bit RGB values. There is
//! no gamma decoding and no perceptual color space: nearest-color matching is
//! squared Euclidean distance on the raw channel values.
//!
//! # Example
//!
//! ```
//! use epa_dither::Rgb;
//!
//! let orange = Rgb::new(255, 128, 0);
//! assert_eq!(orange.to_bytes(), [255, 128, 0]);
//! assert_eq!(orange.to_string(), "#ff8000");
//! ```

mod rgb;

pub use rgb::Rgb;

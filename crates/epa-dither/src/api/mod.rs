//! Public API for the epa-dither crate.
//!
//! This module provides the high-level API: the [`Pipeline`] builder and
//! the [`EpaError`] unified error type.

mod builder;
mod error;

pub use builder::{Conversion, Pipeline, PortraitPolicy};
pub use error::EpaError;

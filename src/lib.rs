//! Inkalbum
//!
//! Photo converter for 7-color e-paper picture frames.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod protocol;
pub mod rendering;
pub mod services;

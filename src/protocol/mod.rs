//! Request frames understood by the picture frame.
//!
//! Only the byte layout lives here; moving frames over a link is up to the
//! caller. Each frame starts with a one-byte [`Method`] followed by a
//! method-specific body.

pub mod request;

pub use request::{FileHeader, Method, Request, FILE_HEADER_LEN};

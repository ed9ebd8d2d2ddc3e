use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input unavailable: {path}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image decode error: {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Conversion error: {0}")]
    Pipeline(#[from] epa_dither::EpaError),

    #[error("Preview encode error: {0}")]
    Encode(String),

    #[error("IO error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("Invalid MD5 digest: expected 32 hex characters, got {0:?}")]
    InvalidDigest(String),

    #[error("Content too large: {size} bytes (max {max})")]
    ContentTooLarge { size: usize, max: u32 },
}

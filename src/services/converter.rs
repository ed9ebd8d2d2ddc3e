use crate::assets::{AssetLoader, FIXTURE_NAME};
use crate::error::ConvertError;
use crate::models::{AppConfig, PreviewFormat};
use crate::rendering::encode_preview;
use crate::services::output_writer::{with_appended_extension, write_outputs, PendingOutput};
use epa_dither::{
    unpack, EpaError, Geometry, Palette, Pipeline, PixelBuffer, LANDSCAPE_HEIGHT,
    LANDSCAPE_WIDTH, RAW_LEN,
};
use image::ImageReader;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Paths and facts about a finished `convert img`
#[derive(Debug, Clone)]
pub struct ImageReport {
    pub preview: PathBuf,
    pub raw: PathBuf,
    pub geometry: Geometry,
    pub rotated: bool,
}

/// Paths and facts about a finished `convert raw`
#[derive(Debug, Clone)]
pub struct RawReport {
    pub preview: PathBuf,
    /// Nibbles with no palette entry, drawn as black
    pub undefined: usize,
}

/// Converts images to display files and raw files back to previews
pub struct ConvertService {
    pipeline: Pipeline,
    preview: PreviewFormat,
    raw_extension: String,
    /// Directory the fixture preview is written to
    fixture_dir: PathBuf,
}

impl ConvertService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            pipeline: Pipeline::new(Palette::epaper7()).portrait(config.portrait.into()),
            preview: config.preview,
            raw_extension: config.raw_extension.clone(),
            fixture_dir: PathBuf::from("."),
        }
    }

    /// Write the fixture preview into `dir` instead of the working directory
    pub fn with_fixture_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fixture_dir = dir.into();
        self
    }

    pub fn palette(&self) -> &Palette {
        self.pipeline.palette()
    }

    /// Decode `input`, convert it and write `<input>.<preview>` and
    /// `<input>.<raw_extension>`.
    ///
    /// Nothing is written unless both outputs were encoded successfully.
    pub fn convert_image(&self, input: &Path) -> Result<ImageReport, ConvertError> {
        let source = load_image(input)?;
        tracing::info!(
            path = %input.display(),
            width = source.width(),
            height = source.height(),
            "Opened image"
        );

        let conversion = self.pipeline.convert(&source)?;
        tracing::info!(
            width = conversion.geometry.width,
            height = conversion.geometry.height,
            rotated = conversion.rotated,
            "Dithered"
        );

        let preview_bytes = encode_preview(&conversion.output.image, self.preview)?;
        let preview = with_appended_extension(input, self.preview.extension());
        let raw = with_appended_extension(input, &self.raw_extension);

        write_outputs(&[
            PendingOutput::new(preview.clone(), preview_bytes),
            PendingOutput::new(raw.clone(), conversion.output.raw.into_bytes()),
        ])?;

        Ok(ImageReport {
            preview,
            raw,
            geometry: conversion.geometry,
            rotated: conversion.rotated,
        })
    }

    /// Decode an 800x480 raw file (or the embedded fixture) into a preview.
    pub fn convert_raw(&self, input: Option<&Path>) -> Result<RawReport, ConvertError> {
        let (bytes, preview): (Cow<'static, [u8]>, PathBuf) = match input {
            Some(path) => {
                let bytes = std::fs::read(path).map_err(|source| ConvertError::InputUnavailable {
                    path: path.to_path_buf(),
                    source,
                })?;
                tracing::info!(path = %path.display(), bytes = bytes.len(), "Read raw file");
                (
                    Cow::Owned(bytes),
                    with_appended_extension(path, self.preview.extension()),
                )
            }
            None => {
                let bytes = AssetLoader::raw_fixture().map_err(|source| {
                    ConvertError::InputUnavailable {
                        path: PathBuf::from(FIXTURE_NAME),
                        source,
                    }
                })?;
                tracing::info!(bytes = bytes.len(), "Using embedded raw fixture");
                let name = format!("testdata.{}", self.preview.extension());
                (bytes, self.fixture_dir.join(name))
            }
        };

        if bytes.len() > RAW_LEN {
            tracing::debug!(
                extra = bytes.len() - RAW_LEN,
                "Ignoring trailing bytes after raw image"
            );
        }

        let decoded = unpack(&bytes, self.palette(), LANDSCAPE_WIDTH, LANDSCAPE_HEIGHT)
            .map_err(EpaError::from)?;
        if decoded.undefined > 0 {
            tracing::warn!(
                pixels = decoded.undefined,
                "Raw data contains indices with no palette color; drawn as black"
            );
        }

        let preview_bytes = encode_preview(&decoded.image, self.preview)?;
        write_outputs(&[PendingOutput::new(preview.clone(), preview_bytes)])?;

        Ok(RawReport {
            preview,
            undefined: decoded.undefined,
        })
    }
}

/// Decode an image file into an RGB pixel buffer.
///
/// The format is guessed from the content. Alpha is discarded.
pub fn load_image(path: &Path) -> Result<PixelBuffer, ConvertError> {
    let unavailable = |source: std::io::Error| ConvertError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let reader = ImageReader::open(path)
        .map_err(unavailable)?
        .with_guessed_format()
        .map_err(unavailable)?;
    let img = reader.decode().map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgb = img.into_rgb8();
    let (width, height) = rgb.dimensions();
    let buffer = PixelBuffer::from_rgb_bytes(width as usize, height as usize, rgb.as_raw())
        .map_err(EpaError::from)?;
    Ok(buffer)
}

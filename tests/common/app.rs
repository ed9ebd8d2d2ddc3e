//! Scratch workspace for integration tests.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use inkalbum::models::AppConfig;
use inkalbum::services::ConvertService;

/// A temporary directory with helpers to create inputs and run conversions
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Save an RGB image built from `f(x, y)`; the format follows the extension
    pub fn write_image(
        &self,
        name: &str,
        width: u32,
        height: u32,
        f: impl Fn(u32, u32) -> [u8; 3],
    ) -> PathBuf {
        let path = self.path(name);
        image::RgbImage::from_fn(width, height, |x, y| image::Rgb(f(x, y)))
            .save(&path)
            .expect("Failed to write test image");
        path
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write test file");
        path
    }

    /// Converter whose fixture output lands in this workspace
    pub fn service(&self, config: &AppConfig) -> ConvertService {
        ConvertService::new(config).with_fixture_dir(self.root())
    }

    /// Sorted file names in the workspace
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.root())
            .expect("Failed to read temp dir")
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

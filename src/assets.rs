//! Embedded assets with optional filesystem override
//!
//! - The default config is embedded and used unless `INKALBUM_CONFIG` names
//!   a file
//! - The raw fixture used by `convert raw` without an argument is embedded

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Environment variable naming an external config file.
pub const CONFIG_ENV: &str = "INKALBUM_CONFIG";

/// Name of the embedded raw fixture.
pub const FIXTURE_NAME: &str = "testdata.epa";

/// Embedded default config and raw fixture
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "config.yaml"]
#[include = "*.epa"]
struct EmbeddedAssets;

/// Where the effective config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Embedded => write!(f, "embedded"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Asset loader with optional external config file
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External config file path (from INKALBUM_CONFIG)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a loader. `config_file` should be `Some` only if the env var
    /// was set.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Create a loader from `INKALBUM_CONFIG`.
    pub fn from_env() -> Self {
        Self::new(std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    pub fn config_source(&self) -> ConfigSource {
        match self.config_file {
            Some(ref path) => ConfigSource::File(path.clone()),
            None => ConfigSource::Embedded,
        }
    }

    /// Read config.yaml
    ///
    /// A configured external file is read without embedded fallback, so a
    /// missing file surfaces as an error for the caller to report.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            tracing::debug!(path = %path.display(), "Loading config from filesystem");
            return Ok(Cow::Owned(fs::read(path)?));
        }

        EmbeddedAssets::get("config.yaml")
            .map(|f| f.data)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "embedded config.yaml not found"))
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// The embedded 800x480 raw fixture
    pub fn raw_fixture() -> io::Result<Cow<'static, [u8]>> {
        EmbeddedAssets::get(FIXTURE_NAME)
            .map(|f| f.data)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("embedded {FIXTURE_NAME} not found"),
                )
            })
    }

    /// List embedded asset names
    pub fn list_embedded() -> Vec<String> {
        let mut files: Vec<String> = EmbeddedAssets::iter().map(|f| f.to_string()).collect();
        files.sort();
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_config_is_readable() {
        let loader = AssetLoader::new(None);
        let content = loader.read_config_string().unwrap();
        assert!(content.contains("portrait:"));
        assert_eq!(loader.config_source(), ConfigSource::Embedded);
    }

    #[test]
    fn test_external_config_is_preferred() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "preview: png\n").unwrap();

        let loader = AssetLoader::new(Some(path.clone()));
        assert_eq!(loader.read_config_string().unwrap(), "preview: png\n");
        assert_eq!(loader.config_source(), ConfigSource::File(path));
    }

    #[test]
    fn test_missing_external_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let loader = AssetLoader::new(Some(dir.path().join("absent.yaml")));
        assert!(loader.read_config().is_err());
    }

    #[test]
    fn test_raw_fixture_has_display_size() {
        let fixture = AssetLoader::raw_fixture().unwrap();
        assert_eq!(fixture.len(), epa_dither::RAW_LEN);
    }

    #[test]
    fn test_list_embedded() {
        let files = AssetLoader::list_embedded();
        assert_eq!(files, vec!["config.yaml".to_string(), FIXTURE_NAME.to_string()]);
    }
}

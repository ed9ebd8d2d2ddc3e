use crate::assets::AssetLoader;
use serde::Deserialize;

/// Container format of the preview written next to the raw file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PreviewFormat {
    /// Uncompressed 8-bit indexed bitmap
    #[default]
    Bmp,
    /// 4-bit indexed PNG
    Png,
}

impl PreviewFormat {
    pub fn extension(self) -> &'static str {
        match self {
            PreviewFormat::Bmp => "bmp",
            PreviewFormat::Png => "png",
        }
    }
}

/// Handling of sources that resize onto the portrait canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PortraitMode {
    /// Fail before writing anything
    #[default]
    Reject,
    /// Rotate clockwise into the 800x480 frame
    Rotate,
}

impl From<PortraitMode> for epa_dither::PortraitPolicy {
    fn from(mode: PortraitMode) -> Self {
        match mode {
            PortraitMode::Reject => epa_dither::PortraitPolicy::Reject,
            PortraitMode::Rotate => epa_dither::PortraitPolicy::Rotate,
        }
    }
}

impl std::fmt::Display for PortraitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortraitMode::Reject => write!(f, "reject"),
            PortraitMode::Rotate => write!(f, "rotate"),
        }
    }
}

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Preview container format
    pub preview: PreviewFormat,

    /// Portrait source handling
    pub portrait: PortraitMode,

    /// Extension appended to the input path for the raw file
    pub raw_extension: String,
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    ///
    /// Read and parse failures are logged and replaced by the defaults.
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => Self::from_yaml(&content),
            Err(e) => {
                tracing::warn!(%e, source = %loader.config_source(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse YAML, falling back to the defaults on error
    pub fn from_yaml(content: &str) -> Self {
        // An empty document parses as null, which is not a mapping
        if content.trim().is_empty() {
            return Self::default();
        }
        match serde_yaml::from_str::<Self>(content) {
            Ok(config) => {
                let config = config.validated();
                tracing::debug!(
                    preview = ?config.preview,
                    portrait = %config.portrait,
                    raw_extension = %config.raw_extension,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    fn validated(mut self) -> Self {
        let ext = self.raw_extension.trim_start_matches('.');
        if ext.is_empty() || ext.contains(['/', '\\']) {
            tracing::warn!(
                raw_extension = %self.raw_extension,
                "Invalid raw_extension, using \"epa\""
            );
            self.raw_extension = default_raw_extension();
        } else {
            self.raw_extension = ext.to_string();
        }
        self
    }
}

fn default_raw_extension() -> String {
    "epa".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preview: PreviewFormat::default(),
            portrait: PortraitMode::default(),
            raw_extension: default_raw_extension(),
        }
    }
}

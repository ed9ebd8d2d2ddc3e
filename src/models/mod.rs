pub mod config;

pub use config::{AppConfig, PortraitMode, PreviewFormat};

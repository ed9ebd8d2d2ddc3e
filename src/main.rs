use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkalbum::assets::AssetLoader;
use inkalbum::models::{AppConfig, PortraitMode, PreviewFormat};
use inkalbum::protocol::{FileHeader, Request};
use inkalbum::services::{write_outputs, ConvertService, PendingOutput};

#[derive(Parser)]
#[command(name = "inkalbum")]
#[command(about = "Inkalbum - photo converter for 7-color e-paper picture frames")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert images to display files, or display files back to images
    Convert {
        #[command(subcommand)]
        target: ConvertTarget,
    },
    /// Build a request frame for the picture frame
    Frame {
        #[command(subcommand)]
        request: FrameCommand,

        /// Write the frame to this file instead of printing it as hex
        #[arg(short, long, global = true)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConvertTarget {
    /// Dither an image into <INPUT>.epa and a preview <INPUT>.bmp
    Img {
        /// Image file (JPEG, PNG, GIF, ...)
        input: PathBuf,

        /// Preview format (overrides config)
        #[arg(long, value_enum)]
        preview: Option<PreviewFormat>,

        /// Portrait source handling (overrides config)
        #[arg(long, value_enum)]
        portrait: Option<PortraitMode>,
    },
    /// Decode an 800x480 raw file into a preview image
    Raw {
        /// Raw file; the built-in test pattern is used when omitted
        file: Option<PathBuf>,

        /// Preview format (overrides config)
        #[arg(long, value_enum)]
        preview: Option<PreviewFormat>,
    },
}

#[derive(Subcommand)]
enum FrameCommand {
    /// Echo a message back
    Echo {
        /// Message text
        message: String,
    },
    /// Upload a file
    Upload {
        /// File to upload (usually a .epa raw file)
        file: PathBuf,
    },
    /// Delete a stored file
    Delete {
        /// MD5 digest of the file, 32 hex characters
        md5: String,

        /// File size in bytes
        size: u32,
    },
    /// List stored files
    List,
    /// Fetch a stored file by name
    Get {
        /// File name
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert { target }) => {
            init_tracing();
            run_convert_command(target)
        }
        Some(Commands::Frame { request, output }) => {
            init_tracing();
            run_frame_command(request, output)
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkalbum=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn load_config() -> AppConfig {
    let loader = AssetLoader::from_env();
    tracing::debug!(source = %loader.config_source(), "Config source");
    AppConfig::load_from_assets(&loader)
}

/// Convert an image to display files, or a raw file to a preview
fn run_convert_command(target: ConvertTarget) -> anyhow::Result<()> {
    let mut config = load_config();

    match target {
        ConvertTarget::Img {
            input,
            preview,
            portrait,
        } => {
            if let Some(preview) = preview {
                config.preview = preview;
            }
            if let Some(portrait) = portrait {
                config.portrait = portrait;
            }

            let report = ConvertService::new(&config).convert_image(&input)?;
            println!(
                "Dithering complete. Output saved to {} and {}",
                report.preview.display(),
                report.raw.display()
            );
        }
        ConvertTarget::Raw { file, preview } => {
            if let Some(preview) = preview {
                config.preview = preview;
            }

            let report = ConvertService::new(&config).convert_raw(file.as_deref())?;
            println!(
                "Conversion complete. Output saved to {}",
                report.preview.display()
            );
        }
    }

    Ok(())
}

/// Build a request frame and write or print it
fn run_frame_command(command: FrameCommand, output: Option<PathBuf>) -> anyhow::Result<()> {
    let request = match command {
        FrameCommand::Echo { message } => Request::Echo(message.into_bytes()),
        FrameCommand::Upload { file } => {
            let content = std::fs::read(&file)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", file.display()))?;
            let request = Request::upload(content)?;
            if let Request::Upload { ref header, .. } = request {
                tracing::info!(md5 = %header.md5_hex(), size = header.size, "Prepared upload");
            }
            request
        }
        FrameCommand::Delete { md5, size } => Request::Delete(FileHeader::from_hex(&md5, size)?),
        FrameCommand::List => Request::List,
        FrameCommand::Get { name } => Request::Get(name),
    };

    let frame = request.encode();
    tracing::info!(method = %request.method(), bytes = frame.len(), "Built frame");

    match output {
        Some(path) => {
            write_outputs(&[PendingOutput::new(path.clone(), frame)])?;
            println!("Frame saved to {}", path.display());
        }
        None => println!("{}", hex::encode(&frame)),
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&loader);

    // Header
    println!("Inkalbum v{VERSION}");
    println!("Photo converter for 7-color e-paper picture frames\n");

    println!("Environment Variables:");
    println!(
        "  {} = {}",
        inkalbum::assets::CONFIG_ENV,
        std::env::var(inkalbum::assets::CONFIG_ENV).unwrap_or_else(|_| "(not set)".to_string())
    );

    println!("\nConfiguration:");
    println!("  Source:        {}", loader.config_source());
    println!("  Preview:       {}", config.preview.extension());
    println!("  Portrait:      {}", config.portrait);
    println!("  Raw extension: {}", config.raw_extension);

    println!("\nDisplay:");
    println!(
        "  {}x{}, {} byte raw files",
        epa_dither::LANDSCAPE_WIDTH,
        epa_dither::LANDSCAPE_HEIGHT,
        epa_dither::RAW_LEN
    );

    println!("\nPalette:");
    for (i, color) in epa_dither::Palette::epaper7().colors().iter().enumerate() {
        println!("  {i}  {color}");
    }

    println!("\nEmbedded assets:");
    for name in AssetLoader::list_embedded() {
        println!("  {name}");
    }

    println!("\nCommands:");
    println!("  inkalbum convert img <INPUT>   Dither an image for the display");
    println!("  inkalbum convert raw [FILE]    Decode a raw file to a preview");
    println!("  inkalbum frame <METHOD>        Build a request frame");
    println!("\nRun 'inkalbum --help' for more details.");
}

//! Command-line arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format of the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Standalone SVG document
    #[default]
    Svg,
    /// Versioned JSON flat layer list
    Json,
}

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "concentrix")]
#[command(about = "Compose nested concentric shape layers into SVG or JSON")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
pub struct Cli {
    /// Composition file (.json or .toml); the default configuration file or
    /// built-in sample layers are used when omitted
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Write to this path instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

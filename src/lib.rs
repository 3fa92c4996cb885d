//! # Concentrix
//!
//! Nested concentric shape compositions: circles, squares and equilateral
//! triangles, each sized against the inner boundary of the layer around it
//! and clipped to that layer's interior by a mask.
//!
//! ## Architecture
//!
//! Concentrix is organized as a workspace with multiple crates:
//!
//! 1. **concentrix-core** - Data model and error types
//! 2. **concentrix-designer** - Diameter algebra, shape dispatch, layer composition, SVG rendering
//! 3. **concentrix-settings** - Composition configuration files
//! 4. **concentrix** - Logging setup and the command-line binary

pub mod cli;

pub use concentrix_designer as designer;
pub use concentrix_settings as settings;

pub use concentrix_core::{
    ConcentricDiameters, Direction, FlatLayerItem, GeometricItem, LayerConfig, LayerId, MaskId,
    MaskItem, ShapeError, ShapeKind, StrokeStyle,
};

pub use concentrix_designer::{
    compose_layers, render_document, resolve_layer_diameters, FlatLayerFile, ShapeFactory,
    SvgCanvas,
};

pub use concentrix_settings::{CanvasSettings, CompositionConfig, SettingsError};

pub use cli::{Cli, OutputFormat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output to stderr, leaving stdout for rendered documents
/// - RUST_LOG environment variable support
/// - `info` level by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// SVG canvas matching the configured canvas settings
pub fn svg_canvas(settings: &CanvasSettings) -> SvgCanvas {
    SvgCanvas {
        width: settings.width,
        height: settings.height,
        background: settings.background.clone(),
    }
}

/// Compose a configuration and render it in the requested format
pub fn render_config(config: &CompositionConfig, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Svg => {
            let items = compose_layers(&config.layers, config.starting_size);
            Ok(render_document(&items, &svg_canvas(&config.canvas)))
        }
        OutputFormat::Json => FlatLayerFile::compose(&config.layers, config.starting_size).to_json(),
    }
}

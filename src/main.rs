use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use concentrix::{init_logging, render_config, Cli, CompositionConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging()?;

    let config = load_config(cli.config)?;
    let rendered = render_config(&config, cli.format)?;
    match cli.output {
        Some(path) => std::fs::write(&path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<CompositionConfig> {
    match path {
        Some(path) => CompositionConfig::load_from_file(&path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None => match CompositionConfig::default_path() {
            Ok(path) => CompositionConfig::load_or_default(&path)
                .with_context(|| format!("Failed to load {}", path.display())),
            Err(e) => {
                tracing::warn!("{}; using built-in defaults", e);
                Ok(CompositionConfig::default())
            }
        },
    }
}

//! Composition configuration for Concentrix
//!
//! A configuration names the starting size, the canvas the composition is
//! centered on, and the ordered layers. Files are JSON or TOML, chosen by
//! extension, and are validated on load and before save.
//!
//! Spacing and count are deliberately not range-checked: degenerate values
//! collapse into shorter concentric families during composition.

use concentrix_core::{Direction, LayerConfig, ShapeKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{SettingsError, SettingsResult};

/// Application directory name under the platform config directory
const APP_DIR: &str = "concentrix";

/// Default configuration file name
const CONFIG_FILE: &str = "composition.toml";

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Canvas the composition is drawn on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    pub width: f64,
    pub height: f64,
    /// Background fill, transparent when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            background: None,
        }
    }
}

/// Complete composition configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionConfig {
    /// Outer boundary of the first layer
    pub starting_size: f64,
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub layers: Vec<LayerConfig>,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            starting_size: 400.0,
            canvas: CanvasSettings::default(),
            layers: vec![
                LayerConfig::new(ShapeKind::Circle, 10.0, 2, Direction::Both)
                    .with_stroke("#1f2937", 2.0),
                LayerConfig::new(ShapeKind::Triangle, 8.0, 1, Direction::Inward)
                    .with_stroke("#b91c1c", 1.5),
                LayerConfig::new(ShapeKind::Circle, 6.0, 0, Direction::Outward)
                    .with_stroke("#2563eb", 1.0)
                    .with_center_fill(true),
            ],
        }
    }
}

impl CompositionConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/concentrix/composition.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    pub fn from_json_str(content: &str) -> SettingsResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config = match format {
            ConfigFormat::Json => Self::from_json_str(&content)?,
            ConfigFormat::Toml => Self::from_toml_str(&content)?,
        };
        debug!(
            "Loaded {} layers from {}",
            config.layers.len(),
            path.display()
        );
        Ok(config)
    }

    /// Load `path` when it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !self.starting_size.is_finite() || self.starting_size <= 0.0 {
            return Err(SettingsError::invalid(
                "startingSize",
                format!("must be a positive number, got {}", self.starting_size),
            ));
        }

        if !(self.canvas.width.is_finite() && self.canvas.width > 0.0)
            || !(self.canvas.height.is_finite() && self.canvas.height > 0.0)
        {
            return Err(SettingsError::invalid(
                "canvas",
                "width and height must be positive",
            ));
        }

        for (index, layer) in self.layers.iter().enumerate() {
            if !layer.stroke_width.is_finite() || layer.stroke_width < 0.0 {
                return Err(SettingsError::invalid(
                    format!("layers[{}].strokeWidth", index),
                    "must be a non-negative number",
                ));
            }
            if !layer.spacing.is_finite() {
                return Err(SettingsError::invalid(
                    format!("layers[{}].spacing", index),
                    "must be a finite number",
                ));
            }
            if layer.rotation.is_some_and(|r| !r.is_finite()) {
                return Err(SettingsError::invalid(
                    format!("layers[{}].rotation", index),
                    "must be a finite number",
                ));
            }
            if layer.spacing <= 0.0 {
                warn!(
                    "Layer {} ({}) has non-positive spacing {}; its concentric sizes will collapse",
                    index, layer.shape, layer.spacing
                );
            }
        }

        if self.starting_size > self.canvas.width.min(self.canvas.height) {
            warn!(
                "Starting size {} exceeds canvas {}x{}; outer layers will be cropped",
                self.starting_size, self.canvas.width, self.canvas.height
            );
        }

        Ok(())
    }
}

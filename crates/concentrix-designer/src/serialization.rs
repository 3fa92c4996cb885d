//! Serialization of composed layers.
//!
//! Saves and loads the flat item list as versioned JSON, together with the
//! starting size it was composed from.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use concentrix_core::{FlatLayerItem, LayerConfig};

use crate::flat_layers::compose_layers;

/// Flat layer file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Composed layers as written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatLayerFile {
    pub version: String,
    pub starting_size: f64,
    pub items: Vec<FlatLayerItem>,
}

impl FlatLayerFile {
    pub fn new(starting_size: f64, items: Vec<FlatLayerItem>) -> Self {
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            starting_size,
            items,
        }
    }

    /// Compose `layers` and wrap the result
    pub fn compose(layers: &[LayerConfig], starting_size: f64) -> Self {
        Self::new(starting_size, compose_layers(layers, starting_size))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize flat layers")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: Self = serde_json::from_str(json).context("Failed to parse flat layers")?;
        if file.version != FILE_FORMAT_VERSION {
            anyhow::bail!(
                "Unsupported flat layer file version {} (expected {})",
                file.version,
                FILE_FORMAT_VERSION
            );
        }
        Ok(file)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concentrix_core::{Direction, ShapeKind};

    #[test]
    fn test_rejects_unknown_version() {
        let json = r#"{"version": "9.9", "startingSize": 10, "items": []}"#;
        let err = FlatLayerFile::from_json(json).unwrap_err();
        assert!(err.to_string().contains("Unsupported flat layer file version"));
    }

    #[test]
    fn test_json_uses_original_vocabulary() {
        let layers = vec![
            LayerConfig::new(ShapeKind::Circle, 10.0, 0, Direction::Outward),
            LayerConfig::new(ShapeKind::Square, 5.0, 0, Direction::Outward),
        ];
        let json = FlatLayerFile::compose(&layers, 200.0).to_json().unwrap();
        assert!(json.contains("\"startingSize\": 200.0"));
        assert!(json.contains("\"type\": \"mask\""));
        assert!(json.contains("\"maskId\": \"mask-0\""));
        assert!(json.contains("\"targetLayerId\": \"layer-1\""));
    }
}

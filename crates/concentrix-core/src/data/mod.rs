//! Data models for concentric layer composition
//!
//! Shape kinds, stepping directions and stroke attributes shared by the
//! configuration, the diameter algebra and the flattened output.

pub mod items;
pub mod layer;

use crate::error::ShapeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use items::{FlatLayerItem, GeometricItem, LayerId, MaskId, MaskItem};
pub use layer::{ConcentricDiameters, LayerConfig};

/// Geometric shape kind of a layer
///
/// The set is closed: every match over it is exhaustive, and anything else is
/// rejected when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ShapeKind {
    /// Circle, sized by its diameter
    Circle,
    /// Square, sized by its side length
    Square,
    /// Equilateral triangle, sized by the diameter of its circumscribed circle
    Triangle,
}

impl ShapeKind {
    /// All supported shape kinds
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];

    /// Lowercase name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "square" => Ok(Self::Square),
            "triangle" => Ok(Self::Triangle),
            _ => Err(ShapeError::UnknownShapeKind {
                kind: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ShapeKind {
    type Error = ShapeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShapeKind> for String {
    fn from(kind: ShapeKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Direction in which additional concentric sizes are generated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Direction {
    /// Larger than the prime size
    #[default]
    Outward,
    /// Smaller than the inner boundary
    Inward,
    /// Both larger and smaller
    Both,
}

impl Direction {
    /// Lowercase name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outward => "outward",
            Self::Inward => "inward",
            Self::Both => "both",
        }
    }

    /// Whether sizes above the prime size are generated
    pub fn includes_outward(&self) -> bool {
        matches!(self, Self::Outward | Self::Both)
    }

    /// Whether sizes below the inner boundary are generated
    pub fn includes_inward(&self) -> bool {
        matches!(self, Self::Inward | Self::Both)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "outward" => Ok(Self::Outward),
            "inward" => Ok(Self::Inward),
            "both" => Ok(Self::Both),
            _ => Err(ShapeError::UnknownDirection {
                direction: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = ShapeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        direction.as_str().to_string()
    }
}

/// Stroke attributes carried by every flattened item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeStyle {
    /// Stroke color (any CSS color string)
    pub color: String,
    /// Stroke width in renderer units
    pub width: f64,
}

impl StrokeStyle {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new("#000000", 1.0)
    }
}

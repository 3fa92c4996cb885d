//! Layer configuration and per-layer derived diameters

use super::{Direction, ShapeKind, StrokeStyle};
use serde::{Deserialize, Serialize};

fn default_stroke_color() -> String {
    "#000000".to_string()
}

fn default_stroke_width() -> f64 {
    1.0
}

/// One user-specified ring of the composition
///
/// Owned by the caller. Composition reads it and never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerConfig {
    /// Geometric shape kind
    pub shape: ShapeKind,
    /// Distance between consecutive concentric sizes
    pub spacing: f64,
    /// Number of additional sizes beyond the prime size
    pub count: u32,
    /// Direction in which the additional sizes are generated
    pub direction: Direction,
    /// Stroke color for the outlines
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,
    /// Stroke width for the outlines
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Whether to fill the center shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_fill: Option<bool>,
    /// Rotation in degrees around the center point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl LayerConfig {
    pub fn new(shape: ShapeKind, spacing: f64, count: u32, direction: Direction) -> Self {
        Self {
            shape,
            spacing,
            count,
            direction,
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
            center_fill: None,
            rotation: None,
        }
    }

    pub fn with_stroke(mut self, color: impl Into<String>, width: f64) -> Self {
        self.stroke_color = color.into();
        self.stroke_width = width;
        self
    }

    pub fn with_center_fill(mut self, fill: bool) -> Self {
        self.center_fill = Some(fill);
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn stroke(&self) -> StrokeStyle {
        StrokeStyle::new(self.stroke_color.clone(), self.stroke_width)
    }

    /// Rotation in degrees, zero when unset
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.unwrap_or(0.0)
    }

    pub fn fills_center(&self) -> bool {
        self.center_fill.unwrap_or(false)
    }
}

/// Sizes derived for one layer during a composition run
///
/// `all` is the draw order of the layer's concentric outlines: strictly
/// positive, largest first, no repeated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentricDiameters {
    /// Prime (boundary) size of the layer
    pub outer: f64,
    /// Size available to a nested child
    pub inner: f64,
    /// Extra sizes generated from count and direction
    pub additional: Vec<f64>,
    /// Outer, inner and additional sizes in draw order
    pub all: Vec<f64>,
}

impl ConcentricDiameters {
    /// Assemble diameters, deriving `all` from the three parts
    pub fn from_parts(outer: f64, inner: f64, additional: Vec<f64>) -> Self {
        let mut all: Vec<f64> = [outer, inner]
            .into_iter()
            .chain(additional.iter().copied())
            .filter(|d| d.is_finite() && *d > 0.0)
            .collect();
        all.sort_by(|a, b| b.total_cmp(a));
        all.dedup();

        Self {
            outer,
            inner,
            additional,
            all,
        }
    }

    /// Smallest drawable size, if any
    pub fn innermost(&self) -> Option<f64> {
        self.all.last().copied()
    }
}

//! Flattened, render-ready layer items
//!
//! A composition produces an ordered list of [`FlatLayerItem`]s in which
//! geometric items and the masks that clip them are interleaved:
//!
//! ```text
//! layer-0, mask-0, layer-1, mask-1, ..., layer-(N-1)
//! ```
//!
//! `layer-i` (i > 0) is clipped by `mask-(i-1)`, and `mask-i` targets `layer-(i+1)`.

use super::{Direction, LayerConfig, ShapeKind, StrokeStyle};
use crate::error::ShapeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn parse_prefixed(value: &str, prefix: &str) -> Result<usize, ShapeError> {
    value
        .strip_prefix(prefix)
        .and_then(|rest| rest.parse::<usize>().ok())
        .ok_or_else(|| ShapeError::InvalidIdentifier {
            value: value.to_string(),
            expected: format!("{}<index>", prefix),
        })
}

/// Identifier of a geometric item, `layer-<index>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LayerId(pub usize);

impl LayerId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer-{}", self.0)
    }
}

impl FromStr for LayerId {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefixed(s, "layer-").map(Self)
    }
}

impl TryFrom<String> for LayerId {
    type Error = ShapeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LayerId> for String {
    fn from(id: LayerId) -> Self {
        id.to_string()
    }
}

/// Identifier of a mask item, `mask-<index>`
///
/// The index is that of the layer which produced the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MaskId(pub usize);

impl MaskId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mask-{}", self.0)
    }
}

impl FromStr for MaskId {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefixed(s, "mask-").map(Self)
    }
}

impl TryFrom<String> for MaskId {
    type Error = ShapeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MaskId> for String {
    fn from(id: MaskId) -> Self {
        id.to_string()
    }
}

/// A layer's prime shape, drawn with its concentric repetitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometricItem {
    pub id: LayerId,
    /// Index of the layer in the configuration
    pub layer_index: usize,
    pub shape: ShapeKind,
    /// The layer's outer boundary
    pub size: f64,
    pub spacing: f64,
    pub count: u32,
    pub direction: Direction,
    pub stroke: StrokeStyle,
    pub center_fill: bool,
    /// Rotation in degrees
    pub rotation: f64,
    /// Mask produced by the previous layer, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_id: Option<MaskId>,
}

impl GeometricItem {
    pub fn from_layer(layer_index: usize, layer: &LayerConfig, size: f64) -> Self {
        Self {
            id: LayerId(layer_index),
            layer_index,
            shape: layer.shape,
            size,
            spacing: layer.spacing,
            count: layer.count,
            direction: layer.direction,
            stroke: layer.stroke(),
            center_fill: layer.fills_center(),
            rotation: layer.rotation_degrees(),
            mask_id: layer_index.checked_sub(1).map(MaskId),
        }
    }
}

/// A cutout sized to a layer's inner boundary, clipping the next layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskItem {
    pub id: MaskId,
    /// Index of the layer that produced this mask
    pub layer_index: usize,
    pub shape: ShapeKind,
    /// The producing layer's inner boundary
    pub size: f64,
    pub spacing: f64,
    pub count: u32,
    pub direction: Direction,
    pub stroke: StrokeStyle,
    pub center_fill: bool,
    /// Rotation in degrees, inherited from the producing layer
    pub rotation: f64,
    /// Geometric item clipped by this mask
    pub target_layer_id: LayerId,
}

impl MaskItem {
    pub fn from_layer(layer_index: usize, layer: &LayerConfig, size: f64) -> Self {
        Self {
            id: MaskId(layer_index),
            layer_index,
            shape: layer.shape,
            size,
            spacing: layer.spacing,
            count: layer.count,
            direction: layer.direction,
            stroke: layer.stroke(),
            center_fill: layer.fills_center(),
            rotation: layer.rotation_degrees(),
            target_layer_id: LayerId(layer_index + 1),
        }
    }
}

/// A renderable unit in the flattened composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FlatLayerItem {
    Geometric(GeometricItem),
    Mask(MaskItem),
}

impl FlatLayerItem {
    /// Identifier as rendered, `layer-N` or `mask-N`
    pub fn id_str(&self) -> String {
        match self {
            Self::Geometric(item) => item.id.to_string(),
            Self::Mask(item) => item.id.to_string(),
        }
    }

    pub fn layer_index(&self) -> usize {
        match self {
            Self::Geometric(item) => item.layer_index,
            Self::Mask(item) => item.layer_index,
        }
    }

    pub fn shape(&self) -> ShapeKind {
        match self {
            Self::Geometric(item) => item.shape,
            Self::Mask(item) => item.shape,
        }
    }

    pub fn size(&self) -> f64 {
        match self {
            Self::Geometric(item) => item.size,
            Self::Mask(item) => item.size,
        }
    }

    pub fn rotation(&self) -> f64 {
        match self {
            Self::Geometric(item) => item.rotation,
            Self::Mask(item) => item.rotation,
        }
    }

    pub fn is_mask(&self) -> bool {
        matches!(self, Self::Mask(_))
    }

    pub fn as_geometric(&self) -> Option<&GeometricItem> {
        match self {
            Self::Geometric(item) => Some(item),
            Self::Mask(_) => None,
        }
    }

    pub fn as_mask(&self) -> Option<&MaskItem> {
        match self {
            Self::Mask(item) => Some(item),
            Self::Geometric(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display_and_parse() {
        assert_eq!(LayerId(3).to_string(), "layer-3");
        assert_eq!(MaskId(0).to_string(), "mask-0");
        assert_eq!("layer-12".parse::<LayerId>().unwrap(), LayerId(12));
        assert_eq!("mask-7".parse::<MaskId>().unwrap(), MaskId(7));
        assert!("mask-7".parse::<LayerId>().is_err());
        assert!("layer-".parse::<LayerId>().is_err());
    }

    #[test]
    fn test_geometric_item_mask_reference() {
        let layer = LayerConfig::new(ShapeKind::Square, 5.0, 0, Direction::Outward);
        let first = GeometricItem::from_layer(0, &layer, 100.0);
        assert_eq!(first.mask_id, None);

        let second = GeometricItem::from_layer(2, &layer, 50.0);
        assert_eq!(second.mask_id, Some(MaskId(1)));
    }

    #[test]
    fn test_mask_item_targets_next_layer() {
        let layer = LayerConfig::new(ShapeKind::Circle, 5.0, 0, Direction::Outward)
            .with_rotation(30.0);
        let mask = MaskItem::from_layer(4, &layer, 20.0);
        assert_eq!(mask.id, MaskId(4));
        assert_eq!(mask.target_layer_id, LayerId(5));
        assert_eq!(mask.rotation, 30.0);
    }

    #[test]
    fn test_flat_item_serializes_with_type_tag() {
        let layer = LayerConfig::new(ShapeKind::Circle, 10.0, 0, Direction::Outward);
        let item = FlatLayerItem::Mask(MaskItem::from_layer(0, &layer, 90.0));
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "mask");
        assert_eq!(value["id"], "mask-0");
        assert_eq!(value["targetLayerId"], "layer-1");
        assert_eq!(value["shape"], "circle");

        let back: FlatLayerItem = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }
}

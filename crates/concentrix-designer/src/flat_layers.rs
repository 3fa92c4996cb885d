//! Layer composition
//!
//! Turns an ordered list of layer configurations into a flat, render-ready
//! list in two passes:
//!
//! 1. Diameter resolution: a fold over the layers in which each layer's outer
//!    boundary is derived from its predecessor's resolved inner boundary.
//! 2. Flattening: every layer emits its geometric item, followed (except for
//!    the last layer) by the mask that clips the next layer.
//!
//! Composition is pure. The same input always produces the same output.

use tracing::{debug, info};

use concentrix_core::{
    ConcentricDiameters, FlatLayerItem, GeometricItem, LayerConfig, MaskItem,
};

use crate::factory::ShapeFactory;
use crate::model::{DiameterCalculator, ShapeCalculationInput};

/// Resolve one layer's diameters from its predecessor
///
/// `parent` is the previous layer's configuration together with its already
/// resolved diameters. Without a parent the layer's outer boundary is
/// `starting_size`.
pub fn resolve_layer(
    layer: &LayerConfig,
    parent: Option<(&LayerConfig, &ConcentricDiameters)>,
    starting_size: f64,
) -> ConcentricDiameters {
    let input = ShapeCalculationInput::for_layer(layer, parent.map(|(config, _)| config));

    let outer = match parent {
        None => starting_size,
        Some((parent_config, parent_diameters)) => {
            let outer = ShapeFactory::create_calculator(layer.shape, input)
                .calculate_outer_diameter(parent_diameters.inner);
            debug!(
                "Outer diameter for {} inside {}: parent inner {} -> {}",
                layer.shape, parent_config.shape, parent_diameters.inner, outer
            );
            outer
        }
    };

    ShapeFactory::create_calculator(layer.shape, input.with_outer(outer))
        .calculate_layer_diameters()
}

/// First pass: diameters for every layer, in configuration order
pub fn resolve_layer_diameters(
    layers: &[LayerConfig],
    starting_size: f64,
) -> Vec<ConcentricDiameters> {
    layers.iter().enumerate().fold(
        Vec::with_capacity(layers.len()),
        |mut resolved, (index, layer)| {
            let parent = index
                .checked_sub(1)
                .map(|prev| (&layers[prev], &resolved[prev]));
            let diameters = resolve_layer(layer, parent, starting_size);
            debug!(
                "Layer {} ({}): outer={} inner={} additional={:?} all={:?}",
                index, layer.shape, diameters.outer, diameters.inner, diameters.additional,
                diameters.all
            );
            resolved.push(diameters);
            resolved
        },
    )
}

/// Compose layers into the interleaved geometric/mask sequence
///
/// For N layers the result holds 2N - 1 items ordered
/// `layer-0, mask-0, layer-1, ..., layer-(N-1)`; an empty input yields an
/// empty list.
pub fn compose_layers(layers: &[LayerConfig], starting_size: f64) -> Vec<FlatLayerItem> {
    if layers.is_empty() {
        return Vec::new();
    }

    let diameters = resolve_layer_diameters(layers, starting_size);
    let last = layers.len() - 1;
    let mut items = Vec::with_capacity(2 * layers.len() - 1);

    for (index, (layer, diameter)) in layers.iter().zip(&diameters).enumerate() {
        let geometric = GeometricItem::from_layer(index, layer, diameter.outer);
        debug!(
            "Layer {} ({}): size={} mask={:?}",
            index, layer.shape, geometric.size, geometric.mask_id
        );
        items.push(FlatLayerItem::Geometric(geometric));

        if index < last {
            // The mask hole is the producing layer's inner boundary, the same
            // value the next layer's outer boundary was derived from.
            let mask = MaskItem::from_layer(index, layer, diameter.inner);
            debug!(
                "Mask {} ({}): size={} target={}",
                mask.id, layer.shape, mask.size, mask.target_layer_id
            );
            items.push(FlatLayerItem::Mask(mask));
        }
    }

    info!(
        "Composed {} layers into {} items (starting size {})",
        layers.len(),
        items.len(),
        starting_size
    );
    items
}

/// Full concentric family of a geometric item, recomputed from its own fields
pub fn item_diameters(item: &GeometricItem) -> ConcentricDiameters {
    let input = ShapeCalculationInput::new(item.size, item.spacing, item.count, item.direction);
    ShapeFactory::create_calculator(item.shape, input).calculate_layer_diameters()
}

use proptest::prelude::*;

use concentrix_core::{Direction, FlatLayerItem, LayerConfig, LayerId, MaskId, ShapeKind};
use concentrix_designer::{compose_layers, resolve_layer_diameters};

fn shape_kind() -> impl Strategy<Value = ShapeKind> {
    prop_oneof![
        Just(ShapeKind::Circle),
        Just(ShapeKind::Square),
        Just(ShapeKind::Triangle),
    ]
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Outward),
        Just(Direction::Inward),
        Just(Direction::Both),
    ]
}

fn layer() -> impl Strategy<Value = LayerConfig> {
    (
        shape_kind(),
        -5.0f64..40.0,
        0u32..6,
        direction(),
        proptest::option::of(-180.0f64..180.0),
    )
        .prop_map(|(shape, spacing, count, direction, rotation)| {
            let layer = LayerConfig::new(shape, spacing, count, direction);
            match rotation {
                Some(degrees) => layer.with_rotation(degrees),
                None => layer,
            }
        })
}

proptest! {
    #[test]
    fn output_length_is_two_n_minus_one(
        layers in proptest::collection::vec(layer(), 0..12),
        starting_size in 1.0f64..2000.0,
    ) {
        let items = compose_layers(&layers, starting_size);
        let expected = if layers.is_empty() { 0 } else { 2 * layers.len() - 1 };
        prop_assert_eq!(items.len(), expected);
    }

    #[test]
    fn masks_reference_neighbouring_layers(
        layers in proptest::collection::vec(layer(), 1..12),
        starting_size in 1.0f64..2000.0,
    ) {
        let items = compose_layers(&layers, starting_size);
        let mut geometric_seen = 0usize;

        for (position, item) in items.iter().enumerate() {
            match item {
                FlatLayerItem::Geometric(g) => {
                    prop_assert_eq!(position, 2 * geometric_seen);
                    prop_assert_eq!(g.id, LayerId(geometric_seen));
                    prop_assert_eq!(g.mask_id, geometric_seen.checked_sub(1).map(MaskId));
                    geometric_seen += 1;
                }
                FlatLayerItem::Mask(m) => {
                    prop_assert_eq!(position % 2, 1);
                    prop_assert_eq!(m.id, MaskId(geometric_seen - 1));
                    prop_assert_eq!(m.target_layer_id, LayerId(geometric_seen));
                }
            }
        }
        prop_assert_eq!(geometric_seen, layers.len());
    }

    #[test]
    fn all_sizes_are_positive_and_strictly_descending(
        layers in proptest::collection::vec(layer(), 1..12),
        starting_size in 1.0f64..2000.0,
    ) {
        for diameters in resolve_layer_diameters(&layers, starting_size) {
            prop_assert!(diameters.all.iter().all(|d| *d > 0.0));
            prop_assert!(diameters.all.windows(2).all(|pair| pair[0] > pair[1]));
        }
    }

    #[test]
    fn composition_is_deterministic(
        layers in proptest::collection::vec(layer(), 0..8),
        starting_size in 1.0f64..2000.0,
    ) {
        prop_assert_eq!(
            compose_layers(&layers, starting_size),
            compose_layers(&layers, starting_size)
        );
    }
}

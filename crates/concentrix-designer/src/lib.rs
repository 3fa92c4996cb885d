//! # Concentrix Designer
//!
//! Geometry and composition engine for nested concentric shapes. Each layer
//! is sized against the inner boundary of the layer around it, repeated
//! inward and/or outward, and clipped to its parent's interior by a mask.
//!
//! ## Core Components
//!
//! - **Diameter algebra** ([`model`]): per shape kind, derives a layer's outer
//!   boundary from its parent and its own inner boundary and concentric sizes
//! - **Dispatch** ([`factory`]): selects the calculator or point generator for
//!   a shape kind
//! - **Composition** ([`flat_layers`]): resolves diameters across the layer
//!   chain and emits interleaved geometric and mask items
//! - **Rendering** ([`svg_renderer`]): SVG output of the composed items
//! - **Serialization** ([`serialization`]): JSON save/load of composed items
//!
//! ## Architecture
//!
//! ```text
//! LayerConfig[] + starting size
//!   └── flat_layers (pass 1: diameters, pass 2: items)
//!         └── ShapeFactory
//!               ├── ShapeCalculator (circle, square, triangle)
//!               └── Shape (point generation)
//! FlatLayerItem[]
//!   └── svg_renderer / serialization
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use concentrix_core::{Direction, LayerConfig, ShapeKind};
//! use concentrix_designer::compose_layers;
//!
//! let layers = vec![
//!     LayerConfig::new(ShapeKind::Circle, 10.0, 0, Direction::Outward),
//!     LayerConfig::new(ShapeKind::Square, 5.0, 0, Direction::Outward),
//! ];
//! let items = compose_layers(&layers, 200.0);
//! assert_eq!(items.len(), 3);
//! ```

pub mod factory;
pub mod flat_layers;
pub mod model;
pub mod serialization;
pub mod svg_renderer;

pub use factory::ShapeFactory;
pub use flat_layers::{compose_layers, item_diameters, resolve_layer, resolve_layer_diameters};
pub use model::{
    triangle_spacing_factor, CircleCalculator, CircleShape, DiameterCalculator, Point, Shape,
    ShapeCalculationInput, ShapeCalculator, ShapeGeometry, ShapeOutline, SquareCalculator,
    SquareShape, TriangleCalculator, TriangleShape,
};
pub use serialization::FlatLayerFile;
pub use svg_renderer::{render_document, SvgCanvas};

//! # Concentrix Core
//!
//! Core types and error definitions for Concentrix.
//! Provides the data model shared by the geometry engine, the settings
//! layer and the command-line front end.

pub mod data;
pub mod error;

pub use data::{
    ConcentricDiameters, Direction, FlatLayerItem, GeometricItem, LayerConfig, LayerId, MaskId,
    MaskItem, ShapeKind, StrokeStyle,
};

pub use error::ShapeError;

//! Concentrix Settings Crate
//!
//! Handles composition configuration: loading, saving and validation.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, CompositionConfig, ConfigFormat};
pub use error::{SettingsError, SettingsResult};

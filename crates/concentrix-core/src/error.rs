//! Error handling for Concentrix
//!
//! The only hard failure in layer composition is a configuration naming a
//! shape kind outside the supported set. Everything numeric (zero spacing,
//! sizes that collapse below zero) is handled by filtering, never by raising.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Shape configuration error type
///
/// Raised at the parsing boundary, before any geometry is computed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Shape kind is not one of circle, square, triangle
    #[error("Unrecognized shape kind: {kind}")]
    UnknownShapeKind {
        /// The offending shape kind as written in the configuration.
        kind: String,
    },

    /// Direction is not one of outward, inward, both
    #[error("Unrecognized direction: {direction}")]
    UnknownDirection {
        /// The offending direction as written in the configuration.
        direction: String,
    },

    /// A layer or mask identifier could not be parsed
    #[error("Invalid identifier '{value}': expected {expected}")]
    InvalidIdentifier {
        /// The identifier text that failed to parse.
        value: String,
        /// Description of the expected form.
        expected: String,
    },
}

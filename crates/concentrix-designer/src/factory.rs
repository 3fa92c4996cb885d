//! Shape geometry dispatch
//!
//! Two parallel dispatches over the same closed set of shape kinds: one picks
//! the diameter algebra, the other picks point generation. Name-based entry
//! points reject anything outside the set before any object is built.

use concentrix_core::{ShapeError, ShapeKind};

use crate::model::{
    CircleCalculator, CircleShape, Shape, ShapeCalculationInput, ShapeCalculator,
    SquareCalculator, SquareShape, TriangleCalculator, TriangleShape,
};

pub struct ShapeFactory;

impl ShapeFactory {
    pub fn create_calculator(kind: ShapeKind, input: ShapeCalculationInput) -> ShapeCalculator {
        match kind {
            ShapeKind::Circle => ShapeCalculator::Circle(CircleCalculator::new(input)),
            ShapeKind::Square => ShapeCalculator::Square(SquareCalculator::new(input)),
            ShapeKind::Triangle => ShapeCalculator::Triangle(TriangleCalculator::new(input)),
        }
    }

    pub fn create_shape(kind: ShapeKind) -> Shape {
        match kind {
            ShapeKind::Circle => Shape::Circle(CircleShape),
            ShapeKind::Square => Shape::Square(SquareShape),
            ShapeKind::Triangle => Shape::Triangle(TriangleShape),
        }
    }

    /// Calculator for a shape kind given by name
    pub fn calculator_for_name(
        name: &str,
        input: ShapeCalculationInput,
    ) -> Result<ShapeCalculator, ShapeError> {
        let kind: ShapeKind = name.parse()?;
        Ok(Self::create_calculator(kind, input))
    }

    /// Point generator for a shape kind given by name
    pub fn shape_for_name(name: &str) -> Result<Shape, ShapeError> {
        let kind: ShapeKind = name.parse()?;
        Ok(Self::create_shape(kind))
    }
}

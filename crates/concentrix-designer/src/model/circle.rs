use concentrix_core::ShapeKind;

use super::{DiameterCalculator, Point, ShapeCalculationInput, ShapeGeometry, ShapeOutline};

#[derive(Debug, Clone, PartialEq)]
pub struct CircleCalculator {
    input: ShapeCalculationInput,
}

impl CircleCalculator {
    pub fn new(input: ShapeCalculationInput) -> Self {
        Self { input }
    }
}

impl DiameterCalculator for CircleCalculator {
    fn input(&self) -> &ShapeCalculationInput {
        &self.input
    }

    fn step(&self) -> f64 {
        self.input.spacing
    }

    fn calculate_outer_diameter(&self, parent_inner: f64) -> f64 {
        // The incircle of an equilateral triangle has half the diameter of its circumcircle.
        if self.input.parent_shape == Some(ShapeKind::Triangle) {
            return parent_inner / 2.0;
        }
        parent_inner
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CircleShape;

impl ShapeGeometry for CircleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    // Rotation has no effect on a circle.
    fn outline(&self, center: Point, size: f64, _rotation: f64) -> ShapeOutline {
        ShapeOutline::Circle {
            center,
            radius: size / 2.0,
        }
    }
}

use std::f64::consts::SQRT_2;

use concentrix_core::ShapeKind;

use super::{DiameterCalculator, Point, ShapeCalculationInput, ShapeGeometry, ShapeOutline};

/// Diameter algebra for squares
///
/// A square's size is its side length. Its inner boundary subtracts `spacing`
/// from the side directly, while circles and triangles subtract from a
/// diameter, so equal spacing does not give equal visual gaps across kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareCalculator {
    input: ShapeCalculationInput,
}

impl SquareCalculator {
    pub fn new(input: ShapeCalculationInput) -> Self {
        Self { input }
    }
}

impl DiameterCalculator for SquareCalculator {
    fn input(&self) -> &ShapeCalculationInput {
        &self.input
    }

    fn step(&self) -> f64 {
        self.input.spacing
    }

    /// Side of the largest square inscribed in a circle of diameter `parent_inner`
    fn calculate_outer_diameter(&self, parent_inner: f64) -> f64 {
        parent_inner / SQRT_2
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquareShape;

impl SquareShape {
    /// Corners rotated about `center`: top-left, top-right, bottom-right, bottom-left
    pub fn corners(center: Point, size: f64, rotation: f64) -> [Point; 4] {
        let half = size / 2.0;
        let (sin, cos) = rotation.to_radians().sin_cos();
        [(-half, -half), (half, -half), (half, half), (-half, half)].map(|(x, y)| {
            Point::new(center.x + x * cos - y * sin, center.y + x * sin + y * cos)
        })
    }
}

impl ShapeGeometry for SquareShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn outline(&self, center: Point, size: f64, rotation: f64) -> ShapeOutline {
        if rotation == 0.0 {
            let half = size / 2.0;
            return ShapeOutline::Rect {
                origin: Point::new(center.x - half, center.y - half),
                side: size,
            };
        }
        ShapeOutline::Polygon(Self::corners(center, size, rotation).to_vec())
    }
}

use std::f64::consts::{FRAC_PI_2, PI};

use concentrix_core::ShapeKind;

use super::{DiameterCalculator, Point, ShapeCalculationInput, ShapeGeometry, ShapeOutline};

/// Ratio between a triangle's diameter step and its edge-to-edge spacing
///
/// Edges of two concentric equilateral triangles are `(R1 - R2) * cos(30°)` apart,
/// so an edge gap of `spacing` needs a diameter step of `spacing * 4 / sqrt(3)`.
pub fn triangle_spacing_factor() -> f64 {
    4.0 / 3.0_f64.sqrt()
}

/// Diameter algebra for equilateral triangles, sized by their circumscribed circle
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCalculator {
    input: ShapeCalculationInput,
}

impl TriangleCalculator {
    pub fn new(input: ShapeCalculationInput) -> Self {
        Self { input }
    }
}

impl DiameterCalculator for TriangleCalculator {
    fn input(&self) -> &ShapeCalculationInput {
        &self.input
    }

    fn step(&self) -> f64 {
        self.input.spacing * triangle_spacing_factor()
    }

    // The circumcircle coincides with the parent's inner boundary.
    fn calculate_outer_diameter(&self, parent_inner: f64) -> f64 {
        parent_inner
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriangleShape;

impl TriangleShape {
    /// Vertices on the circumcircle, starting at the top and proceeding clockwise
    pub fn vertices(center: Point, size: f64, rotation: f64) -> [Point; 3] {
        let radius = size / 2.0;
        let start = -FRAC_PI_2 + rotation.to_radians();
        [0.0, 1.0, 2.0].map(|k: f64| {
            let angle = start + k * 2.0 * PI / 3.0;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
    }
}

impl ShapeGeometry for TriangleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn outline(&self, center: Point, size: f64, rotation: f64) -> ShapeOutline {
        ShapeOutline::Polygon(Self::vertices(center, size, rotation).to_vec())
    }
}

use serde::{Deserialize, Serialize};

use concentrix_core::{ConcentricDiameters, Direction, LayerConfig, ShapeKind};

mod circle;
mod outline;
mod square;
mod triangle;

pub use circle::{CircleCalculator, CircleShape};
pub use outline::ShapeOutline;
pub use square::{SquareCalculator, SquareShape};
pub use triangle::{triangle_spacing_factor, TriangleCalculator, TriangleShape};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Inputs shared by every diameter calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeCalculationInput {
    /// Prime size of the layer, zero while it is still being derived
    pub outer: f64,
    pub spacing: f64,
    pub count: u32,
    pub direction: Direction,
    /// Shape kind of the enclosing layer
    pub parent_shape: Option<ShapeKind>,
    /// Spacing of the enclosing layer
    pub parent_spacing: Option<f64>,
}

impl ShapeCalculationInput {
    pub fn new(outer: f64, spacing: f64, count: u32, direction: Direction) -> Self {
        Self {
            outer,
            spacing,
            count,
            direction,
            parent_shape: None,
            parent_spacing: None,
        }
    }

    /// Input for `layer`, nested in `parent` when given. `outer` starts at zero.
    pub fn for_layer(layer: &LayerConfig, parent: Option<&LayerConfig>) -> Self {
        Self {
            outer: 0.0,
            spacing: layer.spacing,
            count: layer.count,
            direction: layer.direction,
            parent_shape: parent.map(|p| p.shape),
            parent_spacing: parent.map(|p| p.spacing),
        }
    }

    pub fn with_outer(mut self, outer: f64) -> Self {
        self.outer = outer;
        self
    }

    pub fn with_parent(mut self, shape: ShapeKind, spacing: f64) -> Self {
        self.parent_shape = Some(shape);
        self.parent_spacing = Some(spacing);
        self
    }
}

/// Diameter algebra of one shape kind
///
/// Implementors supply the parent relationship and the step between
/// concentric sizes; inner boundary and the stepping rule are shared.
pub trait DiameterCalculator {
    fn input(&self) -> &ShapeCalculationInput;

    /// Distance between two consecutive concentric sizes
    fn step(&self) -> f64;

    /// Outer boundary of this shape nested in a parent with the given inner boundary
    fn calculate_outer_diameter(&self, parent_inner: f64) -> f64;

    fn calculate_inner_diameter(&self) -> f64 {
        self.input().outer - self.step()
    }

    /// Sizes beyond the prime shape; inward sizes at or below zero are dropped.
    fn calculate_additional_diameters(&self, inner: f64) -> Vec<f64> {
        let input = self.input();
        let step = self.step();
        let mut additional = Vec::new();

        for i in 1..=input.count {
            let offset = f64::from(i) * step;
            if input.direction.includes_outward() {
                additional.push(input.outer + offset);
            }
            if input.direction.includes_inward() {
                let inward = inner - offset;
                if inward > 0.0 {
                    additional.push(inward);
                }
            }
        }

        additional
    }

    fn calculate_layer_diameters(&self) -> ConcentricDiameters {
        let inner = self.calculate_inner_diameter();
        let additional = self.calculate_additional_diameters(inner);
        ConcentricDiameters::from_parts(self.input().outer, inner, additional)
    }
}

/// Point generation for one shape kind
pub trait ShapeGeometry {
    fn kind(&self) -> ShapeKind;

    /// Outline of the shape at `size` around `center`, rotated by `rotation` degrees
    fn outline(&self, center: Point, size: f64, rotation: f64) -> ShapeOutline;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeCalculator {
    Circle(CircleCalculator),
    Square(SquareCalculator),
    Triangle(TriangleCalculator),
}

impl ShapeCalculator {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeCalculator::Circle(_) => ShapeKind::Circle,
            ShapeCalculator::Square(_) => ShapeKind::Square,
            ShapeCalculator::Triangle(_) => ShapeKind::Triangle,
        }
    }
}

impl DiameterCalculator for ShapeCalculator {
    fn input(&self) -> &ShapeCalculationInput {
        match self {
            ShapeCalculator::Circle(c) => c.input(),
            ShapeCalculator::Square(c) => c.input(),
            ShapeCalculator::Triangle(c) => c.input(),
        }
    }

    fn step(&self) -> f64 {
        match self {
            ShapeCalculator::Circle(c) => c.step(),
            ShapeCalculator::Square(c) => c.step(),
            ShapeCalculator::Triangle(c) => c.step(),
        }
    }

    fn calculate_outer_diameter(&self, parent_inner: f64) -> f64 {
        match self {
            ShapeCalculator::Circle(c) => c.calculate_outer_diameter(parent_inner),
            ShapeCalculator::Square(c) => c.calculate_outer_diameter(parent_inner),
            ShapeCalculator::Triangle(c) => c.calculate_outer_diameter(parent_inner),
        }
    }

    fn calculate_layer_diameters(&self) -> ConcentricDiameters {
        match self {
            ShapeCalculator::Circle(c) => c.calculate_layer_diameters(),
            ShapeCalculator::Square(c) => c.calculate_layer_diameters(),
            ShapeCalculator::Triangle(c) => c.calculate_layer_diameters(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle(CircleShape),
    Square(SquareShape),
    Triangle(TriangleShape),
}

impl ShapeGeometry for Shape {
    fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(s) => s.kind(),
            Shape::Square(s) => s.kind(),
            Shape::Triangle(s) => s.kind(),
        }
    }

    fn outline(&self, center: Point, size: f64, rotation: f64) -> ShapeOutline {
        match self {
            Shape::Circle(s) => s.outline(center, size, rotation),
            Shape::Square(s) => s.outline(center, size, rotation),
            Shape::Triangle(s) => s.outline(center, size, rotation),
        }
    }
}

use lyon::math::{point, Box2D};
use lyon::path::{Path, Winding};

use super::Point;

/// Drawable geometry produced by point generation
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeOutline {
    /// Circle given by center and radius
    Circle { center: Point, radius: f64 },
    /// Axis-aligned square given by its top-left corner and side length
    Rect { origin: Point, side: f64 },
    /// Closed polygon through the given vertices
    Polygon(Vec<Point>),
}

impl ShapeOutline {
    /// Closed lyon path tracing the outline
    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();
        match self {
            ShapeOutline::Circle { center, radius } => {
                builder.add_circle(
                    point(center.x as f32, center.y as f32),
                    *radius as f32,
                    Winding::Positive,
                );
            }
            ShapeOutline::Rect { origin, side } => {
                builder.add_rectangle(
                    &Box2D::new(
                        point(origin.x as f32, origin.y as f32),
                        point((origin.x + side) as f32, (origin.y + side) as f32),
                    ),
                    Winding::Positive,
                );
            }
            ShapeOutline::Polygon(vertices) => {
                if let Some((first, rest)) = vertices.split_first() {
                    builder.begin(point(first.x as f32, first.y as f32));
                    for v in rest {
                        builder.line_to(point(v.x as f32, v.y as f32));
                    }
                    builder.close();
                }
            }
        }
        builder.build()
    }

    /// Axis-aligned bounds as (min_x, min_y, max_x, max_y)
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            ShapeOutline::Circle { center, radius } => (
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            ),
            ShapeOutline::Rect { origin, side } => {
                (origin.x, origin.y, origin.x + side, origin.y + side)
            }
            ShapeOutline::Polygon(vertices) => vertices.iter().fold(
                (
                    f64::INFINITY,
                    f64::INFINITY,
                    f64::NEG_INFINITY,
                    f64::NEG_INFINITY,
                ),
                |(min_x, min_y, max_x, max_y), v| {
                    (min_x.min(v.x), min_y.min(v.y), max_x.max(v.x), max_y.max(v.y))
                },
            ),
        }
    }

    /// Corner points for polygonal outlines; empty for circles
    pub fn vertices(&self) -> Vec<Point> {
        match self {
            ShapeOutline::Circle { .. } => Vec::new(),
            ShapeOutline::Rect { origin, side } => vec![
                *origin,
                Point::new(origin.x + side, origin.y),
                Point::new(origin.x + side, origin.y + side),
                Point::new(origin.x, origin.y + side),
            ],
            ShapeOutline::Polygon(vertices) => vertices.clone(),
        }
    }
}

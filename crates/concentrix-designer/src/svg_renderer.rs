//! SVG document renderer for composed layers
//! Renders the flat item list as a standalone SVG document:
//! - One `<mask>` per mask item, a white cutout on a black field
//! - One `<g>` per geometric item with every concentric outline of the layer
//! - Geometric items clipped by the mask they reference

use lyon::path::{Event, Path};
use serde::{Deserialize, Serialize};
use tracing::debug;

use concentrix_core::{FlatLayerItem, GeometricItem, MaskItem};

use crate::factory::ShapeFactory;
use crate::flat_layers::item_diameters;
use crate::model::{Point, ShapeGeometry, ShapeOutline};

/// Drawing surface the composition is centered on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgCanvas {
    pub width: f64,
    pub height: f64,
    /// Background fill, transparent when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
        }
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render an outline as a single SVG element with the given attributes
pub fn outline_element(outline: &ShapeOutline, attrs: &str) -> String {
    match outline {
        ShapeOutline::Circle { center, radius } => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {} />",
            center.x, center.y, radius, attrs
        ),
        ShapeOutline::Rect { origin, side } => format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {} />",
            origin.x, origin.y, side, side, attrs
        ),
        ShapeOutline::Polygon(_) => {
            format!("<path d=\"{}\" {} />", path_data(&outline.to_path()), attrs)
        }
    }
}

/// SVG path data for a lyon path
pub fn path_data(path: &Path) -> String {
    let mut commands = Vec::new();
    for event in path.iter() {
        match event {
            Event::Begin { at } => commands.push(format!("M {} {}", at.x, at.y)),
            Event::Line { to, .. } => commands.push(format!("L {} {}", to.x, to.y)),
            Event::Quadratic { ctrl, to, .. } => {
                commands.push(format!("Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y))
            }
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => commands.push(format!(
                "C {} {} {} {} {} {}",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            )),
            Event::End { close, .. } => {
                if close {
                    commands.push("Z".to_string());
                }
            }
        }
    }
    commands.join(" ")
}

/// Render a mask definition
pub fn render_mask(mask: &MaskItem, canvas: &SvgCanvas) -> String {
    let shape = ShapeFactory::create_shape(mask.shape);
    let outline = shape.outline(canvas.center(), mask.size, mask.rotation);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<mask id=\"{}\" maskUnits=\"userSpaceOnUse\" x=\"0\" y=\"0\" width=\"{}\" height=\"{}\">",
        mask.id, canvas.width, canvas.height
    ));
    svg.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"black\" />",
        canvas.width, canvas.height
    ));
    if mask.size > 0.0 {
        svg.push_str(&outline_element(&outline, "fill=\"white\""));
    }
    svg.push_str("</mask>");
    svg
}

/// Render a geometric layer with all of its concentric outlines
pub fn render_layer(item: &GeometricItem, canvas: &SvgCanvas) -> String {
    let shape = ShapeFactory::create_shape(item.shape);
    let center = canvas.center();
    let diameters = item_diameters(item);
    let stroke = escape_attr(&item.stroke.color);

    let mut svg = String::new();
    match item.mask_id {
        Some(mask_id) => svg.push_str(&format!(
            "<g id=\"{}\" mask=\"url(#{})\">",
            item.id, mask_id
        )),
        None => svg.push_str(&format!("<g id=\"{}\">", item.id)),
    }

    if item.center_fill {
        if let Some(innermost) = diameters.innermost() {
            let outline = shape.outline(center, innermost, item.rotation);
            svg.push_str(&outline_element(
                &outline,
                &format!("fill=\"{}\" class=\"center-fill\"", stroke),
            ));
        }
    }

    for (index, size) in diameters.all.iter().enumerate() {
        let outline = shape.outline(center, *size, item.rotation);
        let class = if *size == item.size { " class=\"prime\"" } else { "" };
        debug!("Layer {} outline {} at size {}", item.id, index, size);
        svg.push_str(&outline_element(
            &outline,
            &format!(
                "fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}",
                stroke, item.stroke.width, class
            ),
        ));
    }

    svg.push_str("</g>");
    svg
}

/// Render the complete SVG document for a composed item list
pub fn render_document(items: &[FlatLayerItem], canvas: &SvgCanvas) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0}\" height=\"{1}\" viewBox=\"0 0 {0} {1}\">",
        canvas.width, canvas.height
    ));

    if let Some(background) = &canvas.background {
        svg.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\" />",
            canvas.width,
            canvas.height,
            escape_attr(background)
        ));
    }

    let masks: Vec<&MaskItem> = items.iter().filter_map(FlatLayerItem::as_mask).collect();
    if !masks.is_empty() {
        svg.push_str("<defs>");
        for mask in masks {
            svg.push_str(&render_mask(mask, canvas));
        }
        svg.push_str("</defs>");
    }

    for item in items.iter().filter_map(FlatLayerItem::as_geometric) {
        svg.push_str(&render_layer(item, canvas));
    }

    svg.push_str("</svg>");
    debug!("Rendered {} items to {} bytes of SVG", items.len(), svg.len());
    svg
}

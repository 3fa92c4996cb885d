use concentrix_core::{Direction, LayerConfig, ShapeKind};
use concentrix_designer::svg_renderer::{outline_element, path_data, render_layer};
use concentrix_designer::{compose_layers, render_document, Point, ShapeOutline, SvgCanvas};

fn sample_layers() -> Vec<LayerConfig> {
    vec![
        LayerConfig::new(ShapeKind::Circle, 10.0, 2, Direction::Outward).with_stroke("#112233", 2.0),
        LayerConfig::new(ShapeKind::Triangle, 5.0, 1, Direction::Inward).with_rotation(30.0),
        LayerConfig::new(ShapeKind::Square, 4.0, 0, Direction::Outward).with_center_fill(true),
    ]
}

#[test]
fn test_document_structure() {
    let items = compose_layers(&sample_layers(), 300.0);
    let svg = render_document(&items, &SvgCanvas::new(400.0, 400.0));

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains("viewBox=\"0 0 400 400\""));
    assert_eq!(svg.matches("<mask ").count(), 2);
    assert_eq!(svg.matches("<g ").count(), 3);
    assert!(svg.contains("<g id=\"layer-0\">"));
    assert!(svg.contains("<g id=\"layer-1\" mask=\"url(#mask-0)\">"));
    assert!(svg.contains("<g id=\"layer-2\" mask=\"url(#mask-1)\">"));
}

#[test]
fn test_masks_are_defined_before_use() {
    let items = compose_layers(&sample_layers(), 300.0);
    let svg = render_document(&items, &SvgCanvas::new(400.0, 400.0));

    let defs_end = svg.find("</defs>").unwrap();
    let first_use = svg.find("url(#mask-0)").unwrap();
    assert!(defs_end < first_use);
    assert!(svg.contains("<mask id=\"mask-0\""));
    assert!(svg.contains("fill=\"white\""));
}

#[test]
fn test_layer_draws_every_concentric_size() {
    let items = compose_layers(&sample_layers(), 300.0);
    let first = items[0].as_geometric().unwrap();
    let svg = render_layer(first, &SvgCanvas::new(400.0, 400.0));

    // outer, inner and two outward repeats
    assert_eq!(svg.matches("<circle ").count(), 4);
    assert_eq!(svg.matches("class=\"prime\"").count(), 1);
    assert!(svg.contains("stroke=\"#112233\""));
    assert!(svg.contains("r=\"150\""));
}

#[test]
fn test_center_fill_is_rendered_once() {
    let items = compose_layers(&sample_layers(), 300.0);
    let last = items.last().unwrap().as_geometric().unwrap();
    let svg = render_layer(last, &SvgCanvas::new(400.0, 400.0));
    assert_eq!(svg.matches("class=\"center-fill\"").count(), 1);
}

#[test]
fn test_single_layer_has_no_defs() {
    let items = compose_layers(
        &[LayerConfig::new(ShapeKind::Square, 10.0, 0, Direction::Outward)],
        100.0,
    );
    let svg = render_document(&items, &SvgCanvas::new(200.0, 200.0).with_background("white"));
    assert!(!svg.contains("<defs>"));
    assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"200\" height=\"200\" fill=\"white\" />"));
    assert!(svg.contains("<rect x=\"50\" y=\"50\" width=\"100\" height=\"100\""));
}

#[test]
fn test_outline_element_formats() {
    let polygon = ShapeOutline::Polygon(vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(2.0, 3.0),
    ]);
    assert_eq!(
        outline_element(&polygon, "fill=\"none\""),
        "<path d=\"M 0 0 L 4 0 L 2 3 Z\" fill=\"none\" />"
    );
}

#[test]
fn test_polygonal_layers_render_as_paths() {
    let layers = vec![
        LayerConfig::new(ShapeKind::Triangle, 10.0, 1, Direction::Both),
        LayerConfig::new(ShapeKind::Circle, 5.0, 0, Direction::Outward),
        LayerConfig::new(ShapeKind::Square, 3.0, 0, Direction::Outward).with_rotation(45.0),
    ];
    let items = compose_layers(&layers, 200.0);
    let canvas = SvgCanvas::new(200.0, 200.0);

    let triangle = render_layer(items[0].as_geometric().unwrap(), &canvas);
    // prime, inner and one repeat either side
    assert_eq!(triangle.matches("<path d=\"M ").count(), 4);
    assert_eq!(triangle.matches(" Z\"").count(), 4);
    assert!(triangle.contains("<path d=\"M 100 0 L "));

    let square = render_layer(items.last().unwrap().as_geometric().unwrap(), &canvas);
    assert!(square.contains("<path d=\"M "));
    assert!(!square.contains("<rect "));

    let svg = render_document(&items, &canvas);
    assert!(!svg.contains("<polygon"));
}

#[test]
fn test_path_data_from_lyon_path() {
    let outline = ShapeOutline::Rect {
        origin: Point::new(1.0, 2.0),
        side: 3.0,
    };
    let data = path_data(&outline.to_path());
    assert!(data.starts_with("M 1 2 "));
    assert!(data.ends_with(" Z"));
    assert_eq!(data.matches('L').count(), 3);
}

#[test]
fn test_stroke_color_is_escaped() {
    let items = compose_layers(
        &[LayerConfig::new(ShapeKind::Circle, 1.0, 0, Direction::Outward)
            .with_stroke("\"><script>", 1.0)],
        10.0,
    );
    let svg = render_document(&items, &SvgCanvas::new(20.0, 20.0));
    assert!(!svg.contains("<script>"));
    assert!(svg.contains("&quot;&gt;&lt;script&gt;"));
}

use concentrix_core::{Direction, ShapeKind};
use concentrix_settings::{CompositionConfig, SettingsError};
use tempfile::tempdir;

const SAMPLE_TOML: &str = r##"
startingSize = 300.0

[canvas]
width = 320.0
height = 320.0
background = "#ffffff"

[[layers]]
shape = "circle"
spacing = 10.0
count = 2
direction = "both"
strokeColor = "#000000"
strokeWidth = 2.0

[[layers]]
shape = "square"
spacing = 5.0
count = 0
direction = "outward"
rotation = 45.0
centerFill = true
"##;

#[test]
fn test_load_toml_sample() {
    let config = CompositionConfig::from_toml_str(SAMPLE_TOML).unwrap();
    assert_eq!(config.starting_size, 300.0);
    assert_eq!(config.canvas.background.as_deref(), Some("#ffffff"));
    assert_eq!(config.layers.len(), 2);
    assert_eq!(config.layers[0].direction, Direction::Both);
    assert_eq!(config.layers[1].shape, ShapeKind::Square);
    assert_eq!(config.layers[1].rotation, Some(45.0));
    // Stroke attributes fall back to defaults when omitted.
    assert_eq!(config.layers[1].stroke_color, "#000000");
    assert_eq!(config.layers[1].stroke_width, 1.0);
}

#[test]
fn test_save_and_reload_both_formats() {
    let dir = tempdir().unwrap();
    let config = CompositionConfig::from_toml_str(SAMPLE_TOML).unwrap();

    for name in ["nested/composition.toml", "composition.json"] {
        let path = dir.path().join(name);
        config.save_to_file(&path).unwrap();
        let reloaded = CompositionConfig::load_from_file(&path).unwrap();
        assert_eq!(reloaded, config, "round trip through {name}");
    }
}

#[test]
fn test_unknown_shape_kind_fails_to_load() {
    let json = r#"{
        "startingSize": 100,
        "layers": [
            {"shape": "circle", "spacing": 5, "count": 0, "direction": "outward"},
            {"shape": "hexagon", "spacing": 5, "count": 0, "direction": "outward"}
        ]
    }"#;
    let err = CompositionConfig::from_json_str(json).unwrap_err();
    assert!(matches!(err, SettingsError::JsonError(_)));
    assert!(err.to_string().contains("Unrecognized shape kind: hexagon"));
}

#[test]
fn test_unknown_direction_fails_to_load() {
    let toml = r#"
startingSize = 100.0

[[layers]]
shape = "triangle"
spacing = 5.0
count = 1
direction = "sideways"
"#;
    let err = CompositionConfig::from_toml_str(toml).unwrap_err();
    assert!(err.to_string().contains("Unrecognized direction: sideways"));
}

#[test]
fn test_invalid_config_is_not_saved() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    let mut config = CompositionConfig::default();
    config.canvas.width = 0.0;

    assert!(matches!(
        config.save_to_file(&path),
        Err(SettingsError::InvalidSetting { .. })
    ));
    assert!(!path.exists());
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("composition.yaml");
    std::fs::write(&path, "startingSize: 1").unwrap();
    assert!(matches!(
        CompositionConfig::load_from_file(&path),
        Err(SettingsError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempdir().unwrap();
    let config = CompositionConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, CompositionConfig::default());
}

use eframe_pen::config::{ConfigError, EditorConfig};
use eframe_pen::error::EditorError;
use eframe_pen::host::{HostError, ShapeDescriptor, display_size};
use eframe_pen::path::Path;
use egui::{Pos2, Vec2};

fn closed_path(points: &[(f32, f32)]) -> Path {
    points
        .iter()
        .fold(Path::new(), |path, &(x, y)| path.add_anchor_at_end(Pos2::new(x, y)))
        .set_closed(true)
}

#[test]
fn test_display_size_caps_longest_side() {
    assert_eq!(display_size(Vec2::new(400.0, 100.0), 200.0), Vec2::new(200.0, 50.0));
    assert_eq!(display_size(Vec2::new(100.0, 500.0), 200.0), Vec2::new(40.0, 200.0));
    // small shapes are never scaled up
    assert_eq!(display_size(Vec2::new(80.0, 60.0), 200.0), Vec2::new(80.0, 60.0));
}

#[test]
fn test_open_or_empty_paths_are_refused() {
    let config = EditorConfig::default();

    let open = Path::new().add_anchor_at_end(Pos2::new(1.0, 1.0));
    assert_eq!(ShapeDescriptor::from_path(&open, &config), Err(EditorError::PathNotClosed));
    assert_eq!(ShapeDescriptor::from_path(&Path::new(), &config), Err(EditorError::PathNotClosed));
}

#[test]
fn test_descriptor_json_uses_host_field_names() {
    let mut config = EditorConfig::default();
    config.insert_position = Pos2::new(30.0, 40.0);
    let path = closed_path(&[(10.0, 10.0), (310.0, 10.0), (310.0, 160.0)]);

    let shape = ShapeDescriptor::from_path(&path, &config).unwrap();
    let json: serde_json::Value = serde_json::from_str(&shape.to_json().unwrap()).unwrap();

    assert_eq!(json["top"], 40.0);
    assert_eq!(json["left"], 30.0);
    assert_eq!(json["width"], 200.0);
    assert_eq!(json["height"], 100.0);
    assert_eq!(json["viewBox"]["width"], 300.0);
    assert_eq!(json["viewBox"]["height"], 150.0);
    assert_eq!(json["viewBox"]["top"], 0.0);
    assert_eq!(json["paths"][0]["fill"]["dropTarget"], true);
    assert!(json["paths"][0]["fill"].get("color").is_none());
    assert!(json["paths"][0]["d"].as_str().unwrap().starts_with("M 0 0 C"));
}

#[test]
fn test_host_error_parsing() {
    let structured = HostError::from_response(r#"{"message":"not allowed","code":"403"}"#);
    assert_eq!(
        structured,
        HostError::Structured {
            message: "not allowed".to_owned(),
            code: Some("403".to_owned()),
        }
    );
    assert_eq!(structured.message(), "not allowed");

    let no_code = HostError::from_response(r#"{"message":"busy"}"#);
    assert_eq!(no_code.message(), "busy");

    let raw = HostError::from_response("<html>502</html>");
    assert_eq!(raw, HostError::Raw("<html>502</html>".to_owned()));
    assert_eq!(raw.to_string(), "<html>502</html>");
}

#[test]
fn test_config_defaults() {
    let config = EditorConfig::default();
    assert_eq!(config.canvas_size, Vec2::new(600.0, 400.0));
    assert_eq!(config.host_target_width, 200.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_config_falls_back_to_defaults() {
    let config = EditorConfig::from_json(r#"{"hit_radius": 12.0}"#).unwrap();
    assert_eq!(config.hit_radius, 12.0);
    assert_eq!(config.grid_spacing, EditorConfig::default().grid_spacing);
}

#[test]
fn test_config_survives_json() {
    let mut config = EditorConfig::default();
    config.canvas_size = Vec2::new(800.0, 500.0);
    config.default_background_opacity = 0.25;

    let restored = EditorConfig::from_json(&config.to_json().unwrap()).unwrap();
    assert_eq!(restored, config);
}

#[test]
fn test_invalid_config_is_rejected() {
    let result = EditorConfig::from_json(r#"{"default_background_opacity": 3.0}"#);
    assert!(matches!(result, Err(ConfigError::InvalidValue(_))));

    let result = EditorConfig::from_json(r#"{"canvas_size": {"x": 0.0, "y": 100.0}}"#);
    assert!(matches!(result, Err(ConfigError::InvalidValue(_))));

    let result = EditorConfig::from_json("not json");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

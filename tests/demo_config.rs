use webgl_demos::domain::demo::{DemoConfig, Primitive};
use webgl_demos::domain::errors::ConfigurationError;

#[test]
fn empty_object_is_the_default() {
    assert_eq!(DemoConfig::from_json("{}").unwrap(), DemoConfig::default());
}

#[test]
fn default_serializes_to_the_documented_shape() {
    let json = serde_json::to_string(&DemoConfig::default()).unwrap();
    insta::assert_snapshot!(json, @r#"{"clear_color":[0.0,0.0,0.0,1.0],"field_of_view_degrees":45.0,"z_near":0.1,"z_far":100.0,"translation":[0.0,0.0,-6.0],"flat_color":[0.0,1.0,1.0,1.0],"rotation_speed":1.0,"primitive":null}"#);
}

#[test]
fn partial_config_keeps_other_defaults() {
    let config =
        DemoConfig::from_json(r#"{"rotation_speed": 2.0, "primitive": "line_loop"}"#).unwrap();
    assert_eq!(config.rotation_speed, 2.0);
    assert_eq!(config.primitive, Some(Primitive::LineLoop));
    assert_eq!(config.translation, [0.0, 0.0, -6.0]);
}

#[test]
fn rejects_bad_clip_planes() {
    let err = DemoConfig::from_json(r#"{"z_near": 0.0}"#).unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidParameter { name: "z_near", .. }));

    let err = DemoConfig::from_json(r#"{"z_near": 5.0, "z_far": 5.0}"#).unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidParameter { name: "z_far", .. }));
}

#[test]
fn rejects_field_of_view_out_of_range() {
    for fov in ["0", "180", "-10"] {
        let err = DemoConfig::from_json(&format!(r#"{{"field_of_view_degrees": {fov}}}"#))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidParameter { name: "field_of_view_degrees", .. }
        ));
    }
}

#[test]
fn rejects_colour_channels_outside_unit_range() {
    let err = DemoConfig::from_json(r#"{"flat_color": [0.0, 1.5, 0.0, 1.0]}"#).unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidParameter { name: "flat_color", .. }));
}

#[test]
fn malformed_json_is_reported() {
    let err = DemoConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigurationError::Malformed(_)));
    assert!(DemoConfig::from_json(r#"{"primitive": "quads"}"#).is_err());
}

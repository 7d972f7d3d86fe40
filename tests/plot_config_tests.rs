use plot_rs::api::{PLOT_CONFIG_JSON_SCHEMA_V1, PlotConfig};
use plot_rs::core::{AxisRange, Edge, Viewport};
use plot_rs::PlotError;

#[test]
fn config_json_round_trip_preserves_every_field() {
    let config = PlotConfig::new(Viewport::new(640, 480))
        .with_x_range(AxisRange::new(-5.0, 5.0).expect("x"))
        .with_y_range(AxisRange::new(0.0, 1.0).expect("y"))
        .with_autoscale_margin(0.05)
        .with_outer_padding_px(4.0)
        .with_tick_label_font_size(10.0)
        .with_hidden_edge(Edge::Top)
        .with_hidden_edge(Edge::Right);

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {PLOT_CONFIG_JSON_SCHEMA_V1}")));
    assert!(json.contains("\"top\""));

    let parsed = PlotConfig::from_json_str(&json).expect("parse contract");
    assert_eq!(parsed, config);
}

#[test]
fn bare_config_json_uses_defaults_for_missing_fields() {
    let parsed = PlotConfig::from_json_str(r#"{"viewport": {"width": 320, "height": 200}}"#)
        .expect("parse bare config");
    assert_eq!(parsed, PlotConfig::new(Viewport::new(320, 200)));
}

#[test]
fn hidden_edges_are_not_duplicated() {
    let config = PlotConfig::new(Viewport::new(10, 10))
        .with_hidden_edge(Edge::Left)
        .with_hidden_edge(Edge::Left);
    assert_eq!(config.hidden_edges, vec![Edge::Left]);
}

#[test]
fn unknown_edge_in_json_is_reported() {
    let err = PlotConfig::from_json_str(
        r#"{"viewport": {"width": 320, "height": 200}, "hidden_edges": ["middle"]}"#,
    )
    .expect_err("unknown edge must fail");
    let PlotError::InvalidConfig(message) = err else {
        panic!("expected InvalidConfig, got {err:?}");
    };
    assert!(message.contains("middle"), "message was: {message}");
}

#[test]
fn inverted_range_in_json_is_rejected() {
    let err = PlotConfig::from_json_str(
        r#"{"viewport": {"width": 320, "height": 200}, "x_range": {"min": 5.0, "max": 1.0}}"#,
    )
    .expect_err("inverted range must fail");
    assert!(matches!(err, PlotError::InvalidConfig(_)));
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let err = PlotConfig::from_json_str(
        r#"{"schema_version": 99, "config": {"viewport": {"width": 1, "height": 1}}}"#,
    )
    .expect_err("unknown schema must fail");
    assert!(matches!(err, PlotError::InvalidConfig(message) if message.contains("99")));
}

#[test]
fn malformed_json_is_invalid_config() {
    let err = PlotConfig::from_json_str("{ not json").expect_err("malformed must fail");
    assert!(matches!(err, PlotError::InvalidConfig(_)));
}

#[test]
fn validation_rejects_empty_viewport_and_bad_numbers() {
    let err = PlotConfig::new(Viewport::new(0, 100))
        .validate()
        .expect_err("empty viewport");
    assert!(matches!(err, PlotError::InvalidViewport { width: 0, height: 100 }));

    let err = PlotConfig::new(Viewport::new(10, 10))
        .with_autoscale_margin(-1.0)
        .validate()
        .expect_err("negative margin");
    assert!(matches!(err, PlotError::InvalidConfig(_)));

    let err = PlotConfig::from_json_str(
        r#"{"viewport": {"width": 10, "height": 10}, "tick_label_font_size": 0.0}"#,
    )
    .expect_err("zero font size");
    assert!(matches!(err, PlotError::InvalidConfig(_)));
}

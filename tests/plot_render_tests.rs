use approx::assert_relative_eq;
use plot_rs::api::{DEFAULT_AUTOSCALE_RANGE, Plot, PlotConfig};
use plot_rs::core::{AxisRange, Coordinates, Edge, RootedVector, Vector2, VectorFieldDataSource, Viewport};
use plot_rs::plottables::{FillY, Plottable, Text, VectorField};
use plot_rs::render::NullRenderer;
use plot_rs::PlotError;

fn plot() -> Plot<NullRenderer> {
    Plot::new(NullRenderer::default(), PlotConfig::new(Viewport::new(800, 600))).expect("plot init")
}

fn band() -> FillY {
    let mut fill = FillY::new();
    fill.set_data_source([(0.0, 5.0, 1.0), (1.0, 6.0, 2.0), (2.0, 4.0, 0.0)]);
    fill
}

#[test]
fn plot_rejects_an_invalid_config() {
    let err = Plot::new(NullRenderer::default(), PlotConfig::new(Viewport::new(0, 0)))
        .err()
        .expect("empty viewport must fail");
    assert!(matches!(err, PlotError::InvalidViewport { .. }));
}

#[test]
fn empty_plot_falls_back_to_the_default_range() {
    let plot = plot();
    assert!(!plot.axis_limits().has_limits());

    let layout = plot.layout();
    let bottom = layout.panel(Edge::Bottom).expect("bottom panel");
    assert_eq!(bottom.range, DEFAULT_AUTOSCALE_RANGE);
    assert!(bottom.ticks.iter().any(|tick| tick.label == "-10"));
    assert!(bottom.ticks.iter().any(|tick| tick.label == "10"));

    let frame = plot.build_render_frame().expect("build frame");
    frame.validate().expect("valid frame");
    assert!(frame.paths.is_empty());
    assert!(!frame.lines.is_empty());
}

#[test]
fn axis_limits_union_visible_plottables_only() {
    let mut plot = plot();
    plot.add(band());
    let mut hidden = Text::new(Coordinates::new(50.0, -50.0), "far away");
    hidden.visible = false;
    plot.add(hidden);

    let limits = plot.axis_limits();
    let x = limits.x.expect("x");
    let y = limits.y.expect("y");
    assert_eq!((x.min(), x.max()), (0.0, 2.0));
    assert_eq!((y.min(), y.max()), (0.0, 6.0));
}

#[test]
fn autoscale_pads_the_data_limits_by_the_margin() {
    let mut plot = plot();
    plot.add(band());
    plot.autoscale();

    let x = plot.axis(Edge::Bottom).range().expect("x pinned");
    let y = plot.axis(Edge::Left).range().expect("y pinned");
    assert_relative_eq!(x.min(), -0.2);
    assert_relative_eq!(x.max(), 2.2);
    assert_relative_eq!(y.min(), -0.6);
    assert_relative_eq!(y.max(), 6.6);
}

#[test]
fn autoscale_pads_a_single_point() {
    let mut plot = plot();
    plot.add(Text::new(Coordinates::new(0.0, 4.0), "origin"));
    plot.autoscale();

    let x = plot.axis(Edge::Bottom).range().expect("x pinned");
    let y = plot.axis(Edge::Left).range().expect("y pinned");
    assert_eq!((x.min(), x.max()), (-1.0, 1.0));
    assert_relative_eq!(y.min(), 3.6);
    assert_relative_eq!(y.max(), 4.4);
}

#[test]
fn fixed_limits_override_autoscaling_until_cleared() {
    let mut plot = plot();
    plot.add(band());
    plot.set_limits(-1.0, 1.0, 0.0, 100.0).expect("valid limits");

    let layout = plot.layout();
    assert_eq!(
        layout.panel(Edge::Bottom).expect("bottom").range,
        AxisRange::new(-1.0, 1.0).expect("x")
    );
    assert_eq!(
        layout.panel(Edge::Right).expect("right").range,
        AxisRange::new(0.0, 100.0).expect("y")
    );

    plot.clear_limits();
    assert!(plot.axis(Edge::Bottom).range().is_none());
    let layout = plot.layout();
    assert_relative_eq!(layout.panel(Edge::Bottom).expect("bottom").range.max(), 2.2);

    let err = plot.set_limits(1.0, 0.0, 0.0, 1.0).expect_err("inverted limits");
    assert!(matches!(err, PlotError::InvalidRange { .. }));
}

#[test]
fn secondary_panels_mirror_primary_ranges_unless_set() {
    let mut plot = plot();
    plot.add(band());
    plot.axis_mut(Edge::Top)
        .set_range(100.0, 200.0)
        .expect("top range");

    let layout = plot.layout();
    assert_eq!(
        layout.panel(Edge::Top).expect("top").range,
        AxisRange::new(100.0, 200.0).expect("top")
    );
    assert_eq!(
        layout.panel(Edge::Right).expect("right").range,
        layout.panel(Edge::Left).expect("left").range
    );
    assert!(layout.panel(Edge::Top).expect("top").ticks.is_empty());
}

#[test]
fn data_rect_fits_inside_padding_and_panels() {
    let plot = plot();
    let layout = plot.layout();
    let data_rect = layout.data_rect;

    assert!(data_rect.is_valid());
    let size = |edge| layout.panel(edge).expect("panel").size;
    assert_relative_eq!(data_rect.left, 10.0 + size(Edge::Left));
    assert_relative_eq!(data_rect.right, 790.0 - size(Edge::Right));
    assert_relative_eq!(data_rect.top, 10.0 + size(Edge::Top));
    assert_relative_eq!(data_rect.bottom, 590.0 - size(Edge::Bottom));
    assert_relative_eq!(size(Edge::Top), 15.0);
    assert_eq!(plot.data_rect(), data_rect);
}

#[test]
fn hidden_edges_take_no_space_and_draw_nothing() {
    let config = PlotConfig::new(Viewport::new(400, 300))
        .with_outer_padding_px(0.0)
        .with_hidden_edge(Edge::Top)
        .with_hidden_edge(Edge::Right);
    let plot = Plot::new(NullRenderer::default(), config).expect("plot init");

    let layout = plot.layout();
    assert_relative_eq!(layout.data_rect.top, 0.0);
    assert_relative_eq!(layout.data_rect.right, 400.0);
    assert!(!plot.axis(Edge::Top).visible);
}

#[test]
fn plottables_render_before_axes_into_one_frame() {
    let mut plot = plot();
    plot.add(band());
    plot.add(Text::new(Coordinates::new(1.0, 3.0), "mean"));
    plot.add(VectorField::new(Box::new(VectorFieldDataSource::new(vec![
        RootedVector::new(Coordinates::new(1.0, 1.0), Vector2::new(1.0, 1.0)),
    ]))));

    let frame = plot.build_render_frame().expect("build frame");
    frame.validate().expect("valid frame");
    assert_eq!(frame.paths.len(), 2);
    assert_eq!(frame.texts[0].text, "mean");
    assert!(frame.texts.len() > 1, "expected tick labels after the text plottable");
}

#[test]
fn degenerate_limits_skip_plottables_but_keep_axis_frames() {
    let mut plot = plot();
    plot.add(band());
    plot.set_limits(1.0, 1.0, 0.0, 10.0).expect("equal bounds are valid");

    let frame = plot.build_render_frame().expect("build frame");
    assert!(frame.paths.is_empty());
    assert!(frame.lines.len() >= 4, "axis frames are still drawn");
}

#[test]
fn render_hands_the_frame_to_the_renderer() {
    let mut plot = plot();
    plot.add(band());
    plot.render().expect("render");
    plot.render().expect("render again");

    let renderer = plot.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_path_count, 1);
    assert!(renderer.last_line_count > 0);
    assert!(renderer.last_text_count > 0);
    assert_eq!(renderer.last_frame().expect("frame").paths.len(), 1);
}

#[test]
fn plottables_can_be_removed_and_cleared() {
    let mut plot = plot();
    let first = plot.add(band());
    let second = plot.add(Text::new(Coordinates::new(0.0, 0.0), "a"));
    assert_eq!((first, second), (0, 1));

    let removed = plot.remove(first).expect("removed");
    assert!(removed.axis_limits().has_limits());
    assert_eq!(plot.plottables().len(), 1);
    assert!(plot.remove(5).is_none());

    plot.clear();
    assert!(plot.plottables().is_empty());
}

#[test]
fn legend_items_come_from_visible_plottables_in_order() {
    let mut plot = plot();
    let mut fill = band();
    fill.label = Some("band".to_owned());
    plot.add(fill);
    let mut field = VectorField::new(Box::new(VectorFieldDataSource::default()));
    field.label = Some("flow".to_owned());
    plot.add(field);
    let mut hidden = band();
    hidden.visible = false;
    plot.add(hidden);

    let labels: Vec<_> = plot
        .legend_items()
        .into_iter()
        .map(|item| item.label)
        .collect();
    assert_eq!(labels, vec![Some("band".to_owned()), Some("flow".to_owned())]);
}

#[test]
fn config_font_size_applies_to_tick_labels() {
    let config = PlotConfig::new(Viewport::new(400, 300)).with_tick_label_font_size(9.0);
    let plot = Plot::new(NullRenderer::default(), config).expect("plot init");
    let frame = plot.build_render_frame().expect("build frame");
    assert!(!frame.texts.is_empty());
    assert!(frame.texts.iter().all(|text| text.font_size_px == 9.0));
}

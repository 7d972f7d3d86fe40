use approx::assert_relative_eq;
use plot_rs::core::{
    Axes, AxisRange, BandPoint, Coordinates, PixelRect, Viewport, band_polygon,
};
use plot_rs::plottables::{FillY, Plottable, RenderContext};
use plot_rs::render::{Color, HatchPattern, LinePattern, PathCommand, RenderFrame};
use plot_rs::style::MarkerShape;
use proptest::prelude::*;

fn axes() -> Axes {
    Axes::new(
        AxisRange::new(0.0, 2.0).expect("x"),
        AxisRange::new(0.0, 10.0).expect("y"),
        PixelRect::new(0.0, 200.0, 0.0, 100.0),
    )
}

fn render(fill: &FillY) -> RenderFrame {
    let mut frame = RenderFrame::new(Viewport::new(200, 100));
    let mut context = RenderContext::new(&mut frame, axes());
    fill.render(&mut context).expect("render fill");
    frame
}

fn coordinates(points: &[(f64, f64)]) -> Vec<Coordinates> {
    points.iter().copied().map(Coordinates::from).collect()
}

#[test]
fn band_emits_bottoms_forward_then_tops_reversed() {
    let mut fill = FillY::new();
    fill.set_data_source([(0.0, 5.0, 1.0), (1.0, 6.0, 2.0), (2.0, 4.0, 0.0)]);

    assert_eq!(
        fill.polygon().coordinates(),
        coordinates(&[(0.0, 1.0), (1.0, 2.0), (2.0, 0.0), (2.0, 4.0), (1.0, 6.0), (0.0, 5.0)])
            .as_slice()
    );
}

#[test]
fn solver_extracts_band_samples_from_arbitrary_items() {
    struct Sample {
        time: f64,
        mean: f64,
        spread: f64,
    }
    let samples = [
        Sample { time: 0.0, mean: 3.0, spread: 1.0 },
        Sample { time: 1.0, mean: 4.0, spread: 2.0 },
    ];

    let mut fill = FillY::new();
    fill.set_data_source_with(&samples, |sample| {
        (sample.time, sample.mean + sample.spread, sample.mean - sample.spread)
    });

    assert_eq!(
        fill.polygon().coordinates(),
        coordinates(&[(0.0, 2.0), (1.0, 2.0), (1.0, 6.0), (0.0, 4.0)]).as_slice()
    );
}

#[test]
fn replacing_the_data_source_discards_the_previous_polygon() {
    let mut fill = FillY::new();
    fill.set_data_source([(0.0, 5.0, 1.0), (1.0, 6.0, 2.0)]);
    fill.set_data_source([BandPoint::new(3.0, 1.0, 0.0)]);
    assert_eq!(fill.polygon().len(), 2);
}

#[test]
fn scatter_series_band_walks_the_second_series_backwards() {
    let fill = FillY::from_scatter_series(
        &coordinates(&[(0.0, 1.0), (1.0, 2.0)]),
        &coordinates(&[(0.0, 5.0), (1.0, 6.0)]),
    );
    assert_eq!(
        fill.polygon().coordinates(),
        coordinates(&[(0.0, 1.0), (1.0, 2.0), (1.0, 6.0), (0.0, 5.0)]).as_slice()
    );
}

#[test]
fn empty_data_source_has_no_limits_and_renders_nothing() {
    let mut fill = FillY::new();
    fill.set_data_source(Vec::<BandPoint>::new());

    assert!(fill.polygon().is_empty());
    assert!(!fill.axis_limits().has_limits());
    assert!(render(&fill).is_empty());
}

#[test]
fn limits_cover_tops_and_bottoms() {
    let mut fill = FillY::new();
    fill.set_data_source([(0.0, 5.0, 1.0), (1.0, 6.0, 2.0), (2.0, 4.0, 0.0)]);
    let limits = fill.axis_limits();
    let x = limits.x.expect("x");
    let y = limits.y.expect("y");
    assert_eq!((x.min(), x.max()), (0.0, 2.0));
    assert_eq!((y.min(), y.max()), (0.0, 6.0));
}

#[test]
fn render_emits_one_closed_filled_polygon() {
    let mut fill = FillY::new();
    fill.set_data_source([(0.0, 5.0, 1.0), (2.0, 4.0, 0.0)]);
    let frame = render(&fill);

    assert_eq!(frame.paths.len(), 1);
    let path = &frame.paths[0];
    assert!(path.fill.is_some());
    assert!(path.stroke.is_none());
    assert_eq!(path.commands.len(), 5);
    assert_eq!(path.commands.last(), Some(&PathCommand::Close));
    match path.commands[0] {
        PathCommand::MoveTo(start) => {
            assert_relative_eq!(start.x, 0.0);
            assert_relative_eq!(start.y, 90.0);
        }
        other => panic!("expected MoveTo, got {other:?}"),
    }
}

#[test]
fn non_finite_samples_are_left_out_of_the_outline() {
    let mut fill = FillY::new();
    fill.set_data_source([(0.0, 5.0, 1.0), (1.0, f64::NAN, 2.0), (2.0, 4.0, 0.0)]);
    let frame = render(&fill);

    assert_eq!(frame.paths.len(), 1);
    let path = &frame.paths[0];
    assert_eq!(path.commands.len(), 6);
    assert_eq!(path.commands.last(), Some(&PathCommand::Close));
    for command in &path.commands {
        if let PathCommand::MoveTo(pixel) | PathCommand::LineTo(pixel) = command {
            assert!(pixel.x.is_finite() && pixel.y.is_finite());
        }
    }
}

#[test]
fn outline_and_markers_follow_their_styles() {
    let mut fill = FillY::new();
    fill.set_data_source([(0.0, 5.0, 1.0), (2.0, 4.0, 0.0)]);
    fill.set_line_width(2.0);
    fill.set_line_pattern(LinePattern::Dashed);
    fill.set_marker_shape(MarkerShape::FilledCircle);
    fill.set_marker_size(8.0);

    let frame = render(&fill);
    assert_eq!(frame.paths.len(), 2);
    let stroke = frame.paths[0].stroke.expect("outline stroke");
    assert_relative_eq!(stroke.width, 2.0);
    assert_eq!(stroke.pattern, LinePattern::Dashed);
    assert_eq!(frame.paths[1].sub_path_count(), 4);
}

#[test]
fn forwarding_accessors_round_trip() {
    let mut fill = FillY::new();
    let green = Color::rgb(0.0, 1.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);

    fill.set_fill_color(green);
    fill.set_fill_hatch(Some(HatchPattern::Striped));
    fill.set_fill_hatch_color(blue);
    fill.set_line_color(blue);
    fill.set_marker_fill_color(green);
    fill.set_marker_line_color(blue);
    fill.set_marker_line_width(3.0);

    assert_eq!(fill.fill_color(), green);
    assert_eq!(fill.fill_hatch(), Some(HatchPattern::Striped));
    assert_eq!(fill.fill_hatch_color(), blue);
    assert_eq!(fill.line_color(), blue);
    assert_eq!(fill.marker_fill_color(), green);
    assert_eq!(fill.marker_line_color(), blue);
    assert_relative_eq!(fill.marker_line_width(), 3.0);
}

#[test]
fn legend_item_uses_the_fill_color() {
    let mut fill = FillY::new();
    fill.label = Some("confidence".to_owned());
    let items = fill.legend_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label.as_deref(), Some("confidence"));
    let line = items[0].line.expect("legend line");
    assert_eq!(line.color, fill.fill_color());
    assert_relative_eq!(line.width, 10.0);
}

proptest! {
    #[test]
    fn band_polygon_has_two_vertices_per_sample_property(
        samples in proptest::collection::vec(
            (-1_000.0f64..1_000.0, -1_000.0f64..1_000.0, -1_000.0f64..1_000.0),
            0..64
        )
    ) {
        let points: Vec<BandPoint> = samples.iter().copied().map(BandPoint::from).collect();
        let polygon = band_polygon(&points);
        let coordinates = polygon.coordinates();

        prop_assert_eq!(coordinates.len(), points.len() * 2);
        for (index, point) in points.iter().enumerate() {
            prop_assert_eq!(coordinates[index], Coordinates::new(point.x, point.bottom));
            let mirrored = coordinates.len() - 1 - index;
            prop_assert_eq!(coordinates[mirrored], Coordinates::new(point.x, point.top));
        }
    }
}

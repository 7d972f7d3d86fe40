#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use plot_rs::PlotError;
use plot_rs::api::{Plot, PlotConfig};
use plot_rs::core::{Coordinates, Vector2, VectorFieldDataSource, Viewport};
use plot_rs::plottables::{FillY, Text, VectorField};
use plot_rs::render::{CairoRenderer, HatchPattern};

fn populated_plot(renderer: CairoRenderer, viewport: Viewport) -> Plot<CairoRenderer> {
    let mut plot = Plot::new(renderer, PlotConfig::new(viewport)).expect("plot init");

    let mut fill = FillY::new();
    fill.set_data_source([(0.0, 5.0, 1.0), (1.0, 6.0, 2.0), (2.0, 4.0, 0.0)]);
    fill.set_fill_hatch(Some(HatchPattern::Striped));
    plot.add(fill);

    let mut text = Text::new(Coordinates::new(1.0, 3.0), "band");
    text.set_rotation(30.0);
    text.set_bold(true);
    plot.add(text);

    plot.add(VectorField::new(Box::new(VectorFieldDataSource::from_grid(
        &[0.5, 1.0, 1.5],
        &[1.0, 3.0, 5.0],
        |point| Vector2::new(point.y, -point.x),
    ))));
    plot
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, PlotError::InvalidViewport { width: 0, height: 480 }));
}

#[test]
fn cairo_renderer_draws_every_primitive_kind() {
    let renderer = CairoRenderer::new(640, 480).expect("renderer");
    let mut plot = populated_plot(renderer, Viewport::new(640, 480));
    let frame = plot.build_render_frame().expect("frame");

    plot.render().expect("render");
    let stats = plot.into_renderer().last_stats();

    assert_eq!(stats.paths_drawn, frame.paths.len());
    assert_eq!(stats.lines_drawn, frame.lines.len());
    assert_eq!(stats.texts_drawn, frame.texts.len());
    assert!(stats.paths_drawn >= 2);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(320, 240).expect("renderer");
    let mut plot = populated_plot(renderer, Viewport::new(320, 240));

    let surface = ImageSurface::create(Format::ARgb32, 320, 240).expect("surface");
    let context = Context::new(&surface).expect("context");
    plot.render_on_cairo_context(&context)
        .expect("render on context");

    let renderer = plot.into_renderer();
    assert!(renderer.last_stats().lines_drawn > 0);
}

#[test]
fn cairo_renderer_writes_png() {
    let renderer = CairoRenderer::new(200, 150).expect("renderer");
    let mut plot = populated_plot(renderer, Viewport::new(200, 150));
    plot.render().expect("render");

    let mut png = Vec::new();
    plot.renderer().write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

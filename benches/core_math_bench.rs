use criterion::{Criterion, criterion_group, criterion_main};
use plot_rs::api::{Plot, PlotConfig};
use plot_rs::core::{
    Axes, AxisRange, Coordinates, Edge, PixelRect, RootedVector, Vector2, VectorFieldDataSource,
    Viewport, pixel_to_value, value_to_pixel,
};
use plot_rs::plottables::{FillY, MAX_ARROW_LENGTH_PX, VectorField, normalize_magnitudes, project_origins};
use plot_rs::render::NullRenderer;
use std::hint::black_box;

fn grid_vectors(side: usize) -> Vec<RootedVector> {
    let coords: Vec<f64> = (0..side).map(|i| i as f64).collect();
    VectorFieldDataSource::from_grid(&coords, &coords, |point| {
        Vector2::new((point.y * 0.1).sin(), (point.x * 0.1).cos())
    })
    .vectors()
    .to_vec()
}

fn bench_value_pixel_round_trip(c: &mut Criterion) {
    let range = AxisRange::new(0.0, 10_000.0).expect("valid range");
    let rect = PixelRect::new(0.0, 1920.0, 0.0, 1080.0);

    c.bench_function("value_pixel_round_trip", |b| {
        b.iter(|| {
            let px = value_to_pixel(black_box(4_321.123), range, rect, Edge::Left)
                .expect("to pixel");
            let _ = pixel_to_value(px, range, rect, Edge::Left).expect("from pixel");
        })
    });
}

fn bench_vector_normalization_10k(c: &mut Criterion) {
    let vectors = grid_vectors(100);
    let axes = Axes::new(
        AxisRange::new(0.0, 100.0).expect("x"),
        AxisRange::new(0.0, 100.0).expect("y"),
        PixelRect::new(0.0, 1920.0, 0.0, 1080.0),
    );

    c.bench_function("vector_normalization_10k", |b| {
        b.iter(|| {
            let mut projected =
                project_origins(black_box(&vectors), black_box(&axes)).expect("projection");
            let _ = normalize_magnitudes(&mut projected, MAX_ARROW_LENGTH_PX);
        })
    });
}

fn bench_plot_frame_build(c: &mut Criterion) {
    let config = PlotConfig::new(Viewport::new(1600, 900));
    let mut plot = Plot::new(NullRenderer::default(), config).expect("plot init");

    let mut fill = FillY::new();
    fill.set_data_source((0..2_000).map(|i| {
        let x = i as f64;
        (x, x.sin() + 2.0, x.cos() - 2.0)
    }));
    plot.add(fill);
    plot.add(VectorField::new(Box::new(VectorFieldDataSource::new(
        grid_vectors(40)
            .into_iter()
            .map(|rooted| {
                RootedVector::new(
                    Coordinates::new(rooted.origin.x * 50.0, rooted.origin.y * 0.1),
                    rooted.vector,
                )
            })
            .collect(),
    ))));

    c.bench_function("plot_frame_build_2k_band_1600_arrows", |b| {
        b.iter(|| {
            let _ = plot.build_render_frame().expect("frame");
        })
    });
}

criterion_group!(
    benches,
    bench_value_pixel_round_trip,
    bench_vector_normalization_10k,
    bench_plot_frame_build
);
criterion_main!(benches);

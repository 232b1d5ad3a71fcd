// File: crates/plotline-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use plotline_core::{Chart, DataPoint, Plot};
use plotline_render_skia::{render_to_png, render_to_png_bytes, RasterOptions};

#[test]
fn render_smoke_png() {
    // Minimal data: tiny line series
    let mut chart = Chart::<f64, f64>::default();
    let mut plot = Plot::line();
    for (x, y) in [(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)] {
        plot.insert_data_point(DataPoint::new(x, y)).unwrap();
    }
    chart.add_plot(plot);

    let opts = RasterOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    render_to_png(&mut chart, 0.0, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = render_to_png_bytes(&mut chart, 16.0, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

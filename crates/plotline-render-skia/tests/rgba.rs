// File: crates/plotline-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use plotline_core::{Chart, DataPoint, Plot, Theme};
use plotline_render_skia::{render_to_rgba8, RasterOptions};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::<f64, f64>::default();
    let mut plot = Plot::area();
    plot.insert_data_point(DataPoint::new(0.0, 0.0)).unwrap();
    plot.insert_data_point(DataPoint::new(4.0, 4.0)).unwrap();
    chart.add_plot(plot);

    let opts = RasterOptions { width: 320, height: 200, draw_labels: false, ..Default::default() };
    let (px, w, h, stride) = render_to_rgba8(&mut chart, 0.0, &opts).expect("rgba render");
    assert_eq!((w, h), (320, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel sits in the gutter and shows the theme background (RGBA)
    let bg = Theme::default().background;
    assert_eq!(&px[0..4], &[bg.r, bg.g, bg.b, 255]);
}

// File: crates/plotline-core/tests/chart.rs
// Purpose: End-to-end frame pipeline: domain fitting, shared scales, axes, render and hit testing.

use plotline_core::{
    AnimatorPhase, Brush, Chart, ChartError, ChartHit, DataPoint, Domain, Plot, RecordingCanvas, Theme, TickState,
    Transition,
};

fn squares() -> Chart<f64, f64> {
    let mut chart = Chart::default();
    let mut plot = Plot::line();
    for x in 0..=10 {
        plot.insert_data_point(DataPoint::new(x as f64, (x * x) as f64)).unwrap();
    }
    chart.add_plot(plot);
    chart
}

#[test]
fn first_frame_fits_domains_and_ranges() {
    let mut chart = squares();
    let mut canvas = RecordingCanvas::new();
    assert!(!chart.update(0.0, Some(&mut canvas)));

    let x = chart.x_scale().borrow().state().unwrap();
    assert_eq!(x.domain(), Domain::new(-0.5, 10.5));
    let rect = chart.plot_rect();
    assert_eq!((x.range().min, x.range().max), (rect.left, rect.right));
    let y = chart.y_scale().borrow().state().unwrap();
    assert_eq!((y.range().min, y.range().max), (rect.bottom, rect.top));

    assert!(chart.plot(0).unwrap().x_scale().is_inheriting());
    let axis = chart.x_axis().unwrap();
    assert_eq!(axis.tick_count(), 11);
    assert!(axis.ticks().all(|t| t.state() == TickState::Included));
    assert!(!canvas.texts().collect::<Vec<_>>().is_empty());
    assert_eq!(canvas.strokes().filter(|(_, _, w)| *w == 2.0).count(), 1);
}

#[test]
fn new_data_tweens_the_root_domain() {
    let mut chart = squares();
    chart.update(0.0, None);

    chart.plot_mut(0).unwrap().insert_data_point(DataPoint::new(20.0, 400.0)).unwrap();
    assert!(chart.update(16.0, None));
    assert_eq!(chart.x_scale().borrow().phase(), AnimatorPhase::Tweening);
    assert_eq!(chart.x_scale().borrow().state().unwrap().domain(), Domain::new(-1.0, 21.0));

    chart.update(266.0, None);
    assert_eq!(chart.x_scale().borrow().phase(), AnimatorPhase::Settled);
    chart.update(10_000.0, None);
    assert!(!chart.update(10_016.0, None));
}

#[test]
fn removing_the_peak_refits() {
    let mut chart = squares();
    chart.update(0.0, None);
    chart.plot_mut(0).unwrap().remove_data_point(10.0);
    chart.update(16.0, None);
    assert_eq!(chart.y_scale().borrow().state().unwrap().domain(), Domain::new(0.0, 81.0).padded(0.05));
}

#[test]
fn empty_chart_draws_background_and_bare_axes() {
    let mut chart = Chart::<f64, f64>::default();
    chart.add_plot(Plot::area());
    let mut canvas = RecordingCanvas::new();
    chart.update(0.0, Some(&mut canvas));
    assert_eq!(canvas.fills().count(), 1);
    assert_eq!(canvas.strokes().count(), 2);
    assert_eq!(canvas.texts().count(), 0);
    assert!(chart.x_scale().borrow().state().is_none());
}

#[test]
fn hit_test_finds_the_plot_and_point() {
    let mut chart = squares();
    chart.update(0.0, None);
    let p = chart.plot(0).unwrap().data_point(5.0).unwrap();
    let (px, py) = (p.x_coord(), p.y_coord());
    assert_eq!(chart.hit_test(px, py), Some(ChartHit { plot: 0, x: Some(5.0) }));
    assert_eq!(chart.hit_test(px, py - 200.0), None);
}

#[test]
fn pinned_domain_survives_frames() {
    let mut chart = squares();
    chart.set_x_domain(0.0, 100.0, Transition::Instant);
    chart.update(0.0, None);
    chart.update(16.0, None);
    assert_eq!(chart.x_scale().borrow().state().unwrap().domain(), Domain::new(0.0, 100.0));
}

#[test]
fn pan_and_zoom_move_the_root_scale() {
    let mut chart = squares();
    chart.update(0.0, None);
    let before = chart.x_scale().borrow().state().unwrap().domain();

    chart.pan(100.0, 0.0);
    let panned = chart.x_scale().borrow().state().unwrap().domain();
    assert!(panned.min() < before.min());
    chart.update(16.0, None);
    assert_eq!(chart.x_scale().borrow().state().unwrap().domain(), panned);

    let rect = chart.plot_rect();
    assert!(matches!(chart.zoom(rect.left, rect.bottom, -1.0), Err(ChartError::InvalidValue(_))));
    chart.zoom(rect.left, rect.bottom, 2.0).unwrap();
    let zoomed = chart.x_scale().borrow().state().unwrap().domain();
    assert!((zoomed.span() - panned.span() / 2.0).abs() < 1e-9);
}

#[test]
fn theme_sets_the_background() {
    let mut chart = squares();
    chart.set_theme(Theme::light());
    let mut canvas = RecordingCanvas::new();
    chart.update(0.0, Some(&mut canvas));
    let (_, brush) = canvas.fills().next().unwrap();
    assert_eq!(*brush, Brush::Solid(Theme::light().background));
}

#[test]
fn theme_presets_resolve_by_name() {
    assert_eq!(plotline_core::theme::find("LIGHT"), Theme::light());
    assert_eq!(plotline_core::theme::find("high-contrast-dark"), Theme::high_contrast_dark());
    assert_eq!(plotline_core::theme::find("unknown"), Theme::dark());
    assert_eq!(plotline_core::theme::presets().len(), 3);
}

#[test]
fn fit_to_data_resumes_after_pinning() {
    let mut chart = squares();
    chart.set_y_domain(0.0, 1000.0, Transition::Instant);
    chart.update(0.0, None);
    assert_eq!(chart.y_scale().borrow().state().unwrap().domain(), Domain::new(0.0, 1000.0));

    chart.fit_to_data();
    chart.update(16.0, None);
    assert!(chart.y_scale().borrow().is_animating());
    chart.update(10_000.0, None);
    assert!(!chart.y_scale().borrow().is_animating());
    assert_eq!(chart.y_scale().borrow().state().unwrap().domain(), Domain::new(0.0, 100.0).padded(0.05));
}

#[test]
fn removing_a_plot_refits_to_the_rest() {
    let mut chart = squares();
    let mut tall = Plot::line();
    tall.insert_data_point(DataPoint::new(0.0, 0.0)).unwrap();
    tall.insert_data_point(DataPoint::new(1.0, 1000.0)).unwrap();
    chart.add_plot(tall);
    chart.update(0.0, None);
    assert_eq!(chart.y_scale().borrow().state().unwrap().domain(), Domain::new(0.0, 1000.0).padded(0.05));

    assert!(chart.remove_plot(5).is_none());
    assert!(chart.remove_plot(1).is_some());
    assert_eq!(chart.plots().len(), 1);
    chart.update(16.0, None);
    assert_eq!(chart.y_scale().borrow().state().unwrap().domain(), Domain::new(0.0, 100.0).padded(0.05));
}

#[test]
fn hidden_axis_labels_draw_no_text() {
    let mut chart = squares();
    chart.x_axis_mut().unwrap().set_show_labels(false);
    chart.y_axis_mut().unwrap().set_show_labels(false);
    let mut canvas = RecordingCanvas::new();
    chart.update(0.0, Some(&mut canvas));
    assert!(chart.x_axis().unwrap().tick_count() > 0);
    assert_eq!(canvas.texts().count(), 0);
}

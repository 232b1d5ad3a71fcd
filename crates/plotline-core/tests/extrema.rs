// File: crates/plotline-core/tests/extrema.rs
// Purpose: Data-domain tracking: O(1) widening on insert, O(n) shrink on removal and relayout.

use plotline_core::{
    ChartError, ContinuousScale, DataExtrema, DataPoint, Domain, Plot, RecordingCanvas, Range, Rect, Transition,
};

fn five_points() -> Plot<f64, f64> {
    let mut plot = Plot::line();
    for (x, y) in [(1.0, 3.0), (2.0, 1.0), (3.0, 4.0), (4.0, 1.0), (5.0, 5.0)] {
        plot.insert_data_point(DataPoint::new(x, y)).unwrap();
    }
    plot
}

#[test]
fn insert_widens_domains() {
    let plot = five_points();
    assert_eq!(plot.x_data_domain(), Some(Domain::new(1.0, 5.0)));
    assert_eq!(plot.y_data_domain(), Some(Domain::new(1.0, 5.0)));
}

#[test]
fn removing_the_max_shrinks_y() {
    let mut plot = five_points();
    let removed = plot.remove_data_point(5.0).expect("point exists");
    assert_eq!(removed.y(), 5.0);
    assert_eq!(plot.y_data_domain().map(|d| d.max()), Some(4.0));
    assert_eq!(plot.x_data_domain(), Some(Domain::new(1.0, 4.0)));
}

#[test]
fn inward_update_shrinks_on_retrack() {
    let mut plot = five_points();
    assert!(plot.update_data_point(5.0, |p| p.set_y(2.0)).unwrap());
    assert!(plot.needs_retrack());
    plot.retrack_extrema();
    assert_eq!(plot.y_data_domain(), Some(Domain::new(1.0, 4.0)));
}

#[test]
fn replacing_a_point_rescans() {
    let mut plot = five_points();
    let old = plot.insert_data_point(DataPoint::new(5.0, 0.5)).unwrap();
    assert_eq!(old.map(|p| p.y()), Some(5.0));
    plot.retrack_extrema();
    assert_eq!(plot.y_data_domain(), Some(Domain::new(0.5, 4.0)));
    assert_eq!(plot.len(), 5);
}

#[test]
fn y2_counts_toward_y() {
    let mut plot = Plot::<f64, f64>::area();
    plot.insert_data_point(DataPoint::new(0.0, 2.0).with_y2(-3.0)).unwrap();
    plot.insert_data_point(DataPoint::new(1.0, 6.0)).unwrap();
    assert_eq!(plot.y_data_domain(), Some(Domain::new(-3.0, 6.0)));
}

#[test]
fn rescan_matches_widening() {
    let points: Vec<DataPoint<f64, f64>> =
        (0..50).map(|i| DataPoint::new(i as f64, ((i * 37) % 11) as f64 - 5.0)).collect();
    let mut widened = DataExtrema::default();
    for p in &points {
        widened.widen(p);
    }
    assert_eq!(DataExtrema::rescan(points.iter()), widened);
}

#[test]
fn empty_plot_has_no_domains_and_draws_nothing() {
    let mut plot = Plot::<f64, f64>::line();
    assert_eq!(plot.x_data_domain(), None);
    assert_eq!(plot.y_data_domain(), None);

    let scale = ContinuousScale::new(Domain::new(0.0, 1.0), Range::new(0.0, 100.0));
    plot.x_scale_mut().set_scale(scale, Transition::Instant);
    plot.y_scale_mut().set_scale(scale, Transition::Instant);
    plot.layout(Rect::from_ltwh(0.0, 0.0, 100.0, 100.0));

    let mut canvas = RecordingCanvas::new();
    plot.render(&mut canvas);
    assert!(canvas.calls.is_empty());
    assert_eq!(plot.x_data_range(), None);
}

#[test]
fn clearing_resets_domains() {
    let mut plot = five_points();
    plot.clear();
    assert!(plot.is_empty());
    assert_eq!(plot.y_data_domain(), None);
}

#[test]
fn signed_zero_is_one_key() {
    let mut plot = Plot::<f64, f64>::line();
    plot.insert_data_point(DataPoint::new(0.0, 1.0)).unwrap();
    let replaced = plot.insert_data_point(DataPoint::new(-0.0, 2.0)).unwrap();
    assert_eq!(replaced.map(|p| p.y()), Some(1.0));
    assert_eq!(plot.len(), 1);
    assert_eq!(plot.data_point(0.0).map(|p| p.y()), Some(2.0));
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let mut plot = Plot::<f64, f64>::line();
    for (x, y) in [(0.0, f64::NAN), (f64::INFINITY, 1.0)] {
        assert!(matches!(plot.insert_data_point(DataPoint::new(x, y)), Err(ChartError::InvalidValue(_))));
    }
    assert!(matches!(
        plot.insert_data_point(DataPoint::new(1.0, 1.0).with_y2(f64::NEG_INFINITY)),
        Err(ChartError::InvalidValue(_))
    ));
    assert!(plot.is_empty());

    plot.insert_data_point(DataPoint::new(1.0, 1.0)).unwrap();
    plot.insert_data_point(DataPoint::new(2.0, 3.0)).unwrap();
    assert!(matches!(plot.update_data_point(2.0, |p| p.set_y(f64::NAN)), Err(ChartError::InvalidValue(_))));
    assert_eq!(plot.data_point(2.0).map(|p| p.y()), Some(3.0));
    plot.retrack_extrema();
    assert_eq!(plot.y_data_domain(), Some(Domain::new(1.0, 3.0)));
}

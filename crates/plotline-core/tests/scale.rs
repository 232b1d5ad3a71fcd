// File: crates/plotline-core/tests/scale.rs
// Purpose: Scale evaluation, inversion, reconstruction and pan/zoom math.

use chrono::{TimeZone, Utc};
use plotline_core::{ChartError, ContinuousScale, Domain, Range};

fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

#[test]
fn evaluate_and_invert_linear() {
    let s = ContinuousScale::new(Domain::new(0.0, 10.0), Range::new(0.0, 100.0));
    assert_eq!(s.evaluate(5.0), 50.0);
    assert_eq!(s.invert(50.0), Ok(5.0));
}

#[test]
fn round_trip_and_monotonic() {
    let s = ContinuousScale::new(Domain::new(-3.5, 12.0), Range::new(72.0, 1000.0));
    let mut last = f64::NEG_INFINITY;
    for i in 0..=20 {
        let x = -3.5 + i as f64 * 0.775;
        let px = s.evaluate(x);
        assert!(px > last, "evaluate must be increasing");
        last = px;
        let back = s.invert(px).expect("range is not degenerate");
        assert!(approx(back, x), "{back} != {x}");
    }
}

#[test]
fn descending_range_flips_direction() {
    let s = ContinuousScale::new(Domain::new(0.0, 10.0), Range::new(400.0, 0.0));
    assert_eq!(s.evaluate(0.0), 400.0);
    assert_eq!(s.evaluate(10.0), 0.0);
    assert_eq!(s.invert(100.0), Ok(7.5));
}

#[test]
fn zero_width_domain_maps_to_range_min() {
    let s = ContinuousScale::new(Domain::point(3.0), Range::new(10.0, 90.0));
    assert_eq!(s.evaluate(3.0), 10.0);
    assert_eq!(s.evaluate(42.0), 10.0);
}

#[test]
fn invert_through_zero_range_is_an_error() {
    let s = ContinuousScale::new(Domain::new(0.0, 1.0), Range::new(3.0, 3.0));
    assert_eq!(s.invert(3.0), Err(ChartError::DegenerateRange { min: 3.0 }));
}

#[test]
fn domain_is_normalized() {
    let d = Domain::new(5.0, 1.0);
    assert_eq!((d.min(), d.max()), (1.0, 5.0));
}

#[test]
fn reconstruction_preserves_the_other_half() {
    let s = ContinuousScale::new(Domain::new(0.0, 10.0), Range::new(0.0, 100.0));
    let d = s.with_domain(2.0, 4.0);
    assert_eq!(d.range(), Range::new(0.0, 100.0));
    assert_eq!(d.domain(), Domain::new(2.0, 4.0));
    let r = s.over_range(50.0, 60.0);
    assert_eq!(r.domain(), Domain::new(0.0, 10.0));
    assert_eq!(r.range(), Range::new(50.0, 60.0));
}

#[test]
fn pan_and_zoom() {
    let s = ContinuousScale::new(Domain::new(0.0, 100.0), Range::new(0.0, 100.0));
    assert_eq!(s.pan_px(10.0).domain(), Domain::new(-10.0, 90.0));
    let z = s.zoom_at(50.0, 2.0).expect("valid zoom");
    assert_eq!(z.domain(), Domain::new(25.0, 75.0));
    assert!(matches!(s.zoom_at(50.0, 0.0), Err(ChartError::InvalidValue(_))));
}

#[test]
fn padded_domains() {
    assert_eq!(Domain::new(0.0, 10.0).padded(0.1), Domain::new(-1.0, 11.0));
    assert_eq!(Domain::point(4.0).padded(0.1), Domain::new(3.0, 5.0));
    assert_eq!(Domain::new(0.0, 10.0).padded(0.0), Domain::new(0.0, 10.0));
}

#[test]
fn time_scale_interpolates_through_millis() {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let noon = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let s = ContinuousScale::new(Domain::new(t0, t1), Range::new(0.0, 240.0));
    assert_eq!(s.evaluate(noon), 120.0);
    assert_eq!(s.invert(120.0), Ok(noon));
}

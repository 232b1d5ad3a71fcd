// File: crates/plotline-core/tests/axis.rs
// Purpose: Axis tick reconciliation, preserved ticks, generator settings and rendering.

use plotline_core::{
    Axis, ChartError, ChartNode, ContinuousScale, DataPoint, Domain, Easing, EvenTickGenerator, Insets, Range,
    RecordingCanvas, Rect, Tick, TickGeneratorSetting, TickState, Timing, Transition,
};

const FRAME: Rect = Rect::from_ltrb(0.0, 0.0, 400.0, 300.0);

fn even_axis(count: usize) -> Axis<f64> {
    let mut axis = Axis::bottom();
    axis.scale_mut().set_scale(
        ContinuousScale::new(Domain::new(0.0, 100.0), Range::new(0.0, 400.0)),
        Transition::Instant,
    );
    axis.set_tick_generator(TickGeneratorSetting::Custom(Box::new(EvenTickGenerator::new(count))));
    axis.set_tick_mark_spacing(0.0);
    axis.set_tick_transition(Timing::new(100.0, Easing::Linear));
    axis
}

fn state(axis: &Axis<f64>, v: f64) -> Option<TickState> { axis.tick(v).map(|t| t.state()) }

#[test]
fn first_generation_is_instant() {
    let mut axis = even_axis(3);
    axis.layout(FRAME, &Insets::zero());
    assert_eq!(axis.tick_count(), 3);
    for v in [0.0, 50.0, 100.0] {
        assert_eq!(state(&axis, v), Some(TickState::Included));
    }
    assert_eq!(axis.tick(50.0).map(|t| t.coord()), Some(200.0));
    assert_eq!(axis.tick(50.0).and_then(|t| t.label()), Some("50"));
}

#[test]
fn domain_change_reconciles_ticks() {
    let mut axis = even_axis(3);
    axis.layout(FRAME, &Insets::zero());

    axis.scale_mut().set_domain(0.0, 50.0, Transition::Instant);
    axis.layout(FRAME, &Insets::zero());
    assert_eq!(state(&axis, 100.0), Some(TickState::Leaving));
    assert_eq!(state(&axis, 0.0), Some(TickState::Included));
    assert_eq!(state(&axis, 50.0), Some(TickState::Included));
    assert_eq!(state(&axis, 25.0), Some(TickState::Entering));

    axis.update(0.0);
    axis.update(100.0);
    assert!(axis.tick(100.0).is_none());
    assert_eq!(state(&axis, 25.0), Some(TickState::Included));
    assert_eq!(axis.tick_count(), 3);
}

#[test]
fn stable_ticks_do_not_flicker() {
    let mut axis = even_axis(3);
    axis.layout(FRAME, &Insets::zero());
    for _ in 0..5 {
        axis.layout(FRAME, &Insets::zero());
    }
    assert!(axis.ticks().all(|t| t.state() == TickState::Included && t.opacity() == 1.0));
}

#[test]
fn unlabeled_ticks_are_preserved_and_dropped_immediately() {
    let mut axis = even_axis(3);
    axis.set_show_labels(false);
    axis.layout(FRAME, &Insets::zero());
    assert!(axis.ticks().all(|t| t.is_preserved() && t.label().is_none()));

    axis.scale_mut().set_domain(0.0, 50.0, Transition::Instant);
    axis.layout(FRAME, &Insets::zero());
    assert!(axis.tick(100.0).is_none());
}

#[test]
fn zero_spacing_reuses_generator_count() {
    let mut axis = even_axis(5);
    axis.layout(FRAME, &Insets::zero());
    assert_eq!(axis.tick_generator().map(|g| g.count()), Some(5));
    assert_eq!(axis.tick_count(), 5);
}

#[test]
fn spacing_drives_count() {
    let mut axis = even_axis(3);
    axis.set_tick_mark_spacing(100.0);
    axis.layout(FRAME, &Insets::zero());
    assert_eq!(axis.tick_generator().map(|g| g.count()), Some(4));
}

#[test]
fn auto_generator_uses_nice_steps() {
    let mut axis = Axis::<f64>::bottom();
    axis.scale_mut().set_scale(
        ContinuousScale::new(Domain::new(0.0, 100.0), Range::new(0.0, 400.0)),
        Transition::Instant,
    );
    axis.set_tick_mark_spacing(80.0);
    axis.layout(FRAME, &Insets::zero());
    let values: Vec<f64> = axis.ticks().map(|t| t.value()).collect();
    assert_eq!(values, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
}

#[test]
fn disabled_generator_yields_no_ticks() {
    let mut axis = even_axis(3);
    axis.set_tick_generator(false);
    axis.layout(FRAME, &Insets::zero());
    assert_eq!(axis.tick_count(), 0);
}

#[test]
fn unset_scale_generates_nothing() {
    let mut axis = Axis::<f64>::left();
    axis.layout(FRAME, &Insets::zero());
    assert_eq!(axis.tick_count(), 0);
}

#[test]
fn left_axis_runs_bottom_to_top() {
    let mut axis = Axis::<f64>::left();
    axis.scale_mut().set_domain(0.0, 10.0, Transition::Instant);
    axis.layout(FRAME, &Insets::new(10, 10, 20, 20));
    assert_eq!(axis.extent(), Range::new(280.0, 20.0));
    assert_eq!(axis.scale().state().map(|s| s.range()), Some(Range::new(280.0, 20.0)));
}

#[test]
fn child_insertion_is_type_checked() {
    let mut axis = Axis::<f64>::bottom();
    let err = axis.insert_child(ChartNode::DataPoint(DataPoint::new(1.0, 2.0)));
    assert_eq!(err, Err(ChartError::TypeMismatch { expected: "tick", found: "data point" }));
    assert!(axis.insert_child::<f64>(ChartNode::Tick(Tick::new(3.0))).is_ok());
    assert_eq!(axis.tick_count(), 1);
    assert!(matches!(axis.insert_tick_at(0, Tick::new(4.0)), Err(ChartError::Unsupported(_))));
}

#[test]
fn render_draws_line_marks_and_labels() {
    let mut axis = even_axis(3);
    axis.layout(FRAME, &Insets::zero());
    let mut canvas = RecordingCanvas::new();
    axis.render(&mut canvas);
    assert_eq!(canvas.strokes().count(), 4);
    assert_eq!(canvas.texts().collect::<Vec<_>>(), vec!["0", "50", "100"]);

    let mut detached = RecordingCanvas::detached();
    axis.render(&mut detached);
    assert!(detached.calls.is_empty());
}

#[test]
fn reconcile_relabels_surviving_ticks() {
    let mut axis = even_axis(3);
    axis.reconcile(&[0.0, 1.0], &["0s".to_string(), "1s".to_string()]);
    axis.reconcile(&[0.0, 1.0], &["00:00".to_string(), "00:01".to_string()]);
    assert_eq!(axis.tick(1.0).and_then(|t| t.label()), Some("00:01"));
    assert_eq!(state(&axis, 1.0), Some(TickState::Included));

    assert!(axis.remove_tick(1.0).is_some());
    assert!(axis.remove_tick(1.0).is_none());
    assert_eq!(axis.tick_count(), 1);
}

#[test]
fn inserted_ticks_survive_updates() {
    let mut axis = Axis::<f64>::bottom();
    axis.insert_child::<f64>(ChartNode::Tick(Tick::new(3.0).with_label("3"))).unwrap();
    assert_eq!(state(&axis, 3.0), Some(TickState::Included));
    axis.update(0.0);
    axis.update(1_000.0);
    assert_eq!(axis.tick_count(), 1);
    assert_eq!(axis.tick(3.0).map(|t| t.opacity()), Some(1.0));
}

#[test]
fn zero_tick_is_stable_when_the_domain_snaps_to_zero() {
    let mut axis = Axis::<f64>::bottom();
    axis.scale_mut().set_scale(
        ContinuousScale::new(Domain::new(-1.0, 100.0), Range::new(0.0, 400.0)),
        Transition::Instant,
    );
    axis.set_tick_mark_spacing(80.0);
    axis.set_tick_transition(Timing::new(100.0, Easing::Linear));
    axis.layout(FRAME, &Insets::zero());
    assert_eq!(state(&axis, 0.0), Some(TickState::Included));

    axis.scale_mut().set_domain(0.0, 100.0, Transition::Instant);
    axis.layout(FRAME, &Insets::zero());
    let zeros: Vec<_> = axis.ticks().filter(|t| t.value() == 0.0).collect();
    assert_eq!(zeros.len(), 1);
    assert_eq!(zeros[0].state(), TickState::Included);
    assert_eq!(zeros[0].opacity(), 1.0);
}

// File: crates/plotline-core/tests/tick_lifecycle.rs
// Purpose: Tick fade-in/fade-out state machine and its idempotence.

use plotline_core::{Easing, Tick, TickState, Timing};

fn fade() -> Option<Timing> { Some(Timing::new(100.0, Easing::Linear)) }

#[test]
fn new_tick_is_hidden() {
    let t = Tick::new(5.0);
    assert_eq!(t.state(), TickState::Excluded);
    assert_eq!(t.opacity(), 0.0);
    assert!(t.label().is_none());
    assert!(!t.is_removable());
}

#[test]
fn fade_in_runs_to_included() {
    let mut t = Tick::new(5.0);
    t.fade_in(fade());
    assert_eq!(t.state(), TickState::Entering);
    assert!(t.update(0.0));
    assert_eq!(t.opacity(), 0.0);
    assert!(t.update(50.0));
    assert_eq!(t.opacity(), 0.5);
    assert!(!t.update(100.0));
    assert_eq!(t.state(), TickState::Included);
    assert_eq!(t.opacity(), 1.0);
}

#[test]
fn fade_in_is_idempotent() {
    let mut t = Tick::new(1.0);
    t.fade_in(fade());
    t.update(0.0);
    t.update(50.0);
    // A second request mid-fade does not restart the tween.
    t.fade_in(fade());
    t.update(75.0);
    assert_eq!(t.opacity(), 0.75);
    t.update(100.0);
    t.fade_in(fade());
    assert_eq!(t.state(), TickState::Included);
    assert!(!t.is_fading());
}

#[test]
fn instant_fade_in() {
    let mut t = Tick::new(1.0);
    t.fade_in(None);
    assert_eq!(t.state(), TickState::Included);
    assert_eq!(t.opacity(), 1.0);
}

#[test]
fn fade_out_ends_removable() {
    let mut t = Tick::new(1.0).with_label("1");
    t.fade_in(None);
    t.fade_out(fade());
    assert_eq!(t.state(), TickState::Leaving);
    assert!(!t.is_removable());
    t.update(10.0);
    t.update(60.0);
    assert_eq!(t.opacity(), 0.5);
    t.update(110.0);
    assert_eq!(t.state(), TickState::Excluded);
    assert!(t.is_removable());
}

#[test]
fn reentering_while_leaving_resumes_from_current_opacity() {
    let mut t = Tick::new(1.0);
    t.fade_in(None);
    t.fade_out(fade());
    t.update(0.0);
    t.update(50.0);
    t.fade_in(fade());
    assert_eq!(t.state(), TickState::Entering);
    t.update(200.0);
    assert_eq!(t.opacity(), 0.5);
    t.update(300.0);
    assert_eq!(t.state(), TickState::Included);
}

#[test]
fn instant_fade_out_retires() {
    let mut t = Tick::new(1.0);
    t.fade_in(None);
    t.fade_out(None);
    assert_eq!(t.state(), TickState::Excluded);
    assert!(t.is_removable());
    t.fade_in(None);
    assert!(!t.is_removable());
}

// File: crates/plotline-core/src/tick.rs
// Summary: Tick entity with its fade-in/fade-out lifecycle.

use crate::domain::ScaleValue;
use crate::timing::{Millis, Timing, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickState {
    /// Not shown: either never faded in, or finished fading out.
    Excluded,
    Entering,
    Included,
    Leaving,
}

#[derive(Clone, Debug)]
pub struct Tick<D> {
    value: D,
    state: TickState,
    opacity: f64,
    fade: Option<Tween<f64>>,
    preserved: bool,
    /// Set once a fade-out completes; only retired ticks are removable.
    retired: bool,
    label: Option<String>,
    coord: f64,
}

impl<D: ScaleValue> Tick<D> {
    /// A new tick sits at opacity 0 until faded in.
    pub fn new(value: D) -> Self {
        Self {
            value,
            state: TickState::Excluded,
            opacity: 0.0,
            fade: None,
            preserved: false,
            retired: false,
            label: None,
            coord: f64::NAN,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Preserved ticks are dropped immediately instead of fading out.
    pub fn preserved(mut self, preserved: bool) -> Self {
        self.preserved = preserved;
        self
    }

    pub fn value(&self) -> D { self.value }
    pub fn state(&self) -> TickState { self.state }
    pub fn opacity(&self) -> f64 { self.opacity }
    pub fn is_preserved(&self) -> bool { self.preserved }
    pub fn label(&self) -> Option<&str> { self.label.as_deref() }
    pub fn set_label(&mut self, label: Option<String>) { self.label = label; }
    /// Pixel offset along the axis from the last layout.
    pub fn coord(&self) -> f64 { self.coord }
    pub(crate) fn set_coord(&mut self, coord: f64) { self.coord = coord; }

    pub fn is_fading(&self) -> bool { self.fade.is_some() }

    /// Fade toward full opacity. No-op for ticks already entering or included.
    /// `None` timing shows the tick instantly.
    pub fn fade_in(&mut self, timing: Option<Timing>) {
        if matches!(self.state, TickState::Entering | TickState::Included) {
            return;
        }
        self.retired = false;
        match timing {
            Some(t) if t.duration > 0.0 => {
                self.state = TickState::Entering;
                self.fade = Some(Tween::new(self.opacity, 1.0, t));
            }
            _ => {
                self.state = TickState::Included;
                self.opacity = 1.0;
                self.fade = None;
            }
        }
    }

    /// Fade toward transparency. No-op for ticks already leaving or excluded.
    pub fn fade_out(&mut self, timing: Option<Timing>) {
        if matches!(self.state, TickState::Leaving | TickState::Excluded) {
            return;
        }
        match timing {
            Some(t) if t.duration > 0.0 => {
                self.state = TickState::Leaving;
                self.fade = Some(Tween::new(self.opacity, 0.0, t));
            }
            _ => {
                self.state = TickState::Excluded;
                self.opacity = 0.0;
                self.fade = None;
                self.retired = true;
            }
        }
    }

    /// Advance the fade. Returns whether the tick is still animating.
    pub fn update(&mut self, now: Millis) -> bool {
        let Some(fade) = self.fade.as_mut() else {
            return false;
        };
        let (opacity, done) = fade.sample(now);
        self.opacity = opacity;
        if done {
            self.fade = None;
            self.state = match self.state {
                TickState::Entering => TickState::Included,
                TickState::Leaving => {
                    self.retired = true;
                    TickState::Excluded
                }
                other => other,
            };
        }
        !done
    }

    /// True once a fade-out has finished. A tick that was never shown is not removable.
    pub fn is_removable(&self) -> bool { self.retired }
}

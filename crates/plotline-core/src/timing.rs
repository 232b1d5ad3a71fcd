// File: crates/plotline-core/src/timing.rs
// Summary: Easing curves, transition timing and time-sampled tweens.

use crate::domain::ScaleValue;
use crate::scale::ContinuousScale;

/// Monotonic frame clock in milliseconds, supplied by the host.
pub type Millis = f64;

/// Easing curve applied to linear progress in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, x1, y1, x2, y2),
        }
    }
}

/// CSS-style cubic bezier: Newton-Raphson with a bisection fallback.
fn cubic_bezier_ease(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let mut p = t;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - t;
        if err.abs() < 1e-7 {
            return bezier_sample(p, y1, y2);
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = t;
    for _ in 0..24 {
        let val = bezier_sample(p, x1, x2);
        if (val - t).abs() < 1e-7 {
            break;
        }
        if val < t { lo = p; } else { hi = p; }
        p = (lo + hi) * 0.5;
    }
    bezier_sample(p, y1, y2)
}

#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

/// Duration plus easing for one transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration: Millis,
    pub easing: Easing,
}

impl Timing {
    pub const fn new(duration: Millis, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Eased progress at `now` for a transition that began at `start`.
    pub fn progress(&self, start: Millis, now: Millis) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let linear = ((now - start) / self.duration).clamp(0.0, 1.0);
        self.easing.apply(linear)
    }

    pub fn is_complete(&self, start: Millis, now: Millis) -> bool {
        now - start >= self.duration
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new(250.0, Easing::EaseInOut)
    }
}

/// How a setter should reach its new value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Transition {
    /// Use the owner's configured timing.
    #[default]
    Default,
    /// Jump straight to the new value.
    Instant,
    Timed(Timing),
}

/// Values a tween can interpolate.
pub trait Blend: Copy {
    fn blend(&self, to: &Self, t: f64) -> Self;
}

impl Blend for f64 {
    fn blend(&self, to: &Self, t: f64) -> Self { self + (to - self) * t }
}

impl<X: ScaleValue> Blend for ContinuousScale<X> {
    fn blend(&self, to: &Self, t: f64) -> Self { ContinuousScale::blend(self, to, t) }
}

/// In-flight interpolation between two values.
///
/// The start time latches on the first sample, so progress is a pure function of
/// `(start, duration, easing, now)`.
#[derive(Clone, Copy, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    timing: Timing,
    start: Option<Millis>,
}

impl<T: Blend> Tween<T> {
    pub fn new(from: T, to: T, timing: Timing) -> Self {
        Self { from, to, timing, start: None }
    }

    pub fn target(&self) -> T { self.to }
    pub fn timing(&self) -> Timing { self.timing }

    /// Rewrite both endpoints without restarting the clock.
    pub fn map_endpoints(&mut self, f: impl Fn(T) -> T) {
        self.from = f(self.from);
        self.to = f(self.to);
    }

    /// Value at `now` and whether the tween has finished.
    pub fn sample(&mut self, now: Millis) -> (T, bool) {
        let start = *self.start.get_or_insert(now);
        if self.timing.is_complete(start, now) {
            return (self.to, true);
        }
        let t = self.timing.progress(start, now);
        (self.from.blend(&self.to, t), false)
    }
}

// File: crates/plotline-core/src/animator.rs
// Summary: Scale animator: target state, tweened current value, and parent inheritance.
//
// An animator either owns its scale or defers to a parent animator. Reads of a
// deferring animator return the parent's current value; the `set_base_*`
// setters forward writes up the chain so they land on the authoritative root.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::domain::{Domain, Range, ScaleValue};
use crate::scale::ContinuousScale;
use crate::timing::{Millis, Timing, Transition, Tween};

/// Shared handle to an animator that other animators may inherit from.
pub type SharedScale<X> = Rc<RefCell<ScaleAnimator<X>>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorPhase {
    Unset,
    Set,
    Tweening,
    Settled,
}

/// Optional hooks fired around scale changes. Observers never affect results.
pub trait ScaleObserver<X> {
    fn will_set_state(&mut self, _old: Option<&ContinuousScale<X>>, _new: &ContinuousScale<X>) {}
    fn did_set_state(&mut self, _new: &ContinuousScale<X>) {}
    fn did_animate(&mut self, _value: &ContinuousScale<X>) {}
}

pub struct ScaleAnimator<X: ScaleValue> {
    state: Option<ContinuousScale<X>>,
    value: Option<ContinuousScale<X>>,
    tween: Option<Tween<ContinuousScale<X>>>,
    phase: AnimatorPhase,
    timing: Timing,
    parent: Option<SharedScale<X>>,
    inherits: bool,
    observers: Vec<Box<dyn ScaleObserver<X>>>,
}

impl<X: ScaleValue> Default for ScaleAnimator<X> {
    fn default() -> Self { Self::new() }
}

impl<X: ScaleValue> fmt::Debug for ScaleAnimator<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleAnimator")
            .field("state", &self.state)
            .field("value", &self.value)
            .field("phase", &self.phase)
            .field("inherits", &self.is_inheriting())
            .finish()
    }
}

impl<X: ScaleValue> ScaleAnimator<X> {
    pub fn new() -> Self {
        Self {
            state: None,
            value: None,
            tween: None,
            phase: AnimatorPhase::Unset,
            timing: Timing::default(),
            parent: None,
            inherits: false,
            observers: Vec::new(),
        }
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Wrap into a shared handle so children can inherit from it.
    pub fn shared(self) -> SharedScale<X> { Rc::new(RefCell::new(self)) }

    pub fn timing(&self) -> Timing { self.timing }
    pub fn set_timing(&mut self, timing: Timing) { self.timing = timing; }

    pub fn add_observer(&mut self, observer: Box<dyn ScaleObserver<X>>) {
        self.observers.push(observer);
    }

    // ---- inheritance --------------------------------------------------------

    /// Defer to `parent` until a local setter installs an override.
    pub fn inherit_from(&mut self, parent: SharedScale<X>) {
        self.parent = Some(parent);
        self.inherits = true;
    }

    /// Re-enable or suspend deference to the parent. Clearing inheritance keeps
    /// the last inherited value as the local starting point.
    pub fn set_inherits(&mut self, inherits: bool) {
        if !inherits && self.is_inheriting() {
            if let Some(v) = self.value() {
                self.adopt(v);
            }
        }
        self.inherits = inherits;
    }

    pub fn parent(&self) -> Option<&SharedScale<X>> { self.parent.as_ref() }

    pub fn is_inheriting(&self) -> bool { self.inherits && self.parent.is_some() }

    fn adopt(&mut self, scale: ContinuousScale<X>) {
        self.state = Some(scale);
        self.value = Some(scale);
        self.tween = None;
        self.phase = AnimatorPhase::Set;
    }

    // ---- reads --------------------------------------------------------------

    /// Current (possibly mid-tween) scale, resolved through the parent when deferring.
    pub fn value(&self) -> Option<ContinuousScale<X>> {
        match (&self.parent, self.inherits) {
            (Some(parent), true) => parent.borrow().value(),
            _ => self.value,
        }
    }

    /// Target scale, resolved through the parent when deferring.
    pub fn state(&self) -> Option<ContinuousScale<X>> {
        match (&self.parent, self.inherits) {
            (Some(parent), true) => parent.borrow().state(),
            _ => self.state,
        }
    }

    pub fn phase(&self) -> AnimatorPhase {
        match (&self.parent, self.inherits) {
            (Some(parent), true) => parent.borrow().phase(),
            _ => self.phase,
        }
    }

    pub fn is_animating(&self) -> bool { self.phase() == AnimatorPhase::Tweening }

    // ---- local setters ------------------------------------------------------

    pub fn set_scale(&mut self, scale: ContinuousScale<X>, transition: Transition) {
        self.retarget(scale, transition);
    }

    /// Set the domain, keeping the current range (unit range when nothing is set).
    pub fn set_domain(&mut self, min: X, max: X, transition: Transition) {
        let target = match self.local_base() {
            Some(s) => s.with_domain(min, max),
            None => ContinuousScale::new(Domain::new(min, max), Range::unit()),
        };
        self.retarget(target, transition);
    }

    /// Set the range, keeping the current domain (`[0, 1]` when nothing is set).
    pub fn set_range(&mut self, min: f64, max: f64, transition: Transition) {
        if transition == Transition::Instant && !self.is_inheriting() {
            if let (Some(tween), Some(old_state)) = (self.tween.as_mut(), self.state) {
                // Resize mid-flight: move every endpoint onto the new range, keep the domain tween.
                let target = old_state.over_range(min, max);
                for obs in self.observers.iter_mut() {
                    obs.will_set_state(Some(&old_state), &target);
                }
                tween.map_endpoints(|s| s.over_range(min, max));
                self.state = Some(target);
                self.value = self.value.map(|s| s.over_range(min, max));
                for obs in self.observers.iter_mut() {
                    obs.did_set_state(&target);
                }
                return;
            }
        }
        let target = match self.local_base() {
            Some(s) => s.over_range(min, max),
            None => ContinuousScale::new(Domain::unit(), Range::new(min, max)),
        };
        self.retarget(target, transition);
    }

    // ---- base setters -------------------------------------------------------

    pub fn set_base_scale(&mut self, scale: ContinuousScale<X>, transition: Transition) {
        match self.forward_target() {
            Some(parent) => parent.borrow_mut().set_base_scale(scale, transition),
            None => self.set_scale(scale, transition),
        }
    }

    pub fn set_base_domain(&mut self, min: X, max: X, transition: Transition) {
        match self.forward_target() {
            Some(parent) => parent.borrow_mut().set_base_domain(min, max, transition),
            None => self.set_domain(min, max, transition),
        }
    }

    pub fn set_base_range(&mut self, min: f64, max: f64, transition: Transition) {
        match self.forward_target() {
            Some(parent) => parent.borrow_mut().set_base_range(min, max, transition),
            None => self.set_range(min, max, transition),
        }
    }

    fn forward_target(&self) -> Option<SharedScale<X>> {
        if self.is_inheriting() { self.parent.clone() } else { None }
    }

    /// The scale a local setter builds on: the pending target, else whatever is visible.
    fn local_base(&self) -> Option<ContinuousScale<X>> {
        if self.is_inheriting() { self.state() } else { self.state }
    }

    fn retarget(&mut self, target: ContinuousScale<X>, transition: Transition) {
        // A local write while deferring installs an override starting from the inherited value.
        let current = self.value();
        let old_state = self.state();
        self.inherits = false;

        for obs in self.observers.iter_mut() {
            obs.will_set_state(old_state.as_ref(), &target);
        }
        self.state = Some(target);

        let timing = match transition {
            Transition::Instant => None,
            Transition::Default => Some(self.timing),
            Transition::Timed(t) => Some(t),
        };

        match (current, timing) {
            (None, _) => {
                self.value = Some(target);
                self.tween = None;
                self.phase = AnimatorPhase::Set;
            }
            (Some(from), Some(timing)) if from != target && timing.duration > 0.0 => {
                debug!(?target, duration = timing.duration, "scale retarget");
                self.tween = Some(Tween::new(from, target, timing));
                self.phase = AnimatorPhase::Tweening;
            }
            (Some(_), _) => {
                self.value = Some(target);
                self.tween = None;
                self.phase = AnimatorPhase::Settled;
            }
        }

        for obs in self.observers.iter_mut() {
            obs.did_set_state(&target);
        }
    }

    // ---- frame clock --------------------------------------------------------

    /// Advance the tween to `now`. Returns whether this animator is still tweening.
    /// Deferring animators do not advance their parent; the parent's owner does.
    pub fn update(&mut self, now: Millis) -> bool {
        if self.is_inheriting() {
            return false;
        }
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        let (value, done) = tween.sample(now);
        self.value = Some(value);
        trace!(now, done, "scale tween step");
        if done {
            self.tween = None;
            self.phase = AnimatorPhase::Settled;
        }
        for obs in self.observers.iter_mut() {
            obs.did_animate(&value);
        }
        !done
    }
}

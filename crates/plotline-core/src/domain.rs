// File: crates/plotline-core/src/domain.rs
// Summary: Scale value trait, immutable Domain/Range intervals, and a total-order key wrapper.

use std::cmp::Ordering;
use std::fmt::Debug;

use chrono::{DateTime, Utc};

/// A value that can sit on a continuous scale.
///
/// Ordering comes from `PartialOrd`; interpolation goes through the scalar
/// projection, so any type with a faithful `f64` embedding qualifies
/// (numbers, timestamps).
pub trait ScaleValue: Copy + PartialOrd + Debug {
    fn to_scalar(self) -> f64;
    fn from_scalar(v: f64) -> Self;

    /// Total order used for keyed collections (NaN sorts last, `-0.0 == 0.0`).
    fn total_cmp(&self, other: &Self) -> Ordering {
        (self.to_scalar() + 0.0).total_cmp(&(other.to_scalar() + 0.0))
    }

    /// Absolute distance in domain units.
    fn distance(self, other: Self) -> f64 {
        (self.to_scalar() - other.to_scalar()).abs()
    }
}

impl ScaleValue for f64 {
    #[inline]
    fn to_scalar(self) -> f64 { self }
    #[inline]
    fn from_scalar(v: f64) -> Self { v }
}

impl ScaleValue for f32 {
    #[inline]
    fn to_scalar(self) -> f64 { self as f64 }
    #[inline]
    fn from_scalar(v: f64) -> Self { v as f32 }
}

impl ScaleValue for i64 {
    #[inline]
    fn to_scalar(self) -> f64 { self as f64 }
    #[inline]
    fn from_scalar(v: f64) -> Self { v.round() as i64 }
}

/// Timestamps interpolate through milliseconds since the Unix epoch.
impl ScaleValue for DateTime<Utc> {
    fn to_scalar(self) -> f64 { self.timestamp_millis() as f64 }
    fn from_scalar(v: f64) -> Self {
        DateTime::from_timestamp_millis(v.round() as i64).unwrap_or_default()
    }
}

/// Return `(min, max)` for two owned values.
pub fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Closed data interval. Invariant: `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain<X> {
    min: X,
    max: X,
}

impl<X: ScaleValue> Domain<X> {
    /// Endpoints are reordered so that `min <= max`.
    pub fn new(a: X, b: X) -> Self {
        let (min, max) = sorted_pair(a, b);
        Self { min, max }
    }

    /// Degenerate domain holding a single value.
    pub fn point(v: X) -> Self { Self { min: v, max: v } }

    /// The default unit domain `[0, 1]`.
    pub fn unit() -> Self { Self::new(X::from_scalar(0.0), X::from_scalar(1.0)) }

    pub fn min(&self) -> X { self.min }
    pub fn max(&self) -> X { self.max }

    /// Width in scalar units.
    pub fn span(&self) -> f64 { self.max.to_scalar() - self.min.to_scalar() }

    pub fn is_degenerate(&self) -> bool { self.span() == 0.0 }

    pub fn contains(&self, v: X) -> bool { v >= self.min && v <= self.max }

    /// Grow to include `v`; returns whether a bound moved.
    pub fn widen(&mut self, v: X) -> bool {
        if v < self.min {
            self.min = v;
            true
        } else if v > self.max {
            self.max = v;
            true
        } else {
            false
        }
    }

    pub fn union(&self, other: &Domain<X>) -> Domain<X> {
        let mut out = *self;
        out.widen(other.min);
        out.widen(other.max);
        out
    }

    /// Expand both ends by `fraction` of the span. A degenerate domain grows by one unit each way.
    pub fn padded(&self, fraction: f64) -> Domain<X> {
        let (lo, hi) = (self.min.to_scalar(), self.max.to_scalar());
        let span = hi - lo;
        let pad = if span == 0.0 {
            1.0
        } else if fraction > 0.0 {
            span * fraction
        } else {
            return *self;
        };
        Domain::new(X::from_scalar(lo - pad), X::from_scalar(hi + pad))
    }

    /// Interpolate both endpoints toward `to` by `t`.
    pub fn blend(&self, to: &Domain<X>, t: f64) -> Domain<X> {
        let lerp = |a: X, b: X| X::from_scalar(a.to_scalar() + (b.to_scalar() - a.to_scalar()) * t);
        Domain::new(lerp(self.min, to.min), lerp(self.max, to.max))
    }
}

/// Extend an optional domain with `v`, creating a point domain if absent.
pub fn widen_domain<X: ScaleValue>(domain: &mut Option<Domain<X>>, v: X) -> bool {
    match domain {
        Some(d) => d.widen(v),
        None => {
            *domain = Some(Domain::point(v));
            true
        }
    }
}

/// Pixel interval. `min` is the pixel that the domain minimum maps to and may exceed `max`
/// (vertical axes grow upward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self { Self { min, max } }
    pub const fn unit() -> Self { Self::new(0.0, 1.0) }
    pub fn span(&self) -> f64 { self.max - self.min }
    pub fn is_finite(&self) -> bool { self.min.is_finite() && self.max.is_finite() }

    pub fn blend(&self, to: &Range, t: f64) -> Range {
        Range::new(self.min + (to.min - self.min) * t, self.max + (to.max - self.max) * t)
    }
}

impl Default for Range {
    fn default() -> Self { Range::unit() }
}

/// Key wrapper that gives scale values the total order a `BTreeMap` needs.
#[derive(Clone, Copy, Debug)]
pub struct ScaleKey<X>(pub X);

impl<X: ScaleValue> PartialEq for ScaleKey<X> {
    fn eq(&self, other: &Self) -> bool { self.0.total_cmp(&other.0) == Ordering::Equal }
}

impl<X: ScaleValue> Eq for ScaleKey<X> {}

impl<X: ScaleValue> PartialOrd for ScaleKey<X> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl<X: ScaleValue> Ord for ScaleKey<X> {
    fn cmp(&self, other: &Self) -> Ordering { self.0.total_cmp(&other.0) }
}

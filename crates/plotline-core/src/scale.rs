// File: crates/plotline-core/src/scale.rs
// Summary: Continuous domain -> pixel scale with inverse, reconstruction and pan/zoom hooks.

use crate::domain::{Domain, Range, ScaleValue};
use crate::error::{ChartError, Result};

/// Immutable linear mapping from a data domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuousScale<X> {
    domain: Domain<X>,
    range: Range,
}

impl<X: ScaleValue> ContinuousScale<X> {
    pub fn new(domain: Domain<X>, range: Range) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> Domain<X> { self.domain }
    pub fn range(&self) -> Range { self.range }

    /// Map a domain value to pixels. A zero-width domain maps everything to `range.min`.
    #[inline]
    pub fn evaluate(&self, x: X) -> f64 {
        let d0 = self.domain.min().to_scalar();
        let span = self.domain.span();
        if span == 0.0 {
            return self.range.min;
        }
        self.range.min + (x.to_scalar() - d0) / span * self.range.span()
    }

    /// Map pixels back to the domain. Fails when the range has zero width.
    pub fn invert(&self, px: f64) -> Result<X> {
        let r = self.range.span();
        if r == 0.0 {
            return Err(ChartError::DegenerateRange { min: self.range.min });
        }
        let t = (px - self.range.min) / r;
        Ok(X::from_scalar(self.domain.min().to_scalar() + t * self.domain.span()))
    }

    /// Same range, new domain.
    pub fn with_domain(&self, min: X, max: X) -> Self {
        Self { domain: Domain::new(min, max), range: self.range }
    }

    /// Same domain, new range.
    pub fn over_range(&self, min: f64, max: f64) -> Self {
        Self { domain: self.domain, range: Range::new(min, max) }
    }

    /// Interpolate domain and range endpoints toward `to`.
    pub fn blend(&self, to: &ContinuousScale<X>, t: f64) -> Self {
        Self { domain: self.domain.blend(&to.domain, t), range: self.range.blend(&to.range, t) }
    }

    /// Shift the domain so content moves by `dx_px` pixels.
    pub fn pan_px(&self, dx_px: f64) -> Self {
        let r = self.range.span();
        if r == 0.0 {
            return *self;
        }
        let delta = -dx_px / r * self.domain.span();
        let (d0, d1) = (self.domain.min().to_scalar(), self.domain.max().to_scalar());
        self.with_domain(X::from_scalar(d0 + delta), X::from_scalar(d1 + delta))
    }

    /// Zoom by `factor` (>1 zooms in) keeping the value under `cursor_px` fixed.
    pub fn zoom_at(&self, cursor_px: f64, factor: f64) -> Result<Self> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(ChartError::InvalidValue(format!("zoom factor {factor}")));
        }
        let pivot = self.invert(cursor_px)?.to_scalar();
        let (d0, d1) = (self.domain.min().to_scalar(), self.domain.max().to_scalar());
        let lo = pivot - (pivot - d0) / factor;
        let hi = pivot + (d1 - pivot) / factor;
        Ok(self.with_domain(X::from_scalar(lo), X::from_scalar(hi)))
    }
}

// File: crates/plotline-core/src/extrema.rs
// Summary: Incremental data-domain tracking with an O(n) rescan for shrinking.

use crate::domain::{widen_domain, Domain, ScaleValue};
use crate::point::DataPoint;

/// Observed x/y extrema over a plot's points. `y` covers both `y` and `y2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataExtrema<X, Y> {
    x: Option<Domain<X>>,
    y: Option<Domain<Y>>,
}

impl<X, Y> Default for DataExtrema<X, Y> {
    fn default() -> Self { Self { x: None, y: None } }
}

impl<X: ScaleValue, Y: ScaleValue> DataExtrema<X, Y> {
    pub fn x_domain(&self) -> Option<Domain<X>> { self.x }
    pub fn y_domain(&self) -> Option<Domain<Y>> { self.y }
    pub fn is_empty(&self) -> bool { self.x.is_none() }

    pub fn clear(&mut self) {
        self.x = None;
        self.y = None;
    }

    /// O(1) widen for an inserted or mutated point. Returns whether any bound moved.
    /// Never shrinks; callers rescan when a point leaves or moves inward.
    pub fn widen(&mut self, point: &DataPoint<X, Y>) -> bool {
        let mut changed = widen_domain(&mut self.x, point.x());
        changed |= widen_domain(&mut self.y, point.y());
        if let Some(y2) = point.y2() {
            changed |= widen_domain(&mut self.y, y2);
        }
        changed
    }

    /// Full rescan over points iterated in ascending `x`. The x domain comes
    /// straight from the first and last points; y has to visit every point.
    pub fn rescan<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a DataPoint<X, Y>>,
        X: 'a,
        Y: 'a,
    {
        let mut out = Self::default();
        let mut first: Option<X> = None;
        let mut last: Option<X> = None;
        for p in points {
            first.get_or_insert(p.x());
            last = Some(p.x());
            widen_domain(&mut out.y, p.y());
            if let Some(y2) = p.y2() {
                widen_domain(&mut out.y, y2);
            }
        }
        out.x = match (first, last) {
            (Some(a), Some(b)) => Some(Domain::new(a, b)),
            _ => None,
        };
        out
    }
}

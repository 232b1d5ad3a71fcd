// File: crates/plotline-core/src/ticks.rs
// Summary: Tick generators (numeric nice steps, even spacing, calendar time) and count derivation.

use std::fmt::Debug;
use std::marker::PhantomData;

use chrono::{DateTime, Datelike, Months, NaiveDate, Timelike, Utc};

use crate::domain::{Domain, ScaleValue};
use crate::scale::ContinuousScale;

/// Produces representative domain values for an axis.
///
/// Generation is a pure function of the domain and the configured count; the
/// count is kept on the generator so it survives frames that skip derivation.
pub trait TickGenerator<D>: Debug {
    fn count(&self) -> usize;
    fn set_count(&mut self, count: usize);
    /// Ordered tick values for `domain` using the configured count.
    fn generate(&self, domain: &Domain<D>) -> Vec<D>;
    fn format(&self, value: D) -> String;
}

/// Configure `desired` and generate in one step.
pub fn generate<D>(generator: &mut dyn TickGenerator<D>, domain: &Domain<D>, desired: usize) -> Vec<D> {
    generator.set_count(desired);
    generator.generate(domain)
}

/// `max(1, floor(span / spacing))`; `None` when spacing is disabled (zero or negative).
pub fn desired_tick_count(span_px: f64, spacing_px: f64) -> Option<usize> {
    if !(spacing_px > 0.0) {
        return None;
    }
    let raw = (span_px.abs() / spacing_px).floor();
    Some(if raw.is_finite() { (raw as usize).max(1) } else { 1 })
}

/// Scale value types that know their default tick generator.
pub trait TickValue: ScaleValue + 'static {
    fn default_generator() -> Box<dyn TickGenerator<Self>>;
}

impl TickValue for f64 {
    fn default_generator() -> Box<dyn TickGenerator<Self>> { Box::new(NumericTickGenerator::<f64>::new(10)) }
}

impl TickValue for f32 {
    fn default_generator() -> Box<dyn TickGenerator<Self>> { Box::new(NumericTickGenerator::<f32>::new(10)) }
}

impl TickValue for i64 {
    fn default_generator() -> Box<dyn TickGenerator<Self>> {
        Box::new(NumericTickGenerator::<i64>::new(10).integral())
    }
}

impl TickValue for DateTime<Utc> {
    fn default_generator() -> Box<dyn TickGenerator<Self>> { Box::new(TimeTickGenerator::new(8)) }
}

/// Fresh default generator sized for `scale`'s pixel span.
pub fn from_scale<D: TickValue>(scale: &ContinuousScale<D>, spacing_px: f64) -> Box<dyn TickGenerator<D>> {
    let mut generator = D::default_generator();
    if let Some(n) = desired_tick_count(scale.range().span(), spacing_px) {
        generator.set_count(n);
    }
    generator
}

// ---- numeric ----------------------------------------------------------------

/// Round 1/2/5 x 10^k steps that fall inside the domain.
#[derive(Clone, Debug)]
pub struct NumericTickGenerator<D> {
    count: usize,
    integral: bool,
    _marker: PhantomData<D>,
}

impl<D> NumericTickGenerator<D> {
    pub fn new(count: usize) -> Self {
        Self { count, integral: false, _marker: PhantomData }
    }

    /// Never step below one unit.
    pub fn integral(mut self) -> Self {
        self.integral = true;
        self
    }
}

impl<D: ScaleValue> TickGenerator<D> for NumericTickGenerator<D> {
    fn count(&self) -> usize { self.count }
    fn set_count(&mut self, count: usize) { self.count = count; }

    fn generate(&self, domain: &Domain<D>) -> Vec<D> {
        nice_ticks(domain.min().to_scalar(), domain.max().to_scalar(), self.count, self.integral)
            .into_iter()
            .map(D::from_scalar)
            .collect()
    }

    fn format(&self, value: D) -> String { format_number(value.to_scalar()) }
}

/// Tick values between `start` and `stop` (inclusive) with roughly `count` steps.
pub fn nice_ticks(start: f64, stop: f64, count: usize, integral: bool) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    let step = (hi - lo) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    // `+ 0.0` folds the -0.0 that rounding a small negative bound produces.
    let mut out = Vec::new();
    if power < 0.0 && !integral {
        // Work with the inverse increment so values stay exact decimals.
        let inv = 10f64.powf(-power) / factor;
        let mut i1 = (lo * inv).round();
        let mut i2 = (hi * inv).round();
        if i1 / inv < lo { i1 += 1.0; }
        if i2 / inv > hi { i2 -= 1.0; }
        let mut i = i1;
        while i <= i2 && out.len() < 10_000 {
            out.push(i / inv + 0.0);
            i += 1.0;
        }
    } else {
        let inc = (10f64.powf(power) * factor).max(if integral { 1.0 } else { 0.0 });
        let mut i1 = (lo / inc).round();
        let mut i2 = (hi / inc).round();
        if i1 * inc < lo { i1 += 1.0; }
        if i2 * inc > hi { i2 -= 1.0; }
        let mut i = i1;
        while i <= i2 && out.len() < 10_000 {
            out.push(i * inc + 0.0);
            i += 1.0;
        }
    }
    out
}

/// Shortest decimal rendering without trailing zeros.
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{v:.0}");
    }
    let s = format!("{v:.6}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

// ---- even -------------------------------------------------------------------

/// `count` evenly spaced values including both domain endpoints.
#[derive(Clone, Debug)]
pub struct EvenTickGenerator<D> {
    count: usize,
    _marker: PhantomData<D>,
}

impl<D> EvenTickGenerator<D> {
    pub fn new(count: usize) -> Self { Self { count, _marker: PhantomData } }
}

impl<D: ScaleValue> TickGenerator<D> for EvenTickGenerator<D> {
    fn count(&self) -> usize { self.count }
    fn set_count(&mut self, count: usize) { self.count = count; }

    fn generate(&self, domain: &Domain<D>) -> Vec<D> {
        if self.count == 0 {
            return Vec::new();
        }
        if self.count == 1 || domain.is_degenerate() {
            return vec![domain.min()];
        }
        linspace(domain.min().to_scalar(), domain.max().to_scalar(), self.count)
            .into_iter()
            .map(D::from_scalar)
            .collect()
    }

    fn format(&self, value: D) -> String { format_number(value.to_scalar()) }
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

// ---- time -------------------------------------------------------------------

const SECOND: f64 = 1_000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;

#[derive(Clone, Copy, Debug, PartialEq)]
enum TimeStep {
    /// Fixed length in milliseconds, aligned to the epoch.
    Fixed(f64),
    Months(u32),
    Years(i32),
}

impl TimeStep {
    fn approx_ms(&self) -> f64 {
        match *self {
            TimeStep::Fixed(ms) => ms,
            TimeStep::Months(n) => n as f64 * 30.0 * DAY,
            TimeStep::Years(n) => n as f64 * 365.0 * DAY,
        }
    }
}

const TIME_STEPS: [TimeStep; 18] = [
    TimeStep::Fixed(SECOND),
    TimeStep::Fixed(5.0 * SECOND),
    TimeStep::Fixed(15.0 * SECOND),
    TimeStep::Fixed(30.0 * SECOND),
    TimeStep::Fixed(MINUTE),
    TimeStep::Fixed(5.0 * MINUTE),
    TimeStep::Fixed(15.0 * MINUTE),
    TimeStep::Fixed(30.0 * MINUTE),
    TimeStep::Fixed(HOUR),
    TimeStep::Fixed(3.0 * HOUR),
    TimeStep::Fixed(6.0 * HOUR),
    TimeStep::Fixed(12.0 * HOUR),
    TimeStep::Fixed(DAY),
    TimeStep::Fixed(2.0 * DAY),
    TimeStep::Fixed(7.0 * DAY),
    TimeStep::Months(1),
    TimeStep::Months(3),
    TimeStep::Years(1),
];

/// Calendar-aware ticks over UTC timestamps.
#[derive(Clone, Debug)]
pub struct TimeTickGenerator {
    count: usize,
}

impl TimeTickGenerator {
    pub fn new(count: usize) -> Self { Self { count } }

    fn pick_step(span_ms: f64, count: usize) -> TimeStep {
        let target = span_ms / count.max(1) as f64;
        let year = TimeStep::Years(1).approx_ms();
        if target > year {
            let years = nice_ticks(0.0, target / year * count as f64, count, true);
            let n = years.get(1).copied().unwrap_or(1.0).max(1.0);
            return TimeStep::Years(n as i32);
        }
        let mut best = TIME_STEPS[0];
        let mut best_err = f64::INFINITY;
        for step in TIME_STEPS {
            let err = (step.approx_ms() / target).ln().abs();
            if err < best_err {
                best_err = err;
                best = step;
            }
        }
        best
    }
}

impl TickGenerator<DateTime<Utc>> for TimeTickGenerator {
    fn count(&self) -> usize { self.count }
    fn set_count(&mut self, count: usize) { self.count = count; }

    fn generate(&self, domain: &Domain<DateTime<Utc>>) -> Vec<DateTime<Utc>> {
        if self.count == 0 {
            return Vec::new();
        }
        let (min, max) = (domain.min(), domain.max());
        if domain.is_degenerate() {
            return vec![min];
        }
        let mut out = Vec::new();
        match Self::pick_step(domain.span(), self.count) {
            TimeStep::Fixed(ms) => {
                let lo = min.to_scalar();
                let mut t = (lo / ms).ceil() * ms;
                while t <= max.to_scalar() && out.len() < 10_000 {
                    out.push(DateTime::<Utc>::from_scalar(t));
                    t += ms;
                }
            }
            TimeStep::Months(n) => {
                let index = min.year() * 12 + min.month0() as i32;
                let mut cursor = month_start(index);
                while let Some(t) = cursor {
                    if t > max || out.len() >= 10_000 { break; }
                    let idx = t.year() * 12 + t.month0() as i32;
                    if t >= min && idx.rem_euclid(n as i32) == 0 {
                        out.push(t);
                    }
                    cursor = t.checked_add_months(Months::new(1));
                }
            }
            TimeStep::Years(n) => {
                let mut year = min.year().div_euclid(n) * n;
                while out.len() < 10_000 {
                    let Some(t) = year_start(year) else { break };
                    if t > max { break; }
                    if t >= min { out.push(t); }
                    year += n;
                }
            }
        }
        out
    }

    /// Label precision follows the value's own alignment.
    fn format(&self, value: DateTime<Utc>) -> String {
        let fmt = if value.second() != 0 {
            "%H:%M:%S"
        } else if value.minute() != 0 || value.hour() != 0 {
            "%H:%M"
        } else if value.day() != 1 {
            "%b %d"
        } else if value.month() != 1 {
            "%b"
        } else {
            "%Y"
        };
        value.format(fmt).to_string()
    }
}

fn month_start(index: i32) -> Option<DateTime<Utc>> {
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    Some(NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?.and_utc())
}

fn year_start(year: i32) -> Option<DateTime<Utc>> {
    Some(NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)?.and_utc())
}

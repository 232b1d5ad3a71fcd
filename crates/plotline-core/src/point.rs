// File: crates/plotline-core/src/point.rs
// Summary: Data point entity, local shape categories and label placement.

use crate::domain::ScaleValue;
use crate::error::{ChartError, Result};
use crate::types::{Color, Length};

/// Local shape of a series around one point, derived each layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointCategory {
    Increasing,
    Decreasing,
    Minima,
    Maxima,
    #[default]
    Flat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPlacement {
    Above,
    Below,
}

impl PointCategory {
    /// Classify a point from its own `y` and the neighbors that exist.
    /// Boundary points only look at their single neighbor.
    pub fn classify(prev: Option<f64>, y: f64, next: Option<f64>) -> PointCategory {
        match (prev, next) {
            (Some(p), Some(n)) => {
                let (d0, d1) = (y - p, n - y);
                if d0 > 0.0 && d1 > 0.0 {
                    PointCategory::Increasing
                } else if d0 < 0.0 && d1 < 0.0 {
                    PointCategory::Decreasing
                } else if d0 < 0.0 && d1 > 0.0 {
                    PointCategory::Minima
                } else if d0 > 0.0 && d1 < 0.0 {
                    PointCategory::Maxima
                } else {
                    PointCategory::Flat
                }
            }
            (Some(p), None) => Self::from_slope(y - p),
            (None, Some(n)) => Self::from_slope(n - y),
            (None, None) => PointCategory::Flat,
        }
    }

    fn from_slope(dy: f64) -> PointCategory {
        if dy > 0.0 {
            PointCategory::Increasing
        } else if dy < 0.0 {
            PointCategory::Decreasing
        } else {
            PointCategory::Flat
        }
    }

    pub fn label_placement(&self) -> LabelPlacement {
        match self {
            PointCategory::Decreasing | PointCategory::Minima => LabelPlacement::Below,
            PointCategory::Increasing | PointCategory::Maxima | PointCategory::Flat => LabelPlacement::Above,
        }
    }
}

/// One sample of a plot, keyed by `x` inside its owning plot.
///
/// Value fields are private so `x` cannot change while the point sits in the
/// plot's ordered map; use the setters through `Plot::update_data_point`.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint<X, Y> {
    x: X,
    y: Y,
    y2: Option<Y>,
    radius: Option<Length>,
    color: Option<Color>,
    opacity: Option<f64>,
    label: Option<String>,
    category: PointCategory,
    x_coord: f64,
    y_coord: f64,
    y2_coord: Option<f64>,
}

impl<X: ScaleValue, Y: ScaleValue> DataPoint<X, Y> {
    pub fn new(x: X, y: Y) -> Self {
        Self {
            x,
            y,
            y2: None,
            radius: None,
            color: None,
            opacity: None,
            label: None,
            category: PointCategory::Flat,
            x_coord: f64::NAN,
            y_coord: f64::NAN,
            y2_coord: None,
        }
    }

    pub fn with_y2(mut self, y2: Y) -> Self { self.y2 = Some(y2); self }
    pub fn with_radius(mut self, radius: Length) -> Self { self.radius = Some(radius); self }
    pub fn with_color(mut self, color: Color) -> Self { self.color = Some(color); self }
    pub fn with_opacity(mut self, opacity: f64) -> Self { self.opacity = Some(opacity); self }
    pub fn with_label(mut self, label: impl Into<String>) -> Self { self.label = Some(label.into()); self }

    pub fn x(&self) -> X { self.x }
    pub fn y(&self) -> Y { self.y }
    pub fn y2(&self) -> Option<Y> { self.y2 }
    pub fn radius(&self) -> Option<Length> { self.radius }
    pub fn color(&self) -> Option<Color> { self.color }
    pub fn opacity(&self) -> Option<f64> { self.opacity }
    pub fn label(&self) -> Option<&str> { self.label.as_deref() }
    pub fn category(&self) -> PointCategory { self.category }
    pub fn label_placement(&self) -> LabelPlacement { self.category.label_placement() }

    /// Reject coordinates that cannot be projected through a scale.
    pub fn validate(&self) -> Result<()> {
        if !self.x.to_scalar().is_finite() {
            return Err(ChartError::InvalidValue(format!("non-finite x {:?}", self.x)));
        }
        if !self.y.to_scalar().is_finite() {
            return Err(ChartError::InvalidValue(format!("non-finite y {:?} at x {:?}", self.y, self.x)));
        }
        match self.y2 {
            Some(y2) if !y2.to_scalar().is_finite() => {
                Err(ChartError::InvalidValue(format!("non-finite y2 {:?} at x {:?}", y2, self.x)))
            }
            _ => Ok(()),
        }
    }

    pub fn set_y(&mut self, y: Y) { self.y = y; }
    pub fn set_y2(&mut self, y2: Option<Y>) { self.y2 = y2; }
    pub fn set_radius(&mut self, radius: Option<Length>) { self.radius = radius; }
    pub fn set_color(&mut self, color: Option<Color>) { self.color = color; }
    pub fn set_opacity(&mut self, opacity: Option<f64>) { self.opacity = opacity; }
    pub fn set_label(&mut self, label: Option<String>) { self.label = label; }

    /// Pixel x from the last layout pass (NaN before the first one).
    pub fn x_coord(&self) -> f64 { self.x_coord }
    pub fn y_coord(&self) -> f64 { self.y_coord }
    pub fn y2_coord(&self) -> Option<f64> { self.y2_coord }

    /// Whether this point contributes a stop to a gradient fill or stroke.
    pub fn is_gradient_stop(&self) -> bool { self.color.is_some() || self.opacity.is_some() }

    /// Resolve the stop color against the plot's base color.
    pub fn stop_color(&self, base: Color) -> Color {
        let color = self.color.unwrap_or(base);
        match self.opacity {
            Some(o) => color.with_opacity(o),
            None => color,
        }
    }

    pub(crate) fn set_coords(&mut self, x: f64, y: f64, y2: Option<f64>) {
        self.x_coord = x;
        self.y_coord = y;
        self.y2_coord = y2;
    }

    pub(crate) fn set_category(&mut self, category: PointCategory) { self.category = category; }
}

// File: crates/plotline-core/src/plot.rs
// Summary: Data series: keyed points, extrema, projection, classification, rendering and hit testing.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::animator::{ScaleAnimator, SharedScale};
use crate::canvas::{Brush, Canvas, LinearGradient, Path, TextAlign, TextBaseline, TextStyle};
use crate::domain::{Domain, Range, ScaleKey, ScaleValue};
use crate::error::{ChartError, Result};
use crate::extrema::DataExtrema;
use crate::geometry::{point_in_polygon, point_near_polyline, Point2, Rect};
use crate::node::ChartNode;
use crate::point::{DataPoint, LabelPlacement, PointCategory};
use crate::theme::Theme;
use crate::timing::Millis;
use crate::types::{Color, Length};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotType {
    Bubble,
    Line,
    Area,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotStyle {
    pub stroke: Color,
    pub fill: Color,
    pub label: Color,
    pub stroke_width: f64,
    /// Default bubble radius; percentages resolve against the frame's smaller side.
    pub radius: Length,
    /// Minimum stroke width used for line hit testing.
    pub hit_width: f64,
    /// Minimum radius used for bubble hit testing.
    pub hit_radius: f64,
    /// Area baseline in y-domain units when points carry no `y2`. `None` uses the range minimum.
    pub baseline: Option<f64>,
    pub font_size: f64,
}

impl PlotStyle {
    pub fn for_type(kind: PlotType, theme: &Theme) -> Self {
        let base = Self {
            stroke: theme.line_stroke,
            fill: theme.area_fill,
            label: theme.tick_label,
            stroke_width: 2.0,
            radius: Length::default(),
            hit_width: 8.0,
            hit_radius: 6.0,
            baseline: None,
            font_size: 11.0,
        };
        match kind {
            PlotType::Line => base,
            PlotType::Area => Self { stroke_width: 1.0, ..base },
            PlotType::Bubble => Self { stroke: theme.bubble_stroke, fill: theme.bubble_fill, stroke_width: 1.0, ..base },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutStatus {
    Ready,
    /// An x or y scale is missing; no coordinates were computed.
    NotReady,
}

/// Optional hooks on data-domain changes and layout passes.
pub trait PlotObserver<X, Y> {
    fn did_set_data_domain(&mut self, _x: Option<Domain<X>>, _y: Option<Domain<Y>>) {}
    fn did_layout(&mut self, _points: usize) {}
}

/// Backend-neutral geometry produced by the last layout pass.
#[derive(Clone, Debug, PartialEq)]
pub enum PlotGeometry {
    Empty,
    /// A line or area with a single point.
    Dot { center: Point2, radius: f64 },
    Line { vertices: Vec<Point2> },
    /// Closed polygon: `y` forward, then `y2` or the baseline backward.
    Area { polygon: Vec<Point2> },
    Bubbles(Vec<(Point2, f64)>),
}

pub struct Plot<X: ScaleValue, Y: ScaleValue> {
    kind: PlotType,
    style: PlotStyle,
    points: BTreeMap<ScaleKey<X>, DataPoint<X, Y>>,
    x_scale: ScaleAnimator<X>,
    y_scale: ScaleAnimator<Y>,
    extrema: DataExtrema<X, Y>,
    x_data_range: Option<Range>,
    y_data_range: Option<Range>,
    gradient_stops: usize,
    baseline_px: f64,
    frame: Rect,
    extrema_dirty: bool,
    laid_out: bool,
    observers: Vec<Box<dyn PlotObserver<X, Y>>>,
}

impl<X: ScaleValue, Y: ScaleValue> Plot<X, Y> {
    pub fn new(kind: PlotType) -> Self {
        Self {
            kind,
            style: PlotStyle::for_type(kind, &Theme::default()),
            points: BTreeMap::new(),
            x_scale: ScaleAnimator::new(),
            y_scale: ScaleAnimator::new(),
            extrema: DataExtrema::default(),
            x_data_range: None,
            y_data_range: None,
            gradient_stops: 0,
            baseline_px: 0.0,
            frame: Rect::default(),
            extrema_dirty: false,
            laid_out: false,
            observers: Vec::new(),
        }
    }

    pub fn line() -> Self { Self::new(PlotType::Line) }
    pub fn area() -> Self { Self::new(PlotType::Area) }
    pub fn bubble() -> Self { Self::new(PlotType::Bubble) }

    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    pub fn kind(&self) -> PlotType { self.kind }
    pub fn style(&self) -> &PlotStyle { &self.style }
    pub fn set_style(&mut self, style: PlotStyle) { self.style = style; }
    pub fn frame(&self) -> Rect { self.frame }

    pub fn add_observer(&mut self, observer: Box<dyn PlotObserver<X, Y>>) {
        self.observers.push(observer);
    }

    // ---- scales -------------------------------------------------------------

    pub fn x_scale(&self) -> &ScaleAnimator<X> { &self.x_scale }
    pub fn x_scale_mut(&mut self) -> &mut ScaleAnimator<X> { &mut self.x_scale }
    pub fn y_scale(&self) -> &ScaleAnimator<Y> { &self.y_scale }
    pub fn y_scale_mut(&mut self) -> &mut ScaleAnimator<Y> { &mut self.y_scale }

    /// Defer both scales to shared parents until a local override is set.
    pub fn inherit_scales(&mut self, x: SharedScale<X>, y: SharedScale<Y>) {
        self.x_scale.inherit_from(x);
        self.y_scale.inherit_from(y);
    }

    // ---- points -------------------------------------------------------------

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn points(&self) -> impl Iterator<Item = &DataPoint<X, Y>> { self.points.values() }
    pub fn data_point(&self, x: X) -> Option<&DataPoint<X, Y>> { self.points.get(&ScaleKey(x)) }

    /// Insert keyed by `x`. A point already at that `x` is replaced and returned.
    /// Non-finite coordinates are rejected with `InvalidValue`.
    pub fn insert_data_point(&mut self, point: DataPoint<X, Y>) -> Result<Option<DataPoint<X, Y>>> {
        point.validate()?;
        self.laid_out = false;
        let widened = self.extrema.widen(&point);
        let replaced = self.points.insert(ScaleKey(point.x()), point);
        if replaced.is_some() {
            // The old value may have been extremal.
            self.extrema_dirty = true;
        } else if widened {
            self.notify_data_domain();
        }
        Ok(replaced)
    }

    /// Points are ordered by `x`; an explicit position cannot be honored.
    pub fn insert_data_point_at(&mut self, _index: usize, _point: DataPoint<X, Y>) -> Result<()> {
        Err(ChartError::Unsupported("positional insert into an x-keyed plot"))
    }

    /// Generic child insertion; only data points belong on a plot.
    pub fn insert_child(&mut self, child: ChartNode<X, Y>) -> Result<()> {
        match child {
            ChartNode::DataPoint(point) => self.insert_data_point(point).map(|_| ()),
            other => Err(ChartError::TypeMismatch { expected: "data point", found: other.kind() }),
        }
    }

    /// Mutate the point at `x`. Widening is O(1); an inward move is picked up
    /// by the rescan at the next layout. An edit that leaves a non-finite
    /// coordinate is rejected and the stored point is unchanged.
    pub fn update_data_point<F>(&mut self, x: X, f: F) -> Result<bool>
    where
        F: FnOnce(&mut DataPoint<X, Y>),
    {
        let Some(point) = self.points.get_mut(&ScaleKey(x)) else {
            return Ok(false);
        };
        let mut edited = point.clone();
        f(&mut edited);
        edited.validate()?;
        *point = edited;
        self.laid_out = false;
        if self.extrema.widen(point) {
            self.notify_data_domain();
        }
        self.extrema_dirty = true;
        Ok(true)
    }

    pub fn remove_data_point(&mut self, x: X) -> Option<DataPoint<X, Y>> {
        let removed = self.points.remove(&ScaleKey(x))?;
        self.laid_out = false;
        self.retrack_extrema();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.laid_out = false;
        self.retrack_extrema();
    }

    /// O(n) recompute of the data domains over the remaining points.
    pub fn retrack_extrema(&mut self) {
        let fresh = DataExtrema::rescan(self.points.values());
        self.extrema_dirty = false;
        if fresh != self.extrema {
            trace!(points = self.points.len(), "data domain rescanned");
            self.extrema = fresh;
            self.notify_data_domain();
        }
    }

    pub fn needs_retrack(&self) -> bool { self.extrema_dirty }

    fn notify_data_domain(&mut self) {
        let (x, y) = (self.extrema.x_domain(), self.extrema.y_domain());
        for obs in self.observers.iter_mut() {
            obs.did_set_data_domain(x, y);
        }
    }

    pub fn x_data_domain(&self) -> Option<Domain<X>> { self.extrema.x_domain() }
    pub fn y_data_domain(&self) -> Option<Domain<Y>> { self.extrema.y_domain() }
    /// Data domain projected through the scale at the last layout.
    pub fn x_data_range(&self) -> Option<Range> { self.x_data_range }
    pub fn y_data_range(&self) -> Option<Range> { self.y_data_range }
    pub fn gradient_stops(&self) -> usize { self.gradient_stops }

    // ---- layout -------------------------------------------------------------

    /// Project, classify and count gradient stops for every point.
    pub fn layout(&mut self, frame: Rect) -> LayoutStatus {
        self.frame = frame;
        self.retrack_extrema();
        let (Some(xs), Some(ys)) = (self.x_scale.value(), self.y_scale.value()) else {
            self.laid_out = false;
            return LayoutStatus::NotReady;
        };

        let classify = matches!(self.kind, PlotType::Line | PlotType::Area);
        let ys_scalar: Vec<f64> = if classify {
            self.points.values().map(|p| p.y().to_scalar()).collect()
        } else {
            Vec::new()
        };

        let mut stops = 0;
        for (i, point) in self.points.values_mut().enumerate() {
            let y2 = point.y2().map(|v| ys.evaluate(v));
            point.set_coords(xs.evaluate(point.x()), ys.evaluate(point.y()), y2);
            if classify {
                let prev = if i > 0 { ys_scalar.get(i - 1).copied() } else { None };
                let next = ys_scalar.get(i + 1).copied();
                point.set_category(PointCategory::classify(prev, ys_scalar[i], next));
            }
            if point.is_gradient_stop() {
                stops += 1;
            }
        }
        self.gradient_stops = stops;

        self.baseline_px = match self.style.baseline {
            Some(b) => ys.evaluate(Y::from_scalar(b)),
            None => ys.range().min,
        };
        self.x_data_range = self
            .extrema
            .x_domain()
            .map(|d| Range::new(xs.evaluate(d.min()), xs.evaluate(d.max())));
        self.y_data_range = self
            .extrema
            .y_domain()
            .map(|d| Range::new(ys.evaluate(d.min()), ys.evaluate(d.max())));
        self.laid_out = true;

        let n = self.points.len();
        for obs in self.observers.iter_mut() {
            obs.did_layout(n);
        }
        debug!(kind = ?self.kind, points = n, gradient_stops = stops, "plot layout");
        LayoutStatus::Ready
    }

    /// Advance locally owned scales. Inherited scales are advanced by their owner.
    pub fn update(&mut self, now: Millis) -> bool {
        let x = self.x_scale.update(now);
        let y = self.y_scale.update(now);
        x || y
    }

    // ---- geometry & render --------------------------------------------------

    fn point_center(p: &DataPoint<X, Y>) -> Point2 { Point2::new(p.x_coord(), p.y_coord()) }

    fn bubble_radius(&self, p: &DataPoint<X, Y>) -> f64 {
        p.radius().unwrap_or(self.style.radius).px_value(self.frame.min_side())
    }

    pub fn geometry(&self) -> PlotGeometry {
        if !self.laid_out || self.points.is_empty() {
            return PlotGeometry::Empty;
        }
        match self.kind {
            PlotType::Bubble => PlotGeometry::Bubbles(
                self.points.values().map(|p| (Self::point_center(p), self.bubble_radius(p))).collect(),
            ),
            _ if self.points.len() == 1 => {
                let center = self.points.values().next().map(Self::point_center).unwrap_or_default();
                PlotGeometry::Dot { center, radius: self.style.stroke_width }
            }
            PlotType::Line => PlotGeometry::Line { vertices: self.points.values().map(Self::point_center).collect() },
            PlotType::Area => {
                let mut polygon: Vec<Point2> = self.points.values().map(Self::point_center).collect();
                polygon.extend(
                    self.points
                        .values()
                        .rev()
                        .map(|p| Point2::new(p.x_coord(), p.y2_coord().unwrap_or(self.baseline_px))),
                );
                PlotGeometry::Area { polygon }
            }
        }
    }

    /// Horizontal gradient across the x-pixel span. Once any point overrides its
    /// color or opacity every point contributes a stop, so plain points keep `base`.
    pub fn gradient(&self, base: Color) -> Option<LinearGradient> {
        if self.gradient_stops == 0 || !self.laid_out {
            return None;
        }
        let x0 = self.points.values().next()?.x_coord();
        let x1 = self.points.values().next_back()?.x_coord();
        let mut gradient = LinearGradient::new(Point2::new(x0, 0.0), Point2::new(x1, 0.0));
        for p in self.points.values() {
            let offset = if x1 != x0 { (p.x_coord() - x0) / (x1 - x0) } else { 0.0 };
            gradient.add_stop(offset, p.stop_color(base));
        }
        Some(gradient)
    }

    fn brush(&self, base: Color) -> Brush {
        match self.gradient(base) {
            Some(g) => Brush::Linear(g),
            None => Brush::Solid(base),
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        if !canvas.is_ready() {
            return;
        }
        match self.geometry() {
            PlotGeometry::Empty => return,
            PlotGeometry::Dot { center, radius } => {
                let color = if self.kind == PlotType::Area { self.style.fill } else { self.style.stroke };
                let mut path = Path::new();
                path.circle(center, radius);
                canvas.fill_path(&path, &Brush::Solid(color));
            }
            PlotGeometry::Line { vertices } => {
                canvas.stroke_path(&polyline(&vertices, false), &self.brush(self.style.stroke), self.style.stroke_width);
            }
            PlotGeometry::Area { polygon } => {
                canvas.fill_path(&polyline(&polygon, true), &self.brush(self.style.fill));
            }
            PlotGeometry::Bubbles(circles) => {
                for (p, (center, radius)) in self.points.values().zip(circles) {
                    let mut path = Path::new();
                    path.circle(center, radius);
                    canvas.fill_path(&path, &Brush::Solid(p.stop_color(self.style.fill)));
                    if self.style.stroke_width > 0.0 {
                        canvas.stroke_path(&path, &Brush::Solid(self.style.stroke), self.style.stroke_width);
                    }
                }
            }
        }
        self.render_labels(canvas);
    }

    fn render_labels(&self, canvas: &mut dyn Canvas) {
        let offset = self.style.stroke_width + 4.0;
        for p in self.points.values() {
            let Some(label) = p.label() else { continue };
            let (dy, baseline) = match p.label_placement() {
                LabelPlacement::Above => (-offset, TextBaseline::Bottom),
                LabelPlacement::Below => (offset, TextBaseline::Top),
            };
            let style = TextStyle { color: self.style.label, size: self.style.font_size, align: TextAlign::Center, baseline };
            canvas.fill_text(label, Point2::new(p.x_coord(), p.y_coord() + dy), &style);
        }
    }

    // ---- hit testing --------------------------------------------------------

    /// Whether the pixel `(x, y)` lands on this plot's rendered geometry.
    pub fn hit_test_plot(&self, x: f64, y: f64) -> bool {
        let at = Point2::new(x, y);
        match self.geometry() {
            PlotGeometry::Empty => false,
            PlotGeometry::Dot { center, radius } => {
                at.distance(center) <= radius.max(self.style.hit_width.max(self.style.stroke_width) / 2.0)
            }
            PlotGeometry::Line { vertices } => {
                let width = self.style.hit_width.max(self.style.stroke_width);
                point_near_polyline(at, &vertices, width / 2.0)
            }
            PlotGeometry::Area { polygon } => point_in_polygon(at, &polygon),
            PlotGeometry::Bubbles(circles) => circles
                .iter()
                .any(|(center, r)| at.distance(*center) <= self.style.hit_radius.max(*r)),
        }
    }

    /// Nearest point in x-domain distance to the pixel column `x`; ties go to the predecessor.
    pub fn hit_test_domain(&self, x: f64, _y: f64) -> Result<Option<&DataPoint<X, Y>>> {
        let scale = self.x_scale.value().ok_or(ChartError::EmptyDomain)?;
        if self.points.is_empty() {
            return Ok(None);
        }
        let value = scale.invert(x)?;
        let key = ScaleKey(value);
        let pred = self.points.range(..=key).next_back().map(|(_, p)| p);
        let succ = self.points.range(key..).next().map(|(_, p)| p);
        Ok(match (pred, succ) {
            (Some(a), Some(b)) => {
                if value.distance(a.x()) <= value.distance(b.x()) { Some(a) } else { Some(b) }
            }
            (a, b) => a.or(b),
        })
    }
}

fn polyline(points: &[Point2], close: bool) -> Path {
    let mut path = Path::with_capacity(points.len() + 1);
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            path.move_to(*p);
        } else {
            path.line_to(*p);
        }
    }
    if close {
        path.close();
    }
    path
}

// File: crates/plotline-core/src/axis.rs
// Summary: Axis model: orientation, scale, tick generation/reconciliation, layout and drawing.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::animator::ScaleAnimator;
use crate::canvas::{Brush, Canvas, Path, TextAlign, TextBaseline, TextStyle};
use crate::domain::{Range, ScaleKey};
use crate::error::{ChartError, Result};
use crate::geometry::{Point2, Rect};
use crate::node::ChartNode;
use crate::theme::Theme;
use crate::tick::Tick;
use crate::ticks::{self, desired_tick_count, TickGenerator, TickValue};
use crate::timing::{Millis, Timing, Transition};
use crate::types::{Color, Insets};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Top,
    Right,
    Bottom,
    Left,
}

impl Orientation {
    pub fn is_horizontal(&self) -> bool { matches!(self, Orientation::Top | Orientation::Bottom) }
}

/// Tick generator input: a generator, `true` for the type's default, or nothing.
pub enum TickGeneratorSetting<D> {
    Auto,
    Custom(Box<dyn TickGenerator<D>>),
    Disabled,
}

impl<D> From<bool> for TickGeneratorSetting<D> {
    fn from(enabled: bool) -> Self {
        if enabled { TickGeneratorSetting::Auto } else { TickGeneratorSetting::Disabled }
    }
}

impl<D> From<Option<Box<dyn TickGenerator<D>>>> for TickGeneratorSetting<D> {
    fn from(generator: Option<Box<dyn TickGenerator<D>>>) -> Self {
        match generator {
            Some(g) => TickGeneratorSetting::Custom(g),
            None => TickGeneratorSetting::Disabled,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisStyle {
    pub line: Color,
    pub tick: Color,
    pub label: Color,
    pub line_width: f64,
    pub tick_length: f64,
    pub label_padding: f64,
    pub font_size: f64,
}

impl AxisStyle {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            line: theme.axis_line,
            tick: theme.tick,
            label: theme.tick_label,
            line_width: 1.5,
            tick_length: 6.0,
            label_padding: 4.0,
            font_size: 12.0,
        }
    }
}

impl Default for AxisStyle {
    fn default() -> Self { Self::from_theme(&Theme::default()) }
}

pub const DEFAULT_TICK_SPACING: f64 = 80.0;

pub struct Axis<D: TickValue> {
    orientation: Orientation,
    scale: ScaleAnimator<D>,
    ticks: BTreeMap<ScaleKey<D>, Tick<D>>,
    generator: Option<Box<dyn TickGenerator<D>>>,
    auto_generator: bool,
    generated: bool,
    show_labels: bool,
    tick_mark_spacing: f64,
    tick_transition: Timing,
    origin: Point2,
    extent: Range,
    style: AxisStyle,
}

impl<D: TickValue> Axis<D> {
    pub fn new(orientation: Orientation) -> Self {
        let spacing = if orientation.is_horizontal() { DEFAULT_TICK_SPACING } else { DEFAULT_TICK_SPACING / 2.0 };
        Self {
            orientation,
            scale: ScaleAnimator::new(),
            ticks: BTreeMap::new(),
            generator: None,
            auto_generator: true,
            generated: false,
            show_labels: true,
            tick_mark_spacing: spacing,
            tick_transition: Timing::default(),
            origin: Point2::default(),
            extent: Range::unit(),
            style: AxisStyle::default(),
        }
    }

    pub fn bottom() -> Self { Self::new(Orientation::Bottom) }
    pub fn left() -> Self { Self::new(Orientation::Left) }

    pub fn orientation(&self) -> Orientation { self.orientation }
    pub fn scale(&self) -> &ScaleAnimator<D> { &self.scale }
    pub fn scale_mut(&mut self) -> &mut ScaleAnimator<D> { &mut self.scale }
    pub fn origin(&self) -> Point2 { self.origin }
    /// Pixel extent along the axis from the last layout.
    pub fn extent(&self) -> Range { self.extent }
    pub fn style(&self) -> &AxisStyle { &self.style }
    pub fn set_style(&mut self, style: AxisStyle) { self.style = style; }

    pub fn tick_mark_spacing(&self) -> f64 { self.tick_mark_spacing }
    /// Minimum pixel spacing between ticks. Zero keeps the generator's last count.
    pub fn set_tick_mark_spacing(&mut self, spacing: f64) { self.tick_mark_spacing = spacing.max(0.0); }

    pub fn tick_transition(&self) -> Timing { self.tick_transition }
    pub fn set_tick_transition(&mut self, timing: Timing) { self.tick_transition = timing; }

    pub fn show_labels(&self) -> bool { self.show_labels }
    /// Ticks created while labels are hidden are preserved and skip their fade-out.
    pub fn set_show_labels(&mut self, show: bool) { self.show_labels = show; }

    pub fn tick_generator(&self) -> Option<&dyn TickGenerator<D>> { self.generator.as_deref() }

    pub fn set_tick_generator(&mut self, setting: impl Into<TickGeneratorSetting<D>>) {
        match setting.into() {
            TickGeneratorSetting::Auto => {
                self.generator = None;
                self.auto_generator = true;
            }
            TickGeneratorSetting::Custom(g) => {
                self.generator = Some(g);
                self.auto_generator = false;
            }
            TickGeneratorSetting::Disabled => {
                self.generator = None;
                self.auto_generator = false;
            }
        }
        self.generated = false;
    }

    // ---- tick collection ----------------------------------------------------

    pub fn ticks(&self) -> impl Iterator<Item = &Tick<D>> { self.ticks.values() }
    pub fn tick(&self, value: D) -> Option<&Tick<D>> { self.ticks.get(&ScaleKey(value)) }
    pub fn tick_count(&self) -> usize { self.ticks.len() }

    /// Insert (or replace) a tick keyed by its value and fade it in, instantly
    /// before the first generation.
    pub fn insert_tick(&mut self, mut tick: Tick<D>) -> Option<Tick<D>> {
        let timing = if self.generated { Some(self.tick_transition) } else { None };
        tick.fade_in(timing);
        self.ticks.insert(ScaleKey(tick.value()), tick)
    }

    pub fn remove_tick(&mut self, value: D) -> Option<Tick<D>> {
        self.ticks.remove(&ScaleKey(value))
    }

    /// Generic child insertion; only ticks belong on an axis.
    pub fn insert_child<Y>(&mut self, child: ChartNode<D, Y>) -> Result<()> {
        match child {
            ChartNode::Tick(tick) => {
                self.insert_tick(tick);
                Ok(())
            }
            other => Err(ChartError::TypeMismatch { expected: "tick", found: other.kind() }),
        }
    }

    /// Ticks are keyed by value; positional insertion has no meaning here.
    pub fn insert_tick_at(&mut self, _index: usize, _tick: Tick<D>) -> Result<()> {
        Err(ChartError::Unsupported("positional insert into a value-keyed tick set"))
    }

    // ---- layout -------------------------------------------------------------

    /// Position the axis against the chart frame minus its gutter, then regenerate ticks.
    pub fn layout(&mut self, frame: Rect, gutter: &Insets) {
        let plot = frame.inset(gutter);
        let (origin, extent) = match self.orientation {
            Orientation::Bottom => (Point2::new(plot.left, plot.bottom), Range::new(plot.left, plot.right)),
            Orientation::Top => (Point2::new(plot.left, plot.top), Range::new(plot.left, plot.right)),
            Orientation::Left => (Point2::new(plot.left, plot.bottom), Range::new(plot.bottom, plot.top)),
            Orientation::Right => (Point2::new(plot.right, plot.bottom), Range::new(plot.bottom, plot.top)),
        };
        self.origin = origin;
        self.extent = extent;
        if self.scale.state().map(|s| s.range()) != Some(extent) && self.scale.state().is_some() {
            self.scale.set_base_range(extent.min, extent.max, Transition::Instant);
        }
        self.generate_ticks();
    }

    /// Reconcile displayed ticks against the generator's output for the current scale.
    pub fn generate_ticks(&mut self) {
        let Some(scale) = self.scale.value() else {
            return;
        };
        if self.generator.is_none() && self.auto_generator {
            self.generator = Some(ticks::from_scale(&scale, self.tick_mark_spacing));
            self.generated = false;
        }
        let spacing = self.tick_mark_spacing;
        let (values, labels) = match self.generator.as_mut() {
            Some(generator) => {
                if let Some(n) = desired_tick_count(scale.range().span(), spacing) {
                    generator.set_count(n);
                }
                let values = generator.generate(&scale.domain());
                let labels: Vec<String> = values.iter().map(|v| generator.format(*v)).collect();
                (values, labels)
            }
            None => (Vec::new(), Vec::new()),
        };
        self.reconcile(&values, &labels);
        for tick in self.ticks.values_mut() {
            tick.set_coord(scale.evaluate(tick.value()));
        }
    }

    /// Fade in every generated value, fade out (or drop, when preserved) the rest.
    /// The first generation for a generator shows its ticks instantly.
    pub fn reconcile(&mut self, values: &[D], labels: &[String]) {
        let timing = if self.generated { Some(self.tick_transition) } else { None };
        let mut keep = BTreeSet::new();
        for (i, &value) in values.iter().enumerate() {
            let key = ScaleKey(value);
            keep.insert(key);
            let show_labels = self.show_labels;
            let tick = self.ticks.entry(key).or_insert_with(|| {
                debug!(?value, "tick enter");
                let tick = Tick::new(value).preserved(!show_labels);
                match labels.get(i) {
                    Some(label) if show_labels => tick.with_label(label.clone()),
                    _ => tick,
                }
            });
            if show_labels && !tick.is_preserved() {
                if let Some(label) = labels.get(i) {
                    if tick.label() != Some(label.as_str()) {
                        tick.set_label(Some(label.clone()));
                    }
                }
            }
            tick.fade_in(timing);
        }

        let leaving: Vec<ScaleKey<D>> = self.ticks.keys().filter(|k| !keep.contains(*k)).copied().collect();
        for key in leaving {
            let preserved = self.ticks.get(&key).map(|t| t.is_preserved()).unwrap_or(false);
            if preserved {
                self.ticks.remove(&key);
            } else if let Some(tick) = self.ticks.get_mut(&key) {
                tick.fade_out(Some(self.tick_transition));
            }
        }
        if !values.is_empty() {
            self.generated = true;
        }
    }

    /// Advance the scale and tick fades; drop ticks whose fade-out finished.
    pub fn update(&mut self, now: Millis) -> bool {
        let mut animating = self.scale.update(now);
        for tick in self.ticks.values_mut() {
            animating |= tick.update(now);
        }
        let before = self.ticks.len();
        self.ticks.retain(|_, t| !t.is_removable());
        if self.ticks.len() != before {
            trace!(removed = before - self.ticks.len(), "ticks retired");
        }
        animating
    }

    // ---- render -------------------------------------------------------------

    pub fn render(&self, canvas: &mut dyn Canvas) {
        if !canvas.is_ready() {
            return;
        }
        let o = self.origin;
        let mut line = Path::new();
        if self.orientation.is_horizontal() {
            line.move_to(Point2::new(self.extent.min, o.y)).line_to(Point2::new(self.extent.max, o.y));
        } else {
            line.move_to(Point2::new(o.x, self.extent.min)).line_to(Point2::new(o.x, self.extent.max));
        }
        canvas.stroke_path(&line, &Brush::Solid(self.style.line), self.style.line_width);

        let len = self.style.tick_length;
        let pad = self.style.label_padding;
        for tick in self.ticks.values() {
            let c = tick.coord();
            if !c.is_finite() || tick.opacity() <= 0.0 {
                continue;
            }
            let (from, to, at, align, baseline) = match self.orientation {
                Orientation::Bottom => (
                    Point2::new(c, o.y), Point2::new(c, o.y + len),
                    Point2::new(c, o.y + len + pad), TextAlign::Center, TextBaseline::Top,
                ),
                Orientation::Top => (
                    Point2::new(c, o.y), Point2::new(c, o.y - len),
                    Point2::new(c, o.y - len - pad), TextAlign::Center, TextBaseline::Bottom,
                ),
                Orientation::Left => (
                    Point2::new(o.x, c), Point2::new(o.x - len, c),
                    Point2::new(o.x - len - pad, c), TextAlign::End, TextBaseline::Middle,
                ),
                Orientation::Right => (
                    Point2::new(o.x, c), Point2::new(o.x + len, c),
                    Point2::new(o.x + len + pad, c), TextAlign::Start, TextBaseline::Middle,
                ),
            };
            let mut mark = Path::new();
            mark.move_to(from).line_to(to);
            canvas.stroke_path(&mark, &Brush::Solid(self.style.tick.with_opacity(tick.opacity())), 1.0);
            if let Some(label) = tick.label() {
                let style = TextStyle {
                    color: self.style.label.with_opacity(tick.opacity()),
                    size: self.style.font_size,
                    align,
                    baseline,
                };
                canvas.fill_text(label, at, &style);
            }
        }
    }
}

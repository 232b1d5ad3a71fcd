// File: crates/plotline-core/src/chart.rs
// Summary: Chart container: root scales shared by plots and axes, and the per-frame pipeline.
//
// Frame order: retrack extrema -> fit and size root scales -> advance animation
// -> project/classify plots -> reconcile axis ticks -> render.

use tracing::{debug, trace};

use crate::animator::{ScaleAnimator, SharedScale};
use crate::axis::{Axis, AxisStyle};
use crate::canvas::{Brush, Canvas, Path};
use crate::domain::Domain;
use crate::error::Result;
use crate::geometry::{Point2, Rect};
use crate::plot::Plot;
use crate::theme::Theme;
use crate::ticks::TickValue;
use crate::timing::{Millis, Timing, Transition};
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartOptions {
    pub gutter: Insets,
    pub x_tick_spacing: f64,
    pub y_tick_spacing: f64,
    /// Timing for root scale retargets.
    pub timing: Timing,
    /// Timing for tick fade-in/out.
    pub tick_transition: Timing,
    /// Fit root domains to the union of the plots' data domains.
    pub fit_domains: bool,
    /// Fractional padding applied around fitted domains.
    pub domain_padding: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            gutter: Insets::default(),
            x_tick_spacing: 80.0,
            y_tick_spacing: 40.0,
            timing: Timing::default(),
            tick_transition: Timing::default(),
            fit_domains: true,
            domain_padding: 0.05,
        }
    }
}

/// Result of a chart-level hit test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartHit<X> {
    /// Index of the topmost plot whose geometry was hit.
    pub plot: usize,
    /// Key of that plot's nearest point by x, when one could be resolved.
    pub x: Option<X>,
}

pub struct Chart<X: TickValue, Y: TickValue> {
    x_scale: SharedScale<X>,
    y_scale: SharedScale<Y>,
    x_axis: Option<Axis<X>>,
    y_axis: Option<Axis<Y>>,
    plots: Vec<Plot<X, Y>>,
    theme: Theme,
    options: ChartOptions,
    frame: Rect,
    fit_x: bool,
    fit_y: bool,
}

impl<X: TickValue, Y: TickValue> Default for Chart<X, Y> {
    fn default() -> Self {
        Self::new(Rect::from_ltwh(0.0, 0.0, WIDTH as f64, HEIGHT as f64), ChartOptions::default())
    }
}

impl<X: TickValue, Y: TickValue> Chart<X, Y> {
    pub fn new(frame: Rect, options: ChartOptions) -> Self {
        let x_scale = ScaleAnimator::new().with_timing(options.timing).shared();
        let y_scale = ScaleAnimator::new().with_timing(options.timing).shared();
        let mut chart = Self {
            x_scale,
            y_scale,
            x_axis: None,
            y_axis: None,
            plots: Vec::new(),
            theme: Theme::default(),
            options,
            frame,
            fit_x: options.fit_domains,
            fit_y: options.fit_domains,
        };
        chart.set_x_axis(Some(Axis::bottom()));
        chart.set_y_axis(Some(Axis::left()));
        chart
    }

    pub fn options(&self) -> &ChartOptions { &self.options }
    pub fn frame(&self) -> Rect { self.frame }
    pub fn set_frame(&mut self, frame: Rect) { self.frame = frame; }
    /// Pixel rect the plots occupy: the frame minus the gutter.
    pub fn plot_rect(&self) -> Rect { self.frame.inset(&self.options.gutter) }

    pub fn theme(&self) -> &Theme { &self.theme }

    /// Apply `theme` to the background and both axes. Plot styles are left alone.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        let style = AxisStyle::from_theme(&theme);
        if let Some(axis) = self.x_axis.as_mut() {
            axis.set_style(style);
        }
        if let Some(axis) = self.y_axis.as_mut() {
            axis.set_style(style);
        }
    }

    // ---- scales -------------------------------------------------------------

    pub fn x_scale(&self) -> SharedScale<X> { self.x_scale.clone() }
    pub fn y_scale(&self) -> SharedScale<Y> { self.y_scale.clone() }

    /// Pin the x domain; automatic fitting stops for x.
    pub fn set_x_domain(&mut self, min: X, max: X, transition: Transition) {
        self.fit_x = false;
        self.x_scale.borrow_mut().set_domain(min, max, transition);
    }

    pub fn set_y_domain(&mut self, min: Y, max: Y, transition: Transition) {
        self.fit_y = false;
        self.y_scale.borrow_mut().set_domain(min, max, transition);
    }

    /// Resume fitting both domains to the data.
    pub fn fit_to_data(&mut self) {
        self.fit_x = true;
        self.fit_y = true;
    }

    /// Shift both root scales by a pixel delta. Stops automatic fitting.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.fit_x = false;
        self.fit_y = false;
        let mut xs = self.x_scale.borrow_mut();
        if let Some(s) = xs.state() {
            xs.set_scale(s.pan_px(dx), Transition::Instant);
        }
        drop(xs);
        let mut ys = self.y_scale.borrow_mut();
        if let Some(s) = ys.state() {
            ys.set_scale(s.pan_px(dy), Transition::Instant);
        }
    }

    /// Zoom both root scales about the pixel `(cx, cy)`. `factor > 1` zooms in.
    pub fn zoom(&mut self, cx: f64, cy: f64, factor: f64) -> Result<()> {
        let x_target = match self.x_scale.borrow().state() {
            Some(s) => Some(s.zoom_at(cx, factor)?),
            None => None,
        };
        let y_target = match self.y_scale.borrow().state() {
            Some(s) => Some(s.zoom_at(cy, factor)?),
            None => None,
        };
        self.fit_x = false;
        self.fit_y = false;
        if let Some(s) = x_target {
            self.x_scale.borrow_mut().set_scale(s, Transition::Default);
        }
        if let Some(s) = y_target {
            self.y_scale.borrow_mut().set_scale(s, Transition::Default);
        }
        Ok(())
    }

    // ---- children -----------------------------------------------------------

    pub fn x_axis(&self) -> Option<&Axis<X>> { self.x_axis.as_ref() }
    pub fn x_axis_mut(&mut self) -> Option<&mut Axis<X>> { self.x_axis.as_mut() }
    pub fn y_axis(&self) -> Option<&Axis<Y>> { self.y_axis.as_ref() }
    pub fn y_axis_mut(&mut self) -> Option<&mut Axis<Y>> { self.y_axis.as_mut() }

    /// Install (or remove) the x axis. The axis defers to the root x scale.
    pub fn set_x_axis(&mut self, axis: Option<Axis<X>>) {
        self.x_axis = axis.map(|mut a| {
            a.scale_mut().inherit_from(self.x_scale.clone());
            a.set_tick_mark_spacing(self.options.x_tick_spacing);
            a.set_tick_transition(self.options.tick_transition);
            a.set_style(AxisStyle::from_theme(&self.theme));
            a
        });
    }

    pub fn set_y_axis(&mut self, axis: Option<Axis<Y>>) {
        self.y_axis = axis.map(|mut a| {
            a.scale_mut().inherit_from(self.y_scale.clone());
            a.set_tick_mark_spacing(self.options.y_tick_spacing);
            a.set_tick_transition(self.options.tick_transition);
            a.set_style(AxisStyle::from_theme(&self.theme));
            a
        });
    }

    /// Add a plot that defers to the root scales. Returns its index.
    pub fn add_plot(&mut self, mut plot: Plot<X, Y>) -> usize {
        plot.inherit_scales(self.x_scale.clone(), self.y_scale.clone());
        self.plots.push(plot);
        self.plots.len() - 1
    }

    pub fn remove_plot(&mut self, index: usize) -> Option<Plot<X, Y>> {
        (index < self.plots.len()).then(|| self.plots.remove(index))
    }

    pub fn plots(&self) -> &[Plot<X, Y>] { &self.plots }
    pub fn plot(&self, index: usize) -> Option<&Plot<X, Y>> { self.plots.get(index) }
    pub fn plot_mut(&mut self, index: usize) -> Option<&mut Plot<X, Y>> { self.plots.get_mut(index) }

    // ---- frame pipeline -----------------------------------------------------

    /// Run one frame at `now`. Returns whether anything is still animating.
    pub fn update(&mut self, now: Millis, canvas: Option<&mut dyn Canvas>) -> bool {
        for plot in self.plots.iter_mut().filter(|p| p.needs_retrack()) {
            plot.retrack_extrema();
        }
        self.fit_domains();
        self.sync_ranges();

        let mut animating = self.x_scale.borrow_mut().update(now);
        animating |= self.y_scale.borrow_mut().update(now);
        for plot in self.plots.iter_mut() {
            animating |= plot.update(now);
        }

        let rect = self.plot_rect();
        for plot in self.plots.iter_mut() {
            plot.layout(rect);
        }
        let gutter = self.options.gutter;
        if let Some(axis) = self.x_axis.as_mut() {
            axis.layout(self.frame, &gutter);
            animating |= axis.update(now);
        }
        if let Some(axis) = self.y_axis.as_mut() {
            axis.layout(self.frame, &gutter);
            animating |= axis.update(now);
        }

        if let Some(canvas) = canvas {
            self.render(canvas);
        }
        animating
    }

    fn fit_domains(&mut self) {
        let pad = self.options.domain_padding;
        if self.fit_x {
            let union = union_all(self.plots.iter().filter_map(|p| p.x_data_domain()));
            if let Some(d) = union.map(|d| d.padded(pad)) {
                let mut xs = self.x_scale.borrow_mut();
                if xs.state().map(|s| s.domain()) != Some(d) {
                    debug!(min = ?d.min(), max = ?d.max(), "fit x domain");
                    xs.set_domain(d.min(), d.max(), Transition::Default);
                }
            }
        }
        if self.fit_y {
            let union = union_all(self.plots.iter().filter_map(|p| p.y_data_domain()));
            if let Some(d) = union.map(|d| d.padded(pad)) {
                let mut ys = self.y_scale.borrow_mut();
                if ys.state().map(|s| s.domain()) != Some(d) {
                    debug!(min = ?d.min(), max = ?d.max(), "fit y domain");
                    ys.set_domain(d.min(), d.max(), Transition::Default);
                }
            }
        }
    }

    /// Size root ranges to the plot rect. Vertical pixels grow downward, so y runs bottom to top.
    fn sync_ranges(&mut self) {
        let rect = self.plot_rect();
        let mut xs = self.x_scale.borrow_mut();
        if let Some(s) = xs.state() {
            if s.range().min != rect.left || s.range().max != rect.right {
                xs.set_range(rect.left, rect.right, Transition::Instant);
            }
        }
        drop(xs);
        let mut ys = self.y_scale.borrow_mut();
        if let Some(s) = ys.state() {
            if s.range().min != rect.bottom || s.range().max != rect.top {
                ys.set_range(rect.bottom, rect.top, Transition::Instant);
            }
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        if !canvas.is_ready() {
            trace!("canvas not ready; skipping render");
            return;
        }
        let f = self.frame;
        let mut bg = Path::new();
        bg.move_to(Point2::new(f.left, f.top))
            .line_to(Point2::new(f.right, f.top))
            .line_to(Point2::new(f.right, f.bottom))
            .line_to(Point2::new(f.left, f.bottom))
            .close();
        canvas.fill_path(&bg, &Brush::Solid(self.theme.background));
        for plot in &self.plots {
            plot.render(canvas);
        }
        if let Some(axis) = &self.x_axis {
            axis.render(canvas);
        }
        if let Some(axis) = &self.y_axis {
            axis.render(canvas);
        }
    }

    /// Topmost plot under the pixel `(x, y)` and its nearest point by x.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<ChartHit<X>> {
        self.plots.iter().enumerate().rev().find_map(|(i, plot)| {
            plot.hit_test_plot(x, y).then(|| ChartHit {
                plot: i,
                x: plot.hit_test_domain(x, y).ok().flatten().map(|p| p.x()),
            })
        })
    }
}

fn union_all<D: TickValue>(domains: impl Iterator<Item = Domain<D>>) -> Option<Domain<D>> {
    domains.reduce(|a, b| a.union(&b))
}

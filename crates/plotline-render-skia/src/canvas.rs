// File: crates/plotline-render-skia/src/canvas.rs
// Summary: `Canvas` implementation that replays core paths and brushes onto a Skia canvas.

use std::f64::consts::TAU;

use plotline_core::{Brush, Canvas, Color, LinearGradient, Path, PathVerb, Point2, TextStyle};
use skia_safe as skia;
use tracing::warn;

use crate::text::TextShaper;

pub fn to_skia_color(c: Color) -> skia::Color { skia::Color::from_argb(c.a, c.r, c.g, c.b) }

/// Borrowing adapter over a Skia canvas. Without a shaper, text calls are dropped.
pub struct SkiaCanvas<'a> {
    canvas: &'a skia::Canvas,
    text: Option<&'a TextShaper>,
}

impl<'a> SkiaCanvas<'a> {
    pub fn new(canvas: &'a skia::Canvas, text: Option<&'a TextShaper>) -> Self {
        Self { canvas, text }
    }
}

pub fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for verb in path.verbs() {
        match *verb {
            PathVerb::MoveTo(p) => {
                out.move_to((p.x as f32, p.y as f32));
            }
            PathVerb::LineTo(p) => {
                out.line_to((p.x as f32, p.y as f32));
            }
            PathVerb::Arc { center, radius, start, sweep } => {
                if sweep.abs() >= TAU {
                    out.add_circle((center.x as f32, center.y as f32), radius as f32, None);
                } else {
                    let oval = skia::Rect::from_ltrb(
                        (center.x - radius) as f32,
                        (center.y - radius) as f32,
                        (center.x + radius) as f32,
                        (center.y + radius) as f32,
                    );
                    out.arc_to(oval, start.to_degrees() as f32, sweep.to_degrees() as f32, false);
                }
            }
            PathVerb::Close => {
                out.close();
            }
        }
    }
    out
}

fn gradient_shader(g: &LinearGradient) -> Option<skia::Shader> {
    let colors: Vec<skia::Color> = g.stops.iter().map(|s| to_skia_color(s.color)).collect();
    let positions: Vec<f32> = g.stops.iter().map(|s| s.offset as f32).collect();
    skia::Shader::linear_gradient(
        (skia::Point::new(g.start.x as f32, g.start.y as f32), skia::Point::new(g.end.x as f32, g.end.y as f32)),
        colors.as_slice(),
        positions.as_slice(),
        skia::TileMode::Clamp,
        None,
        None,
    )
}

fn paint_for(brush: &Brush, style: skia::paint::Style, width: f64) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(style);
    if style == skia::paint::Style::Stroke {
        paint.set_stroke_width(width as f32);
    }
    match brush {
        Brush::Solid(c) => {
            paint.set_color(to_skia_color(*c));
        }
        Brush::Linear(g) => match gradient_shader(g) {
            Some(shader) => {
                paint.set_shader(shader);
            }
            None => {
                warn!(stops = g.stops.len(), "gradient shader unavailable; using first stop");
                let c = g.stops.first().map(|s| s.color).unwrap_or(Color::TRANSPARENT);
                paint.set_color(to_skia_color(c));
            }
        },
    }
    paint
}

impl Canvas for SkiaCanvas<'_> {
    fn fill_path(&mut self, path: &Path, brush: &Brush) {
        let paint = paint_for(brush, skia::paint::Style::Fill, 0.0);
        self.canvas.draw_path(&to_skia_path(path), &paint);
    }

    fn stroke_path(&mut self, path: &Path, brush: &Brush, width: f64) {
        let paint = paint_for(brush, skia::paint::Style::Stroke, width);
        self.canvas.draw_path(&to_skia_path(path), &paint);
    }

    fn fill_text(&mut self, text: &str, at: Point2, style: &TextStyle) {
        if let Some(shaper) = self.text {
            shaper.draw(self.canvas, text, at.x as f32, at.y as f32, style);
        }
    }
}

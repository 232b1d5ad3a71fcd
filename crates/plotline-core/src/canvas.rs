// File: crates/plotline-core/src/canvas.rs
// Summary: Backend-neutral drawing surface: recorded paths, brushes and a recording canvas.

use crate::geometry::Point2;
use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathVerb {
    MoveTo(Point2),
    LineTo(Point2),
    /// Circular arc, angles in radians, `sweep` signed.
    Arc { center: Point2, radius: f64, start: f64, sweep: f64 },
    Close,
}

/// A recorded path; backends replay the verbs onto their native path type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    verbs: Vec<PathVerb>,
}

impl Path {
    pub fn new() -> Self { Self::default() }

    pub fn with_capacity(n: usize) -> Self { Self { verbs: Vec::with_capacity(n) } }

    pub fn move_to(&mut self, p: Point2) -> &mut Self {
        self.verbs.push(PathVerb::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point2) -> &mut Self {
        self.verbs.push(PathVerb::LineTo(p));
        self
    }

    pub fn arc(&mut self, center: Point2, radius: f64, start: f64, sweep: f64) -> &mut Self {
        self.verbs.push(PathVerb::Arc { center, radius, start, sweep });
        self
    }

    pub fn circle(&mut self, center: Point2, radius: f64) -> &mut Self {
        self.arc(center, radius, 0.0, std::f64::consts::TAU)
    }

    pub fn close(&mut self) -> &mut Self {
        self.verbs.push(PathVerb::Close);
        self
    }

    pub fn verbs(&self) -> &[PathVerb] { &self.verbs }
    pub fn is_empty(&self) -> bool { self.verbs.is_empty() }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point2,
    pub end: Point2,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end, stops: Vec::new() }
    }

    pub fn add_stop(&mut self, offset: f64, color: Color) {
        self.stops.push(GradientStop { offset: offset.clamp(0.0, 1.0), color });
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    Linear(LinearGradient),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    #[default]
    Middle,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f64,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Drawing surface the core renders onto.
pub trait Canvas {
    /// When false no drawing calls are issued at all.
    fn is_ready(&self) -> bool { true }
    fn fill_path(&mut self, path: &Path, brush: &Brush);
    fn stroke_path(&mut self, path: &Path, brush: &Brush, width: f64);
    fn fill_text(&mut self, text: &str, at: Point2, style: &TextStyle);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Fill { path: Path, brush: Brush },
    Stroke { path: Path, brush: Brush, width: f64 },
    Text { text: String, at: Point2, style: TextStyle },
}

/// Canvas that records calls instead of drawing. Used by tests and benches.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
    pub detached: bool,
}

impl RecordingCanvas {
    pub fn new() -> Self { Self::default() }

    /// A canvas that reports itself as not ready.
    pub fn detached() -> Self { Self { calls: Vec::new(), detached: true } }

    pub fn clear(&mut self) { self.calls.clear(); }

    pub fn fills(&self) -> impl Iterator<Item = (&Path, &Brush)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Fill { path, brush } => Some((path, brush)),
            _ => None,
        })
    }

    pub fn strokes(&self) -> impl Iterator<Item = (&Path, &Brush, f64)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Stroke { path, brush, width } => Some((path, brush, *width)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn is_ready(&self) -> bool { !self.detached }

    fn fill_path(&mut self, path: &Path, brush: &Brush) {
        self.calls.push(DrawCall::Fill { path: path.clone(), brush: brush.clone() });
    }

    fn stroke_path(&mut self, path: &Path, brush: &Brush, width: f64) {
        self.calls.push(DrawCall::Stroke { path: path.clone(), brush: brush.clone(), width });
    }

    fn fill_text(&mut self, text: &str, at: Point2, style: &TextStyle) {
        self.calls.push(DrawCall::Text { text: text.to_string(), at, style: *style });
    }
}

// File: crates/plotline-core/src/types.rs
// Summary: Shared types and constants (frame sizes, gutters, colors, lengths).

/// Default frame width in pixels.
pub const WIDTH: i32 = 1024;
/// Default frame height in pixels.
pub const HEIGHT: i32 = 640;

/// Gutter around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn zero() -> Self { Self::new(0, 0, 0, 0) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

/// 8-bit ARGB color, the same channel layout Skia uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn alpha(&self) -> f64 { self.a as f64 / 255.0 }

    /// Multiply the existing alpha by `opacity` (clamped to `[0, 1]`).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let o = opacity.clamp(0.0, 1.0);
        Self { a: (self.a as f64 * o).round() as u8, ..self }
    }
}

/// A length that is either absolute pixels or a percentage of the frame's smaller side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Pct(f64),
}

impl Length {
    /// Resolve to pixels against `basis` (the min of frame width and height).
    pub fn px_value(&self, basis: f64) -> f64 {
        match *self {
            Length::Px(v) => v,
            Length::Pct(p) => p / 100.0 * basis,
        }
    }
}

impl Default for Length {
    fn default() -> Self { Length::Px(5.0) }
}

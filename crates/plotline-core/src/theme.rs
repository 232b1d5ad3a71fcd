// File: crates/plotline-core/src/theme.rs
// Summary: Light/Dark default colors for plots and axes.

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub tick: Color,
    pub tick_label: Color,
    pub line_stroke: Color,
    pub area_fill: Color,
    pub bubble_fill: Color,
    pub bubble_stroke: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            axis_line: Color::from_argb(255, 180, 180, 190),
            tick: Color::from_argb(255, 150, 150, 160),
            tick_label: Color::from_argb(255, 235, 235, 245),
            line_stroke: Color::from_argb(255, 64, 160, 255),
            area_fill: Color::from_argb(96, 64, 160, 255),
            bubble_fill: Color::from_argb(200, 40, 200, 120),
            bubble_stroke: Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            axis_line: Color::from_argb(255, 60, 60, 70),
            tick: Color::from_argb(255, 100, 100, 110),
            tick_label: Color::from_argb(255, 20, 20, 30),
            line_stroke: Color::from_argb(255, 32, 120, 200),
            area_fill: Color::from_argb(80, 32, 120, 200),
            bubble_fill: Color::from_argb(200, 20, 160, 90),
            bubble_stroke: Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            axis_line: Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            tick_label: Color::from_argb(255, 0xff, 0xff, 0xff),
            line_stroke: Color::from_argb(255, 0x00, 0xff, 0xff),
            area_fill: Color::from_argb(120, 0x00, 0xaa, 0xff),
            bubble_fill: Color::from_argb(255, 0x00, 0xff, 0x00),
            bubble_stroke: Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}

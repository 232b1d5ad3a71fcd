// File: crates/plotline-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; anchors paragraphs by align/baseline.

use plotline_core::{TextAlign, TextBaseline, TextStyle as LabelStyle};
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::canvas::to_skia_color;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // Tabular-number families keep tick labels aligned
        ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` so that `(x, y)` is the anchor named by the style's align and baseline.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, style: &LabelStyle) {
        let mut p = self.layout(text, style.size as f32, to_skia_color(style.color));
        let (w, h) = (p.longest_line(), p.height());
        let dx = match style.align {
            TextAlign::Start => 0.0,
            TextAlign::Center => -w / 2.0,
            TextAlign::End => -w,
        };
        let dy = match style.baseline {
            TextBaseline::Top => 0.0,
            TextBaseline::Middle => -h / 2.0,
            TextBaseline::Bottom => -h,
        };
        p.paint(canvas, (x + dx, y + dy));
    }
}

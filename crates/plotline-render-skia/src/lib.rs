// File: crates/plotline-render-skia/src/lib.rs
// Summary: Skia renderer crate: a `Canvas` over Skia plus headless PNG/RGBA output.

pub mod canvas;
pub mod raster;
pub mod text;

pub use canvas::SkiaCanvas;
pub use raster::{render_frame, render_to_png, render_to_png_bytes, render_to_rgba8, RasterOptions};
pub use text::TextShaper;

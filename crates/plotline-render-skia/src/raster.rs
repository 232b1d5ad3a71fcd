// File: crates/plotline-render-skia/src/raster.rs
// Summary: Headless frame rendering on CPU raster surfaces: PNG files, PNG bytes, RGBA buffers.

use anyhow::{anyhow, Result};
use plotline_core::{Chart, Color, Millis, Rect, TickValue};
use skia_safe as skia;
use tracing::debug;

use crate::canvas::{to_skia_color, SkiaCanvas};
use crate::text::TextShaper;

pub struct RasterOptions {
    pub width: i32,
    pub height: i32,
    /// Surface clear color underneath the chart's own background.
    pub background: Color,
    /// Labels depend on installed fonts; disable for deterministic pixels.
    pub draw_labels: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            width: plotline_core::types::WIDTH,
            height: plotline_core::types::HEIGHT,
            background: Color::from_argb(255, 18, 18, 20),
            draw_labels: true,
        }
    }
}

fn draw_frame<X: TickValue, Y: TickValue>(
    chart: &mut Chart<X, Y>,
    now: Millis,
    opts: &RasterOptions,
) -> Result<skia::Surface> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow!("failed to create raster surface"))?;
    surface.canvas().clear(to_skia_color(opts.background));

    chart.set_frame(Rect::from_ltwh(0.0, 0.0, opts.width as f64, opts.height as f64));
    let shaper = opts.draw_labels.then(TextShaper::new);
    let animating = {
        let mut canvas = SkiaCanvas::new(surface.canvas(), shaper.as_ref());
        chart.update(now, Some(&mut canvas))
    };
    debug!(now, animating, width = opts.width, height = opts.height, "raster frame");
    Ok(surface)
}

/// Size the chart to the surface, run one frame at `now` and return the snapshot.
pub fn render_frame<X: TickValue, Y: TickValue>(
    chart: &mut Chart<X, Y>,
    now: Millis,
    opts: &RasterOptions,
) -> Result<skia::Image> {
    Ok(draw_frame(chart, now, opts)?.image_snapshot())
}

pub fn render_to_png_bytes<X: TickValue, Y: TickValue>(
    chart: &mut Chart<X, Y>,
    now: Millis,
    opts: &RasterOptions,
) -> Result<Vec<u8>> {
    let image = render_frame(chart, now, opts)?;
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render one frame and write it to `output_png_path`, creating parent directories.
pub fn render_to_png<X: TickValue, Y: TickValue>(
    chart: &mut Chart<X, Y>,
    now: Millis,
    opts: &RasterOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(chart, now, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

/// Render one frame into an unpremultiplied RGBA8 buffer: `(pixels, width, height, row_bytes)`.
pub fn render_to_rgba8<X: TickValue, Y: TickValue>(
    chart: &mut Chart<X, Y>,
    now: Millis,
    opts: &RasterOptions,
) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = draw_frame(chart, now, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, pixels.as_mut_slice(), stride, (0, 0)) {
        return Err(anyhow!("read_pixels failed"));
    }
    Ok((pixels, w as u32, h as u32, stride))
}

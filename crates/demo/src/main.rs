// File: crates/demo/src/main.rs
// Summary: Demo loads x,y[,y2] CSV (or synthesizes a series), animates area/line/bubble plots, writes PNG frames.

use anyhow::{Context, Result};
use plotline_core::{theme, Chart, ChartOptions, Color, DataPoint, Length, Plot, PlotStyle, Rect};
use plotline_render_skia::{render_to_png, RasterOptions};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug)]
struct Row {
    x: f64,
    y: f64,
    y2: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // [csv-path] [out-dir]; no path (or "-") synthesizes data. PLOTLINE_THEME picks a preset.
    let mut args = std::env::args().skip(1);
    let input = args.next().filter(|a| a != "-");
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/out".to_string()));

    let rows = match &input {
        Some(raw) => {
            let path = Path::new(raw);
            load_xy_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => synthesize(60),
    };
    info!(rows = rows.len(), source = input.as_deref().unwrap_or("synthetic"), "loaded data");
    if rows.is_empty() {
        anyhow::bail!("no rows loaded; expected numeric x,y[,y2] columns.");
    }

    let opts = RasterOptions::default();
    let mut chart = Chart::<f64, f64>::new(
        Rect::from_ltwh(0.0, 0.0, opts.width as f64, opts.height as f64),
        ChartOptions::default(),
    );
    let theme = std::env::var("PLOTLINE_THEME").map(|name| theme::find(&name)).unwrap_or_default();
    info!(theme = theme.name, "using theme");
    chart.set_theme(theme);
    for plot in [build_area(&rows)?, build_line(&rows)?, build_bubbles(&rows)?] {
        let style = PlotStyle::for_type(plot.kind(), &theme);
        chart.add_plot(plot.with_style(style));
    }

    // 1) First frame: domains fit instantly, ticks appear without fading
    let mut now = 0.0;
    write_frame(&mut chart, now, &opts, &out_dir, "initial")?;

    // 2) Drop the highest point from every plot; the y domain shrinks and tweens
    let peak = rows
        .iter()
        .copied()
        .max_by(|a, b| a.y.total_cmp(&b.y))
        .map(|r| r.x);
    if let Some(x) = peak {
        for i in 0..chart.plots().len() {
            if let Some(plot) = chart.plot_mut(i) {
                plot.remove_data_point(x);
            }
        }
        info!(x, "removed peak point");
    }
    now += 16.0;
    write_frame(&mut chart, now, &opts, &out_dir, "shrink_start")?;
    now += chart.options().timing.duration / 2.0;
    write_frame(&mut chart, now, &opts, &out_dir, "shrink_mid")?;

    // 3) Let every tween and tick fade settle
    let mut frames = 0;
    while frames < 120 {
        now += 16.0;
        frames += 1;
        let done = !chart.update(now, None);
        if done {
            break;
        }
    }
    if frames == 120 {
        warn!("animation did not settle within 120 frames");
    }
    write_frame(&mut chart, now, &opts, &out_dir, "settled")?;

    // 4) Hit test the middle of the plot rect
    let rect = chart.plot_rect();
    let (cx, cy) = ((rect.left + rect.right) / 2.0, (rect.top + rect.bottom) / 2.0);
    match chart.hit_test(cx, cy) {
        Some(hit) => info!(plot = hit.plot, x = ?hit.x, "hit at plot center"),
        None => info!("nothing under plot center"),
    }

    Ok(())
}

fn write_frame(chart: &mut Chart<f64, f64>, now: f64, opts: &RasterOptions, out_dir: &Path, name: &str) -> Result<()> {
    let out = out_dir.join(format!("plotline_{name}.png"));
    render_to_png(chart, now, opts, &out).with_context(|| format!("rendering {}", out.display()))?;
    info!(now, path = %out.display(), "wrote frame");
    Ok(())
}

fn build_area(rows: &[Row]) -> Result<Plot<f64, f64>> {
    let mut plot = Plot::area();
    for r in rows {
        let p = DataPoint::new(r.x, r.y);
        plot.insert_data_point(match r.y2 {
            Some(y2) => p.with_y2(y2),
            None => p,
        })?;
    }
    Ok(plot)
}

fn build_line(rows: &[Row]) -> Result<Plot<f64, f64>> {
    let mut plot = Plot::line();
    let n = rows.len().max(1) as f64;
    for (i, r) in rows.iter().enumerate() {
        // Fade the stroke from cool to warm across the series
        let t = i as f64 / n;
        let color = Color::from_rgb((64.0 + 191.0 * t) as u8, 160, (255.0 * (1.0 - t)) as u8);
        plot.insert_data_point(DataPoint::new(r.x, r.y).with_color(color))?;
    }
    Ok(plot)
}

fn build_bubbles(rows: &[Row]) -> Result<Plot<f64, f64>> {
    let mut plot = Plot::bubble();
    let stride = (rows.len() / 12).max(1);
    for r in rows.iter().step_by(stride) {
        let size = 0.5 + (r.y.abs() % 1.5);
        plot.insert_data_point(DataPoint::new(r.x, r.y).with_radius(Length::Pct(size)).with_opacity(0.8))?;
    }
    Ok(plot)
}

fn synthesize(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            let y = (x * 0.2).sin() * 10.0 + x * 0.15;
            Row { x, y, y2: Some(y.min(0.0) - 2.0) }
        })
        .collect()
}

/// Load a CSV with x and y columns (and an optional y2/low column).
fn load_xy_csv(path: &Path) -> Result<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };

    let i_x = idx(&["x", "time", "timestamp", "date", "index"]);
    let i_y = idx(&["y", "value", "close"]).unwrap_or(1);
    let i_y2 = idx(&["y2", "low", "baseline"]);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> {
            rec.get(i).and_then(|s| s.trim().parse::<f64>().ok()).filter(|v| v.is_finite())
        };
        let x = i_x.and_then(parse).unwrap_or(row as f64);
        match parse(i_y) {
            Some(y) => out.push(Row { x, y, y2: i_y2.and_then(parse) }),
            None => warn!(row, "skipping row without a numeric y"),
        }
    }
    Ok(out)
}

//! Rasterize a [`ChartSpec`] into a [`Canvas`].
//!
//! Sizes are specified in points at 100 DPI and scaled to the requested
//! resolution, so a chart looks the same at any DPI, only sharper.

use log::debug;

use crate::chart::{ChartSpec, Series};
use crate::error::{PlotError, Result};
use crate::raster::{text_size, Canvas, Rgb};

/// Figure size in inches.
pub const FIGURE_WIDTH_IN: f64 = 10.0;
pub const FIGURE_HEIGHT_IN: f64 = 6.0;

/// Largest canvas side accepted, in pixels.
const MAX_SIDE: f64 = 20_000.0;

const BACKGROUND: Rgb = [255, 255, 255];
const GRID: Rgb = [221, 221, 221];
const FRAME: Rgb = [204, 204, 204];
const TEXT: Rgb = [38, 38, 38];
const LEGEND_BORDER: Rgb = [204, 204, 204];

/// Line colors, assigned to series in order.
pub const PALETTE: [Rgb; 6] = [
    [0x01, 0x73, 0xB2],
    [0xDE, 0x8F, 0x05],
    [0x02, 0x9E, 0x73],
    [0xD5, 0x5E, 0x00],
    [0xCC, 0x78, 0xBC],
    [0xCA, 0x91, 0x61],
];

/// Resolution of the rendered chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub dpi: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { dpi: 300 }
    }
}

impl RenderOptions {
    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (FIGURE_WIDTH_IN * dpi).round() as u32,
            (FIGURE_HEIGHT_IN * dpi).round() as u32,
        )
    }

    fn px(&self, points: f64) -> f64 {
        (points * self.dpi as f64 / 100.0).max(1.0)
    }

    fn text_scale(&self, points: f64) -> u32 {
        self.px(points).round().max(1.0) as u32
    }
}

/// A closed data interval mapped onto a pixel interval.
#[derive(Debug, Clone, Copy)]
struct Scale {
    lo: f64,
    hi: f64,
    px_lo: f64,
    px_hi: f64,
}

impl Scale {
    fn map(&self, v: f64) -> f64 {
        self.px_lo + (v - self.lo) / (self.hi - self.lo) * (self.px_hi - self.px_lo)
    }
}

/// Data extent padded by 5% on each side; degenerate ranges are widened.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !min.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        let half = if min == 0.0 { 1.0 } else { min.abs() * 0.05 };
        return (min - half, max + half);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

/// A 1, 2, 2.5 or 5 times power-of-ten step giving about `target` ticks.
pub fn nice_step(lo: f64, hi: f64, target: usize) -> f64 {
    let raw = (hi - lo) / target.max(1) as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick positions inside `[lo, hi]`.
pub fn ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    let step = nice_step(lo, hi, target);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Tick label text; large magnitudes switch to exponent notation.
pub fn format_tick(value: f64, step: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() >= 1e6 || value.abs() < 1e-3 {
        return format!("{:.1E}", value);
    }
    let decimals = (-step.log10().floor()).max(0.0) as usize;
    let decimals = if (step * 10f64.powi(decimals as i32)).fract().abs() > 1e-9 {
        decimals + 1
    } else {
        decimals
    };
    format!("{:.*}", decimals, value)
}

/// Render `spec` at the given resolution.
///
/// A chart without points still gets its frame, grid, title and labels over
/// a `0..1` range, and no legend.
pub fn render_chart(spec: &ChartSpec, options: &RenderOptions) -> Result<Canvas> {
    let (width, height) = options.canvas_size();
    if width < 100 || height < 60 || width as f64 > MAX_SIDE || height as f64 > MAX_SIDE {
        return Err(PlotError::InvalidDimensions(format!(
            "{}x{} pixels at {} dpi",
            width, height, options.dpi
        )));
    }

    let mut canvas = Canvas::new(width, height, BACKGROUND);

    let title_scale = options.text_scale(3.0);
    let label_scale = options.text_scale(2.4);
    let tick_scale = options.text_scale(2.0);
    let pad = options.px(12.0);

    let (x_lo, x_hi) = padded_range(spec.series.iter().flat_map(|s| s.points.iter().map(|p| p.x)));
    let (y_lo, y_hi) = padded_range(spec.series.iter().flat_map(|s| s.points.iter().map(|p| p.y)));
    let x_ticks = ticks(x_lo, x_hi, 6);
    let y_ticks = ticks(y_lo, y_hi, 6);
    let x_step = nice_step(x_lo, x_hi, 6);
    let y_step = nice_step(y_lo, y_hi, 6);
    let x_labels: Vec<String> = x_ticks.iter().map(|&v| format_tick(v, x_step)).collect();
    let y_labels: Vec<String> = y_ticks.iter().map(|&v| format_tick(v, y_step)).collect();

    let title = spec.title.to_uppercase();
    let (title_w, title_h) = text_size(&title, title_scale);
    let (_, label_h) = text_size("X", label_scale);
    let (_, tick_h) = text_size("0", tick_scale);
    let y_tick_w = y_labels
        .iter()
        .map(|l| text_size(l, tick_scale).0)
        .max()
        .unwrap_or(0) as f64;

    let left = pad + label_h as f64 + pad + y_tick_w + pad;
    let right = width as f64 - pad * 2.0;
    let top = pad + title_h as f64 + pad;
    let bottom = height as f64 - (pad + label_h as f64 + pad + tick_h as f64 + pad);
    if right - left < 10.0 || bottom - top < 10.0 {
        return Err(PlotError::InvalidDimensions(format!(
            "no room for the plot area at {} dpi",
            options.dpi
        )));
    }

    let xs = Scale {
        lo: x_lo,
        hi: x_hi,
        px_lo: left,
        px_hi: right,
    };
    let ys = Scale {
        lo: y_lo,
        hi: y_hi,
        px_lo: bottom,
        px_hi: top,
    };

    // Grid and tick labels.
    let grid_w = options.px(1.0).round() as i64;
    for (v, label) in x_ticks.iter().zip(&x_labels) {
        let x = xs.map(*v).round() as i64;
        canvas.fill_rect(x - grid_w / 2, top as i64, x - grid_w / 2 + grid_w, bottom as i64, GRID);
        let (w, _) = text_size(label, tick_scale);
        canvas.draw_text(
            x - w as i64 / 2,
            (bottom + pad / 2.0) as i64,
            label,
            tick_scale,
            TEXT,
        );
    }
    for (v, label) in y_ticks.iter().zip(&y_labels) {
        let y = ys.map(*v).round() as i64;
        canvas.fill_rect(left as i64, y - grid_w / 2, right as i64, y - grid_w / 2 + grid_w, GRID);
        let (w, h) = text_size(label, tick_scale);
        canvas.draw_text(
            (left - pad / 2.0) as i64 - w as i64,
            y - h as i64 / 2,
            label,
            tick_scale,
            TEXT,
        );
    }
    canvas.stroke_rect(
        left as i64,
        top as i64,
        right as i64 + 1,
        bottom as i64 + 1,
        grid_w.max(1),
        FRAME,
    );

    // Title and axis labels.
    canvas.draw_text(
        ((left + right) / 2.0) as i64 - title_w as i64 / 2,
        pad as i64,
        &title,
        title_scale,
        TEXT,
    );
    let x_label = spec.x_label.to_uppercase();
    let (xl_w, _) = text_size(&x_label, label_scale);
    canvas.draw_text(
        ((left + right) / 2.0) as i64 - xl_w as i64 / 2,
        height as i64 - pad as i64 - label_h as i64,
        &x_label,
        label_scale,
        TEXT,
    );
    let y_label = spec.y_label.to_uppercase();
    let (yl_len, _) = text_size(&y_label, label_scale);
    canvas.draw_text_vertical(
        pad as i64,
        ((top + bottom) / 2.0) as i64 - yl_len as i64 / 2,
        &y_label,
        label_scale,
        TEXT,
    );

    // Series.
    let line_w = options.px(2.5);
    let marker_r = options.px(5.0);
    for (series, color) in spec.series.iter().zip(PALETTE.iter().cycle()) {
        draw_series(&mut canvas, series, &xs, &ys, line_w, marker_r, *color);
    }

    if !spec.series.is_empty() {
        draw_legend(&mut canvas, spec, options, left + pad, top + pad, label_scale);
    }

    debug!(
        "rendered '{}' at {}x{} with {} series",
        spec.file_name,
        width,
        height,
        spec.series.len()
    );
    Ok(canvas)
}

fn draw_series(
    canvas: &mut Canvas,
    series: &Series,
    xs: &Scale,
    ys: &Scale,
    line_w: f64,
    marker_r: f64,
    color: Rgb,
) {
    let pixels: Vec<(f64, f64)> = series
        .points
        .iter()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .map(|p| (xs.map(p.x), ys.map(p.y)))
        .collect();
    for pair in pixels.windows(2) {
        canvas.draw_line(pair[0], pair[1], line_w, color);
    }
    for &(x, y) in &pixels {
        canvas.fill_circle(x, y, marker_r, BACKGROUND);
        canvas.fill_circle(x, y, marker_r * 0.75, color);
    }
}

fn draw_legend(
    canvas: &mut Canvas,
    spec: &ChartSpec,
    options: &RenderOptions,
    x: f64,
    y: f64,
    scale: u32,
) {
    let (_, row_h) = text_size("X", scale);
    let gap = options.px(8.0);
    let swatch = options.px(30.0);
    let widest = spec
        .series
        .iter()
        .map(|s| text_size(&s.label.to_uppercase(), scale).0)
        .max()
        .unwrap_or(0) as f64;

    let box_w = gap + swatch + gap + widest + gap;
    let box_h = gap + spec.series.len() as f64 * (row_h as f64 + gap);
    canvas.fill_rect(x as i64, y as i64, (x + box_w) as i64, (y + box_h) as i64, BACKGROUND);
    canvas.stroke_rect(
        x as i64,
        y as i64,
        (x + box_w) as i64,
        (y + box_h) as i64,
        options.px(1.0).round() as i64,
        LEGEND_BORDER,
    );

    for (i, (series, color)) in spec.series.iter().zip(PALETTE.iter().cycle()).enumerate() {
        let row_top = y + gap + i as f64 * (row_h as f64 + gap);
        let mid = row_top + row_h as f64 / 2.0;
        canvas.draw_line((x + gap, mid), (x + gap + swatch, mid), options.px(2.5), *color);
        canvas.fill_circle(x + gap + swatch / 2.0, mid, options.px(5.0) * 0.75, *color);
        canvas.draw_text(
            (x + gap + swatch + gap) as i64,
            row_top as i64,
            &series.label.to_uppercase(),
            scale,
            TEXT,
        );
    }
}

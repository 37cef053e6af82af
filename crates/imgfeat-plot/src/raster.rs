//! A small RGB raster with the drawing primitives charts need.

use crate::font::{self, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

pub type Rgb = [u8; 3];

/// Row-major 8-bit RGB pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..width as usize * height as usize {
            pixels.extend_from_slice(&background);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]])
    }

    /// Set one pixel; coordinates outside the canvas are ignored.
    pub fn set(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        self.pixels[idx..idx + 3].copy_from_slice(&color);
    }

    /// Fill the rectangle `[x0, x1) × [y0, y1)`.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb) {
        for y in y0.max(0)..y1.min(self.height as i64) {
            for x in x0.max(0)..x1.min(self.width as i64) {
                self.set(x, y, color);
            }
        }
    }

    /// Outline a rectangle with a border `thickness` pixels wide, drawn inward.
    pub fn stroke_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, thickness: i64, color: Rgb) {
        self.fill_rect(x0, y0, x1, y0 + thickness, color);
        self.fill_rect(x0, y1 - thickness, x1, y1, color);
        self.fill_rect(x0, y0, x0 + thickness, y1, color);
        self.fill_rect(x1 - thickness, y0, x1, y1, color);
    }

    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb) {
        let r2 = radius * radius;
        let x0 = (cx - radius).floor() as i64;
        let x1 = (cx + radius).ceil() as i64;
        let y0 = (cy - radius).floor() as i64;
        let y1 = (cy + radius).ceil() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.set(x, y, color);
                }
            }
        }
    }

    /// Draw a line `width` pixels thick with round caps.
    pub fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Rgb) {
        let radius = (width / 2.0).max(0.5);
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let length = dx.hypot(dy);
        let steps = (length * 2.0).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            self.fill_circle(from.0 + dx * t, from.1 + dy * t, radius, color);
        }
    }

    /// Draw `text` with its top-left corner at (`x`, `y`), each font pixel
    /// `scale` pixels square.
    pub fn draw_text(&mut self, x: i64, y: i64, text: &str, scale: u32, color: Rgb) {
        let s = scale as i64;
        for (i, c) in text.chars().enumerate() {
            let origin = x + i as i64 * GLYPH_ADVANCE as i64 * s;
            for row in 0..GLYPH_HEIGHT {
                for col in 0..GLYPH_WIDTH {
                    if font::is_set(c, col, row) {
                        let px = origin + col as i64 * s;
                        let py = y + row as i64 * s;
                        self.fill_rect(px, py, px + s, py + s, color);
                    }
                }
            }
        }
    }

    /// Draw `text` rotated a quarter turn counter-clockwise, reading bottom
    /// to top, with the bounding box's top-left corner at (`x`, `y`).
    pub fn draw_text_vertical(&mut self, x: i64, y: i64, text: &str, scale: u32, color: Rgb) {
        let s = scale as i64;
        let total = font::text_width(text) as i64;
        for (i, c) in text.chars().enumerate() {
            let along = i as i64 * GLYPH_ADVANCE as i64;
            for row in 0..GLYPH_HEIGHT {
                for col in 0..GLYPH_WIDTH {
                    if font::is_set(c, col, row) {
                        let px = x + row as i64 * s;
                        let py = y + (total - 1 - (along + col as i64)) * s;
                        self.fill_rect(px, py, px + s, py + s, color);
                    }
                }
            }
        }
    }
}

/// Pixel size of `text` drawn at `scale`.
pub fn text_size(text: &str, scale: u32) -> (u32, u32) {
    (font::text_width(text) * scale, GLYPH_HEIGHT * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = [255, 255, 255];
    const RED: Rgb = [255, 0, 0];

    #[test]
    fn test_new_fills_background() {
        let c = Canvas::new(4, 3, [1, 2, 3]);
        assert_eq!(c.as_bytes().len(), 36);
        assert_eq!(c.get(3, 2), Some([1, 2, 3]));
        assert_eq!(c.get(4, 0), None);
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut c = Canvas::new(2, 2, WHITE);
        c.set(-1, 0, RED);
        c.set(0, 5, RED);
        c.fill_rect(-10, -10, 1, 1, RED);
        assert_eq!(c.get(0, 0), Some(RED));
        assert_eq!(c.get(1, 1), Some(WHITE));
    }

    #[test]
    fn test_line_covers_endpoints() {
        let mut c = Canvas::new(20, 20, WHITE);
        c.draw_line((2.5, 2.5), (17.5, 12.5), 2.0, RED);
        assert_eq!(c.get(2, 2), Some(RED));
        assert_eq!(c.get(17, 12), Some(RED));
        assert_eq!(c.get(17, 2), Some(WHITE));
    }

    #[test]
    fn test_text_draws_inside_its_box() {
        let mut c = Canvas::new(40, 20, WHITE);
        c.draw_text(1, 1, "T", 2, RED);
        // Top bar of T spans the full glyph width.
        assert_eq!(c.get(1, 1), Some(RED));
        assert_eq!(c.get(10, 1), Some(RED));
        assert_eq!(c.get(12, 1), Some(WHITE));
        assert_eq!(text_size("T", 2), (10, 14));
    }

    #[test]
    fn test_vertical_text_reads_upward() {
        let mut c = Canvas::new(20, 20, WHITE);
        // The top bar of T becomes a column on the left, the stem runs right.
        c.draw_text_vertical(0, 0, "T", 1, RED);
        for y in 0..5 {
            assert_eq!(c.get(0, y), Some(RED));
        }
        assert_eq!(c.get(6, 2), Some(RED));
        assert_eq!(c.get(6, 0), Some(WHITE));
    }
}

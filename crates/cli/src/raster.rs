//! Minimal software raster backend: an RGBA canvas with hard 1px lines.
//!
//! Endpoint mapping matches the original canvas driver for this picture
//! language: x scales by `width - 1` and unit-square y grows upward, so
//! pixel rows are flipped. No anti-aliasing, no clipping beyond the
//! bounds check on each write.

use fresco::frame::Segment;
use fresco::painter::Rgba as Color;
use fresco::Vec2;
use image::{Rgba, RgbaImage};

pub struct Canvas {
    width: u32,
    height: u32,
    buffer: RgbaImage,
    ink: Rgba<u8>,
}

impl Canvas {
    /// White canvas with black ink.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])),
            ink: Rgba([0, 0, 0, 255]),
        }
    }

    /// Rasterize a segment whose endpoints are in unit coordinates.
    #[allow(clippy::cast_possible_truncation)]
    pub fn draw_segment(&mut self, seg: &Segment) {
        let w = f64::from(self.width.saturating_sub(1));
        let h = f64::from(self.height.saturating_sub(1));
        let x0 = (seg.start.x * w).floor() as i64;
        let y0 = (h - seg.start.y * h).floor() as i64;
        let x1 = (seg.end.x * w).floor() as i64;
        let y1 = (h - seg.end.y * h).floor() as i64;
        self.line(x0, y0, x1, y1);
    }

    /// Write one sampled pixel at a unit-coordinate position.
    #[allow(clippy::cast_possible_truncation)]
    pub fn draw_pixel(&mut self, pos: Vec2, color: Color) {
        let col = (pos.x * f64::from(self.width)).floor() as i64;
        let row = ((1.0 - pos.y) * f64::from(self.height)).floor() as i64;
        self.put(col, row, Rgba([color.r, color.g, color.b, color.a]));
    }

    /// Integer Bresenham walk between two pixel coordinates.
    fn line(&mut self, mut x0: i64, mut y0: i64, x1: i64, y1: i64) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x0, y0, self.ink);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn put(&mut self, x: i64, y: i64, px: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            self.buffer.put_pixel(x as u32, y as u32, px);
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.buffer
    }
}

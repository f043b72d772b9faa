//! Software RGBA frame buffer
//!
//! Row-major, 4 bytes per pixel, alpha always opaque. The same bytes are
//! copied to the window surface and handed to the recorder.

use glam::Vec2;

/// Bytes in one RGBA frame of the given size
pub fn frame_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let mut pixels = vec![0; frame_len(width, height)];
        for px in pixels.chunks_exact_mut(4) {
            px[3] = 0xFF;
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

    pub fn clear(&mut self, color: [u8; 3]) {
        for px in self.pixels.chunks_exact_mut(4) {
            px[..3].copy_from_slice(&color);
            px[3] = 0xFF;
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        Some([self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]])
    }

    /// Write one pixel; out-of-bounds writes are dropped
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: [u8; 3]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        self.pixels[idx..idx + 3].copy_from_slice(&color);
        self.pixels[idx + 3] = 0xFF;
    }

    /// Fill every pixel whose center lies within `radius` of `center`.
    /// Radii below one pixel draw nothing.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: [u8; 3]) {
        if radius < 1.0 || !center.is_finite() {
            return;
        }
        let r2 = radius * radius;
        let x0 = ((center.x - radius).floor() as i32).max(0);
        let x1 = ((center.x + radius).ceil() as i32).min(self.width as i32 - 1);
        let y0 = ((center.y - radius).floor() as i32).max(0);
        let y1 = ((center.y + radius).ceil() as i32).min(self.height as i32 - 1);

        for y in y0..=y1 {
            let dy = y as f32 + 0.5 - center.y;
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }

    /// One-pixel line (Bresenham)
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, color: [u8; 3]) {
        if !from.is_finite() || !to.is_finite() {
            return;
        }
        let (mut x, mut y) = (from.x.floor() as i32, from.y.floor() as i32);
        let (x1, y1) = (to.x.floor() as i32, to.y.floor() as i32);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

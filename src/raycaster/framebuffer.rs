//! Framebuffer for software rendering

use super::types::Color;

/// RGBA pixel buffer, uploaded to a GPU texture once per frame
pub struct Framebuffer {
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    /// Reallocate for a new size (no-op if unchanged)
    pub fn resize(&mut self, width: usize, height: usize) {
        if width != self.width || height != self.height {
            *self = Self::new(width, height);
        }
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            let p = &self.pixels[idx..idx + 4];
            Some(Color { r: p[0], g: p[1], b: p[2], a: p[3] })
        } else {
            None
        }
    }

    /// Fill rows `y0..y1` and columns `x0..x1`, clipped to the buffer
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, color: Color) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let bytes = color.to_bytes();
        for y in y0..y1 {
            let row = y * self.width * 4;
            for px in self.pixels[row + x0 * 4..row + x1 * 4].chunks_exact_mut(4) {
                px.copy_from_slice(&bytes);
            }
        }
    }

    /// Fill a vertical strip of the given height centered on the horizon.
    ///
    /// Heights larger than the buffer (or non-finite) fill the whole column.
    pub fn draw_centered_strip(&mut self, x0: usize, x1: usize, height: f32, color: Color) {
        let half_screen = self.height as f32 / 2.0;
        let half = if height.is_finite() { height.max(0.0) / 2.0 } else { half_screen };
        let top = (half_screen - half).clamp(0.0, self.height as f32) as usize;
        let bottom = (half_screen + half).clamp(0.0, self.height as f32) as usize;
        self.fill_rect(x0, top, x1, bottom, color);
    }
}

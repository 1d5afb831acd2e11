//! Pixel framebuffer and the write/read interface the rasterizer draws through.

use crate::types::Rgba;

/// A pixel-addressable surface.
///
/// Coordinates are signed so callers can hand over unclipped positions:
/// implementations must discard out-of-bounds writes and answer `None` for
/// out-of-bounds reads. Neither ever panics.
pub trait PixelTarget {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn color_at(&self, x: i32, y: i32) -> Option<Rgba>;
    fn set_color_at(&mut self, x: i32, y: i32, color: Rgba);

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as i64) < self.width() as i64 && (y as i64) < self.height() as i64
    }
}

/// 2D framebuffer of RGBA pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![Rgba::BLACK; len],
        }
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible. Pixel contents
    /// are unspecified afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.pixels.resize(len, Rgba::BLACK);
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Number of pixels whose RGB equals `color`.
    pub fn count_rgb(&self, color: Rgba) -> usize {
        self.pixels.iter().filter(|p| p.same_rgb(color)).count()
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }
}

impl PixelTarget for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn color_at(&self, x: i32, y: i32) -> Option<Rgba> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    fn set_color_at(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }
}

//! Pixel framebuffer to terminal cells.
//!
//! Each cell shows two vertically stacked pixels with the upper-half-block
//! glyph: foreground is the top pixel, background the bottom one. Labels are
//! written over the cells afterwards, at cell `(x, y / 2)`.

use crate::fb::{CellStyle, FrameBuffer};
use crate::raster::{Align, Label, PixelBuffer, PixelTarget, TextLayer};
use crate::types::Rgba;

pub const HALF_BLOCK: char = '▀';

/// Terminal viewport dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Pixel surface covered by this viewport.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32 * 2)
    }
}

/// Top pixel of a terminal cell, for mouse hit testing.
pub fn cell_to_pixel(column: u16, row: u16) -> (i32, i32) {
    (column as i32, row as i32 * 2)
}

/// Compose `pixels` and `labels` into `fb`, resizing it to fit.
///
/// An odd pixel height leaves the last row's bottom half black.
pub fn compose_half_blocks(pixels: &PixelBuffer, labels: &TextLayer, fb: &mut FrameBuffer) {
    let cols = pixels.width().min(u16::MAX as u32) as u16;
    let rows = pixels.height().div_ceil(2).min(u16::MAX as u32) as u16;
    fb.resize(cols, rows);

    for row in 0..rows {
        let top_y = row as i32 * 2;
        for col in 0..cols {
            let top = pixels.color_at(col as i32, top_y).unwrap_or(Rgba::BLACK);
            let bottom = pixels.color_at(col as i32, top_y + 1).unwrap_or(Rgba::BLACK);
            fb.set(col, row, CellStyle::new(top, bottom).into_cell(HALF_BLOCK));
        }
    }

    for label in labels.labels() {
        put_label(pixels, label, fb);
    }
}

fn put_label(pixels: &PixelBuffer, label: &Label, fb: &mut FrameBuffer) {
    let len = label.text.chars().count() as i32;
    let x = match label.align {
        Align::Left => label.x,
        Align::Center => label.x - len / 2,
    };
    let row = label.y.div_euclid(2);
    // Text sits on the pixel row it was anchored to.
    fb.put_str_clipped(x, row, &label.text, |col| {
        let bg = pixels.color_at(col as i32, label.y).unwrap_or(Rgba::BLACK);
        CellStyle::new(label.color, bg).bold(label.bold)
    });
}

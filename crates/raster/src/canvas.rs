//! Canvas: primitive drawing engine built on a single pixel write.
//!
//! Every operation ends in [`Canvas::set_pixel`] or its screen-space core
//! `plot`, which is the only code path that writes to the target. Lines,
//! circles, rectangles, textures, flood fill and the fan sprite are all
//! compositions of it.
//!
//! Each camera-aware operation takes a [`Space`]:
//!
//! - [`Space::World`]: coordinates are world units, mapped through the camera
//!   (sizes and radii are scaled by zoom)
//! - [`Space::Screen`]: coordinates are already pixels (truncated toward zero)
//!
//! Nothing here fails. Out-of-bounds pixels are dropped, off-screen lines are
//! clipped away, and empty or inverted shapes draw nothing.

use std::f32::consts::FRAC_PI_2;
use std::ops::Range;

use tracing::trace;

use crate::buffer::PixelTarget;
use crate::camera::Camera;
use crate::clip::{clip_line, ClipRect, Segment};
use crate::texture::Texture;
use crate::transform::{rotate_point, translate_point};
use crate::types::{Point, Rgba};

/// Coordinate space of a drawing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    World,
    Screen,
}

pub const FAN_BLADES: u32 = 4;
pub const FAN_HUB_RADIUS: f32 = 3.0;
pub const FAN_HUB_COLOR: Rgba = Rgba::WHITE;
pub const PROGRESS_BAR_HEIGHT: i32 = 10;
pub const PROGRESS_FILL: Rgba = Rgba::GREEN;

/// A drawing context for one frame: a mutable target plus a read-only camera.
pub struct Canvas<'a, T: PixelTarget> {
    target: &'a mut T,
    camera: &'a Camera,
}

impl<'a, T: PixelTarget> Canvas<'a, T> {
    pub fn new(target: &'a mut T, camera: &'a Camera) -> Self {
        Self { target, camera }
    }

    pub fn target(&self) -> &T {
        self.target
    }

    pub fn camera(&self) -> &Camera {
        self.camera
    }

    pub fn width(&self) -> i32 {
        self.target.width().min(i32::MAX as u32) as i32
    }

    pub fn height(&self) -> i32 {
        self.target.height().min(i32::MAX as u32) as i32
    }

    #[inline]
    fn to_screen(&self, x: f32, y: f32, space: Space) -> (i32, i32) {
        match space {
            Space::World => self.camera.world_to_screen(x, y),
            Space::Screen => (x as i32, y as i32),
        }
    }

    #[inline]
    fn to_screen_len(&self, len: f32, space: Space) -> i32 {
        match space {
            Space::World => self.camera.scale(len),
            Space::Screen => len as i32,
        }
    }

    /// Screen-space pixel write with bounds check.
    #[inline]
    fn plot(&mut self, sx: i32, sy: i32, color: Rgba) {
        if self.target.in_bounds(sx, sy) {
            self.target.set_color_at(sx, sy, color);
        }
    }

    /// Set one pixel. Out-of-bounds and non-finite positions are silently ignored.
    pub fn set_pixel(&mut self, x: f32, y: f32, color: Rgba, space: Space) {
        // `NaN as i32` is 0, which would land on the origin.
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let (sx, sy) = self.to_screen(x, y, space);
        self.plot(sx, sy, color);
    }

    /// Visible pixel ranges of the screen rectangle `(sx, sy, sw, sh)`.
    fn visible_span(&self, sx: i32, sy: i32, sw: i32, sh: i32) -> Option<(Range<i32>, Range<i32>)> {
        let x0 = sx.max(0);
        let y0 = sy.max(0);
        let x1 = (sx as i64 + sw as i64).min(self.width() as i64) as i32;
        let y1 = (sy as i64 + sh as i64).min(self.height() as i64) as i32;
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0..x1, y0..y1))
    }

    /// Horizontal run `[x0, x1]` on row `y`, clipped to the surface.
    fn hline(&mut self, x0: i64, x1: i64, y: i64, color: Rgba) {
        if y < 0 || y >= self.height() as i64 {
            return;
        }
        let start = x0.max(0);
        let end = x1.min(self.width() as i64 - 1);
        for x in start..=end {
            self.plot(x as i32, y as i32, color);
        }
    }

    /// Bresenham line with Cohen–Sutherland clipping against the surface.
    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba, space: Space) {
        let (sx0, sy0) = self.to_screen(x0, y0, space);
        let (sx1, sy1) = self.to_screen(x1, y1, space);

        let clip = ClipRect::for_surface(self.target.width(), self.target.height());
        let seg = Segment::new(sx0 as f32, sy0 as f32, sx1 as f32, sy1 as f32);
        let Some(seg) = clip_line(seg, &clip) else {
            return;
        };

        self.bresenham(seg.x0 as i32, seg.y0 as i32, seg.x1 as i32, seg.y1 as i32, color);
    }

    fn bresenham(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, color: Rgba) {
        let dx = (x1 as i64 - x0 as i64).abs();
        let dy = (y1 as i64 - y0 as i64).abs();
        let step_x = if x0 < x1 { 1 } else { -1 };
        let step_y = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.plot(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = err * 2;
            if e2 > -dy {
                err -= dy;
                x0 += step_x;
            }
            if e2 < dx {
                err += dx;
                y0 += step_y;
            }
        }
    }

    /// Circle outline via the midpoint algorithm (`d = 3 - 2r`), 8-way symmetric.
    pub fn draw_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgba, space: Space) {
        let (scx, scy) = self.to_screen(cx, cy, space);
        let sr = self.to_screen_len(r, space) as i64;
        if sr < 0 || self.circle_off_screen(scx as i64, scy as i64, sr) {
            return;
        }

        let (scx, scy) = (scx as i64, scy as i64);
        let mut x: i64 = 0;
        let mut y: i64 = sr;
        let mut d: i64 = 3 - 2 * sr;

        while x <= y {
            for (px, py) in [
                (scx + x, scy + y),
                (scx - x, scy + y),
                (scx + x, scy - y),
                (scx - x, scy - y),
                (scx + y, scy + x),
                (scx - y, scy + x),
                (scx + y, scy - x),
                (scx - y, scy - x),
            ] {
                if let (Ok(px), Ok(py)) = (i32::try_from(px), i32::try_from(py)) {
                    self.plot(px, py, color);
                }
            }
            if d < 0 {
                d += 4 * x + 6;
            } else {
                d += 4 * (x - y) + 10;
                y -= 1;
            }
            x += 1;
        }
    }

    /// Filled circle as horizontal scanlines of half-width `floor(sqrt(r² - dy²))`.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgba, space: Space) {
        let (scx, scy) = self.to_screen(cx, cy, space);
        let sr = self.to_screen_len(r, space) as i64;
        let (scx, scy) = (scx as i64, scy as i64);
        if sr < 0 || self.circle_off_screen(scx, scy, sr) {
            return;
        }

        // Only rows that can land on the surface.
        let dy_start = (-sr).max(-scy);
        let dy_end = sr.min(self.height() as i64 - 1 - scy);
        for dy in dy_start..=dy_end {
            let half = ((sr * sr - dy * dy).max(0) as f64).sqrt() as i64;
            self.hline(scx - half, scx + half, scy + dy, color);
        }
    }

    fn circle_off_screen(&self, scx: i64, scy: i64, sr: i64) -> bool {
        scx + sr < 0 || scy + sr < 0 || scx - sr >= self.width() as i64 || scy - sr >= self.height() as i64
    }

    /// Rectangle outline as four lines; corners are shared at `x + w`, `y + h`.
    pub fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba, space: Space) {
        self.draw_line(x, y, x + w, y, color, space);
        self.draw_line(x, y, x, y + h, color, space);
        self.draw_line(x + w, y, x + w, y + h, color, space);
        self.draw_line(x, y + h, x + w, y + h, color, space);
    }

    /// Scanline fill of `[x, x+w) × [y, y+h)`, intersected with the surface first.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba, space: Space) {
        let (sx, sy) = self.to_screen(x, y, space);
        let sw = self.to_screen_len(w, space);
        let sh = self.to_screen_len(h, space);
        let Some((cols, rows)) = self.visible_span(sx, sy, sw, sh) else {
            return;
        };
        for py in rows {
            for px in cols.clone() {
                self.plot(px, py, color);
            }
        }
    }

    /// Like [`Canvas::fill_rect`], with the color taken from `texture` at the
    /// pixel's offset from the rectangle's own screen origin.
    pub fn fill_rect_textured(&mut self, x: f32, y: f32, w: f32, h: f32, texture: Texture, space: Space) {
        let (sx, sy) = self.to_screen(x, y, space);
        let sw = self.to_screen_len(w, space);
        let sh = self.to_screen_len(h, space);
        let Some((cols, rows)) = self.visible_span(sx, sy, sw, sh) else {
            return;
        };
        for py in rows {
            for px in cols.clone() {
                let color = texture.color_at(px - sx, py - sy);
                self.plot(px, py, color);
            }
        }
    }

    /// Filled rectangle with a one-pixel-line border on its inner edge
    /// (`x .. x + w - 1`), used for sprite parts.
    pub fn fill_rect_outlined(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: Rgba,
        border: Rgba,
        space: Space,
    ) {
        self.fill_rect(x, y, w, h, fill, space);
        let (r, b) = (x + w - 1.0, y + h - 1.0);
        self.draw_line(x, y, r, y, border, space);
        self.draw_line(x, b, r, b, border, space);
        self.draw_line(x, y, x, b, border, space);
        self.draw_line(r, y, r, b, border, space);
    }

    /// One world unit drawn as a `floor(zoom)`-sized pixel block (at least 1×1).
    pub fn fill_unit(&mut self, x: f32, y: f32, color: Rgba) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let (sx, sy) = self.camera.world_to_screen(x, y);
        let n = (self.camera.zoom() as i32).max(1);
        for dy in 0..n {
            for dx in 0..n {
                self.plot(sx.saturating_add(dx), sy.saturating_add(dy), color);
            }
        }
    }

    /// Iterative 4-connected flood fill from the screen pixel `(x, y)`.
    ///
    /// - `boundary == None`: fills the region sharing the seed's original color.
    /// - `boundary == Some(b)`: fills everything reachable that is neither `b`
    ///   nor already `fill`.
    ///
    /// Colors compare on RGB only. A seed off the surface, or already equal to
    /// `fill`, is a no-op. Returns the number of pixels written.
    pub fn flood_fill(&mut self, x: i32, y: i32, fill: Rgba, boundary: Option<Rgba>) -> usize {
        let Some(original) = self.target.color_at(x, y) else {
            return 0;
        };
        if original.same_rgb(fill) {
            return 0;
        }

        let w = self.target.width() as usize;
        let h = self.target.height() as usize;
        let mut visited = vec![false; w * h];
        let mut stack: Vec<(i32, i32)> = vec![(x, y)];
        let mut filled = 0usize;

        while let Some((cx, cy)) = stack.pop() {
            if !self.target.in_bounds(cx, cy) {
                continue;
            }
            let idx = cy as usize * w + cx as usize;
            if visited[idx] {
                continue;
            }
            let Some(current) = self.target.color_at(cx, cy) else {
                continue;
            };

            let fillable = match boundary {
                Some(b) => !current.same_rgb(b) && !current.same_rgb(fill),
                None => current.same_rgb(original),
            };
            if !fillable {
                continue;
            }

            visited[idx] = true;
            self.plot(cx, cy, fill);
            filled += 1;

            for (nx, ny) in [(cx + 1, cy), (cx - 1, cy), (cx, cy + 1), (cx, cy - 1)] {
                if self.target.in_bounds(nx, ny) && !visited[ny as usize * w + nx as usize] {
                    stack.push((nx, ny));
                }
            }
        }

        trace!(seed_x = x, seed_y = y, filled, "flood fill");
        filled
    }

    /// Draw a closed border with lines, then flood-fill the inside from the
    /// center using the border color as the boundary. Screen space.
    pub fn flood_fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, fill: Rgba, border: Rgba) -> usize {
        let (x0, y0) = (x as f32, y as f32);
        let (x1, y1) = (x.saturating_add(w) as f32, y.saturating_add(h) as f32);
        self.draw_line(x0, y0, x1, y0, border, Space::Screen);
        self.draw_line(x0, y0, x0, y1, border, Space::Screen);
        self.draw_line(x1, y0, x1, y1, border, Space::Screen);
        self.draw_line(x0, y1, x1, y1, border, Space::Screen);

        let cx = x.saturating_add(w / 2);
        let cy = y.saturating_add(h / 2);
        self.flood_fill(cx, cy, fill, Some(border))
    }

    /// Four-bladed fan rotated by `angle`; each blade is three parallel lines
    /// offset -1, 0, +1 perpendicular to it, with a filled hub on top.
    pub fn draw_fan(&mut self, cx: f32, cy: f32, r: f32, angle: f32, color: Rgba, space: Space) {
        let center = Point::new(cx, cy);
        let tip = Point::new(cx + r, cy);

        for i in 0..FAN_BLADES {
            let blade_angle = angle + i as f32 * FRAC_PI_2;
            let end = rotate_point(tip, center, blade_angle);
            let (sin_n, cos_n) = (blade_angle + FRAC_PI_2).sin_cos();

            for offset in [-1.0f32, 0.0, 1.0] {
                let (ox, oy) = (offset * cos_n, offset * sin_n);
                let a = translate_point(center, ox, oy);
                let b = translate_point(end, ox, oy);
                self.draw_line(a.x, a.y, b.x, b.y, color, space);
            }
        }

        self.fill_circle(cx, cy, FAN_HUB_RADIUS, FAN_HUB_COLOR, space);
    }

    /// White 10-pixel-tall outline with a green fill proportional to `progress`.
    pub fn draw_progress_bar(&mut self, x: i32, y: i32, w: i32, progress: f32) {
        let (fx, fy) = (x as f32, y as f32);
        self.draw_rect(fx, fy, w as f32, PROGRESS_BAR_HEIGHT as f32, Rgba::WHITE, Space::Screen);
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        let fill = (w as f32 * progress) as i32;
        if fill > 0 {
            self.fill_rect(fx, fy, fill as f32, PROGRESS_BAR_HEIGHT as f32, PROGRESS_FILL, Space::Screen);
        }
    }

    /// Fill the whole surface.
    pub fn clear(&mut self, color: Rgba) {
        let (w, h) = (self.width() as f32, self.height() as f32);
        self.fill_rect(0.0, 0.0, w, h, color, Space::Screen);
    }

    /// Vertical gradient from `top` to `bottom`, one line per row.
    pub fn vertical_gradient(&mut self, top: Rgba, bottom: Rgba) {
        let h = self.height();
        let right = (self.width() - 1) as f32;
        for y in 0..h {
            let t = y as f32 / h as f32;
            let color = lerp(top, bottom, t);
            self.draw_line(0.0, y as f32, right, y as f32, color, Space::Screen);
        }
    }
}

fn lerp(a: Rgba, b: Rgba, t: f32) -> Rgba {
    let mix = |p: u8, q: u8| (p as f32 + (q as f32 - p as f32) * t) as u8;
    Rgba::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b), mix(a.a, b.a))
}

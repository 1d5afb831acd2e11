//! Camera: world ⇄ screen mapping under pan and zoom.
//!
//! The camera focuses a world point at the center of the viewport:
//!
//! ```text
//! sx = (x - cam_x) * zoom + width / 2
//! sy = (y - cam_y) * zoom + height / 2
//! ```
//!
//! Screen coordinates are truncated toward zero. All operations are total.

use tracing::debug;

use crate::types::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

/// Zoom range and step configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub step: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: MIN_ZOOM,
            max: MAX_ZOOM,
            default: DEFAULT_ZOOM,
            step: ZOOM_STEP,
        }
    }
}

impl ZoomConfig {
    fn clamp(&self, zoom: f32) -> f32 {
        zoom.clamp(self.min, self.max)
    }
}

/// World-space rectangle currently visible through the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl WorldBounds {
    /// True when the world rectangle `(x, y, w, h)` overlaps the visible area.
    pub fn overlaps(&self, x: f32, y: f32, w: f32, h: f32) -> bool {
        x <= self.x_max && x + w >= self.x_min && y <= self.y_max && y + h >= self.y_min
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    x: f32,
    y: f32,
    zoom: f32,
    viewport_w: u32,
    viewport_h: u32,
    config: ZoomConfig,
}

impl Camera {
    pub fn new(viewport_w: u32, viewport_h: u32) -> Self {
        Self::with_config(viewport_w, viewport_h, ZoomConfig::default())
    }

    pub fn with_config(viewport_w: u32, viewport_h: u32, config: ZoomConfig) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: config.clamp(config.default),
            viewport_w,
            viewport_h,
            config,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.viewport_w, self.viewport_h)
    }

    /// Follow the framebuffer size (terminal resize).
    pub fn resize(&mut self, viewport_w: u32, viewport_h: u32) {
        self.viewport_w = viewport_w;
        self.viewport_h = viewport_h;
    }

    /// Focus the camera on a world position. No easing.
    pub fn update(&mut self, target_x: f32, target_y: f32) {
        self.x = target_x;
        self.y = target_y;
    }

    #[inline]
    fn half_w(&self) -> f32 {
        self.viewport_w as f32 / 2.0
    }

    #[inline]
    fn half_h(&self) -> f32 {
        self.viewport_h as f32 / 2.0
    }

    pub fn world_to_screen(&self, x: f32, y: f32) -> (i32, i32) {
        let sx = (x - self.x) * self.zoom + self.half_w();
        let sy = (y - self.y) * self.zoom + self.half_h();
        (sx as i32, sy as i32)
    }

    pub fn screen_to_world(&self, sx: f32, sy: f32) -> (f32, f32) {
        let x = (sx - self.half_w()) / self.zoom + self.x;
        let y = (sy - self.half_h()) / self.zoom + self.y;
        (x, y)
    }

    /// World length to screen length, truncated.
    #[inline]
    pub fn scale(&self, len: f32) -> i32 {
        (len * self.zoom) as i32
    }

    pub fn zoom_in(&mut self, factor: f32) {
        self.set_zoom(self.zoom * factor);
    }

    pub fn zoom_out(&mut self, factor: f32) {
        // Non-positive factors are ignored.
        if factor > 0.0 {
            self.set_zoom(self.zoom / factor);
        }
    }

    /// Zoom in by the configured step.
    pub fn zoom_in_step(&mut self) {
        self.zoom_in(self.config.step);
    }

    /// Zoom out by the configured step.
    pub fn zoom_out_step(&mut self) {
        self.zoom_out(self.config.step);
    }

    pub fn reset_zoom(&mut self) {
        self.set_zoom(self.config.default);
    }

    fn set_zoom(&mut self, zoom: f32) {
        let next = if zoom.is_nan() {
            self.zoom
        } else {
            self.config.clamp(zoom)
        };
        if next != self.zoom {
            debug!(from = self.zoom, to = next, "camera zoom changed");
        }
        self.zoom = next;
    }

    /// Visible world rectangle, for culling off-screen work.
    pub fn window_bounds(&self) -> WorldBounds {
        let half_w = self.half_w() / self.zoom;
        let half_h = self.half_h() / self.zoom;
        WorldBounds {
            x_min: self.x - half_w,
            y_min: self.y - half_h,
            x_max: self.x + half_w,
            y_max: self.y + half_h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_maps_to_viewport_center() {
        let mut cam = Camera::new(200, 100);
        cam.update(50.0, 70.0);
        assert_eq!(cam.world_to_screen(50.0, 70.0), (100, 50));
    }

    #[test]
    fn zoom_scales_offsets() {
        let mut cam = Camera::new(200, 100);
        cam.update(0.0, 0.0);
        cam.reset_zoom();
        cam.zoom_in(2.0);
        let z = cam.zoom();
        let (sx, sy) = cam.world_to_screen(10.0, -5.0);
        assert_eq!(sx, (10.0 * z + 100.0) as i32);
        assert_eq!(sy, (-5.0 * z + 50.0) as i32);
    }

    #[test]
    fn screen_to_world_inverts_exactly_at_integer_points() {
        let mut cam = Camera::new(160, 90);
        cam.update(12.0, 34.0);
        let (wx, wy) = cam.screen_to_world(80.0, 45.0);
        assert_eq!((wx, wy), (12.0, 34.0));
    }

    #[test]
    fn zoom_in_never_exceeds_max() {
        let mut cam = Camera::new(100, 100);
        for _ in 0..100 {
            cam.zoom_in_step();
        }
        assert_eq!(cam.zoom(), MAX_ZOOM);
    }

    #[test]
    fn zoom_out_never_below_min() {
        let mut cam = Camera::new(100, 100);
        for _ in 0..100 {
            cam.zoom_out_step();
        }
        assert_eq!(cam.zoom(), MIN_ZOOM);
    }

    #[test]
    fn reset_restores_configured_default() {
        let config = ZoomConfig {
            default: 2.0,
            ..ZoomConfig::default()
        };
        let mut cam = Camera::with_config(100, 100, config);
        cam.zoom_in_step();
        cam.zoom_in_step();
        cam.reset_zoom();
        assert_eq!(cam.zoom(), 2.0);
    }

    #[test]
    fn zoom_out_by_zero_is_ignored() {
        let mut cam = Camera::new(100, 100);
        let before = cam.zoom();
        cam.zoom_out(0.0);
        assert_eq!(cam.zoom(), before);
    }

    #[test]
    fn window_bounds_shrink_with_zoom() {
        let mut cam = Camera::new(200, 100);
        cam.update(0.0, 0.0);
        cam.reset_zoom();
        let wide = cam.window_bounds();
        cam.zoom_in(2.0);
        let narrow = cam.window_bounds();
        assert!(narrow.x_max - narrow.x_min < wide.x_max - wide.x_min);
        assert!(wide.overlaps(-5.0, -5.0, 10.0, 10.0));
        assert!(!wide.overlaps(10_000.0, 0.0, 1.0, 1.0));
    }
}

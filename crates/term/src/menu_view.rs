//! Full-screen menus: splash, main menu, controls, pause overlay, congrats.
//!
//! All drawing is screen space. Box geometry comes from [`MenuLayout`], which
//! the mouse hit test shares so clicks land on what was drawn.

use crate::core::{scatter, GameState, Menu, Phase};
use crate::raster::{Camera, Canvas, PixelBuffer, Space, TextLayer, Texture};
use crate::types::{Rect, Rgba};

const MAIN_BOX: (i32, i32) = (64, 40);
const PAUSE_BOX: (i32, i32) = (40, 24);

const MARKER_RADIUS: f32 = 2.0;

const CONFETTI_COUNT: usize = 50;
const CONFETTI: [Rgba; 4] = [Rgba::YELLOW, Rgba::BLUE, Rgba::GREEN, Rgba::WHITE];

pub const GAME_TITLE: &str = "PIXEL ROOMS";

pub const CONTROL_LINES: [&str; 9] = [
    "W / Up     - move up",
    "S / Down   - move down",
    "A / Left   - move left",
    "D / Right  - move right",
    "SHIFT      - run",
    "E          - interact (doors and boards)",
    "ESC        - pause",
    "Mouse      - menus, click doors and boards",
    "+ / - / 0  - zoom in / out / reset",
];

/// Geometry of a boxed menu for a given surface size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    pub frame: Rect,
    pub title_y: i32,
    first_option_y: i32,
    spacing: i32,
    marker_dx: i32,
    text_dx: i32,
    count: usize,
}

impl MenuLayout {
    fn boxed(
        surface_w: i32,
        surface_h: i32,
        (box_w, box_h): (i32, i32),
        title_dy: i32,
        options_dy: i32,
        spacing: i32,
    ) -> Self {
        let w = box_w.min(surface_w - 2).max(0);
        let h = box_h.min(surface_h - 2).max(0);
        let x = (surface_w - w) / 2;
        let y = (surface_h - h) / 2;
        Self {
            frame: Rect::new(x, y, w, h),
            title_y: y + title_dy,
            first_option_y: y + options_dy,
            spacing,
            marker_dx: spacing + 2,
            text_dx: spacing * 2 + 1,
            count: 3,
        }
    }

    pub fn main(surface_w: i32, surface_h: i32) -> Self {
        Self::boxed(surface_w, surface_h, MAIN_BOX, 4, 12, 6)
    }

    pub fn pause(surface_w: i32, surface_h: i32) -> Self {
        Self::boxed(surface_w, surface_h, PAUSE_BOX, 3, 9, 5)
    }

    pub fn option_y(&self, index: usize) -> i32 {
        self.first_option_y + index as i32 * self.spacing
    }

    /// Mouse target for option `index`.
    pub fn option_rect(&self, index: usize) -> Rect {
        let inset = self.spacing / 2 + 1;
        Rect::new(
            self.frame.x + inset,
            self.option_y(index) - 1,
            self.frame.w - inset * 2,
            self.spacing - 1,
        )
    }

    pub fn option_at(&self, px: i32, py: i32) -> Option<usize> {
        (0..self.count).find(|&i| self.option_rect(i).contains_point(px as f32, py as f32))
    }
}

/// Renders every non-gameplay screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuView;

impl MenuView {
    pub fn render_splash(&self, pixels: &mut PixelBuffer, camera: &Camera, labels: &mut TextLayer) {
        let mut canvas = Canvas::new(pixels, camera);
        canvas.clear(Rgba::BLACK);
        let (w, h) = (canvas.width(), canvas.height());
        labels.push_centered(w / 2, h / 3, GAME_TITLE, Rgba::YELLOW, true);
        labels.push_centered(w / 2, h / 2, "A software rasterizer adventure", Rgba::BLUE, false);
        labels.push_centered(w / 2, h / 2 + 4, "Complete the task on every board", Rgba::WHITE, false);
        labels.push_centered(w / 2, h - 6, "Press any key", Rgba::GRAY, false);
    }

    /// Checker background, a flood-filled box, option markers and two fans.
    pub fn render_main(
        &self,
        menu: &Menu,
        fan_angle: f32,
        pixels: &mut PixelBuffer,
        camera: &Camera,
        labels: &mut TextLayer,
    ) {
        let mut canvas = Canvas::new(pixels, camera);
        let (w, h) = (canvas.width(), canvas.height());
        canvas.fill_rect_textured(0.0, 0.0, w as f32, h as f32, Texture::Checker, Space::Screen);

        let layout = MenuLayout::main(w, h);
        let f = layout.frame;
        canvas.flood_fill_rect(f.x, f.y, f.w, f.h, Rgba::DARK_GRAY, Rgba::WHITE);

        labels.push_centered(w / 2, layout.title_y, GAME_TITLE, Rgba::YELLOW, true);
        draw_options(&mut canvas, &layout, menu, labels);
        labels.push_centered(
            w / 2,
            f.bottom() - 5,
            "W/S or mouse: navigate | ENTER/click: select",
            Rgba::WHITE,
            false,
        );

        let (fx, fy) = ((f.right() - 9) as f32, (f.y + 8) as f32);
        canvas.draw_fan(fx, fy, 5.0, fan_angle, Rgba::WHITE, Space::Screen);
        let (fx, fy) = ((f.right() - 9) as f32, (f.bottom() - 13) as f32);
        canvas.draw_fan(fx, fy, 4.0, -fan_angle * 1.5, Rgba::BLUE, Space::Screen);
    }

    pub fn render_controls(&self, pixels: &mut PixelBuffer, camera: &Camera, labels: &mut TextLayer) {
        let mut canvas = Canvas::new(pixels, camera);
        canvas.clear(Rgba::DARK_GRAY);
        let (w, h) = (canvas.width(), canvas.height());
        labels.push_centered(w / 2, 4, "CONTROLS", Rgba::YELLOW, true);
        for (i, line) in CONTROL_LINES.iter().enumerate() {
            labels.push_centered(w / 2, 12 + i as i32 * 4, *line, Rgba::WHITE, false);
        }
        labels.push_centered(w / 2, h - 4, "Press any key to go back", Rgba::YELLOW, false);
    }

    /// Dither the frozen game scene underneath, then draw the pause box.
    pub fn render_pause_overlay(
        &self,
        menu: &Menu,
        pixels: &mut PixelBuffer,
        camera: &Camera,
        labels: &mut TextLayer,
    ) {
        let mut canvas = Canvas::new(pixels, camera);
        let (w, h) = (canvas.width(), canvas.height());
        for y in (0..h).step_by(2) {
            for x in (0..w).step_by(2) {
                canvas.set_pixel(x as f32, y as f32, Rgba::BLACK, Space::Screen);
            }
        }

        let layout = MenuLayout::pause(w, h);
        let f = layout.frame;
        let (x, y, bw, bh) = (f.x as f32, f.y as f32, f.w as f32, f.h as f32);
        canvas.fill_rect(x, y, bw, bh, Rgba::DARK_GRAY, Space::Screen);
        canvas.draw_rect(x, y, bw, bh, Rgba::WHITE, Space::Screen);

        labels.push_centered(w / 2, layout.title_y, "PAUSED", Rgba::YELLOW, true);
        draw_options(&mut canvas, &layout, menu, labels);
    }

    /// Dotted backdrop with confetti that changes every frame.
    pub fn render_congrats(&self, frame: u32, pixels: &mut PixelBuffer, camera: &Camera, labels: &mut TextLayer) {
        let mut canvas = Canvas::new(pixels, camera);
        let (w, h) = (canvas.width(), canvas.height());
        canvas.fill_rect_textured(0.0, 0.0, w as f32, h as f32, Texture::Dots, Space::Screen);

        for speck in scatter(frame, CONFETTI_COUNT, w.max(0) as u32, h.max(0) as u32, CONFETTI.len()) {
            canvas.set_pixel(
                speck.x as f32,
                speck.y as f32,
                CONFETTI[speck.palette_index],
                Space::Screen,
            );
        }

        labels.push_centered(w / 2, h / 2 - 6, "CONGRATULATIONS!", Rgba::GREEN, true);
        labels.push_centered(w / 2, h / 2 + 2, "All tasks completed.", Rgba::WHITE, false);
        labels.push_centered(w / 2, h - 6, "Press any key to return to the menu...", Rgba::GRAY, false);
    }
}

/// Option captions with a filled marker on the selection and a hollow one elsewhere.
fn draw_options(
    canvas: &mut Canvas<'_, PixelBuffer>,
    layout: &MenuLayout,
    menu: &Menu,
    labels: &mut TextLayer,
) {
    let f = layout.frame;
    for (i, option) in menu.options().iter().enumerate() {
        let y = layout.option_y(i);
        let (mx, my) = ((f.x + layout.marker_dx) as f32, (y + 1) as f32);
        let selected = i == menu.selected();
        let color = if selected { Rgba::YELLOW } else { Rgba::WHITE };
        if selected {
            canvas.fill_circle(mx, my, MARKER_RADIUS, color, Space::Screen);
        } else {
            canvas.draw_circle(mx, my, MARKER_RADIUS, color, Space::Screen);
        }
        labels.push(f.x + layout.text_dx, y, *option, color);
    }
}

/// Menu option under a screen pixel for the current phase, if any.
pub fn option_at(game: &GameState, surface_w: i32, surface_h: i32, px: i32, py: i32) -> Option<usize> {
    match game.phase() {
        Phase::Menu => MenuLayout::main(surface_w, surface_h).option_at(px, py),
        Phase::Paused => MenuLayout::pause(surface_w, surface_h).option_at(px, py),
        _ => None,
    }
}

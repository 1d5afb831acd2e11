//! One frame: pick the view for the current phase and draw it.

use crate::core::{GameState, Phase};
use crate::fb::FrameBuffer;
use crate::game_view::GameView;
use crate::menu_view::{self, MenuView};
use crate::present::compose_half_blocks;
use crate::raster::{Camera, MiniMapConfig, PixelBuffer, PixelTarget, TextLayer};

/// Pixel and text layers for a frame, reused across frames.
#[derive(Debug, Clone)]
pub struct Scene {
    game_view: GameView,
    menu_view: MenuView,
    pixels: PixelBuffer,
    labels: TextLayer,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(GameView::default())
    }
}

impl Scene {
    pub fn new(game_view: GameView) -> Self {
        Self {
            game_view,
            menu_view: MenuView,
            pixels: PixelBuffer::new(0, 0),
            labels: TextLayer::new(),
        }
    }

    pub fn with_minimap(minimap: MiniMapConfig) -> Self {
        Self::new(GameView::new(minimap))
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn labels(&self) -> &TextLayer {
        &self.labels
    }

    /// Draw `game` at the camera's viewport size.
    ///
    /// The paused phase draws the frozen game first and dims it.
    pub fn render(&mut self, game: &GameState, camera: &Camera) {
        let (w, h) = camera.viewport();
        self.pixels.resize(w, h);
        self.labels.clear();

        let (pixels, labels) = (&mut self.pixels, &mut self.labels);
        match game.phase() {
            Phase::Splash => self.menu_view.render_splash(pixels, camera, labels),
            Phase::Menu => self
                .menu_view
                .render_main(game.main_menu(), game.fan_angle(), pixels, camera, labels),
            Phase::Controls => self.menu_view.render_controls(pixels, camera, labels),
            Phase::Playing => self.game_view.render(game, camera, pixels, labels),
            Phase::Paused => {
                self.game_view.render(game, camera, pixels, labels);
                // The pause box sits above the game's text.
                labels.clear();
                self.menu_view
                    .render_pause_overlay(game.pause_menu(), pixels, camera, labels);
            }
            Phase::Congrats => self.menu_view.render_congrats(game.frame(), pixels, camera, labels),
        }
    }

    /// Compose the last rendered frame into terminal cells.
    pub fn present(&self, fb: &mut FrameBuffer) {
        compose_half_blocks(&self.pixels, &self.labels, fb);
    }

    /// Menu option under a pixel of the last rendered frame.
    pub fn option_at(&self, game: &GameState, px: i32, py: i32) -> Option<usize> {
        let (w, h) = (self.pixels.width() as i32, self.pixels.height() as i32);
        menu_view::option_at(game, w, h, px, py)
    }
}

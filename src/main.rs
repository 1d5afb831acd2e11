//! Pixel Rooms terminal runner (default binary).
//!
//! Each frame is rasterized into a pixel buffer, composed into half-block
//! terminal cells and flushed with the diffing renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use crossterm::terminal;
use tracing::{error, info};

use pixel_rooms::config::AppConfig;
use pixel_rooms::core::{ActionOutcome, GameState, Phase, ZoomChange};
use pixel_rooms::input::{any_key, handle_key_event, should_quit, MovementTracker};
use pixel_rooms::logging::setup_logging;
use pixel_rooms::raster::Camera;
use pixel_rooms::term::{cell_to_pixel, FrameBuffer, Scene, TerminalRenderer, Viewport};
use pixel_rooms::types::{GameAction, MoveIntent};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let config = AppConfig::from_env()?;
    let _log_guard = setup_logging(&config.log_dir)?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(%err, "game loop failed");
    }
    result
}

/// Loop-owned state the event handlers act on.
struct Session {
    game: GameState,
    camera: Camera,
    scene: Scene,
    movement: MovementTracker,
}

impl Session {
    fn new(config: &AppConfig, viewport: Viewport, key_releases: bool) -> Self {
        let (w, h) = viewport.pixel_size();
        Self {
            game: GameState::new(),
            camera: Camera::with_config(w, h, config.zoom),
            scene: Scene::with_minimap(config.minimap()),
            movement: MovementTracker::new()
                .with_key_release_timeout_ms(config.key_release_ms)
                .with_release_events(key_releases),
        }
    }

    /// Apply an outcome; `true` means leave the game.
    fn apply(&mut self, outcome: ActionOutcome) -> bool {
        match outcome {
            ActionOutcome::Zoom(ZoomChange::In) => self.camera.zoom_in_step(),
            ActionOutcome::Zoom(ZoomChange::Out) => self.camera.zoom_out_step(),
            ActionOutcome::Zoom(ZoomChange::Reset) => self.camera.reset_zoom(),
            ActionOutcome::Quit => return true,
            ActionOutcome::Ignored | ActionOutcome::Handled => {}
        }
        false
    }

    fn on_key_press(&mut self, key: KeyEvent) -> bool {
        self.movement.handle_key_press(key);
        let action = match self.game.phase() {
            Phase::Splash | Phase::Controls | Phase::Congrats => Some(any_key(key)),
            _ => handle_key_event(key),
        };
        match action {
            Some(action) => {
                let outcome = self.game.apply_action(action);
                self.apply(outcome)
            }
            None => false,
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> bool {
        let (px, py) = cell_to_pixel(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                if let Some(index) = self.scene.option_at(&self.game, px, py) {
                    self.game.hover_option(index);
                }
                false
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.game.phase() == Phase::Playing {
                    let (wx, wy) = self.camera.screen_to_world(px as f32, py as f32);
                    self.game.click_world(wx, wy);
                    return false;
                }
                match self.scene.option_at(&self.game, px, py) {
                    Some(index) => {
                        let outcome = self.game.click_option(index);
                        self.apply(outcome)
                    }
                    None => false,
                }
            }
            MouseEventKind::ScrollUp => {
                let outcome = self.game.apply_action(GameAction::ZoomIn);
                self.apply(outcome)
            }
            MouseEventKind::ScrollDown => {
                let outcome = self.game.apply_action(GameAction::ZoomOut);
                self.apply(outcome)
            }
            _ => false,
        }
    }

    fn draw(&mut self, term: &mut TerminalRenderer, fb: &mut FrameBuffer) -> Result<()> {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        let (pw, ph) = Viewport::new(w, h).pixel_size();
        self.camera.resize(pw, ph);
        let target = self.game.camera_target();
        self.camera.update(target.x, target.y);

        self.scene.render(&self.game, &self.camera);
        self.scene.present(fb);
        term.draw_swap(fb)
    }
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let (w, h) = terminal::size().unwrap_or((80, 24));
    let key_releases = term.reports_key_releases();
    info!(key_releases, "input mode");
    let mut session = Session::new(config, Viewport::new(w, h), key_releases);
    let mut fb = FrameBuffer::new(0, 0);

    let tick_ms = config.tick_ms;
    let tick_duration = Duration::from_millis(tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        session.draw(term, &mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let quit = match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => should_quit(key) || session.on_key_press(key),
                    KeyEventKind::Repeat => {
                        // Auto-repeat only keeps movement alive.
                        session.movement.handle_key_press(key);
                        false
                    }
                    KeyEventKind::Release => {
                        session.movement.handle_key_release(key);
                        false
                    }
                },
                Event::Mouse(mouse) => session.on_mouse(mouse),
                Event::Resize(..) => {
                    term.invalidate();
                    false
                }
                _ => false,
            };
            if quit {
                info!("quit requested");
                return Ok(());
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let intent = if session.game.phase() == Phase::Playing {
                session.movement.intent()
            } else {
                MoveIntent::IDLE
            };
            session.game.tick(tick_ms, intent);
        }
    }
}

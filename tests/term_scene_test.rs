use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use pixel_rooms::core::{ActionOutcome, GameState, Phase};
use pixel_rooms::input::{any_key, handle_key_event, MovementTracker};
use pixel_rooms::raster::{Camera, PixelTarget};
use pixel_rooms::term::{cell_to_pixel, FrameBuffer, MenuLayout, Rgb, Scene, Viewport, HALF_BLOCK};
use pixel_rooms::types::GameAction;

fn row_text(fb: &FrameBuffer, row: u16) -> String {
    (0..fb.width()).filter_map(|x| fb.get(x, row)).map(|c| c.ch).collect()
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| row_text(fb, y)).collect::<Vec<_>>().join("\n")
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn playing_frame_composes_pixels_and_hud_text() {
    let mut game = GameState::new();
    game.start();
    let viewport = Viewport::new(160, 50);
    let (w, h) = viewport.pixel_size();
    let mut camera = Camera::new(w, h);
    let target = game.camera_target();
    camera.update(target.x, target.y);

    let mut scene = Scene::default();
    scene.render(&game, &camera);
    let mut fb = FrameBuffer::new(0, 0);
    scene.present(&mut fb);

    assert_eq!((fb.width(), fb.height()), (160, 50));
    assert!(screen_text(&fb).contains("Tasks: 0/5"));

    // Cells away from text show the two pixels they cover.
    let pixels = scene.pixels();
    let (col, row) = (80u16, 25u16);
    let cell = fb.get(col, row).unwrap();
    assert_eq!(cell.ch, HALF_BLOCK);
    assert_eq!(cell.style.fg, Rgb::from(pixels.color_at(col as i32, row as i32 * 2).unwrap()));
    assert_eq!(cell.style.bg, Rgb::from(pixels.color_at(col as i32, row as i32 * 2 + 1).unwrap()));
}

#[test]
fn keyboard_drives_menu_into_gameplay() {
    let mut game = GameState::new();
    game.apply_action(any_key(key(KeyCode::Char('x'))));
    assert_eq!(game.phase(), Phase::Menu);

    let action = handle_key_event(key(KeyCode::Enter)).unwrap();
    game.apply_action(action);
    assert_eq!(game.phase(), Phase::Playing);

    assert_eq!(handle_key_event(key(KeyCode::Esc)), Some(GameAction::Back));
    assert_eq!(handle_key_event(key(KeyCode::Char('q'))), Some(GameAction::Quit));
}

#[test]
fn mouse_click_on_menu_cell_selects_option() {
    let mut game = GameState::new();
    game.apply_action(GameAction::Confirm);

    let viewport = Viewport::new(120, 30);
    let (w, h) = viewport.pixel_size();
    let camera = Camera::new(w, h);
    let mut scene = Scene::default();
    scene.render(&game, &camera);

    // Middle of the "Controls" option, translated back to a terminal cell.
    let r = MenuLayout::main(w as i32, h as i32).option_rect(1);
    let (column, row) = ((r.x + r.w / 2) as u16, ((r.y + r.h / 2) / 2) as u16);
    let (px, py) = cell_to_pixel(column, row);
    let index = scene.option_at(&game, px, py);
    assert_eq!(index, Some(1));

    assert_eq!(game.click_option(1), ActionOutcome::Handled);
    assert_eq!(game.phase(), Phase::Controls);
}

#[test]
fn paused_frame_shows_only_pause_text() {
    let mut game = GameState::new();
    game.start();
    game.apply_action(GameAction::Back);

    let camera = Camera::new(120, 60);
    let mut scene = Scene::default();
    scene.render(&game, &camera);
    let mut fb = FrameBuffer::new(0, 0);
    scene.present(&mut fb);

    let text = screen_text(&fb);
    assert!(text.contains("PAUSED"));
    assert!(text.contains("Resume"));
    assert!(!text.contains("Tasks:"));
}

#[test]
fn held_keys_become_a_move_intent() {
    let mut movement = MovementTracker::new();
    movement.handle_key_press(key(KeyCode::Char('d')));
    movement.handle_key_press(key(KeyCode::Char('w')));
    let intent = movement.intent();
    assert_eq!((intent.dx, intent.dy, intent.sprint), (1, -1, false));

    movement.handle_key_release(key(KeyCode::Char('w')));
    let intent = movement.intent();
    assert_eq!((intent.dx, intent.dy), (1, 0));
}

#[test]
fn release_reporting_terminal_holds_keys_until_release() {
    let mut movement = MovementTracker::new()
        .with_key_release_timeout_ms(1)
        .with_release_events(true);
    assert!(movement.release_events());

    movement.handle_key_press(key(KeyCode::Char('w')));
    std::thread::sleep(std::time::Duration::from_millis(20));
    assert_eq!(movement.intent().dy, -1);

    movement.handle_key_release(key(KeyCode::Char('w')));
    assert!(movement.intent().is_idle());
}

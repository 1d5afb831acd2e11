//! GameView: draws the playing scene of a `GameState` into a pixel buffer.
//!
//! This module is pure (no I/O). Everything goes through [`Canvas`]; text is
//! queued on a [`TextLayer`] for the presenter.

use crate::core::{DoorSide, GameState, Player, Room};
use crate::raster::{
    scale_point, Camera, Canvas, MiniMap, MiniMapConfig, PixelBuffer, Space, TextLayer, Texture, WorldBounds,
};
use crate::types::{Furniture, Point, Rect, Rgba, MAX_TASKS, WALL_THICKNESS};

pub const BACKGROUND_TOP: Rgba = Rgba::rgb(245, 245, 245);
pub const BACKGROUND_BOTTOM: Rgba = Rgba::rgb(145, 145, 145);

const ROOM_FLOOR: Rgba = Rgba::GRAY;
/// World units of floor darkened below the top wall and beside the left wall.
const FLOOR_SHADOW_DEPTH: i32 = 4;
const ROOM_EDGE: Rgba = Rgba::WHITE;
const DOOR_PANEL: Rgba = Rgba::BROWN;
const BOARD_DONE: Rgba = Rgba::GREEN;
const BOARD_PENDING: Rgba = Rgba::BLUE;

const FAN_RADIUS: f32 = 12.0;
/// Each successive fan spins this much faster than the previous one.
const FAN_SPEED_STEP: f32 = 0.3;

pub const HUD_X: i32 = 2;
pub const HUD_Y: i32 = 2;
pub const HUD_W: i32 = 60;
pub const HUD_H: i32 = 6;
const HUD_BACKGROUND: Rgba = Rgba::rgb(50, 50, 50);

const TASK_BAR_W: i32 = 100;
const TASK_BAR_BOTTOM: i32 = 16;

const MINIMAP_MARGIN: i32 = 2;
const MINIMAP_TOP: i32 = 6;
/// World units per mini-map cell in the terminal build.
pub const TERMINAL_MINIMAP_CELL: i32 = 20;

pub const HELP_TEXT: &str = "WASD: move | SHIFT: run | E: interact | ESC: pause | +/-/0: zoom";

// Player sprite palette.
const SKIN: Rgba = Rgba::rgb(255, 220, 180);
const SHIRT: Rgba = Rgba::BLUE;
const PANTS: Rgba = Rgba::rgb(30, 30, 120);
const SHOES: Rgba = Rgba::BLACK;
const OUTLINE: Rgba = Rgba::WHITE;
const HAIR: Rgba = Rgba::BROWN;
const PUPIL: Rgba = Rgba::rgb(50, 50, 50);
const MOUTH: Rgba = Rgba::rgb(180, 80, 80);
const NOSE: Rgba = Rgba::rgb(230, 180, 150);
const GLASSES: Rgba = Rgba::rgb(40, 40, 40);
const LENS: Rgba = Rgba::rgb(180, 220, 255);
const BADGE: &str = "GESAD";
const BADGE_MIN_ZOOM: f32 = 3.0;

/// Renders the playing scene.
#[derive(Debug, Clone)]
pub struct GameView {
    minimap: MiniMap,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(MiniMapConfig::covering_world(TERMINAL_MINIMAP_CELL, 1))
    }
}

impl GameView {
    pub fn new(minimap: MiniMapConfig) -> Self {
        Self {
            minimap: MiniMap::new(minimap),
        }
    }

    pub fn minimap(&self) -> &MiniMap {
        &self.minimap
    }

    /// Draw the world, sprites and HUD. Painter's order: later layers win.
    pub fn render(&self, game: &GameState, camera: &Camera, pixels: &mut PixelBuffer, labels: &mut TextLayer) {
        let mut canvas = Canvas::new(pixels, camera);
        canvas.vertical_gradient(BACKGROUND_TOP, BACKGROUND_BOTTOM);

        let view = camera.window_bounds();
        let visible_rooms: Vec<&Room> = game
            .rooms()
            .iter()
            .filter(|room| on_screen(&view, room.bounds()) || on_screen(&view, room.door()))
            .collect();

        for room in &visible_rooms {
            draw_room(&mut canvas, room);
        }
        for wall in game.walls().iter().filter(|w| on_screen(&view, **w)) {
            canvas.fill_rect_textured(
                wall.x as f32,
                wall.y as f32,
                wall.w as f32,
                wall.h as f32,
                Texture::Brick,
                Space::World,
            );
        }
        for room in &visible_rooms {
            draw_room_details(&mut canvas, room);
        }

        for (i, room) in game.rooms().iter().enumerate() {
            let fan = room.fan_position();
            let d = FAN_RADIUS * 2.0;
            if !view.overlaps(fan.x - FAN_RADIUS, fan.y - FAN_RADIUS, d, d) {
                continue;
            }
            let speed = 1.0 + i as f32 * FAN_SPEED_STEP;
            canvas.draw_fan(fan.x, fan.y, FAN_RADIUS, game.fan_angle() * speed, Rgba::WHITE, Space::World);
        }

        if let Some(task) = game.task() {
            let w = TASK_BAR_W.min(canvas.width() - 4).max(0);
            let x = canvas.width() / 2 - w / 2;
            let y = canvas.height() - TASK_BAR_BOTTOM;
            labels.push_centered(canvas.width() / 2, y - 4, "Task in progress...", Rgba::BLACK, true);
            canvas.draw_progress_bar(x, y, w, task.progress);
        }

        draw_player(&mut canvas, game.player(), labels);

        let (map_w, _) = self.minimap.size_px();
        let origin_x = (canvas.width() - map_w - MINIMAP_MARGIN).max(0);
        let grid = self
            .minimap
            .build_grid(game.player().rect(), &game.map_rooms(), game.walls());
        self.minimap.render(&mut canvas, &grid, origin_x, MINIMAP_TOP, labels);

        draw_hud(&mut canvas, game.completed_count(), labels);

        labels.push(2, canvas.height() - 2, HELP_TEXT, Rgba::BLACK);
    }
}

fn on_screen(view: &WorldBounds, r: Rect) -> bool {
    view.overlaps(r.x as f32, r.y as f32, r.w as f32, r.h as f32)
}

/// Floor, fading into shadow along the top and left walls.
fn draw_room(canvas: &mut Canvas<'_, PixelBuffer>, room: &Room) {
    let b = room.bounds();
    let (x, y, w, h) = (b.x as f32, b.y as f32, b.w as f32, b.h as f32);
    canvas.fill_rect(x, y, w, h, ROOM_FLOOR, Space::World);

    let (r, bot) = (b.right() as f32 - 1.0, b.bottom() as f32 - 1.0);
    let bands = FLOOR_SHADOW_DEPTH.min(b.w / 2 - WALL_THICKNESS).min(b.h / 2 - WALL_THICKNESS);
    for i in 0..bands {
        let shade = ROOM_FLOOR.shadowed(floor_shadow(i));
        let o = (WALL_THICKNESS + i) as f32;
        canvas.draw_line(x + o, y + o, r, y + o, shade, Space::World);
        canvas.draw_line(x + o, y + o, x + o, bot, shade, Space::World);
    }
}

/// Shadow factor for the band `i` units in from the wall face; 1.0 against it.
fn floor_shadow(i: i32) -> f32 {
    (FLOOR_SHADOW_DEPTH - i) as f32 / FLOOR_SHADOW_DEPTH as f32
}

/// Room outline with a gap on the door side, door panel, board and furniture.
fn draw_room_details(canvas: &mut Canvas<'_, PixelBuffer>, room: &Room) {
    let b = room.bounds();
    let d = room.door();
    let (x, y, r, bot) = (b.x as f32, b.y as f32, b.right() as f32, b.bottom() as f32);
    let (dx, dy, dr, db) = (d.x as f32, d.y as f32, d.right() as f32, d.bottom() as f32);
    let side = room.door_side();
    let mut edge = |x0: f32, y0: f32, x1: f32, y1: f32| {
        canvas.draw_line(x0, y0, x1, y1, ROOM_EDGE, Space::World);
    };

    if side == DoorSide::Top {
        edge(x, y, dx, y);
        edge(dr, y, r, y);
    } else {
        edge(x, y, r, y);
    }
    if side == DoorSide::Bottom {
        edge(x, bot, dx, bot);
        edge(dr, bot, r, bot);
    } else {
        edge(x, bot, r, bot);
    }
    if side == DoorSide::Left {
        edge(x, y, x, dy);
        edge(x, db, x, bot);
    } else {
        edge(x, y, x, bot);
    }
    if side == DoorSide::Right {
        edge(r, y, r, dy);
        edge(r, db, r, bot);
    } else {
        edge(r, y, r, bot);
    }

    draw_door(canvas, room);

    // Chalkboard: outlined on top and sides only.
    let k = room.button();
    let (kx, ky, kr, kb) = (k.x as f32, k.y as f32, k.right() as f32, k.bottom() as f32);
    let board = if room.completed() { BOARD_DONE } else { BOARD_PENDING };
    canvas.fill_rect(kx, ky, k.w as f32, k.h as f32, board, Space::World);
    canvas.draw_line(kx, ky, kr, ky, Rgba::WHITE, Space::World);
    canvas.draw_line(kx, ky, kx, kb, Rgba::WHITE, Space::World);
    canvas.draw_line(kr, ky, kr, kb, Rgba::WHITE, Space::World);

    for piece in room.furniture() {
        draw_furniture(canvas, piece);
    }
}

fn draw_door(canvas: &mut Canvas<'_, PixelBuffer>, room: &Room) {
    let (x, y, pw, ph) = door_panel(room.door(), room.door_side(), 1.0 - room.door_progress());
    if pw > 0.0 && ph > 0.0 {
        canvas.fill_rect(x, y, pw, ph, DOOR_PANEL, Space::World);
    }
}

/// Panel rectangle `(x, y, w, h)`: the door shrunk toward its origin along
/// the long axis, `closed` being the fraction still covering the gap.
fn door_panel(door: Rect, side: DoorSide, closed: f32) -> (f32, f32, f32, f32) {
    let origin = Point::new(door.x as f32, door.y as f32);
    let (sx, sy) = match side {
        DoorSide::Top | DoorSide::Bottom => (closed, 1.0),
        DoorSide::Left | DoorSide::Right => (1.0, closed),
    };
    let corner = scale_point(Point::new(door.right() as f32, door.bottom() as f32), origin, sx, sy);
    (origin.x, origin.y, corner.x - origin.x, corner.y - origin.y)
}

fn draw_furniture(canvas: &mut Canvas<'_, PixelBuffer>, piece: Furniture) {
    match piece {
        Furniture::Desk(r) => canvas.fill_rect_outlined(
            r.x as f32,
            r.y as f32,
            r.w as f32,
            r.h as f32,
            Rgba::LIGHT_BROWN,
            Rgba::BROWN,
            Space::World,
        ),
        Furniture::Chair(r) => {
            canvas.fill_rect(r.x as f32, r.y as f32, r.w as f32, r.h as f32, Rgba::BROWN, Space::World)
        }
        Furniture::RoundTable { cx, cy, radius } => {
            let (cx, cy, r) = (cx as f32, cy as f32, radius as f32);
            canvas.fill_circle(cx, cy, r, Rgba::LIGHT_BROWN, Space::World);
            canvas.draw_circle(cx, cy, r, Rgba::BROWN, Space::World);
        }
    }
}

/// Stick figure from outlined rectangles; the face is placed one world unit
/// at a time with [`Canvas::fill_unit`].
fn draw_player(canvas: &mut Canvas<'_, PixelBuffer>, player: &Player, labels: &mut TextLayer) {
    let rect = player.rect();
    let (px, py, pw) = (rect.x as f32, rect.y as f32, rect.w as f32);

    let head = 10.0;
    let hx = px + ((rect.w - 10) / 2) as f32;
    canvas.fill_rect_outlined(hx, py, head, head, SKIN, OUTLINE, Space::World);
    draw_face(canvas, hx, py);

    let body_y = py + head;
    canvas.fill_rect_outlined(px, body_y, pw, 12.0, SHIRT, OUTLINE, Space::World);
    let pants_y = body_y + 12.0;
    canvas.fill_rect_outlined(px, pants_y, pw, 8.0, PANTS, OUTLINE, Space::World);

    canvas.fill_rect_outlined(px - 4.0, body_y, 4.0, 12.0, SKIN, OUTLINE, Space::World);
    canvas.fill_rect_outlined(px + pw, body_y, 4.0, 12.0, SKIN, OUTLINE, Space::World);

    let (leg_w, leg_h) = (6, 4);
    let gap = (rect.w - 2 * leg_w) / 3;
    let legs_y = pants_y + 8.0;
    for leg_x in [rect.x + gap, rect.x + gap * 2 + leg_w] {
        canvas.fill_rect_outlined(leg_x as f32, legs_y, leg_w as f32, leg_h as f32, SHOES, OUTLINE, Space::World);
    }

    if canvas.camera().zoom() >= BADGE_MIN_ZOOM {
        let (sx, sy) = canvas.camera().world_to_screen(px + pw / 2.0, body_y + 6.0);
        labels.push_centered(sx, sy, BADGE, Rgba::WHITE, false);
    }
}

fn draw_face(canvas: &mut Canvas<'_, PixelBuffer>, hx: f32, hy: f32) {
    let mut unit = |dx: i32, dy: i32, color: Rgba| canvas.fill_unit(hx + dx as f32, hy + dy as f32, color);

    for dy in 0..3 {
        for dx in 0..10 {
            unit(dx, dy, HAIR);
        }
    }
    // Fringe.
    for dx in (1..9).step_by(2) {
        unit(dx, 2, HAIR);
    }

    for lens_x in [1, 6] {
        for ly in 0..3 {
            for lx in 0..3 {
                let rim = ly != 1 || lx != 1;
                unit(lens_x + lx, 3 + ly, if rim { GLASSES } else { LENS });
            }
        }
    }
    unit(2, 4, PUPIL);
    unit(7, 4, PUPIL);

    // Bridge and temples.
    unit(4, 4, GLASSES);
    unit(5, 4, GLASSES);
    unit(0, 4, GLASSES);
    unit(9, 4, GLASSES);

    unit(5, 6, NOSE);
    unit(5, 7, NOSE);

    for dx in 3..7 {
        unit(dx, 8, MOUTH);
    }
}

/// Segmented task bar in the top-left corner with a caption below it.
fn draw_hud(canvas: &mut Canvas<'_, PixelBuffer>, completed: usize, labels: &mut TextLayer) {
    let (x, y, w, h) = (HUD_X as f32, HUD_Y as f32, HUD_W as f32, HUD_H as f32);
    canvas.fill_rect(x, y, w, h, HUD_BACKGROUND, Space::Screen);
    canvas.draw_rect(x, y, w, h, Rgba::WHITE, Space::Screen);

    let ratio = completed.min(MAX_TASKS) as f32 / MAX_TASKS as f32;
    let fill_w = (w * ratio) as i32;
    if fill_w > 0 {
        canvas.fill_rect(x, y, fill_w as f32, h, Rgba::GREEN, Space::Screen);
    }

    let segment = w / MAX_TASKS as f32;
    for i in 1..MAX_TASKS {
        let sx = (x + i as f32 * segment) as i32 as f32;
        canvas.draw_line(sx, y, sx, y + h, Rgba::BLACK, Space::Screen);
    }

    labels.push(
        HUD_X,
        HUD_Y + HUD_H + 2,
        format!("Tasks: {completed}/{MAX_TASKS}"),
        Rgba::BLACK,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::PixelTarget;
    use crate::types::{GameAction, MoveIntent};

    fn playing() -> GameState {
        let mut game = GameState::new();
        game.apply_action(GameAction::Confirm);
        game.apply_action(GameAction::Confirm);
        game
    }

    fn render(game: &GameState, zoom_in_steps: u32) -> (PixelBuffer, TextLayer) {
        let mut pixels = PixelBuffer::new(200, 100);
        let mut labels = TextLayer::new();
        let mut camera = Camera::new(200, 100);
        for _ in 0..zoom_in_steps {
            camera.zoom_in_step();
        }
        let target = game.camera_target();
        camera.update(target.x, target.y);
        GameView::default().render(game, &camera, &mut pixels, &mut labels);
        (pixels, labels)
    }

    #[test]
    fn player_sits_at_screen_center() {
        let game = playing();
        let (pixels, _) = render(&game, 0);
        // Camera focuses the player's center, which falls on the shirt.
        assert_eq!(pixels.color_at(100, 50), Some(SHIRT));
    }

    #[test]
    fn hud_shows_task_count_and_segments() {
        let game = playing();
        let (pixels, labels) = render(&game, 0);
        assert_eq!(pixels.color_at(HUD_X + 1, HUD_Y + 1), Some(HUD_BACKGROUND));
        assert_eq!(pixels.color_at(HUD_X + HUD_W / 5, HUD_Y + 1), Some(Rgba::BLACK));
        assert!(labels.contains("Tasks: 0/5"));
        assert!(labels.contains(HELP_TEXT));
        assert!(labels.contains("MAP"));
    }

    #[test]
    fn minimap_sits_top_right() {
        let game = playing();
        let view = GameView::default();
        let (pixels, _) = render(&game, 0);
        let (w, _) = view.minimap().size_px();
        let ox = 200 - w - MINIMAP_MARGIN;
        // Top-left cell of the world is background; the border frames it.
        assert_eq!(pixels.color_at(ox, MINIMAP_TOP), Some(Rgba::WHITE));
        assert_eq!(pixels.color_at(ox - 1, MINIMAP_TOP), Some(Rgba::BLACK));
    }

    #[test]
    fn task_shows_progress_caption() {
        let mut game = playing();
        let (_, labels) = render(&game, 0);
        assert!(!labels.contains("Task in progress"));

        let button = game.rooms()[0].button();
        game.click_world(button.x as f32 + 1.0, button.y as f32 + 1.0);
        game.tick(16, MoveIntent::IDLE);
        let (pixels, labels) = render(&game, 0);
        assert!(labels.contains("Task in progress"));
        // Bar outline at the bottom center.
        let y = 100 - TASK_BAR_BOTTOM;
        assert_eq!(pixels.color_at(100, y), Some(Rgba::WHITE));
    }

    #[test]
    fn badge_appears_only_when_zoomed_in() {
        let game = playing();
        let (_, labels) = render(&game, 0);
        assert!(!labels.contains(BADGE));
        // 1.2^7 > 3
        let (_, labels) = render(&game, 7);
        assert!(labels.contains(BADGE));
    }

    fn render_at(game: &GameState, x: f32, y: f32) -> PixelBuffer {
        let mut pixels = PixelBuffer::new(200, 100);
        let mut labels = TextLayer::new();
        let mut camera = Camera::new(200, 100);
        camera.update(x, y);
        GameView::default().render(game, &camera, &mut pixels, &mut labels);
        pixels
    }

    #[test]
    fn rooms_outside_the_window_draw_nothing() {
        let game = playing();
        let far = render_at(&game, 50_000.0, 50_000.0);
        let mut backdrop = PixelBuffer::new(200, 100);
        let camera = Camera::new(200, 100);
        Canvas::new(&mut backdrop, &camera).vertical_gradient(BACKGROUND_TOP, BACKGROUND_BOTTOM);
        // Everything left of the mini-map and below the HUD is bare backdrop.
        for y in 10..100 {
            for x in 0..150 {
                assert_eq!(far.color_at(x, y), backdrop.color_at(x, y), "({x}, {y})");
            }
        }

        let c = game.rooms()[0].bounds().center();
        let near = render_at(&game, c.x, c.y);
        assert_eq!(near.color_at(100, 50), Some(ROOM_FLOOR));
    }

    #[test]
    fn culling_keeps_partly_visible_rects() {
        let mut camera = Camera::new(200, 100);
        camera.update(0.0, 0.0);
        let view = camera.window_bounds();
        assert!(on_screen(&view, Rect::new(-500, -10, 420, 20)));
        assert!(!on_screen(&view, Rect::new(-500, -10, 100, 20)));
        assert!(!on_screen(&view, Rect::new(0, 400, 10, 10)));
    }

    #[test]
    fn floor_is_shaded_under_top_and_left_walls() {
        let game = playing();
        let b = game.rooms()[0].bounds();
        let (cx, cy) = (b.x as f32 + 40.0, b.y as f32 + 20.0);
        let pixels = render_at(&game, cx, cy);
        let mut camera = Camera::new(200, 100);
        camera.update(cx, cy);

        let face = WALL_THICKNESS as f32;
        let darkest = Some(ROOM_FLOOR.shadowed(1.0));
        let (sx, sy) = camera.world_to_screen(b.x as f32 + 40.0, b.y as f32 + face);
        assert_eq!(pixels.color_at(sx, sy), darkest);
        let (sx, sy) = camera.world_to_screen(b.x as f32 + face, b.y as f32 + 20.0);
        assert_eq!(pixels.color_at(sx, sy), darkest);

        // The band fades back toward plain floor.
        let (sx, sy) = camera.world_to_screen(b.x as f32 + 40.0, b.y as f32 + face + 3.0);
        assert_eq!(pixels.color_at(sx, sy), Some(ROOM_FLOOR.shadowed(floor_shadow(3))));
        let (sx, sy) = camera.world_to_screen(b.x as f32 + 40.0, b.y as f32 + face + 6.0);
        assert_eq!(pixels.color_at(sx, sy), Some(ROOM_FLOOR));
    }

    #[test]
    fn door_panel_shrinks_along_its_long_axis() {
        let across = Rect::new(10, 20, 40, 6);
        assert_eq!(door_panel(across, DoorSide::Top, 1.0), (10.0, 20.0, 40.0, 6.0));
        assert_eq!(door_panel(across, DoorSide::Bottom, 0.5), (10.0, 20.0, 20.0, 6.0));

        let upright = Rect::new(0, 0, 6, 40);
        assert_eq!(door_panel(upright, DoorSide::Left, 0.25), (0.0, 0.0, 6.0, 10.0));
        let (_, _, w, _) = door_panel(across, DoorSide::Top, 0.0);
        assert_eq!(w, 0.0);
    }

    #[test]
    fn walls_are_brick_textured() {
        let game = playing();
        let (pixels, _) = render(&game, 0);
        let brick = Texture::Brick.color_at(1, 1);
        assert!(pixels.count_rgb(brick) > 0);
    }
}

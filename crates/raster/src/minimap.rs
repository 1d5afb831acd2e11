//! Mini-map: down-sample the world into a coarse color grid, then rasterize
//! that grid back to the screen at its own scale.
//!
//! Building and rendering are separate passes. [`build_grid_sized`] paints
//! cells in a fixed order (background, room interiors, walls, doors, task
//! buttons, furniture, player), so later layers overwrite earlier ones and
//! the player is never hidden. [`render_grid`] writes one `scale × scale`
//! block of screen pixels per cell through [`Canvas::set_pixel`].
//!
//! World coordinates map to cells with `div_euclid(cell_size)`; every index is
//! clamped into the grid before writing.

use std::ops::Range;

use tracing::trace;

use crate::buffer::PixelTarget;
use crate::canvas::{Canvas, Space};
use crate::text::TextLayer;
use crate::types::{Furniture, MapRoom, Rect, Rgba, WORLD_HEIGHT, WORLD_WIDTH};

pub const GRID_WIDTH: usize = 90;
pub const GRID_HEIGHT: usize = 70;
pub const CELL_SIZE: i32 = 10;

pub const BACKGROUND: Rgba = Rgba::WHITE;
pub const ROOM_FLOOR: Rgba = Rgba::GRAY;
pub const WALL: Rgba = Rgba::BLACK;
pub const DOOR_BLOCKING: Rgba = Rgba::YELLOW;
pub const DOOR_OPEN: Rgba = Rgba::rgb(100, 100, 100);
pub const BUTTON_DONE: Rgba = Rgba::rgb(40, 120, 40);
pub const BUTTON_PENDING: Rgba = Rgba::DARK_GREEN;
pub const DESK: Rgba = Rgba::LIGHT_BROWN;
pub const CHAIR: Rgba = Rgba::BROWN;
pub const TABLE: Rgba = Rgba::LIGHT_BROWN;
pub const PLAYER: Rgba = Rgba::RED;
pub const BORDER: Rgba = Rgba::BLACK;

/// Round tables are drawn as a disc of this many cells regardless of size.
pub const TABLE_RADIUS_CELLS: i32 = 3;
/// Minimum player footprint in cells, so the marker stays visible.
pub const PLAYER_MIN_CELLS: (i32, i32) = (2, 3);
/// Title baseline offset above the map, in pixels.
const TITLE_GAP: i32 = 4;

/// Row-major grid of cell colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Rgba>,
}

impl Grid {
    pub fn new(width: usize, height: usize, fill: Rgba) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Rgba] {
        &self.cells
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Rgba> {
        if col < self.width && row < self.height {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    pub fn count(&self, color: Rgba) -> usize {
        self.cells.iter().filter(|c| **c == color).count()
    }

    fn set(&mut self, col: i64, row: i64, color: Rgba) {
        if col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height {
            self.cells[row as usize * self.width + col as usize] = color;
        }
    }

    fn paint(&mut self, cols: Range<usize>, rows: Range<usize>, color: Rgba) {
        for row in rows {
            for col in cols.clone() {
                self.cells[row * self.width + col] = color;
            }
        }
    }
}

/// Cells covered by the world interval `[start, start + len)`, clamped to `[0, limit)`.
fn cell_span(start: i32, len: i32, cell_size: i32, limit: usize) -> Range<usize> {
    if len <= 0 {
        return 0..0;
    }
    let first = start.div_euclid(cell_size) as i64;
    let last = (start as i64 + len as i64 - 1).div_euclid(cell_size as i64);
    clamp_span(first, last + 1, limit)
}

fn clamp_span(lo: i64, hi: i64, limit: usize) -> Range<usize> {
    let lo = lo.clamp(0, limit as i64) as usize;
    let hi = hi.clamp(0, limit as i64) as usize;
    lo..hi.max(lo)
}

fn paint_rect(grid: &mut Grid, rect: Rect, cell_size: i32, color: Rgba) {
    let cols = cell_span(rect.x, rect.w, cell_size, grid.width);
    let rows = cell_span(rect.y, rect.h, cell_size, grid.height);
    grid.paint(cols, rows, color);
}

/// Down-sample the world into a `grid_width × grid_height` grid of
/// `cell_size`-unit cells.
pub fn build_grid_sized(
    player: Rect,
    rooms: &[MapRoom],
    walls: &[Rect],
    grid_width: usize,
    grid_height: usize,
    cell_size: i32,
) -> Grid {
    let mut grid = Grid::new(grid_width, grid_height, BACKGROUND);
    if cell_size <= 0 {
        return grid;
    }

    for room in rooms {
        paint_rect(&mut grid, room.bounds, cell_size, ROOM_FLOOR);
    }

    // Wall rectangles already leave the door gap open.
    for wall in walls {
        paint_rect(&mut grid, *wall, cell_size, WALL);
    }

    for room in rooms {
        let door = if room.door_blocking {
            DOOR_BLOCKING
        } else {
            DOOR_OPEN
        };
        paint_rect(&mut grid, room.door, cell_size, door);

        let button = if room.completed {
            BUTTON_DONE
        } else {
            BUTTON_PENDING
        };
        paint_rect(&mut grid, room.button, cell_size, button);

        for item in &room.furniture {
            paint_furniture(&mut grid, item, cell_size);
        }
    }

    let col = player.x.div_euclid(cell_size) as i64;
    let row = player.y.div_euclid(cell_size) as i64;
    let w = (player.w / cell_size).max(PLAYER_MIN_CELLS.0) as i64;
    let h = (player.h / cell_size).max(PLAYER_MIN_CELLS.1) as i64;
    let cols = clamp_span(col, col + w, grid.width);
    let rows = clamp_span(row, row + h, grid.height);
    grid.paint(cols, rows, PLAYER);

    trace!(grid_width, grid_height, cell_size, rooms = rooms.len(), "mini-map grid built");
    grid
}

fn paint_furniture(grid: &mut Grid, item: &Furniture, cell_size: i32) {
    match *item {
        Furniture::Desk(rect) => paint_rect(grid, rect, cell_size, DESK),
        Furniture::Chair(rect) => {
            grid.set(
                rect.x.div_euclid(cell_size) as i64,
                rect.y.div_euclid(cell_size) as i64,
                CHAIR,
            );
        }
        Furniture::RoundTable { cx, cy, .. } => {
            let (tc, tr) = (cx.div_euclid(cell_size) as i64, cy.div_euclid(cell_size) as i64);
            let r = TABLE_RADIUS_CELLS as i64;
            for dy in -r..=r {
                for dx in -r..=r {
                    if dx * dx + dy * dy <= r * r {
                        grid.set(tc + dx, tr + dy, TABLE);
                    }
                }
            }
        }
    }
}

/// Write each cell as a `cell_scale × cell_scale` pixel block at
/// `(origin_x, origin_y)`, then a one-pixel border just outside the map.
/// A non-positive scale draws nothing.
pub fn render_grid<T: PixelTarget>(
    canvas: &mut Canvas<'_, T>,
    grid: &Grid,
    origin_x: i32,
    origin_y: i32,
    cell_scale: i32,
) {
    if cell_scale <= 0 {
        return;
    }
    let s = cell_scale as i64;
    let (ox, oy) = (origin_x as i64, origin_y as i64);

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let color = grid.cells[row * grid.width + col];
            let bx = ox + col as i64 * s;
            let by = oy + row as i64 * s;
            for dy in 0..s {
                for dx in 0..s {
                    canvas.set_pixel((bx + dx) as f32, (by + dy) as f32, color, Space::Screen);
                }
            }
        }
    }

    let left = (ox - 1) as f32;
    let top = (oy - 1) as f32;
    let right = (ox + grid.width() as i64 * s) as f32;
    let bottom = (oy + grid.height() as i64 * s) as f32;
    canvas.draw_line(left, top, right, top, BORDER, Space::Screen);
    canvas.draw_line(left, bottom, right, bottom, BORDER, Space::Screen);
    canvas.draw_line(left, top, left, bottom, BORDER, Space::Screen);
    canvas.draw_line(right, top, right, bottom, BORDER, Space::Screen);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiniMapConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    /// World units per cell.
    pub cell_size: i32,
    /// Screen pixels per cell edge.
    pub cell_scale: i32,
    pub title: String,
}

impl Default for MiniMapConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            cell_scale: 1,
            title: "MAP".to_string(),
        }
    }
}

impl MiniMapConfig {
    /// Grid that covers the whole world at `cell_size` world units per cell.
    pub fn covering_world(cell_size: i32, cell_scale: i32) -> Self {
        let cell = cell_size.max(1);
        Self {
            grid_width: (WORLD_WIDTH + cell - 1).div_euclid(cell) as usize,
            grid_height: (WORLD_HEIGHT + cell - 1).div_euclid(cell) as usize,
            cell_size: cell,
            cell_scale,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MiniMap {
    config: MiniMapConfig,
}

impl MiniMap {
    pub fn new(config: MiniMapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MiniMapConfig {
        &self.config
    }

    /// On-screen size of the rendered map, excluding the border.
    pub fn size_px(&self) -> (i32, i32) {
        let s = self.config.cell_scale.max(0);
        (
            self.config.grid_width as i32 * s,
            self.config.grid_height as i32 * s,
        )
    }

    pub fn build_grid(&self, player: Rect, rooms: &[MapRoom], walls: &[Rect]) -> Grid {
        build_grid_sized(
            player,
            rooms,
            walls,
            self.config.grid_width,
            self.config.grid_height,
            self.config.cell_size,
        )
    }

    /// Render at the configured scale and queue the title above the map.
    pub fn render<T: PixelTarget>(
        &self,
        canvas: &mut Canvas<'_, T>,
        grid: &Grid,
        origin_x: i32,
        origin_y: i32,
        labels: &mut TextLayer,
    ) {
        let s = self.config.cell_scale;
        render_grid(canvas, grid, origin_x, origin_y, s);
        let center_x = origin_x + grid.width() as i32 * s.max(0) / 2;
        labels.push_centered(center_x, origin_y - TITLE_GAP, self.config.title.clone(), Rgba::BLACK, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::PixelBuffer;
    use crate::camera::Camera;

    fn room() -> MapRoom {
        MapRoom {
            bounds: Rect::new(100, 100, 200, 150),
            door: Rect::new(180, 246, 40, 4),
            door_blocking: true,
            button: Rect::new(270, 110, 10, 10),
            completed: false,
            furniture: vec![
                Furniture::Desk(Rect::new(130, 180, 40, 20)),
                Furniture::Chair(Rect::new(144, 205, 12, 12)),
            ],
        }
    }

    #[test]
    fn cell_span_covers_touched_cells() {
        assert_eq!(cell_span(0, 10, 10, 90), 0..1);
        assert_eq!(cell_span(5, 10, 10, 90), 0..2);
        assert_eq!(cell_span(100, 200, 10, 90), 10..30);
        assert_eq!(cell_span(-25, 10, 10, 90), 0..0);
        assert_eq!(cell_span(880, 100, 10, 90), 88..90);
        assert_eq!(cell_span(50, 0, 10, 90), 0..0);
    }

    #[test]
    fn layers_paint_in_order() {
        let rooms = [room()];
        let walls = [Rect::new(100, 100, 200, 4)];
        let grid = build_grid_sized(Rect::new(0, 0, 20, 32), &rooms, &walls, 90, 70, 10);

        assert_eq!(grid.get(50, 50), Some(BACKGROUND));
        assert_eq!(grid.get(15, 15), Some(ROOM_FLOOR));
        assert_eq!(grid.get(15, 10), Some(WALL));
        assert_eq!(grid.get(19, 24), Some(DOOR_BLOCKING));
        assert_eq!(grid.get(27, 11), Some(BUTTON_PENDING));
        assert_eq!(grid.get(13, 18), Some(DESK));
        assert_eq!(grid.get(14, 20), Some(CHAIR));
        // Player at the origin: 2 x 3 cells.
        assert_eq!(grid.count(PLAYER), 6);
    }

    #[test]
    fn door_and_button_track_room_state() {
        let mut r = room();
        r.door_blocking = false;
        r.completed = true;
        let grid = build_grid_sized(Rect::new(0, 0, 20, 32), &[r], &[], 90, 70, 10);
        assert_eq!(grid.get(19, 24), Some(DOOR_OPEN));
        assert_eq!(grid.get(27, 11), Some(BUTTON_DONE));
        assert_eq!(grid.count(DOOR_BLOCKING), 0);
    }

    #[test]
    fn player_is_drawn_over_everything() {
        let r = room();
        let player = Rect::new(185, 240, 20, 32);
        let grid = build_grid_sized(player, &[r], &[], 90, 70, 10);
        assert_eq!(grid.get(18, 24), Some(PLAYER));
        assert_eq!(grid.get(19, 26), Some(PLAYER));
    }

    #[test]
    fn round_table_is_a_disc_of_cells() {
        let r = MapRoom {
            furniture: vec![Furniture::RoundTable {
                cx: 200,
                cy: 180,
                radius: 45,
            }],
            ..room()
        };
        let grid = build_grid_sized(Rect::new(0, 600, 20, 32), &[r], &[], 90, 70, 10);
        // Lattice points with dx² + dy² <= 9.
        assert_eq!(grid.count(TABLE), 29);
        assert_eq!(grid.get(20, 18), Some(TABLE));
        assert_eq!(grid.get(23, 18), Some(TABLE));
        assert_eq!(grid.get(23, 21), Some(ROOM_FLOOR));
    }

    #[test]
    fn geometry_off_the_grid_is_clamped() {
        let rooms = [MapRoom {
            bounds: Rect::new(-500, -500, 2000, 2000),
            door: Rect::new(-50, -50, 10, 10),
            door_blocking: true,
            button: Rect::new(5000, 5000, 10, 10),
            completed: false,
            furniture: vec![Furniture::Chair(Rect::new(-30, 20, 5, 5))],
        }];
        let grid = build_grid_sized(Rect::new(-100, 690, 20, 32), &rooms, &[], 90, 70, 10);
        assert_eq!(grid.count(ROOM_FLOOR), 90 * 70);
        assert_eq!(grid.count(PLAYER), 0);
        assert_eq!(grid.count(DOOR_BLOCKING), 0);
    }

    #[test]
    fn degenerate_grid_sizes_are_empty() {
        let grid = build_grid_sized(Rect::new(0, 0, 20, 32), &[room()], &[], 0, 0, 10);
        assert!(grid.cells().is_empty());
        let grid = build_grid_sized(Rect::new(0, 0, 20, 32), &[room()], &[], 4, 4, 0);
        assert_eq!(grid.count(BACKGROUND), 16);
    }

    #[test]
    fn each_cell_becomes_one_scale_squared_block() {
        let grid = build_grid_sized(Rect::new(10, 10, 20, 32), &[room()], &[], 30, 26, 10);

        for scale in 1..=3 {
            let (ox, oy) = (5, 4);
            let w = 30 * scale + 12;
            let h = 26 * scale + 10;
            let mut fb = PixelBuffer::new(w as u32, h as u32);
            fb.clear(Rgba::BLUE);
            let cam = Camera::new(w as u32, h as u32);
            render_grid(&mut Canvas::new(&mut fb, &cam), &grid, ox, oy, scale);

            for py in oy..oy + 26 * scale {
                for px in ox..ox + 30 * scale {
                    let col = ((px - ox) / scale) as usize;
                    let row = ((py - oy) / scale) as usize;
                    assert_eq!(fb.color_at(px, py), grid.get(col, row));
                }
            }

            // Per-color pixel totals are exactly scale² times the cell totals.
            let area = (scale * scale) as usize;
            for color in [PLAYER, DESK, ROOM_FLOOR, CHAIR] {
                assert_eq!(fb.count_rgb(color), grid.count(color) * area);
            }

            // Border sits one pixel outside.
            assert_eq!(fb.color_at(ox - 1, oy - 1), Some(BORDER));
            assert_eq!(fb.color_at(ox + 30 * scale, oy + 26 * scale), Some(BORDER));
            assert_eq!(fb.color_at(ox - 2, oy), Some(Rgba::BLUE));
        }
    }

    #[test]
    fn covering_world_rounds_grid_up() {
        let c = MiniMapConfig::covering_world(20, 2);
        assert_eq!((c.grid_width, c.grid_height), (45, 35));
        let c = MiniMapConfig::covering_world(40, 1);
        assert_eq!((c.grid_width, c.grid_height), (23, 18));
        assert_eq!(MiniMapConfig::covering_world(10, 1), MiniMapConfig::default());
    }

    #[test]
    fn render_queues_title_label() {
        let map = MiniMap::new(MiniMapConfig {
            grid_width: 10,
            grid_height: 8,
            cell_scale: 2,
            ..MiniMapConfig::default()
        });
        let grid = map.build_grid(Rect::new(0, 0, 20, 32), &[], &[]);
        let mut fb = PixelBuffer::new(40, 40);
        let cam = Camera::new(40, 40);
        let mut labels = TextLayer::new();
        map.render(&mut Canvas::new(&mut fb, &cam), &grid, 10, 10, &mut labels);
        assert!(labels.contains("MAP"));
        assert_eq!(labels.labels()[0].x, 20);
        assert_eq!(map.size_px(), (20, 16));
    }
}

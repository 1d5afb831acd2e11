//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rasterizer, game logic, terminal presentation).
//!
//! # World Dimensions
//!
//! The office map lives in a fixed world rectangle measured in world units:
//!
//! - **Width**: 900 units
//! - **Height**: 700 units
//! - **Player spawn**: (395, 240), in the corridor between the classrooms
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SPLASH_MS` | 3000 | Splash screen duration |
//! | `TASK_DURATION_MS` | 1000 | Time to complete one room task |
//! | `FAN_SPEED` | 3.0 | Fan rotation speed in radians per second |
//!
//! # Camera Defaults
//!
//! | Constant | Value |
//! |----------|-------|
//! | `DEFAULT_ZOOM` | 1.0 |
//! | `MIN_ZOOM` | 0.5 |
//! | `MAX_ZOOM` | 5.0 |
//! | `ZOOM_STEP` | 1.2 |
//!
//! # Examples
//!
//! ```
//! use pixel_rooms_types::{GameAction, Rect, Rgba};
//!
//! let a = Rect::new(0, 0, 10, 10);
//! let b = Rect::new(5, 5, 10, 10);
//! assert!(a.intersects(&b));
//!
//! // Alpha is ignored when comparing for fill boundaries.
//! assert!(Rgba::new(1, 2, 3, 0).same_rgb(Rgba::rgb(1, 2, 3)));
//!
//! assert_eq!(GameAction::from_str("zoomIn"), Some(GameAction::ZoomIn));
//! ```

/// World width in world units
pub const WORLD_WIDTH: i32 = 900;

/// World height in world units
pub const WORLD_HEIGHT: i32 = 700;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Splash screen duration before the main menu appears
pub const SPLASH_MS: u32 = 3000;

/// Time a task button must be worked on before the room counts as completed
pub const TASK_DURATION_MS: u32 = 1000;

/// Fan rotation speed (radians per second)
pub const FAN_SPEED: f32 = 3.0;

/// Default camera zoom.
///
/// The terminal presents two pixels per cell, so a 1:1 mapping already shows
/// a comfortable slice of the map.
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Lower zoom bound
pub const MIN_ZOOM: f32 = 0.5;

/// Upper zoom bound
pub const MAX_ZOOM: f32 = 5.0;

/// Multiplicative zoom step for zoom in/out
pub const ZOOM_STEP: f32 = 1.2;

/// Wall strip thickness in world units
pub const WALL_THICKNESS: i32 = 4;

/// Number of room tasks needed to win
pub const MAX_TASKS: usize = 5;

/// Player spawn position
pub const PLAYER_SPAWN: (i32, i32) = (395, 240);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_defaults_within_bounds() {
        assert!(MIN_ZOOM <= DEFAULT_ZOOM && DEFAULT_ZOOM <= MAX_ZOOM);
        assert!(ZOOM_STEP > 1.0);
    }

    #[test]
    fn spawn_is_inside_world() {
        assert!(PLAYER_SPAWN.0 >= 0 && PLAYER_SPAWN.0 < WORLD_WIDTH);
        assert!(PLAYER_SPAWN.1 >= 0 && PLAYER_SPAWN.1 < WORLD_HEIGHT);
    }

    #[test]
    fn rect_overlap_is_strict() {
        let a = Rect::new(0, 0, 10, 10);
        // Touching edges do not overlap.
        assert!(!a.intersects(&Rect::new(10, 0, 5, 5)));
        assert!(a.intersects(&Rect::new(9, 9, 5, 5)));
        // Empty rectangles never overlap anything.
        assert!(!a.intersects(&Rect::new(2, 2, 0, 5)));
    }

    #[test]
    fn rect_contains_point_is_inclusive() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains_point(10.0, 10.0));
        assert!(r.contains_point(15.0, 15.0));
        assert!(!r.contains_point(15.5, 12.0));
    }

    #[test]
    fn shadowed_darkens_and_clamps() {
        let c = Rgba::rgb(100, 200, 50);
        assert_eq!(c.shadowed(0.0), c);
        assert_eq!(c.shadowed(0.5), Rgba::rgb(80, 160, 40));
        // Out-of-range factors saturate instead of wrapping.
        assert_eq!(c.shadowed(10.0), Rgba::rgb(0, 0, 0));
    }
}

/// RGBA color.
///
/// Equality via `==` compares all four channels; fill algorithms use
/// [`Rgba::same_rgb`], which ignores alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgba {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const GRAY: Self = Self::rgb(160, 160, 160);
    pub const RED: Self = Self::rgb(200, 50, 50);
    pub const BLUE: Self = Self::rgb(50, 50, 200);
    pub const GREEN: Self = Self::rgb(50, 200, 50);
    pub const YELLOW: Self = Self::rgb(255, 220, 0);
    pub const DARK_GRAY: Self = Self::rgb(80, 80, 80);
    pub const DARK_YELLOW: Self = Self::rgb(180, 150, 0);
    pub const DARK_GREEN: Self = Self::rgb(20, 80, 20);
    pub const CHALK: Self = Self::rgb(240, 240, 230);
    pub const BROWN: Self = Self::rgb(139, 90, 43);
    pub const LIGHT_BROWN: Self = Self::rgb(181, 137, 87);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Component-wise comparison of the RGB channels only.
    #[inline]
    pub fn same_rgb(self, other: Rgba) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    /// Darken by `1 - factor * 0.4`; the result never underflows.
    pub fn shadowed(self, factor: f32) -> Self {
        const SHADOW_STRENGTH: f32 = 0.4;
        let f = (1.0 - factor * SHADOW_STRENGTH).clamp(0.0, 1.0);
        let scale = |c: u8| (c as f32 * f) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }
}

/// A point in world or screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in integer world units.
///
/// Negative width or height is allowed and describes an empty rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Center in floating point world units.
    pub fn center(&self) -> Point {
        Point::new(
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Inclusive point containment (edges count as inside).
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.x as f32 && x <= self.right() as f32 && y >= self.y as f32 && y <= self.bottom() as f32
    }

    /// Grow the rectangle by `margin` on every side.
    pub fn grow(&self, margin: i32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.w + 2 * margin,
            self.h + 2 * margin,
        )
    }
}

/// Game actions produced by input and consumed by the game state.
///
/// Menus and gameplay share the same action set; the current phase decides
/// what an action means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Menu selection up
    Up,
    /// Menu selection down
    Down,
    /// Confirm menu selection
    Confirm,
    /// Use a door or task button near the player
    Interact,
    /// Pause / resume / leave a sub-screen
    Back,
    /// Zoom the camera in
    ZoomIn,
    /// Zoom the camera out
    ZoomOut,
    /// Restore the default zoom
    ZoomReset,
    /// Leave the game
    Quit,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_rooms_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("interact"), Some(GameAction::Interact));
    /// assert_eq!(GameAction::from_str("ZOOMOUT"), Some(GameAction::ZoomOut));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(GameAction::Up),
            "down" => Some(GameAction::Down),
            "confirm" => Some(GameAction::Confirm),
            "interact" => Some(GameAction::Interact),
            "back" => Some(GameAction::Back),
            "zoomin" => Some(GameAction::ZoomIn),
            "zoomout" => Some(GameAction::ZoomOut),
            "zoomreset" => Some(GameAction::ZoomReset),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Up => "up",
            GameAction::Down => "down",
            GameAction::Confirm => "confirm",
            GameAction::Interact => "interact",
            GameAction::Back => "back",
            GameAction::ZoomIn => "zoomIn",
            GameAction::ZoomOut => "zoomOut",
            GameAction::ZoomReset => "zoomReset",
            GameAction::Quit => "quit",
        }
    }
}

/// Furniture footprint inside a room, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Furniture {
    Desk(Rect),
    Chair(Rect),
    RoundTable { cx: i32, cy: i32, radius: i32 },
}

/// Plain geometric description of a room, as sampled by the mini-map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRoom {
    pub bounds: Rect,
    pub door: Rect,
    /// Door is closed (or still animating) and blocks movement.
    pub door_blocking: bool,
    pub button: Rect,
    pub completed: bool,
    pub furniture: Vec<Furniture>,
}

/// Movement requested for one tick, derived from held keys.
///
/// `dx`/`dy` are -1, 0 or 1 per axis; the game state multiplies them by the
/// player's current speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveIntent {
    pub dx: i8,
    pub dy: i8,
    pub sprint: bool,
}

impl MoveIntent {
    pub const IDLE: Self = Self {
        dx: 0,
        dy: 0,
        sprint: false,
    };

    pub fn is_idle(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

//! Player body and axis-separated collision.

use crate::types::{Point, Rect, PLAYER_SPAWN};

pub const PLAYER_W: i32 = 20;
pub const PLAYER_H: i32 = 32;
/// World units per tick.
pub const BASE_SPEED: i32 = 8;
pub const SPRINT_SPEED: i32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    x: i32,
    y: i32,
    sprinting: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1)
    }
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            sprinting: false,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_W, PLAYER_H)
    }

    pub fn center(&self) -> Point {
        self.rect().center()
    }

    pub fn sprinting(&self) -> bool {
        self.sprinting
    }

    pub fn set_sprint(&mut self, sprint: bool) {
        self.sprinting = sprint;
    }

    pub fn speed(&self) -> i32 {
        if self.sprinting {
            SPRINT_SPEED
        } else {
            BASE_SPEED
        }
    }

    pub fn teleport(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Move by `(dx, dy)`, x first then y.
    ///
    /// After each axis step the first obstacle that overlaps the body pushes it
    /// back flush against that obstacle's near edge.
    pub fn move_and_collide(&mut self, dx: i32, dy: i32, obstacles: &[Rect]) {
        if dx != 0 {
            self.x += dx;
            if let Some(hit) = self.first_hit(obstacles) {
                self.x = if dx > 0 { hit.x - PLAYER_W } else { hit.right() };
            }
        }
        if dy != 0 {
            self.y += dy;
            if let Some(hit) = self.first_hit(obstacles) {
                self.y = if dy > 0 { hit.y - PLAYER_H } else { hit.bottom() };
            }
        }
    }

    fn first_hit(&self, obstacles: &[Rect]) -> Option<Rect> {
        let body = self.rect();
        obstacles.iter().find(|o| body.intersects(o)).copied()
    }
}

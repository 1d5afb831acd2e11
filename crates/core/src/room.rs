//! Rooms: bounds, an animated door, a task button and furniture.
//!
//! The door sits on whichever room edge its center is closest to. Doors
//! animate between closed (`progress = 0`) and open (`progress = 1`) and keep
//! blocking movement until they are almost fully open.

use tracing::debug;

use crate::types::{Furniture, MapRoom, Point, Rect};

/// Door animation speed in progress units per second.
pub const DOOR_SPEED: f32 = 2.0;
/// Progress at which an opening door stops blocking.
pub const DOOR_PASSABLE: f32 = 0.9;
/// How far around the door the player can reach it from.
pub const DOOR_REACH: i32 = 20;

pub const DESK_W: i32 = 40;
pub const DESK_H: i32 = 20;
pub const CHAIR_W: i32 = 12;
pub const CHAIR_H: i32 = 10;
pub const TABLE_RADIUS: i32 = 30;

/// Room edge that holds the door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorSide {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomKind {
    /// Four desks with chairs.
    Classroom,
    /// One round table.
    Meeting,
}

/// Nearest room edge to the door center.
///
/// Ties resolve in the order top, bottom, left, right. Doors close to a corner
/// may land on the neighbouring edge; that is accepted.
pub fn door_side(bounds: Rect, door: Rect) -> DoorSide {
    let c = door.center();
    let candidates = [
        ((c.y - bounds.y as f32).abs(), DoorSide::Top),
        ((c.y - bounds.bottom() as f32).abs(), DoorSide::Bottom),
        ((c.x - bounds.x as f32).abs(), DoorSide::Left),
        ((c.x - bounds.right() as f32).abs(), DoorSide::Right),
    ];

    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.0 < best.0 {
            best = *candidate;
        }
    }
    best.1
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    name: &'static str,
    bounds: Rect,
    door: Rect,
    button: Rect,
    kind: RoomKind,
    side: DoorSide,
    completed: bool,
    door_open: bool,
    door_progress: f32,
}

impl Room {
    pub fn new(name: &'static str, bounds: Rect, door: Rect, button: Rect, kind: RoomKind) -> Self {
        Self {
            name,
            bounds,
            door,
            button,
            kind,
            side: door_side(bounds, door),
            completed: false,
            door_open: false,
            door_progress: 0.0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn door(&self) -> Rect {
        self.door
    }

    pub fn button(&self) -> Rect {
        self.button
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn door_side(&self) -> DoorSide {
        self.side
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn complete(&mut self) {
        self.completed = true;
    }

    pub fn door_open(&self) -> bool {
        self.door_open
    }

    pub fn door_progress(&self) -> f32 {
        self.door_progress
    }

    /// Toggle the door target; the animation catches up in [`Room::update_door`].
    pub fn interact_door(&mut self) {
        self.door_open = !self.door_open;
        debug!(room = self.name, open = self.door_open, "door toggled");
    }

    /// Advance the door animation by `dt` seconds.
    pub fn update_door(&mut self, dt: f32) {
        if !(dt > 0.0) {
            return;
        }
        let step = DOOR_SPEED * dt;
        self.door_progress = if self.door_open {
            (self.door_progress + step).min(1.0)
        } else {
            (self.door_progress - step).max(0.0)
        };
    }

    pub fn is_door_blocking(&self) -> bool {
        self.door_progress < DOOR_PASSABLE
    }

    pub fn door_collision_rect(&self) -> Rect {
        self.door
    }

    pub fn door_interaction_rect(&self) -> Rect {
        self.door.grow(DOOR_REACH)
    }

    /// Ceiling fan position, near the top-right corner.
    pub fn fan_position(&self) -> Point {
        Point::new(
            (self.bounds.right() - 40) as f32,
            (self.bounds.y + 30) as f32,
        )
    }

    pub fn furniture(&self) -> Vec<Furniture> {
        let b = self.bounds;
        match self.kind {
            RoomKind::Meeting => vec![Furniture::RoundTable {
                cx: b.x + b.w / 2,
                cy: b.y + b.h / 2 + 10,
                radius: TABLE_RADIUS,
            }],
            RoomKind::Classroom => {
                let mut items = Vec::with_capacity(8);
                for row in 0..2 {
                    for col in 0..2 {
                        let mx = b.x + 30 + col * 80;
                        let my = b.y + 80 + row * 45;
                        items.push(Furniture::Desk(Rect::new(mx, my, DESK_W, DESK_H)));
                        items.push(Furniture::Chair(Rect::new(
                            mx + (DESK_W - CHAIR_W) / 2,
                            my + DESK_H + 5,
                            CHAIR_W,
                            CHAIR_H,
                        )));
                    }
                }
                items
            }
        }
    }

    pub fn map_room(&self) -> MapRoom {
        MapRoom {
            bounds: self.bounds,
            door: self.door,
            door_blocking: self.is_door_blocking(),
            button: self.button,
            completed: self.completed,
            furniture: self.furniture(),
        }
    }

    /// Back to the initial state: task pending, door closed.
    pub fn reset(&mut self) {
        self.completed = false;
        self.door_open = false;
        self.door_progress = 0.0;
    }
}

/// The office: four classrooms and the meeting room.
pub fn default_layout() -> Vec<Room> {
    vec![
        Room::new(
            "Math Programming",
            Rect::new(20, 20, 400, 180),
            Rect::new(180, 190, 50, 10),
            Rect::new(70, 35, 100, 30),
            RoomKind::Classroom,
        ),
        Room::new(
            "Complexity",
            Rect::new(480, 20, 400, 180),
            Rect::new(640, 190, 50, 10),
            Rect::new(550, 35, 100, 30),
            RoomKind::Classroom,
        ),
        Room::new(
            "Machine Learning",
            Rect::new(20, 300, 400, 180),
            Rect::new(180, 300, 50, 10),
            Rect::new(70, 315, 100, 30),
            RoomKind::Classroom,
        ),
        Room::new(
            "Linear Algebra",
            Rect::new(480, 300, 400, 180),
            Rect::new(580, 300, 50, 10),
            Rect::new(490, 315, 100, 30),
            RoomKind::Classroom,
        ),
        Room::new(
            "Meeting",
            Rect::new(250, 520, 400, 150),
            Rect::new(410, 520, 50, 10),
            Rect::new(300, 530, 80, 25),
            RoomKind::Meeting,
        ),
    ]
}

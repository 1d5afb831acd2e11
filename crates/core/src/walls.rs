//! Collision walls: four strips per room, with a gap on the door side.

use crate::room::{DoorSide, Room};
use crate::types::{Rect, WALL_THICKNESS};

/// Wall strips for every room, in room order.
pub fn build_walls(rooms: &[Room]) -> Vec<Rect> {
    let mut walls = Vec::with_capacity(rooms.len() * 5);
    for room in rooms {
        room_walls(room, &mut walls);
    }
    walls
}

fn room_walls(room: &Room, out: &mut Vec<Rect>) {
    let Rect { x, y, w, h } = room.bounds();
    let door = room.door();
    let side = room.door_side();
    let t = WALL_THICKNESS;

    // Horizontal edges: split around [door.x, door.right()).
    for (edge, edge_y) in [(DoorSide::Top, y), (DoorSide::Bottom, y + h - t)] {
        if side == edge {
            if door.x > x {
                out.push(Rect::new(x, edge_y, door.x - x, t));
            }
            if door.right() < x + w {
                out.push(Rect::new(door.right(), edge_y, x + w - door.right(), t));
            }
        } else {
            out.push(Rect::new(x, edge_y, w, t));
        }
    }

    // Vertical edges: split around [door.y, door.bottom()).
    for (edge, edge_x) in [(DoorSide::Left, x), (DoorSide::Right, x + w - t)] {
        if side == edge {
            if door.y > y {
                out.push(Rect::new(edge_x, y, t, door.y - y));
            }
            if door.bottom() < y + h {
                out.push(Rect::new(edge_x, door.bottom(), t, y + h - door.bottom()));
            }
        } else {
            out.push(Rect::new(edge_x, y, t, h));
        }
    }
}

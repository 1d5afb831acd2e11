//! Terminal input module (engine-facing).
//!
//! This module is independent of the renderer. It maps `crossterm` key events
//! into [`crate::types::GameAction`] and tracks held movement keys for
//! terminal environments (including terminals without key-release events).

pub mod handler;
pub mod map;

pub use pixel_rooms_types as types;

pub use handler::{Direction, MovementTracker};
pub use map::{any_key, handle_key_event, should_quit};

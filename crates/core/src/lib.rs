//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the office game: rooms with animated doors
//! and task buttons, the walls built from them, the player with collision,
//! menus, and the phase machine that ties them together. It has **zero
//! dependencies** on the rasterizer or the terminal; views read it and draw.
//!
//! # Module Structure
//!
//! - [`room`]: rooms, door side detection, door animation, furniture layout
//! - [`walls`]: collision strips with a gap on each door side
//! - [`player`]: player body, speed, axis-separated collision
//! - [`menu`]: menu selection with wrap-around
//! - [`game_state`]: phases, actions, ticks, tasks, victory
//! - [`rng`]: seeded LCG for per-frame effects
//!
//! # Game Rules
//!
//! - **Doors**: `Interact` near a door toggles it; doors animate at 2.0/s and
//!   block movement until 90% open
//! - **Tasks**: `Interact` on a room's button (or a click) runs a 1 s task
//! - **Victory**: completing all five rooms shows the congratulations screen
//!
//! # Example
//!
//! ```
//! use pixel_rooms_core::{GameState, Phase};
//! use pixel_rooms_types::{GameAction, MoveIntent};
//!
//! let mut game = GameState::new();
//! game.apply_action(GameAction::Confirm); // leave the splash screen
//! game.apply_action(GameAction::Confirm); // "Start Game"
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! let before = game.player().y();
//! game.tick(16, MoveIntent { dx: 0, dy: -1, sprint: false });
//! assert!(game.player().y() < before);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time. Player movement is applied once per tick.

pub mod game_state;
pub mod menu;
pub mod player;
pub mod rng;
pub mod room;
pub mod walls;

pub use pixel_rooms_types as types;

// Re-export commonly used types for convenience
pub use game_state::{ActionOutcome, GameState, Phase, Task, ZoomChange};
pub use menu::{Menu, MAIN_MENU, PAUSE_MENU};
pub use player::Player;
pub use rng::{scatter, SimpleRng, Speck};
pub use room::{default_layout, door_side, DoorSide, Room, RoomKind};
pub use walls::build_walls;

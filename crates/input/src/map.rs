//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Left/right movement keys have no discrete action; held movement is tracked
/// by [`crate::MovementTracker`]. Up/down double as menu navigation.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Menu navigation
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Confirm),
        KeyCode::Esc => Some(GameAction::Back),

        // Gameplay
        KeyCode::Char('e') | KeyCode::Char('E') => Some(GameAction::Interact),

        // Camera
        KeyCode::Char('+') | KeyCode::Char('=') => Some(GameAction::ZoomIn),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(GameAction::ZoomOut),
        KeyCode::Char('0') => Some(GameAction::ZoomReset),

        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameAction::Quit),

        _ => None,
    }
}

/// Action for screens that continue on any key (splash, controls, congrats).
pub fn any_key(key: KeyEvent) -> GameAction {
    handle_key_event(key).unwrap_or(GameAction::Confirm)
}

/// Check if key should quit the game immediately (Ctrl-C).
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

//! Held-movement tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a direction counts as held until its release arrives or until no press (or
//! auto-repeat) for it has been seen for `key_release_timeout_ms`. Terminals
//! that report releases switch the timeout off with
//! [`MovementTracker::with_release_events`].

use std::time::Instant;

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::MoveIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
            _ => None,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks which movement directions are held and whether sprint is engaged.
#[derive(Debug, Clone)]
pub struct MovementTracker {
    /// Last press time per direction; `None` when released.
    held: [Option<Instant>; 4],
    sprint: bool,
    key_release_timeout_ms: u32,
    /// The terminal reports releases, so held keys never time out.
    release_events: bool,
}

impl MovementTracker {
    pub fn new() -> Self {
        Self {
            held: [None; 4],
            sprint: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn with_release_events(mut self, release_events: bool) -> Self {
        self.release_events = release_events;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Record a press or auto-repeat. Returns `true` for movement keys.
    ///
    /// Shift, or an uppercase letter (shift on terminals that fold the
    /// modifier into the character), engages sprint.
    pub fn handle_key_press(&mut self, key: KeyEvent) -> bool {
        let Some(dir) = Direction::from_key(key.code) else {
            return false;
        };
        self.held[dir.slot()] = Some(Instant::now());
        self.sprint = key.modifiers.contains(KeyModifiers::SHIFT)
            || matches!(key.code, KeyCode::Char(c) if c.is_ascii_uppercase());
        true
    }

    pub fn handle_key_release(&mut self, key: KeyEvent) {
        if let Some(dir) = Direction::from_key(key.code) {
            self.held[dir.slot()] = None;
        }
        if self.held.iter().all(Option::is_none) {
            self.sprint = false;
        }
    }

    fn expire_stale(&mut self) {
        if self.release_events {
            return;
        }
        let timeout = self.key_release_timeout_ms as u128;
        for slot in &mut self.held {
            if slot.is_some_and(|t| t.elapsed().as_millis() > timeout) {
                *slot = None;
            }
        }
        if self.held.iter().all(Option::is_none) {
            self.sprint = false;
        }
    }

    /// Directions currently held, after auto-release.
    pub fn held(&mut self) -> ArrayVec<Direction, 4> {
        self.expire_stale();
        Direction::ALL
            .into_iter()
            .filter(|d| self.held[d.slot()].is_some())
            .collect()
    }

    /// Movement for the next tick. Opposite directions cancel out.
    pub fn intent(&mut self) -> MoveIntent {
        let mut intent = MoveIntent::IDLE;
        for dir in self.held() {
            match dir {
                Direction::Up => intent.dy -= 1,
                Direction::Down => intent.dy += 1,
                Direction::Left => intent.dx -= 1,
                Direction::Right => intent.dx += 1,
            }
        }
        intent.sprint = self.sprint && !intent.is_idle();
        intent
    }

    pub fn reset(&mut self) {
        self.held = [None; 4];
        self.sprint = false;
    }
}

impl Default for MovementTracker {
    fn default() -> Self {
        Self::new()
    }
}

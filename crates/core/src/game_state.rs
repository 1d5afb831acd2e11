//! Game state module - phases, rooms, player, tasks
//!
//! `GameState` owns everything the scene is drawn from except the camera. The
//! game loop owns the camera, so zoom requests come back to it as
//! [`ActionOutcome::Zoom`] and the follow target is exposed through
//! [`GameState::camera_target`].

use std::f32::consts::TAU;

use tracing::{debug, info};

use crate::menu::Menu;
use crate::player::Player;
use crate::room::{default_layout, Room};
use crate::walls::build_walls;
use crate::types::{
    GameAction, MapRoom, MoveIntent, Point, Rect, FAN_SPEED, MAX_TASKS, SPLASH_MS,
    TASK_DURATION_MS,
};

/// Top-level screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Splash,
    Menu,
    Controls,
    Playing,
    Paused,
    Congrats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomChange {
    In,
    Out,
    Reset,
}

/// What the caller has to do after an action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionOutcome {
    /// Not meaningful in the current phase.
    Ignored,
    /// State changed; nothing else to do.
    Handled,
    /// Apply a zoom change to the camera.
    Zoom(ZoomChange),
    /// Leave the game.
    Quit,
}

/// A task in progress at a room's button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Task {
    pub room: usize,
    /// 0.0 ..= 1.0
    pub progress: f32,
}

#[derive(Debug, Clone)]
pub struct GameState {
    phase: Phase,
    rooms: Vec<Room>,
    walls: Vec<Rect>,
    player: Player,
    main_menu: Menu,
    pause_menu: Menu,
    task: Option<Task>,
    fan_angle: f32,
    splash_elapsed_ms: u32,
    /// Ticks since start; seeds per-frame effects.
    frame: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        let rooms = default_layout();
        let walls = build_walls(&rooms);
        Self {
            phase: Phase::Splash,
            rooms,
            walls,
            player: Player::default(),
            main_menu: Menu::main(),
            pause_menu: Menu::pause(),
            task: None,
            fan_angle: 0.0,
            splash_elapsed_ms: 0,
            frame: 0,
        }
    }

    /// Jump straight into gameplay.
    pub fn start(&mut self) {
        self.set_phase(Phase::Playing);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn main_menu(&self) -> &Menu {
        &self.main_menu
    }

    pub fn pause_menu(&self) -> &Menu {
        &self.pause_menu
    }

    pub fn task(&self) -> Option<Task> {
        self.task
    }

    pub fn fan_angle(&self) -> f32 {
        self.fan_angle
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn completed_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.completed()).count()
    }

    pub fn map_rooms(&self) -> Vec<MapRoom> {
        self.rooms.iter().map(Room::map_room).collect()
    }

    /// World point the camera should focus on.
    pub fn camera_target(&self) -> Point {
        self.player.center()
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            info!(from = ?self.phase, to = ?phase, "phase changed");
            self.phase = phase;
        }
    }

    /// Back to the initial layout: tasks pending, doors closed, player at spawn.
    pub fn reset(&mut self) {
        for room in &mut self.rooms {
            room.reset();
        }
        self.player = Player::default();
        self.task = None;
    }

    pub fn apply_action(&mut self, action: GameAction) -> ActionOutcome {
        if action == GameAction::Quit {
            return ActionOutcome::Quit;
        }

        match self.phase {
            Phase::Splash | Phase::Controls => {
                self.set_phase(Phase::Menu);
                ActionOutcome::Handled
            }
            Phase::Congrats => {
                self.reset();
                self.main_menu.reset();
                self.set_phase(Phase::Menu);
                ActionOutcome::Handled
            }
            Phase::Menu => match action {
                GameAction::Up => {
                    self.main_menu.up();
                    ActionOutcome::Handled
                }
                GameAction::Down => {
                    self.main_menu.down();
                    ActionOutcome::Handled
                }
                GameAction::Confirm => self.confirm_main(),
                _ => ActionOutcome::Ignored,
            },
            Phase::Playing => match action {
                GameAction::Back => {
                    self.pause_menu.reset();
                    self.set_phase(Phase::Paused);
                    ActionOutcome::Handled
                }
                GameAction::Interact => {
                    if self.interact() {
                        ActionOutcome::Handled
                    } else {
                        ActionOutcome::Ignored
                    }
                }
                GameAction::ZoomIn => ActionOutcome::Zoom(ZoomChange::In),
                GameAction::ZoomOut => ActionOutcome::Zoom(ZoomChange::Out),
                GameAction::ZoomReset => ActionOutcome::Zoom(ZoomChange::Reset),
                _ => ActionOutcome::Ignored,
            },
            Phase::Paused => match action {
                GameAction::Back => {
                    self.set_phase(Phase::Playing);
                    ActionOutcome::Handled
                }
                GameAction::Up => {
                    self.pause_menu.up();
                    ActionOutcome::Handled
                }
                GameAction::Down => {
                    self.pause_menu.down();
                    ActionOutcome::Handled
                }
                GameAction::Confirm => self.confirm_pause(),
                _ => ActionOutcome::Ignored,
            },
        }
    }

    fn confirm_main(&mut self) -> ActionOutcome {
        match self.main_menu.selected() {
            0 => self.set_phase(Phase::Playing),
            1 => self.set_phase(Phase::Controls),
            _ => return ActionOutcome::Quit,
        }
        ActionOutcome::Handled
    }

    fn confirm_pause(&mut self) -> ActionOutcome {
        match self.pause_menu.selected() {
            0 => self.set_phase(Phase::Playing),
            1 => {
                self.reset();
                self.main_menu.reset();
                self.set_phase(Phase::Menu);
            }
            _ => return ActionOutcome::Quit,
        }
        ActionOutcome::Handled
    }

    /// Mouse hover over a menu option in the current phase.
    pub fn hover_option(&mut self, index: usize) -> bool {
        match self.phase {
            Phase::Menu => self.main_menu.select(index),
            Phase::Paused => self.pause_menu.select(index),
            _ => false,
        }
    }

    /// Mouse click on a menu option: select it and confirm.
    pub fn click_option(&mut self, index: usize) -> ActionOutcome {
        if !self.hover_option(index) {
            return ActionOutcome::Ignored;
        }
        match self.phase {
            Phase::Menu => self.confirm_main(),
            Phase::Paused => self.confirm_pause(),
            _ => ActionOutcome::Ignored,
        }
    }

    /// Advance the simulation by `elapsed_ms`.
    ///
    /// Fans spin in every phase. The splash screen times out on its own.
    /// Doors, movement and task progress only advance while playing.
    pub fn tick(&mut self, elapsed_ms: u32, movement: MoveIntent) {
        let dt = elapsed_ms as f32 / 1000.0;
        self.frame = self.frame.wrapping_add(1);
        self.fan_angle = (self.fan_angle + FAN_SPEED * dt).rem_euclid(TAU);

        match self.phase {
            Phase::Splash => {
                self.splash_elapsed_ms = self.splash_elapsed_ms.saturating_add(elapsed_ms);
                if self.splash_elapsed_ms > SPLASH_MS {
                    self.set_phase(Phase::Menu);
                }
            }
            Phase::Playing => self.tick_playing(elapsed_ms, dt, movement),
            _ => {}
        }
    }

    fn tick_playing(&mut self, elapsed_ms: u32, dt: f32, movement: MoveIntent) {
        for room in &mut self.rooms {
            room.update_door(dt);
        }

        self.player.set_sprint(movement.sprint);
        if !movement.is_idle() {
            let speed = self.player.speed();
            let obstacles = self.obstacles();
            self.player.move_and_collide(
                movement.dx as i32 * speed,
                movement.dy as i32 * speed,
                &obstacles,
            );
        }

        if let Some(mut task) = self.task {
            task.progress = (task.progress + elapsed_ms as f32 / TASK_DURATION_MS as f32).min(1.0);
            if task.progress >= 1.0 {
                self.finish_task(task.room);
            } else {
                self.task = Some(task);
            }
        }
    }

    /// Walls plus every door that is still blocking.
    pub fn obstacles(&self) -> Vec<Rect> {
        let mut out = self.walls.clone();
        out.extend(
            self.rooms
                .iter()
                .filter(|r| r.is_door_blocking())
                .map(Room::door_collision_rect),
        );
        out
    }

    fn start_task(&mut self, room: usize) {
        debug!(room = self.rooms[room].name(), "task started");
        self.task = Some(Task {
            room,
            progress: 0.0,
        });
    }

    fn finish_task(&mut self, room: usize) {
        self.task = None;
        if let Some(r) = self.rooms.get_mut(room) {
            r.complete();
            info!(room = r.name(), "task completed");
        }
        let done = self.completed_count();
        if done >= MAX_TASKS.min(self.rooms.len()) {
            info!(completed = done, "all tasks completed");
            self.set_phase(Phase::Congrats);
        }
    }

    /// Use whatever is within reach: a door first, otherwise the button of an
    /// unfinished room (when no task is running).
    pub fn interact(&mut self) -> bool {
        let body = self.player.rect();

        if let Some(room) = self
            .rooms
            .iter_mut()
            .find(|r| body.intersects(&r.door_interaction_rect()))
        {
            room.interact_door();
            return true;
        }

        if self.task.is_none() {
            if let Some(idx) = self
                .rooms
                .iter()
                .position(|r| !r.completed() && body.intersects(&r.button()))
            {
                self.start_task(idx);
                return true;
            }
        }
        false
    }

    /// Mouse click at a world position while playing: toggle a door or start
    /// a task. The first room whose door or button contains the point wins.
    pub fn click_world(&mut self, x: f32, y: f32) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        for idx in 0..self.rooms.len() {
            if self.rooms[idx].door_interaction_rect().contains_point(x, y) {
                self.rooms[idx].interact_door();
                return true;
            }
            if self.rooms[idx].button().contains_point(x, y) {
                if !self.rooms[idx].completed() && self.task.is_none() {
                    self.start_task(idx);
                    return true;
                }
                return false;
            }
        }
        false
    }
}

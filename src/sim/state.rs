//! Game state and core simulation types
//!
//! Everything a run needs lives in [`GameState`]; the session owns one per run.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, Direction, spawn_pos};
use super::occupancy::Occupancy;
use super::progression::Progression;
use super::spawn::{spawn_food, spawn_obstacles};
use crate::tuning::Tuning;

/// Elapsed-time counter advanced by the tick delta
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    elapsed: f32,
}

impl Timer {
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    /// Seconds since the last restart
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// True once strictly more than `limit` seconds have passed
    pub fn exceeded(&self, limit: f32) -> bool {
        self.elapsed > limit
    }
}

/// The player's snake (pixel positions, head first, always grid-aligned)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    pub segments: VecDeque<Vec2>,
    /// Direction that will be used by the next move
    pub direction: Direction,
    /// Direction of the last executed move (None right after a respawn)
    pub heading: Direction,
}

impl Snake {
    /// Single-segment snake at the spawn position, not moving
    pub fn spawn() -> Self {
        Self::at(spawn_pos())
    }

    pub fn at(pos: Vec2) -> Self {
        let mut segments = VecDeque::with_capacity(64);
        segments.push_back(pos);
        Self {
            segments,
            direction: Direction::None,
            heading: Direction::None,
        }
    }

    pub fn head(&self) -> Vec2 {
        // Length is never zero
        self.segments.front().copied().unwrap_or_else(spawn_pos)
    }

    pub fn head_cell(&self) -> Cell {
        Cell::from_pos(self.head())
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment cells, head first
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.segments.iter().map(|&p| Cell::from_pos(p))
    }

    /// Request a new direction. Reversals of the pending direction or of the
    /// last executed move are refused; returns whether the request was taken.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if dir == Direction::None {
            return false;
        }
        if dir == self.direction.opposite() || dir == self.heading.opposite() {
            return false;
        }
        self.direction = dir;
        true
    }
}

/// Time-limited bonus item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bonus {
    pub cell: Cell,
    pub active: bool,
    /// Time since the bonus last became inactive
    pub spawn_timer: Timer,
    /// Time since the bonus became active
    pub live_timer: Timer,
}

impl Default for Bonus {
    fn default() -> Self {
        Self {
            cell: Cell::new(0, 0),
            active: false,
            spawn_timer: Timer::default(),
            live_timer: Timer::default(),
        }
    }
}

impl Bonus {
    /// Active bonus cell, if any
    pub fn active_cell(&self) -> Option<Cell> {
        self.active.then_some(self.cell)
    }

    pub fn activate(&mut self, cell: Cell) {
        self.cell = cell;
        self.active = true;
        self.live_timer.restart();
    }

    /// Deactivate (eaten or expired) and restart the cooldown
    pub fn deactivate(&mut self) {
        self.active = false;
        self.spawn_timer.restart();
    }
}

/// Simulation outcomes, drained by the session after each update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    FoodEaten { cell: Cell },
    BonusSpawned { cell: Cell },
    BonusExpired,
    BonusEaten { cell: Cell },
    LevelUp { level: u32 },
    LifeLost { lives_left: u32 },
    GameOver { score: u32 },
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub snake: Snake,
    pub food: Cell,
    pub bonus: Bonus,
    pub obstacles: Vec<Cell>,
    pub progression: Progression,
    /// Time since the last move
    pub move_timer: Timer,
    /// Set once the last life is lost
    pub game_over: bool,
    /// Number of executed moves
    pub moves: u64,
    /// Outcomes since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start a run: fresh snake, progression, obstacles, food, bonus and timers
    pub fn new(seed: u64, starting_level: u32, tuning: Tuning) -> Self {
        let progression = Progression::new(starting_level, &tuning);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            snake: Snake::spawn(),
            food: Cell::new(0, 0),
            bonus: Bonus::default(),
            obstacles: Vec::new(),
            progression,
            move_timer: Timer::default(),
            game_over: false,
            moves: 0,
            events: Vec::new(),
        };

        let level = state.progression.level;
        spawn_obstacles(&mut state, level, None);
        spawn_food(&mut state, None);

        log::info!(
            "Run started at level {} (seed {}, {} obstacles)",
            level,
            seed,
            state.obstacles.len()
        );
        state
    }

    /// Occupancy oracle over the current layout
    pub fn occupancy(&self) -> Occupancy<'_> {
        Occupancy::new(&self.obstacles, &self.snake.segments, self.bonus.active_cell())
    }

    /// Shorthand for `occupancy().is_free(cell)`
    pub fn is_free(&self, cell: Cell) -> bool {
        self.occupancy().is_free(cell)
    }

    pub fn score(&self) -> u32 {
        self.progression.score
    }

    pub fn level(&self) -> u32 {
        self.progression.level
    }

    pub fn lives(&self) -> u32 {
        self.progression.lives
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

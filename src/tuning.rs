//! Game balance
//!
//! Every number that shapes difficulty lives here so it can be overridden
//! from the config file without touching simulation code.

use serde::{Deserialize, Serialize};

use crate::sim::grid::interior_count;

/// Balance constants for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Movement delay at level 1 (seconds between moves)
    pub base_move_delay: f32,
    /// Delay multiplier applied per level (must be in (0, 1))
    pub speedup_factor: f32,
    /// Lives at the start of a run
    pub initial_lives: u32,
    /// Points for a regular food item
    pub food_points: u32,
    /// Points for a bonus item
    pub bonus_points: u32,
    /// Score needed per level
    pub level_score_step: u32,
    /// Seconds between a bonus disappearing and the next one spawning
    pub bonus_spawn_interval: f32,
    /// Seconds a bonus stays on the board
    pub bonus_duration: f32,
    /// Obstacles added per level above the first
    pub obstacles_per_level: u32,
    /// Hard cap on obstacle count
    pub max_obstacles: u32,
    /// Rejection-sampling budget for one obstacle layout
    pub max_obstacle_attempts: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_move_delay: 0.20,
            speedup_factor: 0.9,
            initial_lives: 3,
            food_points: 10,
            bonus_points: 50,
            level_score_step: 100,
            bonus_spawn_interval: 15.0,
            bonus_duration: 5.0,
            obstacles_per_level: 2,
            max_obstacles: 40,
            max_obstacle_attempts: 10_000,
        }
    }
}

impl Tuning {
    /// Movement delay when a run starts at `level`
    pub fn move_delay_for_level(&self, level: u32) -> f32 {
        self.base_move_delay * self.speedup_factor.powi(level.saturating_sub(1) as i32)
    }

    /// Score needed to leave the starting `level`
    pub fn threshold_for_level(&self, level: u32) -> u32 {
        self.level_score_step.saturating_mul(level)
    }

    /// Obstacle count for a level
    pub fn obstacle_count(&self, level: u32) -> u32 {
        level
            .saturating_sub(1)
            .saturating_mul(self.obstacles_per_level)
            .min(self.max_obstacles)
    }

    /// Clamp values that would break simulation invariants
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.speedup_factor > 0.0 && self.speedup_factor < 1.0) {
            log::warn!(
                "speedup_factor {} out of range, using {}",
                self.speedup_factor,
                defaults.speedup_factor
            );
            self.speedup_factor = defaults.speedup_factor;
        }
        if !(self.base_move_delay > 0.0) {
            log::warn!("base_move_delay must be positive, using {}", defaults.base_move_delay);
            self.base_move_delay = defaults.base_move_delay;
        }
        if self.initial_lives == 0 {
            log::warn!("initial_lives must be at least 1");
            self.initial_lives = 1;
        }
        if self.level_score_step == 0 {
            self.level_score_step = defaults.level_score_step;
        }
        let room = interior_count() as u32;
        if self.max_obstacles > room {
            log::warn!("max_obstacles {} exceeds the arena, using {}", self.max_obstacles, room);
            self.max_obstacles = room;
        }
        self.obstacles_per_level = self.obstacles_per_level.min(room);
        self
    }
}

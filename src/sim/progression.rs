//! Score, level, lives and speed scaling

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Progress of the current run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub score: u32,
    pub level: u32,
    pub lives: u32,
    /// Seconds between moves
    pub move_delay: f32,
    /// Score that triggers the next level-up
    pub next_level_score: u32,
    /// Level the run was started at
    pub starting_level: u32,
}

impl Progression {
    /// Fresh progression for a run started at `starting_level`
    pub fn new(starting_level: u32, tuning: &Tuning) -> Self {
        let level = starting_level.max(1);
        Self {
            score: 0,
            level,
            lives: tuning.initial_lives,
            move_delay: tuning.move_delay_for_level(level),
            next_level_score: tuning.threshold_for_level(level),
            starting_level: level,
        }
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// True when the score has reached the next threshold
    pub fn level_up_due(&self) -> bool {
        self.score >= self.next_level_score
    }

    /// Advance one level; returns the new level
    pub fn level_up(&mut self, tuning: &Tuning) -> u32 {
        self.level = self.level.saturating_add(1);
        self.next_level_score = self.next_level_score.saturating_add(tuning.level_score_step);
        self.move_delay *= tuning.speedup_factor;
        self.level
    }

    /// Remove a life; returns true if any remain
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives > 0
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only through the tick delta
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod grid;
pub mod occupancy;
pub mod progression;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::choose_direction;
pub use grid::{Cell, Direction, interior_cells, spawn_cell, spawn_pos};
pub use occupancy::Occupancy;
pub use progression::Progression;
pub use spawn::{spawn_bonus, spawn_food, spawn_obstacles};
pub use state::{Bonus, GameEvent, GameState, Snake, Timer};
pub use tick::{StepOutcome, step, tick};

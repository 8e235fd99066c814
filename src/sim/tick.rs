//! Per-tick movement and collision resolution
//!
//! Core game loop that advances a run by a time delta.

use super::grid::{Cell, Direction};
use super::spawn::{spawn_bonus, spawn_food, spawn_obstacles};
use super::state::{GameEvent, GameState, Snake};

/// Result of one executed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Head advanced without dying
    Moved,
    /// Died with lives remaining; snake respawned at the center
    LifeLost,
    /// Last life lost
    GameOver,
}

/// Advance the run by `dt` seconds, moving the snake if its delay has passed.
///
/// Returns the outcome when a move was executed.
pub fn tick(state: &mut GameState, dt: f32) -> Option<StepOutcome> {
    if state.game_over {
        return None;
    }

    state.move_timer.advance(dt);
    state.bonus.spawn_timer.advance(dt);
    state.bonus.live_timer.advance(dt);

    if state.snake.direction == Direction::None {
        return None;
    }
    if !state.move_timer.exceeded(state.progression.move_delay) {
        return None;
    }
    state.move_timer.restart();

    Some(step(state))
}

/// Execute one move in the current direction, ignoring the delay timer.
///
/// Score and bonus bookkeeping happen before the death check, so points from
/// the fatal move still count.
pub fn step(state: &mut GameState) -> StepOutcome {
    let dir = state.snake.direction;
    let candidate = state.snake.head() + dir.offset();
    let cell = Cell::from_pos(candidate);
    let border_hit = cell.is_border();

    state.moves += 1;
    state.snake.heading = dir;

    // Food never sits on the border, so a border hit always takes this else
    // branch; the body is left whole so the final frame still shows it
    if cell == state.food {
        state.progression.add_points(state.tuning.food_points);
        state.events.push(GameEvent::FoodEaten { cell });
        spawn_food(state, Some(cell));
    } else if !border_hit {
        state.snake.segments.pop_back();
    }

    update_bonus(state, cell);

    if state.progression.level_up_due() {
        let level = state.progression.level_up(&state.tuning);
        spawn_obstacles(state, level, Some(cell));
        if !state.is_free(state.food) {
            spawn_food(state, Some(cell));
        }
        state.events.push(GameEvent::LevelUp { level });
        log::info!(
            "Level {} reached (delay {:.3}s, {} obstacles)",
            level,
            state.progression.move_delay,
            state.obstacles.len()
        );
    }

    if !border_hit {
        state.snake.segments.push_front(candidate);
    }

    let died = border_hit
        || state.obstacles.contains(&cell)
        || state.snake.segments.iter().skip(1).any(|&seg| seg == candidate);

    if !died {
        return StepOutcome::Moved;
    }

    let has_lives = state.progression.lose_life();
    state.events.push(GameEvent::LifeLost {
        lives_left: state.progression.lives,
    });

    if has_lives {
        log::info!("Life lost at {:?}, {} left", cell, state.progression.lives);
        state.snake = Snake::spawn();
        StepOutcome::LifeLost
    } else {
        log::info!("Game over with score {}", state.progression.score);
        state.game_over = true;
        state.events.push(GameEvent::GameOver {
            score: state.progression.score,
        });
        StepOutcome::GameOver
    }
}

/// Bonus spawn / expiry / consumption for a move into `cell`
fn update_bonus(state: &mut GameState, cell: Cell) {
    if !state.bonus.active && state.bonus.spawn_timer.exceeded(state.tuning.bonus_spawn_interval) {
        if let Some(bonus_cell) = spawn_bonus(state, Some(cell)) {
            state.events.push(GameEvent::BonusSpawned { cell: bonus_cell });
        }
    }

    if state.bonus.active && state.bonus.live_timer.exceeded(state.tuning.bonus_duration) {
        state.bonus.deactivate();
        state.events.push(GameEvent::BonusExpired);
    }

    if state.bonus.active && cell == state.bonus.cell {
        state.progression.add_points(state.tuning.bonus_points);
        state.bonus.deactivate();
        state.events.push(GameEvent::BonusEaten { cell });
    }
}

//! Idle/demo player
//!
//! Greedy steering toward the bonus (if active) or the food, refusing cells
//! that would be fatal on the next move. Used by the headless driver.

use super::grid::{Cell, Direction};
use super::state::GameState;

/// Pick a direction for the next move, or None to keep the current one
pub fn choose_direction(state: &GameState) -> Option<Direction> {
    let snake = &state.snake;
    let head = snake.head();
    let target = state.bonus.active_cell().unwrap_or(state.food);

    Direction::MOVES
        .into_iter()
        .filter(|&dir| dir != snake.direction.opposite() && dir != snake.heading.opposite())
        .filter_map(|dir| {
            let next = Cell::from_pos(head + dir.offset());
            is_safe(state, next).then(|| {
                let exits = Direction::MOVES
                    .iter()
                    .map(|d| Cell::from_pos(next.to_pos() + d.offset()))
                    .filter(|&c| is_safe(state, c))
                    .count();
                (dir, distance(next, target), exits)
            })
        })
        // Dead ends last, then closest to the target
        .min_by_key(|&(_, dist, exits)| (exits == 0, dist))
        .map(|(dir, _, _)| dir)
}

/// Whether moving into `cell` next would survive
fn is_safe(state: &GameState, cell: Cell) -> bool {
    if cell.is_border() || state.obstacles.contains(&cell) {
        return false;
    }
    // The tail moves away unless this move eats
    let body = state.snake.len();
    let keep = if cell == state.food { body } else { body.saturating_sub(1) };
    !state.snake.cells().take(keep).any(|c| c == cell)
}

fn distance(a: Cell, b: Cell) -> u32 {
    a.col.abs_diff(b.col) + a.row.abs_diff(b.row)
}

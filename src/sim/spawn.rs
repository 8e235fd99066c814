//! Procedural placement of food, obstacles and bonus items

use rand::Rng;
use rand::seq::IndexedRandom;

use super::grid::{Cell, interior_cells, interior_count, spawn_cell};
use super::occupancy::Occupancy;
use super::state::GameState;
use crate::consts::*;

/// Free interior cells under `occupancy`, minus `exclude`
pub fn free_cells(occupancy: &Occupancy<'_>, exclude: Option<Cell>) -> Vec<Cell> {
    interior_cells()
        .filter(|&c| occupancy.is_free(c) && Some(c) != exclude)
        .collect()
}

/// Pick a uniformly random free interior cell
pub fn pick_free_cell<R: Rng>(
    occupancy: &Occupancy<'_>,
    exclude: Option<Cell>,
    rng: &mut R,
) -> Option<Cell> {
    free_cells(occupancy, exclude).choose(rng).copied()
}

/// Place food on a random free interior cell.
///
/// `reserved` is the cell a move in flight is about to occupy. With no free
/// cell left the food falls back to [`FALLBACK_FOOD_CELL`].
pub fn spawn_food(state: &mut GameState, reserved: Option<Cell>) {
    let occupancy = Occupancy::new(
        &state.obstacles,
        &state.snake.segments,
        state.bonus.active_cell(),
    )
    .reserving(reserved);

    state.food = match pick_free_cell(&occupancy, None, &mut state.rng) {
        Some(cell) => cell,
        None => {
            log::warn!("No free cell for food, falling back to {:?}", FALLBACK_FOOD_CELL);
            Cell::from(FALLBACK_FOOD_CELL)
        }
    };
    log::debug!("Food at {:?}", state.food);
}

/// Regenerate the obstacle layout for `level` by rejection sampling.
///
/// Candidates on occupied cells or inside the spawn exclusion box are
/// rejected. Sampling stops after `max_obstacle_attempts` tries and keeps
/// whatever was placed so far.
pub fn spawn_obstacles(state: &mut GameState, level: u32, reserved: Option<Cell>) {
    let target = (state.tuning.obstacle_count(level) as usize).min(interior_count());
    let max_attempts = state.tuning.max_obstacle_attempts;
    let center = spawn_cell();

    let base = Occupancy::new(&[], &state.snake.segments, state.bonus.active_cell())
        .reserving(reserved);
    let mut placed: Vec<Cell> = Vec::with_capacity(target);
    let mut attempts = 0u32;

    while placed.len() < target {
        if attempts >= max_attempts {
            log::warn!(
                "Obstacle placement gave up after {} attempts ({}/{} placed)",
                attempts,
                placed.len(),
                target
            );
            break;
        }
        attempts += 1;

        let cell = Cell::new(
            state.rng.random_range(1..COLUMNS - 1),
            state.rng.random_range(1..ROWS - 1),
        );
        if !base.with_obstacles(&placed).is_free(cell) {
            continue;
        }
        if cell.in_exclusion_box(center) {
            continue;
        }
        placed.push(cell);
    }

    log::debug!("Level {}: {} obstacles in {} attempts", level, placed.len(), attempts);
    state.obstacles = placed;
}

/// Try to activate the bonus on a free cell other than the food.
///
/// Returns the chosen cell; with no candidate the bonus stays inactive.
pub fn spawn_bonus(state: &mut GameState, reserved: Option<Cell>) -> Option<Cell> {
    if state.bonus.active {
        return None;
    }
    let occupancy =
        Occupancy::new(&state.obstacles, &state.snake.segments, None).reserving(reserved);
    let cell = pick_free_cell(&occupancy, Some(state.food), &mut state.rng);

    match cell {
        Some(cell) => {
            state.bonus.activate(cell);
            log::debug!("Bonus at {:?}", cell);
        }
        None => log::warn!("No free cell for bonus"),
    }
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::spawn_pos;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    /// Fill every interior cell except `keep` with obstacles
    fn fill_all_but(state: &mut GameState, keep: &[Cell]) {
        state.obstacles = interior_cells()
            .filter(|c| !keep.contains(c) && Cell::from_pos(spawn_pos()) != *c)
            .collect();
    }

    #[test]
    fn test_food_avoids_occupied_cells() {
        let mut state = GameState::new(1, 1, Tuning::default());
        let only = Cell::new(3, 4);
        fill_all_but(&mut state, &[only]);
        spawn_food(&mut state, None);
        assert_eq!(state.food, only);
    }

    #[test]
    fn test_food_respects_reserved_cell() {
        let mut state = GameState::new(1, 1, Tuning::default());
        let a = Cell::new(3, 4);
        let b = Cell::new(30, 20);
        fill_all_but(&mut state, &[a, b]);
        for _ in 0..20 {
            spawn_food(&mut state, Some(a));
            assert_eq!(state.food, b);
        }
    }

    #[test]
    fn test_food_fallback_when_board_full() {
        let mut state = GameState::new(1, 1, Tuning::default());
        fill_all_but(&mut state, &[]);
        spawn_food(&mut state, None);
        assert_eq!(state.food, Cell::new(1, 1));
    }

    #[test]
    fn test_obstacles_bounded_when_exhausted() {
        let tuning = Tuning {
            max_obstacles: 2000,
            obstacles_per_level: 2000,
            max_obstacle_attempts: 5000,
            ..Default::default()
        };
        let mut state = GameState::new(3, 1, tuning);
        // More than the interior can hold outside the exclusion box
        spawn_obstacles(&mut state, 2, None);
        assert!(state.obstacles.len() < interior_count());
        let center = spawn_cell();
        assert!(state.obstacles.iter().all(|c| !c.in_exclusion_box(center)));
    }

    #[test]
    fn test_obstacles_never_duplicate() {
        let mut state = GameState::new(11, 1, Tuning::default());
        spawn_obstacles(&mut state, 21, None);
        let mut sorted = state.obstacles.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 40);
    }

    #[test]
    fn test_bonus_excludes_food() {
        let mut state = GameState::new(5, 1, Tuning::default());
        let a = Cell::new(3, 4);
        let b = Cell::new(30, 20);
        fill_all_but(&mut state, &[a, b]);
        state.food = a;
        assert_eq!(spawn_bonus(&mut state, None), Some(b));
        assert!(state.bonus.active);
        assert_eq!(state.bonus.cell, b);
    }

    #[test]
    fn test_bonus_stays_inactive_without_room() {
        let mut state = GameState::new(5, 1, Tuning::default());
        let a = Cell::new(3, 4);
        fill_all_but(&mut state, &[a]);
        state.food = a;
        assert_eq!(spawn_bonus(&mut state, None), None);
        assert!(!state.bonus.active);
    }

    #[test]
    fn test_bonus_not_respawned_while_active() {
        let mut state = GameState::new(5, 1, Tuning::default());
        let first = spawn_bonus(&mut state, None);
        assert!(first.is_some());
        assert_eq!(spawn_bonus(&mut state, None), None);
        assert_eq!(Some(state.bonus.cell), first);
    }

    proptest! {
        #[test]
        fn prop_obstacles_outside_exclusion_box(seed in any::<u64>(), level in 1u32..30) {
            let state = GameState::new(seed, level, Tuning::default());
            let center = spawn_cell();
            prop_assert_eq!(state.obstacles.len() as u32, Tuning::default().obstacle_count(level));
            for cell in &state.obstacles {
                prop_assert!(!cell.in_exclusion_box(center));
                prop_assert!(!cell.is_border());
            }
        }

        #[test]
        fn prop_food_on_free_interior_cell(seed in any::<u64>(), level in 1u32..30) {
            let state = GameState::new(seed, level, Tuning::default());
            prop_assert!(!state.food.is_border());
            prop_assert!(state.is_free(state.food));
        }
    }
}

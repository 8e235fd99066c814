//! Occupancy oracle
//!
//! Single answer to "is this cell free?" for the spawners and the mover.
//! Border and food are deliberately not considered; callers apply those rules.

use std::collections::VecDeque;

use glam::Vec2;

use super::grid::Cell;

/// Borrowed view of everything that can occupy a cell
#[derive(Debug, Clone, Copy)]
pub struct Occupancy<'a> {
    obstacles: &'a [Cell],
    snake: &'a VecDeque<Vec2>,
    bonus: Option<Cell>,
    /// Cell claimed by a move that has not been committed yet
    reserved: Option<Cell>,
}

impl<'a> Occupancy<'a> {
    pub fn new(obstacles: &'a [Cell], snake: &'a VecDeque<Vec2>, bonus: Option<Cell>) -> Self {
        Self {
            obstacles,
            snake,
            bonus,
            reserved: None,
        }
    }

    /// Same view, additionally treating `cell` as taken
    pub fn reserving(self, cell: Option<Cell>) -> Self {
        Self {
            reserved: cell,
            ..self
        }
    }

    /// Same view over a different obstacle set (used while one is being built)
    pub fn with_obstacles<'b>(&self, obstacles: &'b [Cell]) -> Occupancy<'b>
    where
        'a: 'b,
    {
        Occupancy {
            obstacles,
            snake: self.snake,
            bonus: self.bonus,
            reserved: self.reserved,
        }
    }

    pub fn is_free(&self, cell: Cell) -> bool {
        if self.obstacles.contains(&cell) {
            return false;
        }
        if self.snake.iter().any(|&seg| Cell::from_pos(seg) == cell) {
            return false;
        }
        if self.bonus == Some(cell) || self.reserved == Some(cell) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_at(cells: &[Cell]) -> VecDeque<Vec2> {
        cells.iter().map(|c| c.to_pos()).collect()
    }

    #[test]
    fn test_obstacle_snake_and_bonus_block() {
        let obstacles = [Cell::new(3, 3)];
        let snake = snake_at(&[Cell::new(10, 10), Cell::new(9, 10)]);
        let occ = Occupancy::new(&obstacles, &snake, Some(Cell::new(5, 5)));

        assert!(!occ.is_free(Cell::new(3, 3)));
        assert!(!occ.is_free(Cell::new(10, 10)));
        assert!(!occ.is_free(Cell::new(9, 10)));
        assert!(!occ.is_free(Cell::new(5, 5)));
        assert!(occ.is_free(Cell::new(4, 4)));
    }

    #[test]
    fn test_border_is_not_checked() {
        let snake = snake_at(&[Cell::new(10, 10)]);
        let occ = Occupancy::new(&[], &snake, None);
        assert!(occ.is_free(Cell::new(0, 0)));
    }

    #[test]
    fn test_reserved_cell() {
        let snake = snake_at(&[Cell::new(10, 10)]);
        let occ = Occupancy::new(&[], &snake, None).reserving(Some(Cell::new(11, 10)));
        assert!(!occ.is_free(Cell::new(11, 10)));
        assert!(occ.is_free(Cell::new(12, 10)));
    }

    #[test]
    fn test_with_obstacles_swaps_only_obstacles() {
        let snake = snake_at(&[Cell::new(10, 10)]);
        let old = [Cell::new(2, 2)];
        let occ = Occupancy::new(&old, &snake, None);
        let building = vec![Cell::new(7, 7)];
        let view = occ.with_obstacles(&building);
        assert!(view.is_free(Cell::new(2, 2)));
        assert!(!view.is_free(Cell::new(7, 7)));
        assert!(!view.is_free(Cell::new(10, 10)));
    }
}

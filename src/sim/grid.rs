//! Grid model
//!
//! Maps pixel positions to cells and back. The outermost ring of cells is the
//! arena border.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One grid unit of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Cell containing a pixel position (integer division by the cell size)
    pub fn from_pos(pos: Vec2) -> Self {
        // Negative coordinates saturate to 0, which is border anyway
        Self {
            col: (pos.x / CELL_SIZE) as u32,
            row: (pos.y / CELL_SIZE) as u32,
        }
    }

    /// Top-left pixel position of this cell
    pub fn to_pos(self) -> Vec2 {
        Vec2::new(self.col as f32 * CELL_SIZE, self.row as f32 * CELL_SIZE)
    }

    /// Whether this cell lies on the impassable outer ring
    pub fn is_border(self) -> bool {
        self.col == 0 || self.col == COLUMNS - 1 || self.row == 0 || self.row == ROWS - 1
    }

    /// Whether this cell lies inside the obstacle exclusion box around `center`
    pub fn in_exclusion_box(self, center: Cell) -> bool {
        self.col.abs_diff(center.col) < EXCLUSION_RADIUS
            && self.row.abs_diff(center.row) < EXCLUSION_RADIUS
    }
}

impl From<(u32, u32)> for Cell {
    fn from((col, row): (u32, u32)) -> Self {
        Self { col, row }
    }
}

/// Movement direction of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The direction that would reverse this one (None has no opposite)
    pub fn opposite(self) -> Direction {
        match self {
            Direction::None => Direction::None,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Pixel offset of a one-cell step
    pub fn offset(self) -> Vec2 {
        match self {
            Direction::None => Vec2::ZERO,
            Direction::Up => Vec2::new(0.0, -CELL_SIZE),
            Direction::Down => Vec2::new(0.0, CELL_SIZE),
            Direction::Left => Vec2::new(-CELL_SIZE, 0.0),
            Direction::Right => Vec2::new(CELL_SIZE, 0.0),
        }
    }

    /// All moving directions, in a fixed order
    pub const MOVES: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Cell where the snake spawns (arena center)
pub fn spawn_cell() -> Cell {
    Cell::new(COLUMNS / 2, ROWS / 2)
}

/// Pixel position of the snake spawn
pub fn spawn_pos() -> Vec2 {
    Vec2::new(WINDOW_WIDTH as f32 / 2.0, WINDOW_HEIGHT as f32 / 2.0)
}

/// Every non-border cell, row-major
pub fn interior_cells() -> impl Iterator<Item = Cell> {
    (1..ROWS - 1).flat_map(|row| (1..COLUMNS - 1).map(move |col| Cell::new(col, row)))
}

/// Number of non-border cells
pub const fn interior_count() -> usize {
    ((COLUMNS - 2) * (ROWS - 2)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_cell_roundtrip_is_aligned() {
        let cell = Cell::new(7, 12);
        let pos = cell.to_pos();
        assert_eq!(pos, Vec2::new(140.0, 240.0));
        assert_eq!(Cell::from_pos(pos), cell);
        // Anywhere inside the cell maps back to it
        assert_eq!(Cell::from_pos(pos + Vec2::splat(19.5)), cell);
    }

    #[test]
    fn test_border_ring() {
        assert!(Cell::new(0, 5).is_border());
        assert!(Cell::new(COLUMNS - 1, 5).is_border());
        assert!(Cell::new(5, 0).is_border());
        assert!(Cell::new(5, ROWS - 1).is_border());
        assert!(!Cell::new(1, 1).is_border());
        assert!(!Cell::new(COLUMNS - 2, ROWS - 2).is_border());
    }

    #[test]
    fn test_spawn_matches_center_pixel() {
        assert_eq!(Cell::from_pos(spawn_pos()), spawn_cell());
        assert_eq!(spawn_cell(), Cell::new(20, 15));
    }

    #[test]
    fn test_interior_cells_exclude_border() {
        let cells: Vec<Cell> = interior_cells().collect();
        assert_eq!(cells.len(), interior_count());
        assert!(cells.iter().all(|c| !c.is_border()));
        assert_eq!(cells.first(), Some(&Cell::new(1, 1)));
    }

    #[test]
    fn test_exclusion_box_bounds() {
        let center = spawn_cell();
        assert!(Cell::new(center.col + 4, center.row - 4).in_exclusion_box(center));
        assert!(!Cell::new(center.col + 5, center.row).in_exclusion_box(center));
        assert!(!Cell::new(center.col, center.row - 5).in_exclusion_box(center));
    }

    #[test]
    fn test_direction_opposites() {
        for dir in Direction::MOVES {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.offset() + dir.opposite().offset(), Vec2::ZERO);
        }
        assert_eq!(Direction::None.opposite(), Direction::None);
    }
}

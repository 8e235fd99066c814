//! Per-frame presentation snapshot
//!
//! Everything a drawing backend needs to show one frame, detached from the
//! simulation. Backends implement [`Renderer`]; the crate ships a text one for
//! the headless driver and logs.

use std::fmt::Write as _;

use serde::Serialize;

use crate::consts::{COLUMNS, ROWS};
use crate::session::SessionState;
use crate::sim::{Cell, GameState};

/// Read-only view of one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub session: SessionState,
    /// Snake cells, head first; empty when no run exists
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    /// Bonus cell, only while active
    pub bonus: Option<Cell>,
    pub obstacles: Vec<Cell>,
    pub score: u32,
    pub level: u32,
    pub lives: u32,
    pub high_score: u32,
}

impl Snapshot {
    pub fn capture(session: SessionState, game: Option<&GameState>, high_score: u32) -> Self {
        match game {
            Some(game) => Self {
                session,
                snake: game.snake.cells().collect(),
                food: Some(game.food),
                bonus: game.bonus.active_cell(),
                obstacles: game.obstacles.clone(),
                score: game.score(),
                level: game.level(),
                lives: game.lives(),
                high_score,
            },
            None => Self {
                session,
                snake: Vec::new(),
                food: None,
                bonus: None,
                obstacles: Vec::new(),
                score: 0,
                level: 0,
                lives: 0,
                high_score,
            },
        }
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }
}

/// A drawing backend
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);
}

/// Character-grid renderer
///
/// `#` border, `X` obstacle, `@` head, `o` body, `*` food, `$` bonus.
#[derive(Debug, Default)]
pub struct TextRenderer {
    frame: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered frame
    pub fn frame(&self) -> &str {
        &self.frame
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        let mut grid = vec![vec![' '; COLUMNS as usize]; ROWS as usize];

        for row in 0..ROWS {
            for col in 0..COLUMNS {
                if Cell::new(col, row).is_border() {
                    grid[row as usize][col as usize] = '#';
                }
            }
        }

        let mut put = |cell: Cell, ch: char| {
            if let Some(slot) = grid
                .get_mut(cell.row as usize)
                .and_then(|r| r.get_mut(cell.col as usize))
            {
                *slot = ch;
            }
        };

        for &cell in &snapshot.obstacles {
            put(cell, 'X');
        }
        if let Some(cell) = snapshot.food {
            put(cell, '*');
        }
        if let Some(cell) = snapshot.bonus {
            put(cell, '$');
        }
        for (i, &cell) in snapshot.snake.iter().enumerate().rev() {
            put(cell, if i == 0 { '@' } else { 'o' });
        }

        self.frame.clear();
        // Writing to a String cannot fail
        let _ = writeln!(
            self.frame,
            "{:?}  score {}  level {}  lives {}  high {}",
            snapshot.session, snapshot.score, snapshot.level, snapshot.lives, snapshot.high_score
        );
        for row in grid {
            self.frame.extend(row);
            self.frame.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn_cell;
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_without_run() {
        let snap = Snapshot::capture(SessionState::MainMenu, None, 70);
        assert!(snap.snake.is_empty());
        assert_eq!(snap.head(), None);
        assert_eq!(snap.food, None);
        assert_eq!(snap.high_score, 70);
    }

    #[test]
    fn test_capture_run() {
        let mut game = GameState::new(5, 3, Tuning::default());
        game.bonus.activate(Cell::new(3, 3));
        let snap = Snapshot::capture(SessionState::Playing, Some(&game), 0);
        assert_eq!(snap.head(), Some(spawn_cell()));
        assert_eq!(snap.food, Some(game.food));
        assert_eq!(snap.bonus, Some(Cell::new(3, 3)));
        assert_eq!(snap.obstacles.len(), 4);
        assert_eq!(snap.level, 3);
        assert_eq!(snap.lives, 3);
    }

    #[test]
    fn test_inactive_bonus_hidden() {
        let mut game = GameState::new(5, 1, Tuning::default());
        game.bonus.cell = Cell::new(3, 3);
        let snap = Snapshot::capture(SessionState::Playing, Some(&game), 0);
        assert_eq!(snap.bonus, None);
    }

    #[test]
    fn test_text_frame() {
        let mut game = GameState::new(5, 1, Tuning::default());
        game.food = Cell::new(2, 2);
        let snap = Snapshot::capture(SessionState::Paused, Some(&game), 10);

        let mut renderer = TextRenderer::new();
        renderer.render(&snap);
        let lines: Vec<&str> = renderer.frame().lines().collect();

        assert!(lines[0].starts_with("Paused"));
        assert_eq!(lines.len(), 1 + ROWS as usize);
        assert!(lines[1].chars().all(|c| c == '#'));
        assert_eq!(lines[1 + 2].chars().nth(2), Some('*'));
        let head = spawn_cell();
        assert_eq!(
            lines[1 + head.row as usize].chars().nth(head.col as usize),
            Some('@')
        );
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = Snapshot::capture(SessionState::GameOver, None, 30);
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"session\":\"GameOver\""));
        assert!(json.contains("\"high_score\":30"));
    }
}

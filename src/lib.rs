//! Snake Arena - a bordered-grid snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, spawning, movement, progression)
//! - `session`: Menu/play/pause/game-over state machine
//! - `render`: Read-only snapshot handed to the renderer each frame
//! - `audio`: Sound cue boundary
//! - `platform`: Key/pointer mapping, frame clock, asset checks
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod highscores;
pub mod platform;
pub mod render;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use highscores::HighScores;
pub use session::{Input, Session, SessionState, UiRegion};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Window dimensions in pixels
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;

    /// Edge length of one grid cell in pixels
    pub const CELL_SIZE: f32 = 20.0;

    /// Playfield size in cells (outermost ring is the border)
    pub const COLUMNS: u32 = WINDOW_WIDTH / CELL_SIZE as u32;
    pub const ROWS: u32 = WINDOW_HEIGHT / CELL_SIZE as u32;

    /// Half-extent of the obstacle-free box around the spawn cell
    pub const EXCLUSION_RADIUS: u32 = 5;

    /// Cell used for food when no free interior cell is left
    pub const FALLBACK_FOOD_CELL: (u32, u32) = (1, 1);

    /// Number of level buttons on the level select screen
    pub const SELECTABLE_LEVELS: u32 = 5;

    /// Nominal frame rate of the headless driver
    pub const FRAME_RATE: u32 = 60;
}

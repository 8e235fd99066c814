//! Top-level game flow
//!
//! Menu, level select, play, pause and game over, driven by abstract input
//! events. Every legal move between states is listed in [`transition`];
//! anything not in that table is ignored.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::audio::SoundEffect;
use crate::consts::SELECTABLE_LEVELS;
use crate::highscores::HighScores;
use crate::render::Snapshot;
use crate::sim::{Direction, GameEvent, GameState, tick};
use crate::tuning::Tuning;

/// Active top-level mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    MainMenu,
    LevelSelect,
    Playing,
    Paused,
    GameOver,
}

/// Named pointer targets; their hit areas belong to the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiRegion {
    Play,
    Exit,
    /// Level button (1-based)
    Level(u32),
    Back,
    Retry,
    MainMenu,
    GameOverExit,
}

/// Input events, processed in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Steer(Direction),
    PauseToggle,
    /// Leave a paused run for the main menu
    MenuReturn,
    Click(UiRegion),
}

/// What an accepted input does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Goto(SessionState),
    /// Reset the run at this starting level and play
    StartRun(u32),
    /// Reset the run at the previous starting level and play
    Retry,
    Steer(Direction),
    /// Commit the score, drop the run, back to the main menu
    AbandonRun,
    /// Leave the game
    Exit,
}

/// The transition table
pub fn transition(state: SessionState, input: Input) -> Option<Action> {
    use SessionState::*;

    let action = match (state, input) {
        (MainMenu, Input::Click(UiRegion::Play)) => Action::Goto(LevelSelect),
        (MainMenu, Input::Click(UiRegion::Exit)) => Action::Exit,

        (LevelSelect, Input::Click(UiRegion::Level(n))) if (1..=SELECTABLE_LEVELS).contains(&n) => {
            Action::StartRun(n)
        }
        (LevelSelect, Input::Click(UiRegion::Back)) => Action::Goto(MainMenu),

        (Playing, Input::PauseToggle) => Action::Goto(Paused),
        (Playing | Paused, Input::Steer(dir)) => Action::Steer(dir),

        (Paused, Input::PauseToggle) => Action::Goto(Playing),
        (Paused, Input::MenuReturn) => Action::AbandonRun,

        (GameOver, Input::Click(UiRegion::Retry)) => Action::Retry,
        (GameOver, Input::Click(UiRegion::MainMenu)) => Action::Goto(MainMenu),
        (GameOver, Input::Click(UiRegion::GameOverExit)) => Action::Exit,

        _ => return None,
    };
    Some(action)
}

/// One process-lifetime game session
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    game: Option<GameState>,
    high_scores: HighScores,
    starting_level: u32,
    tuning: Tuning,
    /// Source of per-run seeds
    rng: Pcg32,
    sounds: Vec<SoundEffect>,
    exit_requested: bool,
}

impl Session {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: SessionState::MainMenu,
            game: None,
            high_scores: HighScores::new(),
            starting_level: 1,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            sounds: Vec::new(),
            exit_requested: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current run (present in Playing, Paused and GameOver)
    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut GameState> {
        self.game.as_mut()
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Remembered high score
    pub fn high_score(&self) -> u32 {
        self.high_scores.best()
    }

    pub fn starting_level(&self) -> u32 {
        self.starting_level
    }

    /// False once an Exit region was activated
    pub fn is_running(&self) -> bool {
        !self.exit_requested
    }

    /// Apply one input event
    pub fn handle_input(&mut self, input: Input) {
        let Some(action) = transition(self.state, input) else {
            log::trace!("Ignoring {:?} in {:?}", input, self.state);
            return;
        };

        match action {
            Action::Goto(next) => {
                if next == SessionState::MainMenu {
                    self.game = None;
                }
                self.state = next;
            }
            Action::StartRun(level) => {
                self.starting_level = level;
                self.start_run();
            }
            Action::Retry => self.start_run(),
            Action::Steer(dir) => {
                if let Some(game) = self.game.as_mut() {
                    game.snake.steer(dir);
                }
            }
            Action::AbandonRun => {
                if let Some(game) = self.game.take() {
                    self.high_scores.add_score(game.score(), game.level());
                }
                self.state = SessionState::MainMenu;
            }
            Action::Exit => {
                log::info!("Exit requested");
                self.exit_requested = true;
            }
        }
    }

    /// Advance the simulation by `dt` seconds (only while Playing)
    pub fn update(&mut self, dt: f32) {
        if self.state != SessionState::Playing {
            return;
        }
        let Some(game) = self.game.as_mut() else {
            return;
        };

        tick(game, dt);

        for event in game.drain_events() {
            if let Some(effect) = SoundEffect::for_event(&event) {
                self.sounds.push(effect);
            }
            if let GameEvent::GameOver { score } = event {
                self.high_scores.add_score(score, game.level());
                self.state = SessionState::GameOver;
            }
        }
    }

    /// One frame: inputs in order, then the simulation step, then a snapshot
    pub fn frame<I>(&mut self, inputs: I, dt: f32) -> Snapshot
    where
        I: IntoIterator<Item = Input>,
    {
        for input in inputs {
            self.handle_input(input);
        }
        self.update(dt);
        self.snapshot()
    }

    /// Cues requested since the last drain
    pub fn drain_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.sounds)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.state, self.game.as_ref(), self.high_score())
    }

    fn start_run(&mut self) {
        let seed = self.rng.random::<u64>();
        self.game = Some(GameState::new(seed, self.starting_level, self.tuning.clone()));
        self.state = SessionState::Playing;
    }
}

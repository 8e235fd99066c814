//! Keyboard and pointer mapping
//!
//! Keys are matched by their logical name (`"ArrowUp"`, `"w"`, ...). Pointer
//! positions are window pixels, hit-tested against the buttons shown in the
//! current session state.

use glam::Vec2;

use crate::consts::{SELECTABLE_LEVELS, WINDOW_WIDTH};
use crate::session::{Input, SessionState, UiRegion};
use crate::sim::Direction;

/// Axis-aligned button area, half-open on the right and bottom edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rect of width `w` centered horizontally in the window
    fn centered(y: f32, w: f32, h: f32) -> Self {
        Self::new(WINDOW_WIDTH as f32 / 2.0 - w / 2.0, y, w, h)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.pos + self.size;
        point.x >= self.pos.x && point.x < max.x && point.y >= self.pos.y && point.y < max.y
    }
}

/// Map a key name to an input event
pub fn map_key(key: &str) -> Option<Input> {
    let input = match key {
        "ArrowUp" | "w" | "W" => Input::Steer(Direction::Up),
        "ArrowDown" | "s" | "S" => Input::Steer(Direction::Down),
        "ArrowLeft" | "a" | "A" => Input::Steer(Direction::Left),
        "ArrowRight" | "d" | "D" => Input::Steer(Direction::Right),
        "p" | "P" => Input::PauseToggle,
        "m" | "M" => Input::MenuReturn,
        _ => return None,
    };
    Some(input)
}

/// Buttons visible in `state`
pub fn regions(state: SessionState) -> Vec<(UiRegion, Rect)> {
    match state {
        SessionState::MainMenu => vec![
            (UiRegion::Play, Rect::centered(200.0, 200.0, 50.0)),
            (UiRegion::Exit, Rect::centered(270.0, 200.0, 50.0)),
        ],
        SessionState::LevelSelect => {
            let mut buttons: Vec<_> = (1..=SELECTABLE_LEVELS)
                .map(|n| {
                    let x = 150.0 + (n - 1) as f32 * 110.0;
                    (UiRegion::Level(n), Rect::new(x, 200.0, 100.0, 40.0))
                })
                .collect();
            buttons.push((UiRegion::Back, Rect::centered(300.0, 100.0, 40.0)));
            buttons
        }
        SessionState::GameOver => vec![
            (UiRegion::Retry, Rect::centered(280.0, 200.0, 50.0)),
            (UiRegion::MainMenu, Rect::centered(350.0, 200.0, 50.0)),
            (UiRegion::GameOverExit, Rect::centered(420.0, 200.0, 50.0)),
        ],
        SessionState::Playing | SessionState::Paused => Vec::new(),
    }
}

/// Button under `point` in `state`, if any
pub fn hit_test(state: SessionState, point: Vec2) -> Option<UiRegion> {
    regions(state)
        .into_iter()
        .find(|(_, rect)| rect.contains(point))
        .map(|(region, _)| region)
}

/// Input event for a pointer press at `point`
pub fn pointer_input(state: SessionState, point: Vec2) -> Option<Input> {
    hit_test(state, point).map(Input::Click)
}

/// Center of `region`'s button in `state`
pub fn region_center(state: SessionState, region: UiRegion) -> Option<Vec2> {
    regions(state)
        .into_iter()
        .find(|(r, _)| *r == region)
        .map(|(_, rect)| rect.pos + rect.size / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key("ArrowUp"), Some(Input::Steer(Direction::Up)));
        assert_eq!(map_key("W"), Some(Input::Steer(Direction::Up)));
        assert_eq!(map_key("s"), Some(Input::Steer(Direction::Down)));
        assert_eq!(map_key("a"), Some(Input::Steer(Direction::Left)));
        assert_eq!(map_key("ArrowRight"), Some(Input::Steer(Direction::Right)));
        assert_eq!(map_key("P"), Some(Input::PauseToggle));
        assert_eq!(map_key("m"), Some(Input::MenuReturn));
        assert_eq!(map_key("Escape"), None);
    }

    #[test]
    fn test_main_menu_buttons() {
        let state = SessionState::MainMenu;
        assert_eq!(hit_test(state, Vec2::new(300.0, 200.0)), Some(UiRegion::Play));
        assert_eq!(hit_test(state, Vec2::new(499.0, 249.0)), Some(UiRegion::Play));
        assert_eq!(hit_test(state, Vec2::new(500.0, 220.0)), None);
        assert_eq!(hit_test(state, Vec2::new(400.0, 260.0)), None);
        assert_eq!(hit_test(state, Vec2::new(400.0, 290.0)), Some(UiRegion::Exit));
    }

    #[test]
    fn test_level_buttons() {
        let state = SessionState::LevelSelect;
        assert_eq!(hit_test(state, Vec2::new(160.0, 210.0)), Some(UiRegion::Level(1)));
        assert_eq!(hit_test(state, Vec2::new(255.0, 210.0)), None);
        assert_eq!(hit_test(state, Vec2::new(600.0, 239.0)), Some(UiRegion::Level(5)));
        assert_eq!(hit_test(state, Vec2::new(400.0, 320.0)), Some(UiRegion::Back));
    }

    #[test]
    fn test_game_over_buttons() {
        let state = SessionState::GameOver;
        assert_eq!(
            pointer_input(state, Vec2::new(400.0, 300.0)),
            Some(Input::Click(UiRegion::Retry))
        );
        assert_eq!(hit_test(state, Vec2::new(400.0, 375.0)), Some(UiRegion::MainMenu));
        assert_eq!(hit_test(state, Vec2::new(400.0, 445.0)), Some(UiRegion::GameOverExit));
    }

    #[test]
    fn test_no_buttons_while_playing() {
        assert_eq!(hit_test(SessionState::Playing, Vec2::new(400.0, 300.0)), None);
        assert_eq!(pointer_input(SessionState::Paused, Vec2::new(400.0, 220.0)), None);
    }

    #[test]
    fn test_region_centers_hit_their_region() {
        for state in [
            SessionState::MainMenu,
            SessionState::LevelSelect,
            SessionState::GameOver,
        ] {
            for (region, _) in regions(state) {
                let center = region_center(state, region).unwrap();
                assert_eq!(hit_test(state, center), Some(region));
            }
        }
    }
}

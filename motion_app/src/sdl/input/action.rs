use std::str::FromStr;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use motion_lib::Direction;

/// What a bound key does
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Move(Direction),
    /// Start the stopwatch, or stop it if it's running
    ToggleStopwatch,
    /// Pause the stopwatch, or resume it if it's paused
    PauseStopwatch,
    /// Put the dot back at the origin
    ResetDot,
    Quit,
}

/// Numeric codes accepted in the `[Bindings]` section of the input profile
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
#[repr(u32)]
pub enum ActionCode {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    ToggleStopwatch = 4,
    PauseStopwatch = 5,
    ResetDot = 6,
    Quit = 7,
}

impl From<ActionCode> for Action {
    fn from(code: ActionCode) -> Action {
        match code {
            ActionCode::Up => Action::Move(Direction::Up),
            ActionCode::Down => Action::Move(Direction::Down),
            ActionCode::Left => Action::Move(Direction::Left),
            ActionCode::Right => Action::Move(Direction::Right),
            ActionCode::ToggleStopwatch => Action::ToggleStopwatch,
            ActionCode::PauseStopwatch => Action::PauseStopwatch,
            ActionCode::ResetDot => Action::ResetDot,
            ActionCode::Quit => Action::Quit,
        }
    }
}

impl From<Action> for ActionCode {
    fn from(action: Action) -> ActionCode {
        match action {
            Action::Move(Direction::Up) => ActionCode::Up,
            Action::Move(Direction::Down) => ActionCode::Down,
            Action::Move(Direction::Left) => ActionCode::Left,
            Action::Move(Direction::Right) => ActionCode::Right,
            Action::ToggleStopwatch => ActionCode::ToggleStopwatch,
            Action::PauseStopwatch => ActionCode::PauseStopwatch,
            Action::ResetDot => ActionCode::ResetDot,
            Action::Quit => ActionCode::Quit,
        }
    }
}

impl FromStr for Action {
    type Err = ();

    /// Either a numeric [`ActionCode`] or the action's name, case-insensitive
    fn from_str(s: &str) -> Result<Action, ()> {
        let s = s.trim();

        if let Ok(code) = s.parse::<u32>() {
            return ActionCode::from_u32(code).map(Action::from).ok_or(());
        }

        let code = match s.to_ascii_lowercase().as_str() {
            "up" => ActionCode::Up,
            "down" => ActionCode::Down,
            "left" => ActionCode::Left,
            "right" => ActionCode::Right,
            "togglestopwatch" | "toggle_stopwatch" => ActionCode::ToggleStopwatch,
            "pausestopwatch" | "pause_stopwatch" => ActionCode::PauseStopwatch,
            "resetdot" | "reset_dot" => ActionCode::ResetDot,
            "quit" => ActionCode::Quit,
            _ => return Err(()),
        };

        Ok(code.into())
    }
}

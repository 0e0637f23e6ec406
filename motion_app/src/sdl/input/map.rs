use std::collections::HashMap;
use motion_lib::Direction;
use crate::sdl::input::action::Action;
use crate::sdl::input::config::Config;

/// Key name to action lookup. Names are the ones SDL gives keys ("Up", "Escape", "S"...) and
/// are matched case-insensitively.
#[derive(Clone, Debug)]
pub struct KeyMap {
    map: HashMap<String, Action>
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new()
        }
    }

    pub fn bind(&mut self, key: &str, action: Action) {
        self.map.insert(key.trim().to_ascii_lowercase(), action);
    }

    pub fn action(&self, key: &str) -> Option<Action> {
        self.map.get(&key.to_ascii_lowercase()).copied()
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&str, Action)> {
        self.map.iter().map(|(key, action)| (key.as_str(), *action))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.map.len()
    }
}

impl Default for KeyMap {
    /// Arrow keys move, S starts/stops the stopwatch, P pauses it, R resets the dot and Escape
    /// quits
    fn default() -> Self {
        let mut map = KeyMap::new();

        map.bind("Up", Action::Move(Direction::Up));
        map.bind("Down", Action::Move(Direction::Down));
        map.bind("Left", Action::Move(Direction::Left));
        map.bind("Right", Action::Move(Direction::Right));
        map.bind("S", Action::ToggleStopwatch);
        map.bind("P", Action::PauseStopwatch);
        map.bind("R", Action::ResetDot);
        map.bind("Escape", Action::Quit);

        map
    }
}

impl From<Config> for KeyMap {
    fn from(config: Config) -> Self {
        let mut map = KeyMap::new();
        for (key, action) in config.bindings() {
            map.bind(key, *action);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let map = KeyMap::default();

        assert_eq!(map.action("UP"), Some(Action::Move(Direction::Up)));
        assert_eq!(map.action("escape"), Some(Action::Quit));
        assert_eq!(map.action("s"), Some(Action::ToggleStopwatch));
        assert_eq!(map.action("Q"), None);
        assert_eq!(map.len(), 8);
    }

    #[test]
    fn rebinding_replaces() {
        let mut map = KeyMap::new();
        assert_eq!(map.len(), 0);

        map.bind("W", Action::Move(Direction::Up));
        map.bind("w", Action::Move(Direction::Down));

        assert_eq!(map.len(), 1);
        assert_eq!(map.action("W"), Some(Action::Move(Direction::Down)));
    }
}

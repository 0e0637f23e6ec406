use motion_lib::{ButtonState, Clock, Dot, MonotonicClock, Stopwatch, WorldSettings};
use tracing::debug;
use crate::sdl::evt::Signal;
use crate::sdl::input::Action;

/// What the tick loop mutates: the dot, the stopwatch and whether to keep going
pub struct State<C: Clock = MonotonicClock> {
    dot: Dot,
    stopwatch: Stopwatch<C>,
    running: bool,
}

impl<C: Clock> State<C> {
    pub fn new(world: &WorldSettings, clock: C) -> Self {
        State {
            dot: Dot::from_settings(world),
            stopwatch: Stopwatch::with_clock(clock),
            running: true,
        }
    }

    /// Moves act on both edges, every other action only on the press
    pub fn apply(&mut self, signal: Signal) {
        match signal {
            Signal::Quit => self.running = false,
            Signal::Input(Action::Move(direction), state) => self.dot.handle_edge(direction, state),
            Signal::Input(_, ButtonState::Released) => {}
            Signal::Input(action, ButtonState::Pressed) => {
                debug!("{:?}", action);
                match action {
                    Action::ToggleStopwatch => self.stopwatch.toggle(),
                    Action::PauseStopwatch => self.stopwatch.toggle_pause(),
                    Action::ResetDot => self.dot.reset(),
                    Action::Quit => self.running = false,
                    Action::Move(_) => {}
                }
            }
        }
    }

    pub fn advance(&mut self) {
        self.dot.advance();
    }

    pub fn dot(&self) -> &Dot {
        &self.dot
    }

    pub fn stopwatch(&self) -> &Stopwatch<C> {
        &self.stopwatch
    }

    pub fn running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motion_lib::{Direction, ManualClock, Position, Velocity};

    fn press(action: Action) -> Signal {
        Signal::Input(action, ButtonState::Pressed)
    }

    fn release(action: Action) -> Signal {
        Signal::Input(action, ButtonState::Released)
    }

    #[test]
    fn moves_act_on_both_edges() {
        let clock = ManualClock::new(0);
        let mut state = State::new(&WorldSettings::default(), &clock);

        state.apply(press(Action::Move(Direction::Right)));
        assert_eq!(state.dot().velocity(), Velocity { x: 10, y: 0 });

        state.advance();
        assert_eq!(state.dot().position(), Position { x: 10, y: 0 });

        state.apply(release(Action::Move(Direction::Right)));
        assert_eq!(state.dot().velocity(), Velocity { x: 0, y: 0 });
    }

    #[test]
    fn stopwatch_keys_fire_on_press_only() {
        let clock = ManualClock::new(0);
        let mut state = State::new(&WorldSettings::default(), &clock);

        state.apply(release(Action::ToggleStopwatch));
        assert!(!state.stopwatch().is_started());

        // Pausing a stopped stopwatch does nothing
        state.apply(press(Action::PauseStopwatch));
        assert!(!state.stopwatch().is_paused());
        assert!(!state.stopwatch().is_started());

        state.apply(press(Action::ToggleStopwatch));
        state.apply(release(Action::ToggleStopwatch));
        assert!(state.stopwatch().is_started());

        clock.advance(250);
        state.apply(press(Action::PauseStopwatch));
        state.apply(release(Action::PauseStopwatch));
        assert!(state.stopwatch().is_paused());

        clock.advance(1000);
        assert_eq!(state.stopwatch().elapsed(), 250);
    }

    #[test]
    fn reset_zeroes_the_dot() {
        let clock = ManualClock::new(0);
        let mut state = State::new(&WorldSettings::default(), &clock);

        state.apply(press(Action::Move(Direction::Down)));
        state.advance();
        state.apply(press(Action::ResetDot));

        assert_eq!(state.dot().velocity(), Velocity { x: 0, y: 0 });
        assert_eq!(state.dot().position(), Position { x: 0, y: 0 });

        // Releasing the reset key doesn't touch the dot either
        state.apply(release(Action::ResetDot));
        assert_eq!(state.dot().velocity(), Velocity { x: 0, y: 0 });
    }

    #[test]
    fn quit_stops_the_loop() {
        let clock = ManualClock::new(0);

        let mut state = State::new(&WorldSettings::default(), &clock);
        assert!(state.running());
        state.apply(release(Action::Quit));
        assert!(state.running());
        state.apply(press(Action::Quit));
        assert!(!state.running());

        let mut state = State::new(&WorldSettings::default(), &clock);
        state.apply(Signal::Quit);
        assert!(!state.running());
    }
}

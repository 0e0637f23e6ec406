use std::time::Duration;

use tracing::trace;

use super::{Clock, MonotonicClock, Ticks};

/// Millisecond stopwatch that can be paused and resumed without losing the time already counted.
///
/// Every operation is valid in every state: a transition that doesn't apply (pausing a stopped
/// stopwatch, unpausing one that isn't paused) does nothing.
#[derive(Debug)]
pub struct Stopwatch<C: Clock = MonotonicClock> {
    clock: C,
    /// Clock reading at which the current run began
    start_ticks: Ticks,
    /// Time counted before the stopwatch was paused
    paused_ticks: Ticks,
    started: bool,
    /// Only ever true while `started` is
    paused: bool,
}

impl Stopwatch<MonotonicClock> {
    pub fn new() -> Stopwatch<MonotonicClock> {
        Stopwatch::with_clock(MonotonicClock::new())
    }
}

impl Default for Stopwatch<MonotonicClock> {
    fn default() -> Self {
        Stopwatch::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Stopwatch<C> {
        Stopwatch {
            clock,
            start_ticks: 0,
            paused_ticks: 0,
            started: false,
            paused: false,
        }
    }

    /// (Re)start counting from zero, whatever the current state
    pub fn start(&mut self) {
        self.started = true;
        self.paused = false;
        self.start_ticks = self.clock.ticks();
        self.paused_ticks = 0;

        trace!("stopwatch started at {}", self.start_ticks);
    }

    pub fn stop(&mut self) {
        self.started = false;
        self.paused = false;
        self.start_ticks = 0;
        self.paused_ticks = 0;

        trace!("stopwatch stopped");
    }

    pub fn pause(&mut self) {
        if self.started && !self.paused {
            self.paused = true;
            self.paused_ticks = self.clock.ticks().saturating_sub(self.start_ticks);
            self.start_ticks = 0;

            trace!("stopwatch paused at {}ms", self.paused_ticks);
        }
    }

    pub fn unpause(&mut self) {
        if self.started && self.paused {
            self.paused = false;
            // Move the origin back by the banked time so that `elapsed` carries on from where
            // it was frozen
            self.start_ticks = self.clock.ticks().saturating_sub(self.paused_ticks);
            self.paused_ticks = 0;

            trace!("stopwatch resumed, origin moved to {}", self.start_ticks);
        }
    }

    /// Start a stopped stopwatch, stop a started one
    pub fn toggle(&mut self) {
        if self.started {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Pause a running stopwatch, resume a paused one. No-op while stopped.
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.unpause();
        } else {
            self.pause();
        }
    }

    /// Time counted so far, in milliseconds
    pub fn elapsed(&self) -> Ticks {
        if !self.started {
            0
        } else if self.paused {
            self.paused_ticks
        } else {
            self.clock.ticks().saturating_sub(self.start_ticks)
        }
    }

    pub fn elapsed_duration(&self) -> Duration {
        Duration::from_millis(self.elapsed())
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_paused(&self) -> bool {
        self.paused && self.started
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

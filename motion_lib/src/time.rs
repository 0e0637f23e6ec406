pub mod fps;
pub mod stopwatch;

use std::cell::Cell;
use std::time::Instant;

/// Milliseconds. Every reading in this module is expressed in ticks.
pub type Ticks = u64;

/// Source of monotonic time for the stopwatch and the frame timing helpers.
///
/// Readings must never go backwards and reading the clock must not block.
pub trait Clock {
    fn ticks(&self) -> Ticks;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn ticks(&self) -> Ticks {
        (**self).ticks()
    }
}

/// Wall clock counting milliseconds since its own creation
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> MonotonicClock {
        MonotonicClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> MonotonicClock {
        MonotonicClock::new()
    }
}

impl Clock for MonotonicClock {
    fn ticks(&self) -> Ticks {
        // u64 milliseconds is several hundred million years, truncating the u128 is fine
        self.origin.elapsed().as_millis() as Ticks
    }
}

/// Clock that only moves when told to. Used to replay timings deterministically.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Ticks>,
}

impl ManualClock {
    pub fn new(now: Ticks) -> ManualClock {
        ManualClock {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: Ticks) {
        self.now.set(now);
    }

    pub fn advance(&self, delta: Ticks) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn ticks(&self) -> Ticks {
        self.now.get()
    }
}

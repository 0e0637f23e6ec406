//! Frame rate measurement and capping, both driven by [`Stopwatch`]es.

use std::time::Duration;

use super::stopwatch::Stopwatch;
use super::{Clock, Ticks};

/// Average frame rate since the counter was (re)started
#[derive(Debug)]
pub struct FpsCounter<C: Clock> {
    watch: Stopwatch<C>,
    frames: u64,
}

impl<C: Clock> FpsCounter<C> {
    /// Creates a running counter
    pub fn new(clock: C) -> FpsCounter<C> {
        let mut watch = Stopwatch::with_clock(clock);
        watch.start();

        FpsCounter { watch, frames: 0 }
    }

    /// Count one rendered frame
    pub fn frame(&mut self) {
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames per second, 0 until some time has passed
    pub fn average(&self) -> f64 {
        let elapsed = self.watch.elapsed();

        if elapsed == 0 {
            return 0.;
        }

        self.frames as f64 / (elapsed as f64 / 1000.)
    }

    pub fn reset(&mut self) {
        self.frames = 0;
        self.watch.start();
    }
}

/// Keeps frames from running faster than a target rate.
///
/// Call [`FrameCap::begin`] at the top of the frame and sleep for [`FrameCap::remaining`] at
/// the bottom.
#[derive(Debug)]
pub struct FrameCap<C: Clock> {
    watch: Stopwatch<C>,
    /// 0 disables the cap
    ticks_per_frame: Ticks,
}

impl<C: Clock> FrameCap<C> {
    pub fn new(clock: C, fps: u32) -> FrameCap<C> {
        let ticks_per_frame = if fps == 0 { 0 } else { 1000 / Ticks::from(fps) };

        FrameCap {
            watch: Stopwatch::with_clock(clock),
            ticks_per_frame,
        }
    }

    pub fn ticks_per_frame(&self) -> Ticks {
        self.ticks_per_frame
    }

    pub fn begin(&mut self) {
        self.watch.start();
    }

    /// What's left of the frame budget, `None` once it's spent (or if the cap is disabled)
    pub fn remaining(&self) -> Option<Duration> {
        let spent = self.watch.elapsed();

        if spent < self.ticks_per_frame {
            Some(Duration::from_millis(self.ticks_per_frame - spent))
        } else {
            None
        }
    }
}

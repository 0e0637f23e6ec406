//! Core of the motion sample: a pausable millisecond stopwatch, frame timing built on top of
//! it and a 2D box that moves inside a fixed rectangle.
//!
//! Nothing in here talks to SDL. The host feeds in key edges and a clock and reads positions
//! back out.

mod error;
pub mod motion;
pub mod settings;
pub mod time;

pub use error::{MotionError, MotionResult};
pub use motion::dot::{Bounds, Dot, Position, Size, Velocity};
pub use motion::{Axis, ButtonState, Direction};
pub use settings::{Settings, TimingSettings, WorldSettings};
pub use time::fps::{FpsCounter, FrameCap};
pub use time::stopwatch::Stopwatch;
pub use time::{Clock, ManualClock, MonotonicClock, Ticks};

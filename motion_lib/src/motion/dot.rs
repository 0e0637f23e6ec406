use tracing::debug;

use super::{Axis, ButtonState, Direction};
use crate::settings::WorldSettings;

/// Top-left corner of the box, in pixels
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Displacement applied on every tick
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Velocity {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// Rectangle anchored at (0, 0) that the box must stay inside
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

/// A box moved by key edges that never leaves its bounds.
///
/// Each press adds `step` along the key's direction and the matching release takes it back off,
/// so holding two opposite keys cancels out. On every tick the box moves by its velocity on
/// each axis and, if that puts it out of bounds, the move on that axis is undone entirely (the
/// box does not slide up to the edge).
#[derive(Clone, Debug)]
pub struct Dot {
    position: Position,
    velocity: Velocity,
    size: Size,
    bounds: Bounds,
    step: i32,
}

impl Dot {
    pub fn new(size: Size, bounds: Bounds, step: i32) -> Dot {
        Dot {
            position: Position::default(),
            velocity: Velocity::default(),
            size,
            bounds,
            step,
        }
    }

    pub fn from_settings(world: &WorldSettings) -> Dot {
        Dot::new(world.dot_size(), world.bounds(), world.dot_velocity)
    }

    /// Apply a key press or release. Must only be called on edges: feeding key repeats in here
    /// accumulates velocity.
    pub fn handle_edge(&mut self, direction: Direction, state: ButtonState) {
        let (axis, sign) = direction.axis_and_sign();

        let push = self.step.saturating_mul(sign);
        let delta = match state {
            ButtonState::Pressed => push,
            ButtonState::Released => push.saturating_neg(),
        };

        let v = match axis {
            Axis::X => &mut self.velocity.x,
            Axis::Y => &mut self.velocity.y,
        };
        *v = v.saturating_add(delta);

        debug!("{:?} {:?}: velocity now {:?}", direction, state, self.velocity);
    }

    /// Move by one tick worth of velocity, each axis resolved on its own
    pub fn advance(&mut self) {
        self.position.x = Self::step_axis(
            self.position.x,
            self.velocity.x,
            self.size.width,
            self.bounds.width,
        );
        self.position.y = Self::step_axis(
            self.position.y,
            self.velocity.y,
            self.size.height,
            self.bounds.height,
        );
    }

    /// Returns where the box ends up on one axis: `pos + vel` if the box still fits there,
    /// otherwise `pos` unchanged.
    fn step_axis(pos: i32, vel: i32, extent: i32, limit: i32) -> i32 {
        let fits = |p: i32| p >= 0 && p.checked_add(extent).is_some_and(|end| end <= limit);

        match pos.checked_add(vel) {
            Some(moved) if fits(moved) => moved,
            // Overflowing i32 is as out of bounds as it gets
            _ => pos,
        }
    }

    /// Back to the origin, standing still
    pub fn reset(&mut self) {
        self.position = Position::default();
        self.velocity = Velocity::default();
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn step(&self) -> i32 {
        self.step
    }
}

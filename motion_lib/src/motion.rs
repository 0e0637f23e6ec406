//! Edge-driven motion of a box inside a fixed rectangle.

pub mod dot;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonState {
    Pressed,
    Released,
}

impl ButtonState {
    pub fn is_pressed(self) -> bool {
        self == ButtonState::Pressed
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Axis this direction acts on and the sign of its contribution. Screen coordinates, so
    /// "up" goes towards y = 0.
    pub fn axis_and_sign(self) -> (Axis, i32) {
        match self {
            Direction::Up => (Axis::Y, -1),
            Direction::Down => (Axis::Y, 1),
            Direction::Left => (Axis::X, -1),
            Direction::Right => (Axis::X, 1),
        }
    }

    pub fn axis(self) -> Axis {
        self.axis_and_sign().0
    }

    pub fn sign(self) -> i32 {
        self.axis_and_sign().1
    }
}

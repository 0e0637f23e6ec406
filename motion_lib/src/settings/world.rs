use crate::error::{MotionError, MotionResult};
use crate::motion::dot::{Bounds, Size};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WorldSettings {
    pub screen_width: i32,
    pub screen_height: i32,
    pub dot_width: i32,
    pub dot_height: i32,
    /// Velocity added by each direction key, in pixels per tick
    pub dot_velocity: i32,
}

impl Default for WorldSettings {
    fn default() -> WorldSettings {
        WorldSettings {
            screen_width: 640,
            screen_height: 480,
            dot_width: 10,
            dot_height: 10,
            dot_velocity: 10,
        }
    }
}

impl WorldSettings {
    pub fn bounds(&self) -> Bounds {
        Bounds {
            width: self.screen_width,
            height: self.screen_height,
        }
    }

    pub fn dot_size(&self) -> Size {
        Size {
            width: self.dot_width,
            height: self.dot_height,
        }
    }

    pub fn validate(&self) -> MotionResult<()> {
        let positive = [
            ("screen width", self.screen_width),
            ("screen height", self.screen_height),
            ("dot width", self.dot_width),
            ("dot height", self.dot_height),
            ("dot velocity", self.dot_velocity),
        ];

        for (what, value) in positive {
            if value <= 0 {
                return Err(MotionError::NotPositive {
                    what,
                    value: value.into(),
                });
            }
        }

        if self.dot_width > self.screen_width || self.dot_height > self.screen_height {
            return Err(MotionError::DotTooLarge {
                dot_width: self.dot_width,
                dot_height: self.dot_height,
                screen_width: self.screen_width,
                screen_height: self.screen_height,
            });
        }

        Ok(())
    }
}

#[test]
fn dot_must_fit_on_screen() {
    let world = WorldSettings {
        dot_width: 700,
        ..Default::default()
    };

    assert_eq!(
        world.validate(),
        Err(MotionError::DotTooLarge {
            dot_width: 700,
            dot_height: 10,
            screen_width: 640,
            screen_height: 480,
        })
    );

    // Exactly the screen size is fine, the dot just can't move
    let world = WorldSettings {
        dot_width: 640,
        dot_height: 480,
        ..Default::default()
    };
    assert_eq!(world.validate(), Ok(()));
}

#[test]
fn sizes_must_be_positive() {
    let world = WorldSettings {
        screen_height: -1,
        ..Default::default()
    };

    assert_eq!(
        world.validate(),
        Err(MotionError::NotPositive {
            what: "screen height",
            value: -1
        })
    );
}

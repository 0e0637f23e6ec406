mod timing;
mod world;

pub use timing::TimingSettings;
pub use world::WorldSettings;

use crate::error::MotionResult;

/// Everything the host needs to set up the window, the dot and the frame loop
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Settings {
    pub world: WorldSettings,
    pub timing: TimingSettings,
}

impl Settings {
    pub fn validate(&self) -> MotionResult<()> {
        self.world.validate()?;
        self.timing.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MotionError;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Settings::default().validate(), Ok(()));
    }

    #[test]
    fn world_is_checked_before_timing() {
        let mut settings = Settings::default();
        settings.world.dot_velocity = 0;
        settings.timing.fps_cap = 0;

        assert_eq!(
            settings.validate(),
            Err(MotionError::NotPositive {
                what: "dot velocity",
                value: 0
            })
        );

        settings.world.dot_velocity = 5;
        assert_eq!(settings.validate(), Err(MotionError::ZeroFrameRate));
    }
}

use crate::error::{MotionError, MotionResult};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimingSettings {
    /// Target frame rate when `cap_frame_rate` is set
    pub fps_cap: u32,
    pub cap_frame_rate: bool,
}

impl Default for TimingSettings {
    fn default() -> TimingSettings {
        TimingSettings {
            fps_cap: 60,
            cap_frame_rate: true,
        }
    }
}

impl TimingSettings {
    /// Frame rate to cap at, 0 when uncapped
    pub fn effective_cap(&self) -> u32 {
        if self.cap_frame_rate { self.fps_cap } else { 0 }
    }

    pub fn validate(&self) -> MotionResult<()> {
        if self.cap_frame_rate && self.fps_cap == 0 {
            return Err(MotionError::ZeroFrameRate);
        }

        Ok(())
    }
}

#[test]
fn uncapped_ignores_the_frame_rate() {
    let timing = TimingSettings {
        fps_cap: 0,
        cap_frame_rate: false,
    };

    assert_eq!(timing.validate(), Ok(()));
    assert_eq!(timing.effective_cap(), 0);

    let timing = TimingSettings::default();
    assert_eq!(timing.effective_cap(), 60);
}

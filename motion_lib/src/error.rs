use thiserror::Error;

pub type MotionResult<T> = ::std::result::Result<T, MotionError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MotionError {
    #[error("Invalid {what}: {value} (must be greater than zero)")]
    NotPositive {
        what: &'static str,
        value: i64,
    },
    #[error("Dot of {dot_width}x{dot_height} does not fit in a {screen_width}x{screen_height} screen")]
    DotTooLarge {
        dot_width: i32,
        dot_height: i32,
        screen_width: i32,
        screen_height: i32,
    },
    #[error("Frame cap is enabled but the target frame rate is 0")]
    ZeroFrameRate,
}

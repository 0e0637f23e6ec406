use thiserror::Error;
use motion_lib::MotionError;

pub type Result<T> = ::std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("Failed to build window: {0}")]
    WindowBuild(String),
    #[error("Failed to read config file: {0}")]
    Config(#[from] ini::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Bad value in [{section}] {key} = {value}")]
    BadValue {
        section: String,
        key: String,
        value: String,
    },
    #[error("Invalid settings: {0}")]
    Settings(#[from] MotionError),
}

impl AppError {
    pub fn sdl(e: impl std::fmt::Display) -> AppError {
        AppError::Sdl(e.to_string())
    }
}

mod action;
pub mod config;
mod map;

pub use action::Action;
pub use config::Config;
pub use map::KeyMap;

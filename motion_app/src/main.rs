use std::path::Path;
use tracing::{error, info};

mod core;
mod error;
mod sdl;

const SETTINGS_PATH: &str = "assets/config/motion.ini";
const INPUT_PROFILE_PATH: &str = "assets/config/input.ini";

fn main() {
    tracing_subscriber::fmt::init();
    info!("Begin log");

    if let Err(e) = start() {
        error!("The app failed: {}", e);
        std::process::exit(1);
    }
}

fn start() -> error::Result<()> {
    let settings = core::config::load(Path::new(SETTINGS_PATH))?;
    let keymap = sdl::input::KeyMap::from(sdl::input::Config::load(Path::new(INPUT_PROFILE_PATH))?);

    let mut app = core::app::App::new(&settings, keymap)?;
    app.run()
}

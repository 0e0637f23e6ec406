pub mod canvas;

use std::ops::Deref;
use motion_lib::WorldSettings;
use crate::error::{AppError, Result};
use crate::sdl;

pub const TITLE: &str = "Motion";

pub struct Window {
    wnd: sdl3::video::Window,
}

impl Window {
    pub fn new(ctx: &sdl::Context, world: &WorldSettings) -> Result<Self> {
        let width = dimension("width", world.screen_width)?;
        let height = dimension("height", world.screen_height)?;

        let sdl_window = ctx.video()?
            .window(TITLE, width, height)
            .position_centered()
            .build()
            .map_err(|e| AppError::WindowBuild(e.to_string()))?;

        Ok(Window {
            wnd: sdl_window,
        })
    }
}

/// SDL wants a non-zero unsigned size
fn dimension(what: &str, value: i32) -> Result<u32> {
    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(AppError::WindowBuild(format!("invalid window {}: {}", what, value))),
    }
}

impl Deref for Window {
    type Target = sdl3::video::Window;
    fn deref(&self) -> &Self::Target {
        &self.wnd
    }
}

#[test]
fn window_size_must_be_positive() {
    assert_eq!(dimension("width", 640).unwrap(), 640);

    for bad in [0, -1, i32::MIN] {
        match dimension("height", bad) {
            Err(AppError::WindowBuild(msg)) => assert_eq!(msg, format!("invalid window height: {}", bad)),
            other => panic!("unexpected {:?}", other),
        }
    }
}

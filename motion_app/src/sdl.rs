pub mod wnd;
pub mod evt;
pub mod input;

use std::ops::Deref;
use crate::error::{AppError, Result};

/// Owns the SDL library handle. SDL shuts down when this is dropped.
pub struct Context {
    ctx: sdl3::Sdl,
}

impl Context {
    pub fn new() -> Result<Self> {
        let ctx = sdl3::init().map_err(AppError::sdl)?;

        Ok(Context {
            ctx,
        })
    }

    pub fn video(&self) -> Result<sdl3::VideoSubsystem> {
        self.ctx.video().map_err(AppError::sdl)
    }
}

impl Deref for Context {
    type Target = sdl3::Sdl;
    fn deref(&self) -> &Self::Target {
        &self.ctx
    }
}

use std::ops::Deref;
use sdl3::pixels::Color;
use sdl3::render::FRect;
use motion_lib::{Position, Size};
use crate::error::{AppError, Result};
use super::Window;

const BACKGROUND: Color = Color::RGB(0xff, 0xff, 0xff);
const DOT: Color = Color::RGB(0xff, 0x00, 0x00);

pub struct Canvas {
    canvas: sdl3::render::WindowCanvas,
}

impl From<Window> for Canvas {
    fn from(window: Window) -> Self {
        Canvas { canvas: window.wnd.into_canvas() }
    }
}

impl Deref for Canvas {
    type Target = sdl3::render::WindowCanvas;
    fn deref(&self) -> &Self::Target {
        &self.canvas
    }
}

impl Canvas {
    pub fn clear(&mut self) {
        self.canvas.set_draw_color(BACKGROUND);
        self.canvas.clear();
    }

    /// Draw a solid box with its top-left corner at `pos`
    pub fn fill_box(&mut self, pos: Position, size: Size) -> Result<()> {
        let rect = FRect::new(pos.x as f32, pos.y as f32, size.width as f32, size.height as f32);

        self.canvas.set_draw_color(DOT);
        self.canvas.fill_rect(rect).map_err(AppError::sdl)
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.canvas.window_mut().set_title(title).map_err(AppError::sdl)
    }
}

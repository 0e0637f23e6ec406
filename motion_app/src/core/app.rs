use motion_lib::{FpsCounter, FrameCap, MonotonicClock, Settings, Stopwatch};
use tracing::{info, warn};
use crate::error::Result;
use crate::sdl;
use crate::core::state::State;
use crate::sdl::input::KeyMap;

/// Frames between two window title refreshes
const TITLE_REFRESH_FRAMES: u64 = 30;

pub struct App {
    // Field order is drop order: the renderer and the pump go before the SDL context
    canvas: sdl::wnd::canvas::Canvas,
    event_pump: sdl::evt::EventPump,
    _ctx: sdl::Context,
    keymap: KeyMap,
    state: State,
    fps: FpsCounter<MonotonicClock>,
    frame_cap: FrameCap<MonotonicClock>,
}

impl App {
    pub fn new(settings: &Settings, keymap: KeyMap) -> Result<Self> {
        settings.validate()?;

        let ctx = sdl::Context::new()?;
        let wnd = sdl::wnd::Window::new(&ctx, &settings.world)?;
        let canvas = sdl::wnd::canvas::Canvas::from(wnd);
        let event_pump = sdl::evt::EventPump::try_from(&ctx)?;

        let clock = MonotonicClock::new();

        info!(
            "Window {}x{}, dot {}x{} moving {}px per tick, frame cap {}",
            settings.world.screen_width,
            settings.world.screen_height,
            settings.world.dot_width,
            settings.world.dot_height,
            settings.world.dot_velocity,
            settings.timing.effective_cap(),
        );

        Ok(App {
            canvas,
            event_pump,
            _ctx: ctx,
            keymap,
            state: State::new(&settings.world, clock),
            fps: FpsCounter::new(clock),
            frame_cap: FrameCap::new(clock, settings.timing.effective_cap()),
        })
    }

    /// One tick per iteration: drain input, move the dot once, draw, then wait out the frame
    pub fn run(&mut self) -> Result<()> {
        info!("Entering main loop");

        while self.state.running() {
            self.frame_cap.begin();

            for signal in self.event_pump.drain(&self.keymap) {
                self.state.apply(signal);
            }

            self.state.advance();

            self.canvas.clear();
            self.canvas.fill_box(self.state.dot().position(), self.state.dot().size())?;
            self.canvas.present();
            self.fps.frame();

            if self.fps.frames() % TITLE_REFRESH_FRAMES == 0 {
                self.refresh_title();
            }

            if let Some(rest) = self.frame_cap.remaining() {
                std::thread::sleep(rest);
            }
        }

        info!(
            "Leaving main loop after {} frames ({:.1} fps average)",
            self.fps.frames(),
            self.fps.average()
        );
        Ok(())
    }

    fn refresh_title(&mut self) {
        let title = status_line(self.state.stopwatch(), self.fps.average());

        if let Err(e) = self.canvas.set_title(&title) {
            warn!("Failed to update window title: {}", e);
        }
    }
}

fn status_line<C: motion_lib::Clock>(stopwatch: &Stopwatch<C>, fps: f64) -> String {
    let seconds = stopwatch.elapsed() as f64 / 1000.;

    let state = if stopwatch.is_paused() {
        " (paused)"
    } else if !stopwatch.is_started() {
        " (stopped)"
    } else {
        ""
    };

    format!("{} | {:.3}s{} | {:.1} fps", sdl::wnd::TITLE, seconds, state, fps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use motion_lib::ManualClock;

    #[test]
    fn status_line_shows_stopwatch_state() {
        let clock = ManualClock::new(0);
        let mut watch = Stopwatch::with_clock(&clock);

        assert_eq!(status_line(&watch, 0.), "Motion | 0.000s (stopped) | 0.0 fps");

        watch.start();
        clock.advance(1500);
        assert_eq!(status_line(&watch, 59.94), "Motion | 1.500s | 59.9 fps");

        watch.pause();
        assert_eq!(status_line(&watch, 60.), "Motion | 1.500s (paused) | 60.0 fps");
    }
}

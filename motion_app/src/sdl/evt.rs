use std::ops::Deref;
use sdl3::event::Event;
use tracing::trace;
use motion_lib::ButtonState;
use crate::error::{AppError, Result};
use crate::sdl::Context;
use crate::sdl::input::{Action, KeyMap};

/// One host event the tick loop cares about
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Signal {
    Quit,
    Input(Action, ButtonState),
}

pub struct EventPump {
    pump: sdl3::EventPump,
}

impl EventPump {
    /// Empties the SDL queue. Key repeats are dropped so every `Input` is a real press or
    /// release edge.
    pub fn drain(&mut self, keymap: &KeyMap) -> Vec<Signal> {
        self.pump
            .poll_iter()
            .filter_map(|e| translate(e, keymap))
            .collect()
    }
}

fn translate(e: Event, keymap: &KeyMap) -> Option<Signal> {
    match e {
        Event::Quit { .. } => Some(Signal::Quit),
        Event::KeyDown { keycode: Some(keycode), repeat: false, .. } => {
            key_signal(&keycode.to_string(), ButtonState::Pressed, keymap)
        }
        Event::KeyUp { keycode: Some(keycode), repeat: false, .. } => {
            key_signal(&keycode.to_string(), ButtonState::Released, keymap)
        }
        _ => None,
    }
}

fn key_signal(key: &str, state: ButtonState, keymap: &KeyMap) -> Option<Signal> {
    let action = keymap.action(key);
    if action.is_none() {
        trace!("Unbound key {} {:?}", key, state);
    }
    action.map(|action| Signal::Input(action, state))
}

impl TryFrom<&Context> for EventPump {
    type Error = AppError;

    fn try_from(context: &Context) -> Result<Self> {
        Ok(EventPump {
            pump: context.event_pump().map_err(AppError::sdl)?,
        })
    }
}

impl Deref for EventPump {
    type Target = sdl3::EventPump;
    fn deref(&self) -> &Self::Target {
        &self.pump
    }
}

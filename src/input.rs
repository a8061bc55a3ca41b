//! Keyboard state to per-frame input
//!
//! Movement keys are sampled as held state; fire only triggers on the
//! transition from released to pressed, so key repeat never refires.

use crate::sim::FrameInput;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Fire,
}

#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    left: bool,
    right: bool,
    fire_held: bool,
    fire_pressed: bool,
    /// Attract mode: hand control to the autopilot
    pub autopilot: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Fire => {
                if !self.fire_held {
                    self.fire_pressed = true;
                }
                self.fire_held = true;
            }
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Fire => self.fire_held = false,
        }
    }

    /// Input for the next simulated frame. Consumes a pending fire press.
    pub fn frame(&mut self) -> FrameInput {
        let input = FrameInput {
            left: self.left,
            right: self.right,
            fire: self.fire_pressed,
            autopilot: self.autopilot,
        };
        self.fire_pressed = false;
        input
    }
}

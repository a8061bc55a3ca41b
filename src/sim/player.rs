//! Player ship and its single missile
//!
//! The missile is a single slot rather than a pool: firing while one is in
//! flight does nothing.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Rightmost x the ship may occupy
pub const PLAYER_MAX_X: i32 = SCREEN_WIDTH - PLAYER_WIDTH;

/// The player's ship; only the horizontal position varies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub x: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYER_MAX_X / 2,
        }
    }
}

impl Player {
    pub fn new(x: i32) -> Self {
        Self {
            x: x.clamp(0, PLAYER_MAX_X),
        }
    }

    /// Step one pixel in the direction of `dir` (sign only).
    ///
    /// Does nothing if the step would leave the screen. Returns whether the
    /// ship moved.
    pub fn move_by(&mut self, dir: i32) -> bool {
        let next = self.x + dir.signum();
        if dir == 0 || !(0..=PLAYER_MAX_X).contains(&next) {
            return false;
        }
        self.x = next;
        true
    }

    /// Collision / draw box in logical coordinates
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, PLAYER_Y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Where a missile sits while docked on the ship, and where it launches from
    pub fn muzzle(&self) -> (i32, i32) {
        (self.x + MISSILE_OFFSET_X, PLAYER_Y + MISSILE_OFFSET_Y)
    }
}

/// The player's missile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Missile {
    pub fired: bool,
    pub x: i32,
    pub y: i32,
}

impl Missile {
    /// Launch from the ship's muzzle. Returns false (and changes nothing)
    /// if a missile is already in flight.
    pub fn shoot(&mut self, player: &Player) -> bool {
        if self.fired {
            return false;
        }
        let (x, y) = player.muzzle();
        self.x = x;
        self.y = y;
        self.fired = true;
        true
    }

    /// Move one frame upward. Returns true on the frame the missile leaves
    /// the top of the screen.
    pub fn advance(&mut self) -> bool {
        if !self.fired {
            return false;
        }
        self.y += MISSILE_SPEED_Y;
        if self.y <= 0 {
            self.fired = false;
            return true;
        }
        false
    }

    /// Collision box at the in-flight position
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, MISSILE_WIDTH, MISSILE_HEIGHT)
    }

    /// Where the missile should be drawn: in flight, or docked on the ship
    pub fn draw_position(&self, player: &Player) -> (i32, i32) {
        if self.fired {
            (self.x, self.y)
        } else {
            player.muzzle()
        }
    }
}

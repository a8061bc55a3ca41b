//! Sprite sheet layout
//!
//! Regions of the arcade sprite sheet, in sheet pixels. Cells are laid out
//! on a 17 pixel grid (16 pixel sprite plus a 1 pixel gutter).

use crate::consts::*;
use crate::sim::{AlienColor, Rect};

const CELL: i32 = ALIEN_WIDTH + 1;

/// Normal alien, one of two wing-flap frames, row chosen by colour
pub fn alien(color: AlienColor, frame: u32) -> Rect {
    Rect::new(
        1 + CELL * frame as i32,
        1 + CELL * color as i32,
        ALIEN_WIDTH,
        ALIEN_HEIGHT,
    )
}

/// Alien explosion frame (0..EXPLOSION_FRAMES)
pub fn explosion(frame: u32) -> Rect {
    Rect::new(61 + CELL * frame as i32, 70, ALIEN_WIDTH, ALIEN_HEIGHT)
}

pub const PLAYER: Rect = Rect::new(3, 70, PLAYER_WIDTH, PLAYER_HEIGHT);

/// The missile art is one pixel shorter than its hit box
pub const MISSILE: Rect = Rect::new(66, 196, MISSILE_WIDTH, MISSILE_HEIGHT - 1);

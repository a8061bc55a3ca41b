//! Frame composition
//!
//! Draws a `GameState` back to front: starfield, formation, player, missile.

use glam::IVec2;

use super::blit::copy_scaled;
use super::sprites;
use super::surface::{Rgba, Surface};
use crate::consts::*;
use crate::sim::{AlienColor, Formation, GameState, Missile, Player, Rect, Slot, Starfield};

/// Owns the sprite sheet, the star layer and the composited frame
pub struct Renderer {
    sheet: Surface,
    stars: Surface,
    frame: Surface,
}

impl Renderer {
    /// The sheet should already carry its transparent colour key
    pub fn new(sheet: Surface) -> Self {
        Self {
            sheet,
            stars: Surface::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
            frame: Surface::new((SCREEN_WIDTH * SCALE) as u32, (SCREEN_HEIGHT * SCALE) as u32),
        }
    }

    /// The last composited frame
    pub fn frame(&self) -> &Surface {
        &self.frame
    }

    /// Compose one frame from the current state
    pub fn render(&mut self, state: &GameState) {
        self.draw_starfield(&state.starfield);
        self.draw_formation(&state.formation);
        self.draw_player(&state.player);
        self.draw_missile(&state.missile, &state.player);
    }

    /// Rebuild the star layer and blit it over the whole frame. The layer is
    /// opaque, so this also clears whatever the previous frame drew.
    fn draw_starfield(&mut self, starfield: &Starfield) {
        self.stars.fill(Rgba::BLACK);
        for star in starfield.lit_stars() {
            self.stars
                .set_pixel(star.x, star.y, Rgba::from_rgb(starfield.color_of(star)));
        }
        copy_scaled(&mut self.frame, &self.stars, None, None);
    }

    fn draw_formation(&mut self, formation: &Formation) {
        for (row, col, slot) in formation.cells() {
            let (src, frame) = match slot {
                Slot::Inactive => continue,
                Slot::Dying { explosion_frame } => (sprites::explosion(explosion_frame), 0),
                Slot::Active => {
                    let frame = formation.animation_frame(row, col);
                    (sprites::alien(AlienColor::for_row(row), frame), frame)
                }
            };
            // The second flap frame is drawn two pixels to the left
            let dst = formation
                .slot_rect(row, col)
                .translated(IVec2::new(-2 * frame as i32, 0));
            copy_scaled(&mut self.frame, &self.sheet, Some(src), Some(dst));
        }
    }

    fn draw_player(&mut self, player: &Player) {
        copy_scaled(&mut self.frame, &self.sheet, Some(sprites::PLAYER), Some(player.rect()));
    }

    fn draw_missile(&mut self, missile: &Missile, player: &Player) {
        let (x, y) = missile.draw_position(player);
        let dst = Rect::new(x, y, MISSILE_WIDTH, MISSILE_HEIGHT);
        copy_scaled(&mut self.frame, &self.sheet, Some(sprites::MISSILE), Some(dst));
    }
}

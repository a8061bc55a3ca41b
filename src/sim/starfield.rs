//! Scrolling starfield background
//!
//! The arcade board generates star colours with a resistor network: each
//! channel gets two bits weighted through 150 and 100 ohm resistors. The
//! palette below reproduces the four brightness levels that network gives.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Peak output of the star DAC before scaling to 0..255
const RGB_MAXIMUM: u32 = 224;

/// Stars move on every other tick
pub const STAR_INTERVAL: u64 = 2;
/// Bit of the y coordinate that decides whether a star is lit
pub const BLINK_BIT: i32 = 0x8;

/// Four brightness levels produced by a 2-bit channel
pub const fn star_levels() -> [u8; 4] {
    let min = RGB_MAXIMUM * 130 / 150;
    let mid = RGB_MAXIMUM * 130 / 100;
    let max = RGB_MAXIMUM * 130 / 60;
    [
        0,
        min as u8,
        (min + (255 - min) * (mid - min) / (max - min)) as u8,
        255,
    ]
}

/// Colour of a 6-bit star palette index as `[r, g, b]`.
///
/// Bits 5/4 drive red, 3/2 green and 1/0 blue; the higher bit of each pair
/// is the 100 ohm (heavier) resistor.
pub const fn star_color(index: usize) -> [u8; 3] {
    [
        channel_level(index, 5, 4),
        channel_level(index, 3, 2),
        channel_level(index, 1, 0),
    ]
}

const fn channel_level(index: usize, lo: usize, hi: usize) -> u8 {
    let bit0 = (index >> lo) & 1;
    let bit1 = (index >> hi) & 1;
    star_levels()[(bit1 << 1) | bit0]
}

/// Build the full 64-entry palette
pub fn build_palette() -> [[u8; 3]; STAR_PALETTE_LEN] {
    std::array::from_fn(star_color)
}

/// One background star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    /// Palette index (0..64)
    pub color: usize,
    /// Drawn this frame (twinkle)
    pub lit: bool,
}

/// Fixed pool of stars plus their palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Starfield {
    #[serde(skip, default = "build_palette")]
    palette: [[u8; 3]; STAR_PALETTE_LEN],
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Scatter `STAR_COUNT` stars at random positions and colours
    pub fn new(rng: &mut impl Rng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| {
                let y = rng.random_range(0..SCREEN_HEIGHT);
                Star {
                    x: rng.random_range(0..SCREEN_WIDTH),
                    y,
                    color: rng.random_range(0..STAR_PALETTE_LEN),
                    lit: y & BLINK_BIT != 0,
                }
            })
            .collect();
        Self {
            palette: build_palette(),
            stars,
        }
    }

    /// Palette colour of a star
    pub fn color_of(&self, star: &Star) -> [u8; 3] {
        self.palette[star.color % STAR_PALETTE_LEN]
    }

    /// Scroll every star down one pixel on even ticks.
    ///
    /// The blink state is sampled from the y coordinate before the move,
    /// and y wraps to the top past the bottom edge. Returns whether the
    /// stars moved this tick.
    pub fn advance(&mut self, tick: u64) -> bool {
        if tick % STAR_INTERVAL != 0 {
            return false;
        }
        for star in &mut self.stars {
            star.lit = star.y & BLINK_BIT != 0;
            star.y = (star.y + 1) % SCREEN_HEIGHT;
        }
        true
    }

    /// Stars that should be drawn this frame
    pub fn lit_stars(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter().filter(|s| s.lit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_levels() {
        assert_eq!(star_levels(), [0, 194, 214, 255]);
    }

    #[test]
    fn test_palette_channels() {
        assert_eq!(star_color(0), [0, 0, 0]);
        assert_eq!(star_color(0x3f), [255, 255, 255]);
        // Bit 5 alone is the 150 ohm red resistor
        assert_eq!(star_color(0b100000), [194, 0, 0]);
        // Bit 4 alone is the 100 ohm red resistor
        assert_eq!(star_color(0b010000), [214, 0, 0]);
        assert_eq!(star_color(0b001100), [0, 255, 0]);
        assert_eq!(star_color(0b000001), [0, 0, 214]);
    }

    #[test]
    fn test_palette_is_deterministic() {
        let a = build_palette();
        let b = build_palette();
        assert_eq!(a, b);
        for (i, color) in a.iter().enumerate() {
            assert_eq!(*color, star_color(i));
            if i == 0 {
                assert_eq!(*color, [0, 0, 0]);
            } else {
                assert_ne!(*color, [0, 0, 0]);
            }
        }
    }

    #[test]
    fn test_scatter_in_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        let field = Starfield::new(&mut rng);
        assert_eq!(field.stars.len(), STAR_COUNT);
        for star in &field.stars {
            assert!((0..SCREEN_WIDTH).contains(&star.x));
            assert!((0..SCREEN_HEIGHT).contains(&star.y));
            assert!(star.color < STAR_PALETTE_LEN);
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = Starfield::new(&mut Pcg32::seed_from_u64(42));
        let b = Starfield::new(&mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_advance_every_other_tick() {
        let mut field = Starfield::new(&mut Pcg32::seed_from_u64(1));
        let before: Vec<i32> = field.stars.iter().map(|s| s.y).collect();

        assert!(!field.advance(1));
        assert_eq!(field.stars.iter().map(|s| s.y).collect::<Vec<_>>(), before);

        assert!(field.advance(2));
        for (star, y) in field.stars.iter().zip(before) {
            assert_eq!(star.y, (y + 1) % SCREEN_HEIGHT);
        }
    }

    #[test]
    fn test_wrap_and_blink() {
        let mut field = Starfield::new(&mut Pcg32::seed_from_u64(1));
        field.stars.truncate(1);
        field.stars[0] = Star {
            x: 5,
            y: SCREEN_HEIGHT - 1,
            color: 3,
            lit: false,
        };

        field.advance(0);
        assert_eq!(field.stars[0].y, 0);
        // 255 has bit 3 set
        assert!(field.stars[0].lit);

        field.advance(0);
        assert_eq!(field.stars[0].y, 1);
        assert!(!field.stars[0].lit);

        for _ in 0..8 {
            field.advance(0);
        }
        // Moved from y = 8, which has bit 3 set
        assert_eq!(field.stars[0].y, 9);
        assert!(field.stars[0].lit);
        assert_eq!(field.lit_stars().count(), 1);
    }

    #[test]
    fn test_palette_survives_serde() {
        let field = Starfield::new(&mut Pcg32::seed_from_u64(3));
        let json = serde_json::to_string(&field).unwrap();
        let restored: Starfield = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, field);
    }
}

//! Alien formation: a fixed 10x10 grid marching left and right
//!
//! Row 0 holds the flagships, row 1 the red escorts, row 2 the purple
//! aliens and the remaining rows the blue drones. Only the horizontal
//! offset of the whole grid moves; slots never change position.

use serde::{Deserialize, Serialize};

use super::player::Missile;
use super::rect::Rect;
use crate::consts::*;

/// Largest horizontal offset that keeps the grid on screen
pub const MAX_OFFSET_X: i32 = SCREEN_WIDTH - FORMATION_COLS as i32 * ALIEN_PITCH_X;

/// The formation marches one pixel every this many ticks
pub const MARCH_INTERVAL: u64 = 3;
/// Explosion frames advance every this many ticks
pub const EXPLOSION_INTERVAL: u64 = 4;
/// March steps per wing-flap animation frame
pub const FLAP_PERIOD: u64 = 16;

/// State of one cell of the grid.
///
/// Transitions only go forward: `Active -> Dying -> Inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Slot {
    #[default]
    Inactive,
    Active,
    Dying { explosion_frame: u32 },
}

/// Horizontal march direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn step(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Colour tier of a row; the value is the sprite sheet row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlienColor {
    Red = 0,
    Purple = 1,
    Blue = 2,
    Yellow = 3,
}

impl AlienColor {
    pub fn for_row(row: usize) -> Self {
        match row {
            0 => AlienColor::Yellow,
            1 => AlienColor::Red,
            2 => AlienColor::Purple,
            _ => AlienColor::Blue,
        }
    }
}

/// What changed during one formation update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormationUpdate {
    /// Cells whose explosion finished this tick
    pub destroyed: Vec<(usize, usize)>,
    /// The formation reversed direction this tick
    pub turned: Option<Direction>,
}

/// The alien grid and its collective motion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    slots: [[Slot; FORMATION_COLS]; FORMATION_ROWS],
    pub offset_x: i32,
    pub direction: Direction,
    /// March steps taken so far; drives the wing-flap animation
    pub march_steps: u64,
}

impl Default for Formation {
    fn default() -> Self {
        Self::new()
    }
}

impl Formation {
    /// Build the arcade starting pattern:
    ///
    /// ```text
    ///          X        X             flagships
    ///       X  X  X  X  X  X          red
    ///    X  X  X  X  X  X  X  X       purple
    /// X  X  X  X  X  X  X  X  X  X    blue (rows 3..9)
    /// ```
    pub fn new() -> Self {
        let mut slots = [[Slot::Inactive; FORMATION_COLS]; FORMATION_ROWS];
        for (row, cells) in slots.iter_mut().enumerate() {
            for (col, slot) in cells.iter_mut().enumerate() {
                let active = match row {
                    0 => col == 3 || col == 6,
                    1 => (2..8).contains(&col),
                    2 => (1..9).contains(&col),
                    _ => true,
                };
                if active {
                    *slot = Slot::Active;
                }
            }
        }
        Self {
            slots,
            offset_x: 0,
            direction: Direction::Right,
            march_steps: 0,
        }
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the grid.
    pub fn slot(&self, row: usize, col: usize) -> Slot {
        self.slots[row][col]
    }

    /// Iterate every cell in scan order (row-major)
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Slot)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| cells.iter().enumerate().map(move |(col, s)| (row, col, *s)))
    }

    /// Number of live (not dying) aliens
    pub fn active_count(&self) -> usize {
        self.cells().filter(|(_, _, s)| *s == Slot::Active).count()
    }

    /// True once every alien has exploded
    pub fn is_cleared(&self) -> bool {
        self.cells().all(|(_, _, s)| s == Slot::Inactive)
    }

    /// Collision box of a cell at the current offset.
    ///
    /// The grid is not indexed; out-of-grid cells give a box past the
    /// formation's edge.
    pub fn slot_rect(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            self.offset_x + ALIEN_PITCH_X * col as i32,
            FORMATION_Y + ALIEN_PITCH_Y * row as i32,
            ALIEN_WIDTH,
            ALIEN_HEIGHT,
        )
    }

    /// Wing-flap frame (0 or 1) for a cell. Flagships do not flap.
    pub fn animation_frame(&self, row: usize, col: usize) -> u32 {
        if row == 0 {
            return 0;
        }
        ((self.march_steps / FLAP_PERIOD + col as u64) % 2) as u32
    }

    /// Test the missile against the grid.
    ///
    /// Cells are scanned row-major and the first live alien hit wins; it
    /// starts exploding and the missile is spent. At most one hit per call.
    ///
    /// Exploding cells are not targets: a missile passes through them and
    /// the explosion keeps its frame instead of restarting from 0.
    pub fn detect_collision(&mut self, missile: &mut Missile) -> Option<(usize, usize)> {
        if !missile.fired {
            return None;
        }
        let missile_rect = missile.rect();
        for row in 0..FORMATION_ROWS {
            for col in 0..FORMATION_COLS {
                if self.slots[row][col] != Slot::Active {
                    continue;
                }
                if self.slot_rect(row, col).intersects(&missile_rect) {
                    self.slots[row][col] = Slot::Dying { explosion_frame: 0 };
                    missile.fired = false;
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Advance explosions and the march for one tick
    pub fn update(&mut self, tick: u64) -> FormationUpdate {
        let mut update = FormationUpdate::default();

        if tick % EXPLOSION_INTERVAL == 0 {
            for (row, cells) in self.slots.iter_mut().enumerate() {
                for (col, slot) in cells.iter_mut().enumerate() {
                    if let Slot::Dying { explosion_frame } = *slot {
                        let next = explosion_frame + 1;
                        if next >= EXPLOSION_FRAMES {
                            *slot = Slot::Inactive;
                            update.destroyed.push((row, col));
                        } else {
                            *slot = Slot::Dying {
                                explosion_frame: next,
                            };
                        }
                    }
                }
            }
        }

        if tick % MARCH_INTERVAL == 0 {
            update.turned = self.march();
        }

        update
    }

    /// Move one pixel, reversing first if already at a bound
    fn march(&mut self) -> Option<Direction> {
        let turned = match self.direction {
            Direction::Left if self.offset_x <= 0 => Some(Direction::Right),
            Direction::Right if self.offset_x >= MAX_OFFSET_X => Some(Direction::Left),
            _ => None,
        };
        if let Some(dir) = turned {
            self.direction = dir;
        }
        self.offset_x += self.direction.step();
        self.march_steps += 1;
        turned
    }

    #[cfg(test)]
    pub(crate) fn set_slot(&mut self, row: usize, col: usize, slot: Slot) {
        self.slots[row][col] = slot;
    }
}

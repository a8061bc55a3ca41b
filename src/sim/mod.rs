//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, counted in `GameState::tick`
//! - Seeded RNG only
//! - Fixed row-major scan order over the formation
//! - No rendering or platform dependencies

pub mod formation;
pub mod player;
pub mod rect;
pub mod starfield;
pub mod state;
pub mod tick;

pub use formation::{AlienColor, Direction, Formation, FormationUpdate, Slot};
pub use player::{Missile, Player};
pub use rect::Rect;
pub use starfield::{Star, Starfield, build_palette, star_color};
pub use state::{GameEvent, GameState};
pub use tick::{FrameInput, begin_frame, finish_frame, tick};

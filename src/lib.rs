//! Galaxian - a fixed-timestep arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (formation, player, missile, starfield)
//! - `renderer`: Software sprite renderer and scale-blit helper
//! - `input`: Held-key and fire-edge tracking
//! - `timestep`: Fixed-step accumulator for the main loop
//! - `settings`: JSON configuration

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod timestep;

pub use input::InputTracker;
pub use settings::Settings;
pub use timestep::FixedTimestep;

/// Game configuration constants
pub mod consts {
    /// Logical screen size (arcade resolution, rotated)
    pub const SCREEN_WIDTH: i32 = 224;
    pub const SCREEN_HEIGHT: i32 = 256;

    /// Integer scale applied to every destination rectangle
    pub const SCALE: i32 = 3;

    /// Fixed simulation rate
    pub const FRAME_RATE: u32 = 60;
    pub const SIM_DT: f32 = 1.0 / FRAME_RATE as f32;
    /// Maximum substeps per update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Formation grid
    pub const FORMATION_ROWS: usize = 10;
    pub const FORMATION_COLS: usize = 10;
    pub const FORMATION_Y: i32 = 10;
    pub const ALIEN_PITCH_X: i32 = 15;
    pub const ALIEN_PITCH_Y: i32 = 12;
    pub const ALIEN_WIDTH: i32 = 16;
    pub const ALIEN_HEIGHT: i32 = 16;
    pub const EXPLOSION_FRAMES: u32 = 4;

    /// Player ship (Galaxip)
    pub const PLAYER_Y: i32 = 220;
    pub const PLAYER_WIDTH: i32 = 13;
    pub const PLAYER_HEIGHT: i32 = 16;

    /// Player missile
    pub const MISSILE_WIDTH: i32 = 1;
    pub const MISSILE_HEIGHT: i32 = 4;
    pub const MISSILE_SPEED_Y: i32 = -4;
    pub const MISSILE_OFFSET_X: i32 = 6;
    pub const MISSILE_OFFSET_Y: i32 = -4;

    /// Starfield
    pub const STAR_COUNT: usize = 100;
    pub const STAR_PALETTE_LEN: usize = 64;
}

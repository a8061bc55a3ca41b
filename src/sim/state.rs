//! Game state and core simulation types
//!
//! Everything a running session owns lives in `GameState`, including the
//! tick counter that gates sub-frame-rate animation.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::formation::{Direction, Formation};
use super::player::{Missile, Player};
use super::starfield::Starfield;

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    MissileFired { x: i32, y: i32 },
    /// The missile left the top of the screen without hitting anything
    MissileExpired,
    AlienHit { row: usize, col: usize },
    /// An alien's explosion finished and its slot is now empty
    AlienDestroyed { row: usize, col: usize },
    FormationTurned { direction: Direction },
    /// The last alien finished exploding
    FormationCleared,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Frames simulated so far
    pub tick: u64,
    pub formation: Formation,
    pub player: Player,
    pub missile: Missile,
    pub starfield: Starfield,
}

impl GameState {
    /// Create a new session; the seed only affects the starfield scatter
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self {
            seed,
            tick: 0,
            formation: Formation::new(),
            player: Player::default(),
            missile: Missile::default(),
            starfield: Starfield::new(&mut rng),
        }
    }
}

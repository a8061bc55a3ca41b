//! Fixed-step accumulator for the main loop
//!
//! Wall-clock time is fed in; whole simulation frames come out.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest wall-clock gap accepted in one update (seconds)
const MAX_FRAME_TIME: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    accumulator: f32,
    dt: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            accumulator: 0.0,
            dt,
        }
    }

    /// Length of one simulation frame (seconds)
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Add elapsed time and return how many frames to simulate now.
    ///
    /// Long stalls are clamped and at most `MAX_SUBSTEPS` frames are
    /// returned, so a slow host drops time instead of spiralling.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < MAX_SUBSTEPS {
            self.accumulator -= self.dt;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.dt);
        }
        steps
    }

    /// Fraction of a frame left over (0..1), for interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.dt).clamp(0.0, 1.0)
    }
}

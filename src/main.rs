//! Galaxian entry point
//!
//! Runs a session in a fixed-timestep loop without a window: the autopilot
//! plays, events are logged, and the last frame can be saved as PNG.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use galaxian::renderer::{Renderer, Rgba, Surface};
use galaxian::sim::{GameEvent, GameState, begin_frame, finish_frame};
use galaxian::{FixedTimestep, InputTracker, Settings};

/// Running totals for the end-of-session summary
#[derive(Debug, Default)]
struct Stats {
    shots: u32,
    hits: u32,
    destroyed: u32,
}

impl Stats {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::MissileFired { .. } => self.shots += 1,
            GameEvent::AlienHit { .. } => self.hits += 1,
            GameEvent::AlienDestroyed { .. } => self.destroyed += 1,
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::load(&Settings::default_path());
    let seed = settings.seed.unwrap_or_else(time_seed);
    log::info!("Galaxian starting with seed: {}", seed);

    let mut renderer = match &settings.spritesheet {
        Some(path) => {
            let mut sheet = Surface::open(path)
                .with_context(|| format!("failed to load sprite sheet {}", path.display()))?;
            sheet.set_color_key(Some(Rgba::from_rgb(settings.color_key)));
            log::info!(
                "Loaded sprite sheet {} ({}x{})",
                path.display(),
                sheet.width(),
                sheet.height()
            );
            Some(Renderer::new(sheet))
        }
        None => {
            log::info!("No sprite sheet configured, running without rendering");
            None
        }
    };
    if settings.snapshot.is_some() && renderer.is_none() {
        log::warn!("Snapshot requested but no sprite sheet configured; none will be written");
    }

    let mut state = GameState::new(seed);
    let mut input = InputTracker::new();
    input.autopilot = settings.autopilot;
    let mut timestep = FixedTimestep::default();
    let mut stats = Stats::default();
    let mut last_time = Instant::now();

    'session: loop {
        let steps = if settings.realtime {
            // Sleep out whatever is left of the current frame
            let wait = timestep.dt() * (1.0 - timestep.alpha());
            std::thread::sleep(Duration::from_secs_f32(wait));
            let now = Instant::now();
            let elapsed = now.duration_since(last_time);
            last_time = now;
            timestep.advance(elapsed.as_secs_f32())
        } else {
            1
        };

        for _ in 0..steps {
            let mut events = begin_frame(&mut state, &input.frame());
            if let Some(renderer) = renderer.as_mut() {
                renderer.render(&state);
            }
            finish_frame(&mut state, &mut events);

            for event in &events {
                log::debug!("tick {}: {:?}", state.tick, event);
                stats.record(event);
            }
            if events.contains(&GameEvent::FormationCleared) {
                log::info!("Formation cleared at tick {}", state.tick);
                break 'session;
            }
            if !settings.is_unbounded() && state.tick >= settings.max_frames {
                break 'session;
            }
        }
    }

    if let (Some(renderer), Some(path)) = (&renderer, &settings.snapshot) {
        renderer
            .frame()
            .save_png(path)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;
        log::info!("Snapshot written to {}", path.display());
    }

    log::info!(
        "Session ended after {} frames: {} shots, {} hits, {} destroyed, {} aliens left",
        state.tick,
        stats.shots,
        stats.hits,
        stats.destroyed,
        state.formation.active_count()
    );
    Ok(())
}

/// Seed from the wall clock when none is configured
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

//! Fixed timestep simulation tick
//!
//! Advances the whole session by one frame in a fixed order: movement,
//! firing, collision, then the animated components. A frame is drawn
//! between the two halves.

use std::cmp::Reverse;

use super::formation::{MARCH_INTERVAL, Slot};
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Left held
    pub left: bool,
    /// Right held
    pub right: bool,
    /// Fire pressed this frame (edge, not held)
    pub fire: bool,
    /// Attract mode - the ship steers and fires by itself
    pub autopilot: bool,
}

/// Advance the game state by one frame and report what happened.
///
/// Shorthand for [`begin_frame`] followed by [`finish_frame`] with nothing
/// drawn in between.
pub fn tick(state: &mut GameState, input: &FrameInput) -> Vec<GameEvent> {
    let mut events = begin_frame(state, input);
    finish_frame(state, &mut events);
    events
}

/// First half of a frame: movement, firing and collision.
///
/// The frame is drawn after this returns, so a fresh hit shows explosion
/// frame 0 and a fresh shot shows the missile at the muzzle, at the same
/// formation offset the collision was tested against.
pub fn begin_frame(state: &mut GameState, input: &FrameInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let input = if input.autopilot {
        autopilot_input(state)
    } else {
        *input
    };

    // Both directions may apply in the same frame and cancel out
    if input.left {
        state.player.move_by(-1);
    }
    if input.right {
        state.player.move_by(1);
    }

    if input.fire && state.missile.shoot(&state.player) {
        events.push(GameEvent::MissileFired {
            x: state.missile.x,
            y: state.missile.y,
        });
    }

    if let Some((row, col)) = state.formation.detect_collision(&mut state.missile) {
        events.push(GameEvent::AlienHit { row, col });
    }

    events
}

/// Second half of a frame, after drawing: stars, explosions, the march
/// and the missile advance, then the tick counter.
pub fn finish_frame(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.starfield.advance(state.tick);

    let update = state.formation.update(state.tick);
    for (row, col) in &update.destroyed {
        events.push(GameEvent::AlienDestroyed {
            row: *row,
            col: *col,
        });
    }
    if let Some(direction) = update.turned {
        events.push(GameEvent::FormationTurned { direction });
    }
    if !update.destroyed.is_empty() && state.formation.is_cleared() {
        events.push(GameEvent::FormationCleared);
    }

    if state.missile.advance() {
        events.push(GameEvent::MissileExpired);
    }

    state.tick += 1;
}

/// Steer under the nearest live alien (lowest first on ties) and fire
/// once the docked missile lines up with where that alien will be when
/// the missile reaches it.
fn autopilot_input(state: &GameState) -> FrameInput {
    let mut input = FrameInput::default();
    let formation = &state.formation;
    let (muzzle_x, muzzle_y) = state.player.muzzle();

    let target = formation
        .cells()
        .filter(|(_, _, slot)| *slot == Slot::Active)
        .map(|(row, col, _)| {
            let rect = formation.slot_rect(row, col);
            // Frames of flight until the missile reaches the alien's bottom edge
            let flight = (muzzle_y - rect.max().y).max(0) / -MISSILE_SPEED_Y;
            let drift = formation.direction.step() * flight / MARCH_INTERVAL as i32;
            (row, rect.x() + rect.width() / 2 + drift)
        })
        .min_by_key(|(row, center)| ((center - muzzle_x).abs(), Reverse(*row)));

    if let Some((_, center)) = target {
        let dx = center - muzzle_x;
        input.left = dx < 0;
        input.right = dx > 0;
        input.fire = dx.abs() <= ALIEN_WIDTH / 4 && !state.missile.fired;
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Missile;
    use crate::sim::formation::MAX_OFFSET_X;
    use crate::sim::player::PLAYER_MAX_X;

    #[test]
    fn test_tick_counts_frames() {
        let mut state = GameState::new(1);
        for _ in 0..10 {
            tick(&mut state, &FrameInput::default());
        }
        assert_eq!(state.tick, 10);
    }

    #[test]
    fn test_both_directions_cancel() {
        let mut state = GameState::new(1);
        let x = state.player.x;
        let input = FrameInput {
            left: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.player.x, x);
    }

    #[test]
    fn test_fire_then_missile_rises() {
        let mut state = GameState::new(1);
        let fire = FrameInput {
            fire: true,
            ..Default::default()
        };
        let events = tick(&mut state, &fire);
        assert!(matches!(events[0], GameEvent::MissileFired { .. }));
        assert!(state.missile.fired);
        assert_eq!(state.missile.y, PLAYER_Y + MISSILE_OFFSET_Y + MISSILE_SPEED_Y);

        // Firing again mid-flight changes nothing
        let before = state.missile;
        let events = tick(&mut state, &fire);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::MissileFired { .. })));
        assert_eq!(state.missile.x, before.x);
        assert_eq!(state.missile.y, before.y + MISSILE_SPEED_Y);
    }

    #[test]
    fn test_missile_past_formation_expires() {
        let mut state = GameState::new(1);
        // The formation's right edge stays well left of the far right muzzle
        state.player.x = PLAYER_MAX_X;
        let fire = FrameInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire);
        let mut expired_at = None;
        for i in 0..100 {
            let events = tick(&mut state, &FrameInput::default());
            assert!(!events.iter().any(|e| matches!(e, GameEvent::AlienHit { .. })));
            if events.contains(&GameEvent::MissileExpired) {
                expired_at = Some(i);
                break;
            }
        }
        // 54 advances in total, the first on the firing frame
        assert_eq!(expired_at, Some(52));
        assert!(!state.missile.fired);
        assert_eq!(state.formation.active_count(), 86);
    }

    #[test]
    fn test_hit_then_destroyed() {
        let mut state = GameState::new(1);
        let fire = FrameInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire);

        let mut hit = None;
        let mut destroyed = None;
        for _ in 0..200 {
            for event in tick(&mut state, &FrameInput::default()) {
                match event {
                    GameEvent::AlienHit { row, col } => hit = Some((row, col)),
                    GameEvent::AlienDestroyed { row, col } => destroyed = Some((row, col)),
                    _ => {}
                }
            }
            if destroyed.is_some() {
                break;
            }
        }
        // Centred ship fires into the bottom blue row
        let hit = hit.expect("missile should hit the formation");
        assert_eq!(hit.0, 9);
        assert_eq!(destroyed, Some(hit));
        assert_eq!(state.formation.slot(hit.0, hit.1), Slot::Inactive);
        assert!(!state.missile.fired);
    }

    #[test]
    fn test_hit_is_fresh_before_finish() {
        let mut state = GameState::new(1);
        state.missile = Missile {
            fired: true,
            x: 3 * ALIEN_PITCH_X + 8,
            y: FORMATION_Y + 9 * ALIEN_PITCH_Y + 14,
        };
        let offset = state.formation.offset_x;

        let mut events = begin_frame(&mut state, &FrameInput::default());
        assert_eq!(events, vec![GameEvent::AlienHit { row: 9, col: 3 }]);
        // What a draw between the halves sees
        assert_eq!(state.formation.slot(9, 3), Slot::Dying { explosion_frame: 0 });
        assert_eq!(state.formation.offset_x, offset);

        // Tick 0 is both an explosion and a march tick
        finish_frame(&mut state, &mut events);
        assert_eq!(state.formation.slot(9, 3), Slot::Dying { explosion_frame: 1 });
        assert_eq!(state.formation.offset_x, offset + 1);
        assert_eq!(state.tick, 1);
    }

    #[test]
    fn test_shot_drawn_at_muzzle_before_finish() {
        let mut state = GameState::new(1);
        let fire = FrameInput {
            fire: true,
            ..Default::default()
        };
        let mut events = begin_frame(&mut state, &fire);
        assert!(matches!(events[0], GameEvent::MissileFired { .. }));
        assert!(state.missile.fired);
        assert_eq!(state.missile.draw_position(&state.player), state.player.muzzle());

        finish_frame(&mut state, &mut events);
        let (x, y) = state.player.muzzle();
        assert_eq!(state.missile.draw_position(&state.player), (x, y + MISSILE_SPEED_Y));
    }

    #[test]
    fn test_invariants_hold_over_long_run() {
        let mut state = GameState::new(5);
        let inputs = [
            FrameInput {
                left: true,
                fire: true,
                ..Default::default()
            },
            FrameInput {
                right: true,
                ..Default::default()
            },
            FrameInput::default(),
        ];
        for i in 0..5000 {
            tick(&mut state, &inputs[(i / 300) % inputs.len()]);
            assert!((0..=PLAYER_MAX_X).contains(&state.player.x));
            assert!((0..=MAX_OFFSET_X).contains(&state.formation.offset_x));
        }
    }

    #[test]
    fn test_autopilot_clears_formation() {
        let mut state = GameState::new(3);
        let input = FrameInput {
            autopilot: true,
            ..Default::default()
        };
        let mut cleared = false;
        for _ in 0..60 * 60 * 10 {
            if tick(&mut state, &input).contains(&GameEvent::FormationCleared) {
                cleared = true;
                break;
            }
        }
        assert!(cleared);
        assert!(state.formation.is_cleared());
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        let input = FrameInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..600 {
            let e1 = tick(&mut state1, &input);
            let e2 = tick(&mut state2, &input);
            assert_eq!(e1, e2);
        }
        assert_eq!(state1, state2);
    }
}

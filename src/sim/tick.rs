//! Fixed timestep simulation tick
//!
//! Pipeline per tick: input -> controller -> integrate -> solid/overlap
//! resolution -> scoreboard.

use serde::{Deserialize, Serialize};

use super::collision::resolve_contacts;
use super::controller::apply_input;
use super::snapshot::SessionSnapshot;
use super::state::GameSession;

/// Held keys for a single tick, already debounced by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

impl TickInput {
    pub fn left() -> Self {
        Self {
            left: true,
            ..Default::default()
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Default::default()
        }
    }

    pub fn jump() -> Self {
        Self {
            up: true,
            ..Default::default()
        }
    }
}

/// Advance the session by one fixed timestep
///
/// Once the outcome is terminal this only reports the frozen state.
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) -> SessionSnapshot {
    if session.is_finished() {
        return SessionSnapshot::capture(session, Vec::new());
    }
    if !dt.is_finite() || dt <= 0.0 {
        log::warn!("Ignoring tick with invalid dt {dt}");
        return SessionSnapshot::capture(session, Vec::new());
    }

    session.time_ticks += 1;

    apply_input(&mut session.entities.player, input, &session.config.tuning);
    session
        .world
        .integrate(&mut session.entities, session.scoreboard.outcome, dt);

    let events = resolve_contacts(&mut session.entities);
    session.scoreboard.apply_all(&events, &mut session.entities);

    SessionSnapshot::capture(session, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::consts::SIM_DT;
    use crate::sim::scoring::Outcome;
    use crate::sim::state::LocomotionState;

    #[test]
    fn test_player_settles_on_ground() {
        let mut session = GameSession::new(SessionConfig::default()).expect("valid");
        session.entities.hazards.clear();

        for _ in 0..240 {
            tick(&mut session, &TickInput::default(), SIM_DT);
        }
        let player = &session.entities.player;
        assert!(player.grounded);
        // Resting on top of the floor at y = 536
        assert!((player.body.aabb().max().y - 536.0).abs() < 1.0);
    }

    #[test]
    fn test_locomotion_follows_input() {
        let mut session = GameSession::new(SessionConfig::default()).expect("valid");
        let snap = tick(&mut session, &TickInput::right(), SIM_DT);
        assert_eq!(snap.player.locomotion, LocomotionState::MovingRight);
        let snap = tick(&mut session, &TickInput::default(), SIM_DT);
        assert_eq!(snap.player.locomotion, LocomotionState::Idle);
    }

    #[test]
    fn test_invalid_dt_ignored() {
        let mut session = GameSession::new(SessionConfig::default()).expect("valid");
        let before = session.entities.player.body.clone();
        let snap = tick(&mut session, &TickInput::right(), f32::NAN);
        assert_eq!(snap.tick, 0);
        assert_eq!(session.entities.player.body, before);
    }

    #[test]
    fn test_frozen_after_loss() {
        let mut session = GameSession::new(SessionConfig::default()).expect("valid");
        // Drop a hazard onto the player
        let player_pos = session.entities.player.body.pos;
        session.entities.hazards[0].body.pos = player_pos;

        let snap = tick(&mut session, &TickInput::default(), SIM_DT);
        assert_eq!(snap.outcome, Outcome::Lost);

        let frozen_tick = session.time_ticks;
        let hazard_pos = session.entities.hazards[1].body.pos;
        for _ in 0..10 {
            tick(&mut session, &TickInput::left(), SIM_DT);
        }
        assert_eq!(session.time_ticks, frozen_tick);
        assert_eq!(session.entities.hazards[1].body.pos, hazard_pos);
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed should produce identical results
        let mut a = GameSession::new(SessionConfig::with_seed(99999)).expect("valid");
        let mut b = GameSession::new(SessionConfig::with_seed(99999)).expect("valid");

        let inputs = [
            TickInput::right(),
            TickInput::jump(),
            TickInput::left(),
            TickInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut a, input, SIM_DT);
                tick(&mut b, input, SIM_DT);
            }
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.entities.player.body, b.entities.player.body);
        for (ha, hb) in a.entities.hazards.iter().zip(&b.entities.hazards) {
            assert_eq!(ha.body, hb.body);
        }
    }
}

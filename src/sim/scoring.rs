//! Score tracking and the win/loss state machine
//!
//! Playing -> Won when every pickup is collected, Playing -> Lost on the first
//! hazard hit. Terminal states never change again; late events are dropped.

use serde::{Deserialize, Serialize};

use super::state::{EntityRegistry, GameEvent};
use crate::error::SessionError;

/// How the session ended, if it has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Playing => "Playing",
            Outcome::Won => "Won",
            Outcome::Lost => "Lost",
        }
    }
}

/// Score and progress for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u64,
    pub total_pickups: u32,
    pub collected_count: u32,
    pub outcome: Outcome,
    /// Points per pickup
    pub pickup_value: u32,
}

impl Scoreboard {
    pub fn with_value(total_pickups: u32, pickup_value: u32) -> Result<Self, SessionError> {
        if total_pickups == 0 {
            return Err(SessionError::InvalidConfiguration(
                "a session needs at least one pickup".to_string(),
            ));
        }
        Ok(Self {
            score: 0,
            total_pickups,
            collected_count: 0,
            outcome: Outcome::Playing,
            pickup_value,
        })
    }

    /// Consume one overlap event
    ///
    /// Returns true if the event changed anything.
    pub fn apply(&mut self, event: &GameEvent, entities: &mut EntityRegistry) -> bool {
        if self.outcome.is_terminal() {
            return false;
        }

        match *event {
            GameEvent::Collected { pickup } => {
                let Some(p) = entities.pickup_mut(pickup) else {
                    log::warn!("Collected event for unknown pickup {pickup}");
                    return false;
                };
                if p.collected {
                    return false;
                }
                p.collect();
                self.score += u64::from(self.pickup_value);
                self.collected_count += 1;
                log::debug!(
                    "Pickup {pickup} collected ({}/{}), score {}",
                    self.collected_count,
                    self.total_pickups,
                    self.score
                );

                if self.collected_count == self.total_pickups {
                    self.outcome = Outcome::Won;
                    log::info!("All pickups collected, session won with score {}", self.score);
                }
                true
            }
            GameEvent::HazardHit { hazard } => {
                if !entities.player.alive {
                    return false;
                }
                entities.player.alive = false;
                self.outcome = Outcome::Lost;
                log::info!("Player hit hazard {hazard}, session lost with score {}", self.score);
                true
            }
        }
    }

    /// Consume a tick's worth of events in order
    pub fn apply_all(&mut self, events: &[GameEvent], entities: &mut EntityRegistry) {
        for event in events {
            self.apply(event, entities);
        }
    }
}

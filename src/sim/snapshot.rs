//! Read-only view of a session handed to the renderer each tick

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::scoring::Outcome;
use super::state::{GameEvent, GameSession, LocomotionState};

/// Player fields the renderer needs for sprite and animation choice
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub locomotion: LocomotionState,
    pub alive: bool,
    pub grounded: bool,
}

/// Everything visible after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub tick: u64,
    pub player: PlayerView,
    /// Positions of pickups not yet collected
    pub pickups: Vec<Vec2>,
    /// Hazards stay visible after a loss
    pub hazards: Vec<Vec2>,
    pub score: u64,
    pub collected: u32,
    pub total_pickups: u32,
    pub outcome: Outcome,
    /// Overlap events produced by this tick
    pub events: Vec<GameEvent>,
}

impl SessionSnapshot {
    pub fn capture(session: &GameSession, events: Vec<GameEvent>) -> Self {
        let entities = &session.entities;
        let player = &entities.player;
        Self {
            tick: session.time_ticks,
            player: PlayerView {
                pos: player.body.pos,
                locomotion: player.locomotion,
                alive: player.alive,
                grounded: player.grounded,
            },
            pickups: entities
                .pickups
                .iter()
                .filter(|p| p.is_available())
                .map(|p| p.body.pos)
                .collect(),
            hazards: entities.hazards.iter().map(|h| h.body.pos).collect(),
            score: session.scoreboard.score,
            collected: session.scoreboard.collected_count,
            total_pickups: session.scoreboard.total_pickups,
            outcome: session.scoreboard.outcome,
            events,
        }
    }

    /// HUD text
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }
}

//! Game state and core simulation types
//!
//! The registry owns every body for the lifetime of a session. Other stages
//! borrow it for the duration of a single tick.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::scoring::{Outcome, Scoreboard};
use super::world::World;
use crate::config::{SessionConfig, Tuning};
use crate::error::{EntityKind, SessionError};

/// Player locomotion, derived from the input snapshot every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LocomotionState {
    #[default]
    Idle,
    MovingLeft,
    MovingRight,
}

/// Outcomes of overlap tests, consumed by the scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player touched an active pickup
    Collected { pickup: u32 },
    /// Player touched a hazard while alive
    HazardHit { hazard: u32 },
}

/// An immovable platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    body: Body,
}

impl Platform {
    pub fn body(&self) -> &Body {
        &self.body
    }
}

/// A collectible
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub body: Body,
    pub collected: bool,
}

impl Pickup {
    /// Active -> Collected, never reverts
    pub fn collect(&mut self) {
        self.collected = true;
        self.body.active = false;
    }

    pub fn is_available(&self) -> bool {
        !self.collected && self.body.active
    }
}

/// A lethal bouncing body; never deactivates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub body: Body,
}

/// The controllable character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub locomotion: LocomotionState,
    pub alive: bool,
    /// Landed on a platform top during the most recent collision pass
    pub grounded: bool,
}

/// Owns every entity of a session, iterated in id order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRegistry {
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub pickups: Vec<Pickup>,
    pub hazards: Vec<Hazard>,
    next_id: u32,
}

impl EntityRegistry {
    /// Build all entities from a layout, drawing random launch parameters from `rng`
    pub fn from_config(config: &SessionConfig, rng: &mut Pcg32) -> Result<Self, SessionError> {
        let level = &config.level;
        let tuning = &config.tuning;

        let player_body = Body::dynamic(
            EntityKind::Player,
            0,
            level.player_start,
            level.player_size,
            Vec2::splat(tuning.player_bounce),
            tuning.player_gravity,
        )?;

        let mut registry = Self {
            player: Player {
                body: player_body,
                locomotion: LocomotionState::Idle,
                alive: true,
                grounded: false,
            },
            platforms: Vec::with_capacity(level.platforms.len()),
            pickups: Vec::with_capacity(level.pickups.len()),
            hazards: Vec::with_capacity(level.hazards.len()),
            next_id: 1,
        };

        for (index, spec) in level.platforms.iter().enumerate() {
            let body = Body::fixed(EntityKind::Platform, index, spec.center, spec.size)?;
            let id = registry.next_entity_id();
            registry.platforms.push(Platform { id, body });
        }

        for (index, &pos) in level.pickups.iter().enumerate() {
            let body = Body::dynamic(
                EntityKind::Pickup,
                index,
                pos,
                level.pickup_size,
                Vec2::new(0.0, pickup_bounce(tuning, rng)),
                tuning.pickup_gravity,
            )?;
            let id = registry.next_entity_id();
            registry.pickups.push(Pickup {
                id,
                body,
                collected: false,
            });
        }

        for (index, &pos) in level.hazards.iter().enumerate() {
            let body = Body::dynamic(
                EntityKind::Hazard,
                index,
                pos,
                level.hazard_size,
                Vec2::splat(tuning.hazard_bounce),
                tuning.hazard_gravity,
            )?
            .with_velocity(hazard_launch_velocity(tuning, rng));
            let id = registry.next_entity_id();
            registry.hazards.push(Hazard { id, body });
        }

        Ok(registry)
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn pickup_mut(&mut self, id: u32) -> Option<&mut Pickup> {
        self.pickups.iter_mut().find(|p| p.id == id)
    }

    #[cfg(test)]
    fn active_pickup_count(&self) -> usize {
        self.pickups.iter().filter(|p| p.is_available()).count()
    }
}

fn pickup_bounce(tuning: &Tuning, rng: &mut Pcg32) -> f32 {
    let (lo, hi) = tuning.pickup_bounce_range;
    if hi > lo { rng.random_range(lo..=hi) } else { lo }
}

fn hazard_launch_velocity(tuning: &Tuning, rng: &mut Pcg32) -> Vec2 {
    let vx = if tuning.hazard_speed_x > 0.0 {
        rng.random_range(-tuning.hazard_speed_x..=tuning.hazard_speed_x)
    } else {
        0.0
    };
    Vec2::new(vx, tuning.hazard_speed_y)
}

/// One play-through: entities, world, and score
///
/// A finished session is never reset in place; `restart` builds a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub config: SessionConfig,
    pub world: World,
    pub entities: EntityRegistry,
    pub scoreboard: Scoreboard,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameSession {
    /// Validate the config and spawn every entity
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(config.seed);
        let entities = EntityRegistry::from_config(&config, &mut rng)?;
        let scoreboard =
            Scoreboard::with_value(entities.pickups.len() as u32, config.tuning.pickup_value)?;
        let world = World::new(config.arena);

        log::info!(
            "Session created (seed {}): {} platforms, {} pickups, {} hazards",
            config.seed,
            entities.platforms.len(),
            entities.pickups.len(),
            entities.hazards.len()
        );

        Ok(Self {
            config,
            world,
            entities,
            scoreboard,
            time_ticks: 0,
        })
    }

    /// Fresh session from the same config
    pub fn restart(&self) -> Result<Self, SessionError> {
        Self::new(self.config.clone())
    }

    pub fn outcome(&self) -> Outcome {
        self.scoreboard.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.scoreboard.outcome.is_terminal()
    }
}

//! Star Catcher - a single-screen platform collector
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, scoring, locomotion)
//! - `config`: Data-driven level layout and tuning
//! - `autopilot`: Demo driver that produces input snapshots
//! - `error`: Construction-time validation errors

pub mod autopilot;
pub mod config;
pub mod error;
pub mod sim;

pub use config::{LevelLayout, PlatformSpec, SessionConfig, Tuning};
pub use error::{EntityKind, SessionError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions (logical units, +y down)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player locomotion
    pub const PLAYER_SPEED: f32 = 160.0;
    pub const JUMP_IMPULSE: f32 = 330.0;
    pub const PLAYER_GRAVITY: f32 = 300.0;
    pub const PLAYER_BOUNCE: f32 = 0.2;

    /// Pickups settle onto platforms with a random vertical bounce
    pub const PICKUP_GRAVITY: f32 = 300.0;
    pub const PICKUP_BOUNCE_MIN: f32 = 0.4;
    pub const PICKUP_BOUNCE_MAX: f32 = 0.8;
    /// Score awarded per pickup
    pub const PICKUP_VALUE: u32 = 10;

    /// Hazards travel in straight lines and bounce elastically
    pub const HAZARD_GRAVITY: f32 = 0.0;
    pub const HAZARD_BOUNCE: f32 = 1.0;
    /// Horizontal launch speed is drawn from [-HAZARD_SPEED_X, HAZARD_SPEED_X]
    pub const HAZARD_SPEED_X: f32 = 100.0;
    pub const HAZARD_SPEED_Y: f32 = 50.0;
}

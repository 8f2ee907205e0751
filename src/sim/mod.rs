//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, input capture or platform dependencies

pub mod aabb;
pub mod body;
pub mod collision;
pub mod controller;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod world;

pub use aabb::Aabb;
pub use body::Body;
pub use collision::{Axis, CollisionResult, overlaps, resolve_contacts, resolve_solid};
pub use controller::apply_input;
pub use scoring::{Outcome, Scoreboard};
pub use snapshot::{PlayerView, SessionSnapshot};
pub use state::{
    EntityRegistry, GameEvent, GameSession, Hazard, LocomotionState, Pickup, Platform, Player,
};
pub use tick::{TickInput, tick};
pub use world::World;

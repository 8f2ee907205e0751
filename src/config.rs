//! Session configuration: level layout and tuning
//!
//! Everything the simulation needs to know about a level is supplied here at
//! session start. Loaded from JSON when a file is given, otherwise the classic
//! layout is used.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SessionError;

/// A static platform rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    /// Center of the rectangle
    pub center: Vec2,
    /// Full width and height
    pub size: Vec2,
}

impl PlatformSpec {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

/// Placement and extents for every entity in the level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelLayout {
    pub platforms: Vec<PlatformSpec>,
    pub player_start: Vec2,
    pub player_size: Vec2,
    pub pickups: Vec<Vec2>,
    pub pickup_size: Vec2,
    pub hazards: Vec<Vec2>,
    pub hazard_size: Vec2,
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self {
            platforms: vec![
                // Ground, stretched across the whole arena floor
                PlatformSpec::new(400.0, 568.0, 800.0, 64.0),
                PlatformSpec::new(600.0, 400.0, 400.0, 32.0),
                PlatformSpec::new(50.0, 250.0, 400.0, 32.0),
                PlatformSpec::new(750.0, 220.0, 400.0, 32.0),
            ],
            player_start: Vec2::new(100.0, 400.0),
            player_size: Vec2::new(32.0, 48.0),
            pickups: vec![
                // Left ledge
                Vec2::new(100.0, 100.0),
                Vec2::new(200.0, 150.0),
                Vec2::new(70.0, 170.0),
                // Upper right ledge
                Vec2::new(600.0, 100.0),
                Vec2::new(650.0, 160.0),
                Vec2::new(750.0, 60.0),
                // Middle ledge
                Vec2::new(600.0, 320.0),
                Vec2::new(700.0, 275.0),
                Vec2::new(770.0, 350.0),
            ],
            pickup_size: Vec2::new(8.0, 8.0),
            hazards: vec![
                Vec2::new(250.0, 40.0),
                Vec2::new(450.0, 40.0),
                Vec2::new(700.0, 120.0),
            ],
            hazard_size: Vec2::new(14.0, 14.0),
        }
    }
}

/// Physics and scoring constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player_speed: f32,
    pub jump_impulse: f32,
    pub player_gravity: f32,
    pub player_bounce: f32,
    pub pickup_gravity: f32,
    /// Vertical bounce for each pickup is drawn from this range
    pub pickup_bounce_range: (f32, f32),
    pub pickup_value: u32,
    pub hazard_gravity: f32,
    pub hazard_bounce: f32,
    pub hazard_speed_x: f32,
    pub hazard_speed_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            jump_impulse: JUMP_IMPULSE,
            player_gravity: PLAYER_GRAVITY,
            player_bounce: PLAYER_BOUNCE,
            pickup_gravity: PICKUP_GRAVITY,
            pickup_bounce_range: (PICKUP_BOUNCE_MIN, PICKUP_BOUNCE_MAX),
            pickup_value: PICKUP_VALUE,
            hazard_gravity: HAZARD_GRAVITY,
            hazard_bounce: HAZARD_BOUNCE,
            hazard_speed_x: HAZARD_SPEED_X,
            hazard_speed_y: HAZARD_SPEED_Y,
        }
    }
}

/// Upper bound on any speed or acceleration in the tuning block
const MAX_MAGNITUDE: f32 = 1.0e6;

impl Tuning {
    /// Reject values that would break the physics model
    pub fn validate(&self) -> Result<(), SessionError> {
        let non_negative = [
            ("player_speed", self.player_speed),
            ("jump_impulse", self.jump_impulse),
            ("player_gravity", self.player_gravity),
            ("pickup_gravity", self.pickup_gravity),
            ("hazard_gravity", self.hazard_gravity),
            ("hazard_speed_x", self.hazard_speed_x),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || !(0.0..=MAX_MAGNITUDE).contains(&value) {
                return Err(SessionError::InvalidConfiguration(format!(
                    "{name} must be within [0, {MAX_MAGNITUDE}], got {value}"
                )));
            }
        }
        if !self.hazard_speed_y.is_finite() || self.hazard_speed_y.abs() > MAX_MAGNITUDE {
            return Err(SessionError::InvalidConfiguration(format!(
                "hazard_speed_y must be within [-{MAX_MAGNITUDE}, {MAX_MAGNITUDE}], got {}",
                self.hazard_speed_y
            )));
        }

        let (lo, hi) = self.pickup_bounce_range;
        if !(0.0..=1.0).contains(&lo) || !(0.0..=1.0).contains(&hi) || lo > hi {
            return Err(SessionError::InvalidConfiguration(format!(
                "pickup_bounce_range must satisfy 0 <= lo <= hi <= 1, got ({lo}, {hi})"
            )));
        }
        for (name, bounce) in [
            ("player_bounce", self.player_bounce),
            ("hazard_bounce", self.hazard_bounce),
        ] {
            if !(0.0..=1.0).contains(&bounce) {
                return Err(SessionError::InvalidConfiguration(format!(
                    "{name} must be within [0, 1], got {bounce}"
                )));
            }
        }
        Ok(())
    }
}

/// Everything needed to create a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed for hazard launch velocities and pickup bounce
    pub seed: u64,
    /// Arena width and height
    pub arena: Vec2,
    pub tuning: Tuning,
    pub level: LevelLayout,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            arena: Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
            tuning: Tuning::default(),
            level: LevelLayout::default(),
        }
    }
}

impl SessionConfig {
    /// Classic layout with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        serde_json::from_str(json).map_err(|e| SessionError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load config from a JSON file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_json(&content) {
                Ok(config) => {
                    log::info!("Loaded session config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Session-wide checks; per-entity checks happen when bodies are built
    pub fn validate(&self) -> Result<(), SessionError> {
        if !(self.arena.x.is_finite() && self.arena.y.is_finite())
            || self.arena.x <= 0.0
            || self.arena.y <= 0.0
        {
            return Err(SessionError::InvalidConfiguration(format!(
                "arena must have positive size, got {}x{}",
                self.arena.x, self.arena.y
            )));
        }
        if self.level.pickups.is_empty() {
            return Err(SessionError::InvalidConfiguration(
                "at least one pickup is required, otherwise the game can never be won".to_string(),
            ));
        }
        self.tuning.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_classic_scene() {
        let config = SessionConfig::default();
        assert_eq!(config.level.platforms.len(), 4);
        assert_eq!(config.level.pickups.len(), 9);
        assert_eq!(config.level.hazards.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_pickups_rejected() {
        let mut config = SessionConfig::default();
        config.level.pickups.clear();
        assert!(matches!(
            config.validate(),
            Err(SessionError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_bad_bounce_range_rejected() {
        let mut config = SessionConfig::default();
        config.tuning.pickup_bounce_range = (0.9, 0.3);
        assert!(config.validate().is_err());

        let mut config = SessionConfig::default();
        config.tuning.hazard_bounce = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_huge_hazard_speed_rejected() {
        let mut config = SessionConfig::default();
        config.tuning.hazard_speed_x = 3.0e38;
        assert!(matches!(
            config.validate(),
            Err(SessionError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            crate::sim::GameSession::new(config),
            Err(SessionError::InvalidConfiguration(_))
        ));

        let mut config = SessionConfig::default();
        config.tuning.hazard_speed_y = -f32::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SessionConfig::from_json(r#"{ "seed": 42, "tuning": { "pickup_value": 25 } }"#)
            .expect("valid json");
        assert_eq!(config.seed, 42);
        assert_eq!(config.tuning.pickup_value, 25);
        assert_eq!(config.tuning.player_speed, PLAYER_SPEED);
        assert_eq!(config.level.pickups.len(), 9);
    }

    #[test]
    fn test_json_roundtrip_preserves_layout() {
        let config = SessionConfig::with_seed(7);
        let parsed = SessionConfig::from_json(&config.to_json()).expect("roundtrip");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        assert!(matches!(
            SessionConfig::from_json("{ not json"),
            Err(SessionError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = SessionConfig::load("/definitely/not/here.json");
        assert_eq!(config, SessionConfig::default());
    }
}

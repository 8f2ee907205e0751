//! Validation errors raised while building a session
//!
//! The simulation itself has no I/O; everything here is caught before the
//! first tick runs.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which entity collection a bad definition came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Platform,
    Pickup,
    Hazard,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Player => "player",
            EntityKind::Platform => "platform",
            EntityKind::Pickup => "pickup",
            EntityKind::Hazard => "hazard",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while creating a session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Session-wide settings that make the game unwinnable or nonsensical
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A single entity with a degenerate extent or bad physical parameters
    #[error("invalid {kind} #{index}: {reason}")]
    InvalidEntity {
        kind: EntityKind,
        index: usize,
        reason: String,
    },

    /// Config text could not be parsed
    #[error("config parse error: {0}")]
    Config(String),
}

impl SessionError {
    pub(crate) fn entity(kind: EntityKind, index: usize, reason: impl Into<String>) -> Self {
        SessionError::InvalidEntity {
            kind,
            index,
            reason: reason.into(),
        }
    }
}

//! Demo driver
//!
//! Plays the game by producing ordinary input snapshots, the same way a
//! keyboard would. The simulation never knows it is being driven.

use glam::Vec2;

use crate::sim::{GameSession, TickInput};

/// Hazards closer than this horizontally are dodged
const DANGER_X: f32 = 90.0;
/// ... when they are also within this vertical band
const DANGER_Y: f32 = 70.0;
/// Stop steering once this close to the target column
const ARRIVE_X: f32 = 4.0;

/// Choose the input for the next tick
pub fn drive(session: &GameSession) -> TickInput {
    if session.is_finished() {
        return TickInput::default();
    }

    let player = &session.entities.player;
    let pos = player.body.pos;

    // Dodge first: step away from the closest threatening hazard
    let threat = session
        .entities
        .hazards
        .iter()
        .map(|h| h.body.pos)
        .filter(|h| (h.x - pos.x).abs() < DANGER_X && (h.y - pos.y).abs() < DANGER_Y)
        .min_by(|a, b| {
            a.distance_squared(pos)
                .partial_cmp(&b.distance_squared(pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    if let Some(hazard) = threat {
        let flee_right = hazard.x <= pos.x;
        return TickInput {
            left: !flee_right,
            right: flee_right,
            up: player.grounded && hazard.y > pos.y,
        };
    }

    let Some(target) = nearest_pickup(session, pos) else {
        return TickInput::default();
    };

    let dx = target.x - pos.x;
    let above = target.y < pos.y - player.body.half().y;
    TickInput {
        left: dx < -ARRIVE_X,
        right: dx > ARRIVE_X,
        up: above && player.grounded,
    }
}

fn nearest_pickup(session: &GameSession, from: Vec2) -> Option<Vec2> {
    session
        .entities
        .pickups
        .iter()
        .filter(|p| p.is_available())
        .map(|p| p.body.pos)
        .min_by(|a, b| {
            a.distance_squared(from)
                .partial_cmp(&b.distance_squared(from))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

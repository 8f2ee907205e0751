//! Collision detection and response for axis-aligned boxes
//!
//! Two kinds of contact:
//! - solid: push the moving body out of a platform and reflect its velocity
//! - overlap: report the touch as an event, no positional correction
//!
//! All solid pairs are resolved before any overlap test so overlap sees
//! post-correction positions.

use glam::Vec2;

use super::body::Body;
use super::state::{EntityRegistry, GameEvent};

/// Axis along which a solid contact was separated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Result of a solid collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Separation axis (meaningful only when hit)
    pub axis: Axis,
    /// Unit normal pointing from the fixed body toward the moving one
    pub normal: Vec2,
    /// Penetration depth that was corrected
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            axis: Axis::Y,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }

    /// Moving body was pushed up out of the fixed body's top face
    pub fn landed(&self) -> bool {
        self.hit && self.axis == Axis::Y && self.normal.y < 0.0
    }
}

/// Separate `moving` from `fixed` along the axis of least penetration
///
/// Equal depths resolve along Y so a body resting on a ledge corner still
/// counts as standing on it. Velocity along the contact axis is reflected and
/// scaled by the moving body's bounce, but only when heading into the surface.
pub fn resolve_solid(moving: &mut Body, fixed: &Body) -> CollisionResult {
    if !moving.active || !fixed.active {
        return CollisionResult::miss();
    }
    let Some(depth) = moving.aabb().penetration(&fixed.aabb()) else {
        return CollisionResult::miss();
    };

    let delta = moving.pos - fixed.pos;
    let (axis, normal, penetration) = if depth.x < depth.y {
        let sign = if delta.x < 0.0 { -1.0 } else { 1.0 };
        (Axis::X, Vec2::new(sign, 0.0), depth.x)
    } else {
        // Center exactly level or above pushes up: ties favor landing
        let sign = if delta.y > 0.0 { 1.0 } else { -1.0 };
        (Axis::Y, Vec2::new(0.0, sign), depth.y)
    };

    moving.pos += normal * penetration;

    match axis {
        Axis::X => {
            if moving.vel.x * normal.x < 0.0 {
                moving.vel.x = -moving.vel.x * moving.bounce.x;
            }
        }
        Axis::Y => {
            if moving.vel.y * normal.y < 0.0 {
                moving.vel.y = -moving.vel.y * moving.bounce.y;
            }
        }
    }

    CollisionResult {
        hit: true,
        axis,
        normal,
        penetration,
    }
}

/// Non-physical overlap test between two active bodies
#[inline]
pub fn overlaps(a: &Body, b: &Body) -> bool {
    a.active && b.active && a.aabb().intersects(&b.aabb())
}

/// Run one collision pass over the registry
///
/// Recomputes `player.grounded` from scratch and returns the overlap events
/// in id order: pickups first, then hazards.
pub fn resolve_contacts(entities: &mut EntityRegistry) -> Vec<GameEvent> {
    let EntityRegistry {
        player,
        platforms,
        pickups,
        hazards,
        ..
    } = entities;

    // --- SOLID PASS ---
    player.grounded = false;
    for platform in platforms.iter() {
        let result = resolve_solid(&mut player.body, platform.body());
        if result.landed() {
            player.grounded = true;
        }
    }
    for pickup in pickups.iter_mut() {
        for platform in platforms.iter() {
            resolve_solid(&mut pickup.body, platform.body());
        }
    }
    for hazard in hazards.iter_mut() {
        for platform in platforms.iter() {
            resolve_solid(&mut hazard.body, platform.body());
        }
    }

    // --- OVERLAP PASS ---
    let mut events = Vec::new();
    for pickup in pickups.iter() {
        if pickup.is_available() && overlaps(&player.body, &pickup.body) {
            events.push(GameEvent::Collected { pickup: pickup.id });
        }
    }
    if player.alive {
        for hazard in hazards.iter() {
            if overlaps(&player.body, &hazard.body) {
                events.push(GameEvent::HazardHit { hazard: hazard.id });
            }
        }
    }

    if !events.is_empty() {
        log::trace!("Contact events: {events:?}");
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntityKind;

    fn platform(center: Vec2, size: Vec2) -> Body {
        Body::fixed(EntityKind::Platform, 0, center, size).expect("valid platform")
    }

    fn mover(center: Vec2, size: Vec2, vel: Vec2, bounce: f32) -> Body {
        Body::dynamic(EntityKind::Player, 0, center, size, Vec2::splat(bounce), 0.0)
            .expect("valid body")
            .with_velocity(vel)
    }

    #[test]
    fn test_landing_pushes_up_and_damps() {
        let ground = platform(Vec2::new(400.0, 568.0), Vec2::new(800.0, 64.0));
        // Bottom edge at 538, two units into the ground
        let mut body = mover(
            Vec2::new(100.0, 514.0),
            Vec2::new(32.0, 48.0),
            Vec2::new(0.0, 100.0),
            0.2,
        );

        let result = resolve_solid(&mut body, &ground);
        assert!(result.landed());
        assert!((body.pos.y - 512.0).abs() < 1e-4);
        assert!((body.vel.y - -20.0).abs() < 1e-4);
    }

    #[test]
    fn test_side_hit_reflects_x() {
        let wall = platform(Vec2::new(200.0, 300.0), Vec2::new(40.0, 200.0));
        // Right edge at 182, two units into the wall's left face at 180
        let mut body = mover(
            Vec2::new(175.0, 300.0),
            Vec2::new(14.0, 14.0),
            Vec2::new(80.0, 10.0),
            1.0,
        );

        let result = resolve_solid(&mut body, &wall);
        assert!(result.hit);
        assert_eq!(result.axis, Axis::X);
        assert!(!result.landed());
        assert!((body.pos.x - 173.0).abs() < 1e-4);
        assert_eq!(body.vel, Vec2::new(-80.0, 10.0));
    }

    #[test]
    fn test_ceiling_hit_is_not_landing() {
        let ledge = platform(Vec2::new(400.0, 200.0), Vec2::new(400.0, 32.0));
        // Top edge at 214, two units into the ledge's bottom face at 216
        let mut body = mover(
            Vec2::new(400.0, 238.0),
            Vec2::new(32.0, 48.0),
            Vec2::new(0.0, -200.0),
            0.0,
        );

        let result = resolve_solid(&mut body, &ledge);
        assert!(result.hit);
        assert!(!result.landed());
        assert!((body.pos.y - 240.0).abs() < 1e-4);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_equal_depth_resolves_y() {
        let block = platform(Vec2::new(100.0, 100.0), Vec2::new(20.0, 20.0));
        // Corner overlap of 2x2
        let mut body = mover(
            Vec2::new(88.0, 88.0),
            Vec2::new(8.0, 8.0),
            Vec2::new(10.0, 10.0),
            0.0,
        );

        let result = resolve_solid(&mut body, &block);
        assert_eq!(result.axis, Axis::Y);
        assert!(result.landed());
        assert_eq!(body.pos, Vec2::new(88.0, 86.0));
    }

    #[test]
    fn test_moving_away_keeps_velocity() {
        let ground = platform(Vec2::new(400.0, 568.0), Vec2::new(800.0, 64.0));
        let mut body = mover(
            Vec2::new(100.0, 513.0),
            Vec2::new(32.0, 48.0),
            Vec2::new(0.0, -50.0),
            0.2,
        );
        resolve_solid(&mut body, &ground);
        assert_eq!(body.vel.y, -50.0);
    }

    #[test]
    fn test_separated_bodies_miss() {
        let ground = platform(Vec2::new(400.0, 568.0), Vec2::new(800.0, 64.0));
        let mut body = mover(Vec2::new(100.0, 400.0), Vec2::new(32.0, 48.0), Vec2::ZERO, 0.2);
        let before = body.clone();
        assert!(!resolve_solid(&mut body, &ground).hit);
        assert_eq!(body, before);
    }

    #[test]
    fn test_overlap_ignores_inactive() {
        let a = mover(Vec2::new(100.0, 100.0), Vec2::new(10.0, 10.0), Vec2::ZERO, 0.0);
        let mut b = mover(Vec2::new(104.0, 100.0), Vec2::new(10.0, 10.0), Vec2::ZERO, 0.0);
        assert!(overlaps(&a, &b));
        b.active = false;
        assert!(!overlaps(&a, &b));
    }
}

//! Bounded arena and gravity integration

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::scoring::Outcome;
use super::state::EntityRegistry;

/// Fixed-size arena with its origin at the top-left, +y down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub size: Vec2,
}

impl World {
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }

    /// Advance every active dynamic body by `dt`
    ///
    /// No-op once the session has a terminal outcome; the host keeps calling
    /// after a win or loss and the bodies must stay put.
    pub fn integrate(&self, entities: &mut EntityRegistry, outcome: Outcome, dt: f32) {
        if outcome.is_terminal() {
            return;
        }

        self.integrate_body(&mut entities.player.body, dt);
        for pickup in &mut entities.pickups {
            self.integrate_body(&mut pickup.body, dt);
        }
        for hazard in &mut entities.hazards {
            self.integrate_body(&mut hazard.body, dt);
        }
    }

    fn integrate_body(&self, body: &mut Body, dt: f32) {
        if !body.active {
            return;
        }
        body.vel.y += body.gravity_scale * dt;
        body.pos += body.vel * dt;
        if body.collides_with_bounds {
            self.contain(body);
        }
    }

    /// Clamp a body inside the arena, reflecting the velocity on each clamped axis
    pub fn contain(&self, body: &mut Body) {
        let half = body.half();
        // A body larger than the arena is pinned to the min edge
        let max = (self.size - half).max(half);

        if body.pos.x < half.x {
            body.pos.x = half.x;
            body.vel.x = body.vel.x.abs() * body.bounce.x;
        } else if body.pos.x > max.x {
            body.pos.x = max.x;
            body.vel.x = -body.vel.x.abs() * body.bounce.x;
        }

        if body.pos.y < half.y {
            body.pos.y = half.y;
            body.vel.y = body.vel.y.abs() * body.bounce.y;
        } else if body.pos.y > max.y {
            body.pos.y = max.y;
            body.vel.y = -body.vel.y.abs() * body.bounce.y;
        }
    }

    /// Whether a body's extent lies entirely inside the arena
    pub fn contains(&self, body: &Body) -> bool {
        let aabb = body.aabb();
        let (min, max) = (aabb.min(), aabb.max());
        min.x >= 0.0 && min.y >= 0.0 && max.x <= self.size.x && max.y <= self.size.y
    }
}

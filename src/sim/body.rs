//! Kinematic body shared by every entity
//!
//! Static and dynamic bodies are the same struct; a platform is simply a body
//! with no gravity that the world never integrates.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::error::{EntityKind, SessionError};

/// Per-entity physics state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    /// Full width and height
    pub size: Vec2,
    /// Fraction of velocity kept (and reversed) on contact, per axis, in [0, 1]
    pub bounce: Vec2,
    /// Downward acceleration in units/s²
    pub gravity_scale: f32,
    /// Kept inside the arena by the world
    pub collides_with_bounds: bool,
    /// Inactive bodies are skipped by physics and collision but keep their position
    pub active: bool,
}

impl Body {
    /// Build a dynamic body, rejecting degenerate extents
    pub fn dynamic(
        kind: EntityKind,
        index: usize,
        pos: Vec2,
        size: Vec2,
        bounce: Vec2,
        gravity_scale: f32,
    ) -> Result<Self, SessionError> {
        validate_shape(kind, index, pos, size)?;
        if !(0.0..=1.0).contains(&bounce.x) || !(0.0..=1.0).contains(&bounce.y) {
            return Err(SessionError::entity(
                kind,
                index,
                format!("bounce {bounce} outside [0, 1]"),
            ));
        }
        if !gravity_scale.is_finite() {
            return Err(SessionError::entity(kind, index, "non-finite gravity"));
        }
        Ok(Self {
            pos,
            vel: Vec2::ZERO,
            size,
            bounce,
            gravity_scale,
            collides_with_bounds: true,
            active: true,
        })
    }

    /// Build an immovable body
    pub fn fixed(
        kind: EntityKind,
        index: usize,
        pos: Vec2,
        size: Vec2,
    ) -> Result<Self, SessionError> {
        validate_shape(kind, index, pos, size)?;
        Ok(Self {
            pos,
            vel: Vec2::ZERO,
            size,
            bounce: Vec2::ZERO,
            gravity_scale: 0.0,
            collides_with_bounds: false,
            active: true,
        })
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    #[inline]
    pub fn half(&self) -> Vec2 {
        self.size * 0.5
    }
}

fn validate_shape(
    kind: EntityKind,
    index: usize,
    pos: Vec2,
    size: Vec2,
) -> Result<(), SessionError> {
    if !pos.is_finite() {
        return Err(SessionError::entity(kind, index, format!("non-finite position {pos}")));
    }
    if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
        return Err(SessionError::entity(
            kind,
            index,
            format!("degenerate extent {}x{}", size.x, size.y),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_area_rejected() {
        let err = Body::fixed(EntityKind::Platform, 2, Vec2::new(10.0, 10.0), Vec2::new(0.0, 5.0))
            .unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidEntity {
                kind: EntityKind::Platform,
                index: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_negative_extent_rejected() {
        let result = Body::dynamic(
            EntityKind::Hazard,
            0,
            Vec2::new(10.0, 10.0),
            Vec2::new(14.0, -14.0),
            Vec2::ONE,
            0.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_bounce_out_of_range_rejected() {
        let result = Body::dynamic(
            EntityKind::Player,
            0,
            Vec2::new(10.0, 10.0),
            Vec2::new(32.0, 48.0),
            Vec2::new(0.2, 1.5),
            300.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_fixed_body_is_static() {
        let body = Body::fixed(
            EntityKind::Platform,
            0,
            Vec2::new(400.0, 568.0),
            Vec2::new(800.0, 64.0),
        )
        .expect("valid platform");
        assert_eq!(body.gravity_scale, 0.0);
        assert_eq!(body.vel, Vec2::ZERO);
        assert!(!body.collides_with_bounds);
        assert_eq!(body.aabb().min(), Vec2::new(0.0, 536.0));
    }
}

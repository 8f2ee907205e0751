//! Axis-aligned bounding boxes
//!
//! Every entity is a rectangle described by its center and half extents.
//! Overlap is strict: boxes that only share an edge do not intersect.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size * 0.5,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    /// Strict intersection test
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }

    /// Penetration depth on each axis, or `None` when the boxes are apart
    pub fn penetration(&self, other: &Aabb) -> Option<Vec2> {
        if !self.intersects(other) {
            return None;
        }
        let overlap_x = (self.max().x - other.min().x).min(other.max().x - self.min().x);
        let overlap_y = (self.max().y - other.min().y).min(other.max().y - self.min().y);
        Some(Vec2::new(overlap_x, overlap_y))
    }
}

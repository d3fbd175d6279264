//! Axis-aligned bounding boxes
//!
//! Boxes are derived on demand from an entity's position and half-size,
//! never stored. Only the ball-vs-paddle query uses them; the walls are
//! plain coordinate comparisons.

use glam::Vec2;

/// Center/half-extent box on the normalized play-field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extent: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half_extent: Vec2) -> Self {
        debug_assert!(
            half_extent.x >= 0.0 && half_extent.y >= 0.0,
            "half extents must be non-negative"
        );
        Self {
            center,
            half_extent,
        }
    }

    /// Strict overlap test on both axes; boxes that merely touch along an
    /// edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        (self.center.x - other.center.x).abs() < self.half_extent.x + other.half_extent.x
            && (self.center.y - other.center.y).abs() < self.half_extent.y + other.half_extent.y
    }
}

//! Axis-aligned box used for landing checks and debug outlines.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let max = Vector2::new(position.x + self.size.x, position.y + self.size.y);
        (position, max)
    }

    /// (x, y, w, h) rectangle for drawing.
    pub fn get_aabb(&self, position: Vector2) -> (f32, f32, f32, f32) {
        (position.x, position.y, self.size.x, self.size.y)
    }

    /// Y coordinate of the bottom edge at `position`.
    pub fn bottom(&self, position: Vector2) -> f32 {
        position.y + self.size.y
    }

    /// Strict overlap of the horizontal extents of two boxes.
    ///
    /// Boxes that only touch at an edge do not overlap.
    pub fn overlaps_horizontally(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        max_a.x > min_b.x && min_a.x < max_b.x
    }
}

//! World-space position component.
//!
//! [`MapPosition`] is the top-left corner of an entity's box in screen pixels.
//! The world scrolls instead of the camera, so world space and screen space
//! are the same coordinate system: x grows to the right, y grows downwards.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    /// Move the position by `dx`, `dy`.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pos.x += dx;
        self.pos.y += dy;
    }
}

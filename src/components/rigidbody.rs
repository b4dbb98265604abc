//! Vertical kinematic body.
//!
//! The [`RigidBody`] component stores the player's velocity and the constant
//! gravity added to it every frame. Units are pixels per frame: the
//! simulation runs at a fixed tick and does not scale by frame time.
//!
//! Velocity is written by exactly three places: the gravity integration in
//! [`crate::systems::movement::gravity_system`], a jump release in
//! [`crate::systems::jump::jump_charge_controller`], and a landing in
//! [`crate::systems::collision::landing_resolver`].

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in pixels per frame. Only `y` is integrated.
    pub velocity: Vector2,
    /// Added to `velocity.y` every frame.
    pub gravity: f32,
}

impl RigidBody {
    /// Create a RigidBody at rest under the given gravity.
    pub fn new(gravity: f32) -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            gravity,
        }
    }

    /// Same body with an initial vertical velocity.
    pub fn with_velocity_y(mut self, velocity_y: f32) -> Self {
        self.velocity.y = velocity_y;
        self
    }

    /// Arrest vertical motion.
    pub fn stop_vertical(&mut self) {
        self.velocity.y = 0.0;
    }

    /// Advance one frame: add gravity to the velocity and return the
    /// vertical displacement to apply to the position.
    pub fn integrate(&mut self) -> f32 {
        self.velocity.y += self.gravity;
        self.velocity.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rigidbody_new_at_rest() {
        let rb = RigidBody::new(0.3);
        assert!(approx_eq(rb.velocity.y, 0.0));
        assert!(approx_eq(rb.gravity, 0.3));
    }

    #[test]
    fn test_integrate_accumulates_gravity() {
        let mut rb = RigidBody::new(0.3).with_velocity_y(1.0);
        assert!(approx_eq(rb.integrate(), 1.3));
        assert!(approx_eq(rb.integrate(), 1.6));
        assert!(approx_eq(rb.velocity.y, 1.6));
    }

    #[test]
    fn test_stop_vertical() {
        let mut rb = RigidBody::new(0.3).with_velocity_y(-12.0);
        rb.stop_vertical();
        assert!(approx_eq(rb.velocity.y, 0.0));
    }
}

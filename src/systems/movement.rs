//! Movement systems.
//!
//! - [`horizontal_movement`] steps the player left/right inside the screen
//!   and advances the walk animation.
//! - [`gravity_system`] integrates gravity into velocity and velocity into
//!   position for every rigid body.
use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;

/// Move the player by a fixed step while left/right is held.
///
/// Left and right are applied one after the other, each only if the player
/// is still inside the screen on that side. Every applied step advances the
/// animation by one frame; standing still leaves it alone.
pub fn horizontal_movement(
    input: Res<InputState>,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
    mut query: Query<(&mut MapPosition, &BoxCollider, &mut Animation), With<Player>>,
) {
    for (mut position, collider, mut animation) in query.iter_mut() {
        if input.left.active && position.pos.x > 0.0 {
            position.translate(-config.move_step, 0.0);
            animation.advance();
        }
        if input.right.active && position.pos.x < screen.width() - collider.width() {
            position.translate(config.move_step, 0.0);
            animation.advance();
        }
    }
}

/// Apply gravity, then move by the new velocity. Runs every frame for every
/// body; standing on something is enforced only by the landing check.
pub fn gravity_system(mut query: Query<(&mut MapPosition, &mut RigidBody)>) {
    for (mut position, mut rigidbody) in query.iter_mut() {
        let dy = rigidbody.integrate();
        position.translate(0.0, dy);
    }
}

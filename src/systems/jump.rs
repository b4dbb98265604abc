//! Jump charge/release controller.
//!
//! Translates the jump key into [`JumpCharge`] transitions. A release writes
//! the charged power into the player's vertical velocity.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::jumpcharge::JumpCharge;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;

pub fn jump_charge_controller(
    input: Res<InputState>,
    config: Res<GameConfig>,
    mut query: Query<(&mut JumpCharge, &mut RigidBody), With<Player>>,
) {
    for (mut charge, mut rb) in query.iter_mut() {
        if input.jump.active {
            charge.hold(config.jump_charge_rate, config.max_jump_power);
            debug_assert!(
                charge.power >= config.max_jump_power,
                "jump power {} past clamp {}",
                charge.power,
                config.max_jump_power
            );
        } else if let Some(power) = charge.release() {
            debug!("Jump released with power {}", power);
            rb.velocity.y = power;
        }
    }
}

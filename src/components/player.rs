use bevy_ecs::prelude::Component;

/// Tag for the single player-controlled entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct Player;

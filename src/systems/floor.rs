//! Floor visibility timer.
//!
//! Hides the [`Floor`] once [`WorldTime::elapsed`] reaches
//! [`GameConfig::floor_timeout`]. The deadline is polled every frame against
//! the elapsed-time anchor; nothing is scheduled.
use bevy_ecs::prelude::*;
use log::info;

use crate::components::floor::Floor;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

pub fn update_floor_visibility(
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    mut query: Query<&mut Floor>,
) {
    if time.elapsed < config.floor_timeout {
        return;
    }
    for mut floor in query.iter_mut() {
        if floor.is_visible() && floor.hide() {
            info!("Floor hidden after {} ms", time.elapsed_ms());
        }
    }
}

//! World scroller.
//!
//! The camera never moves. When the player climbs above the top quarter of
//! the screen the world is shifted down instead: the player and every
//! platform move down by [`GameConfig::scroll_step`]. Platforms pushed past
//! the bottom edge are recycled in place to a random spot just above the
//! top edge, which keeps the population fixed and scores a point each.

use bevy_ecs::prelude::*;
use log::debug;
use std::ops::RangeInclusive;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::platform::Platform;
use crate::components::player::Player;
use crate::game::PLATFORM_COUNT;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rng::GameRng;
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;

/// Band of y values, above the visible area, that recycled platforms land in.
pub const RECYCLE_Y_RANGE: RangeInclusive<i32> = -50..=-10;

/// Valid x values for a platform of `width` on `screen`.
pub fn platform_x_range(screen: &ScreenSize, width: f32) -> RangeInclusive<i32> {
    0..=(screen.w - width as i32).max(0)
}

pub fn world_scroller(
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
    mut rng: ResMut<GameRng>,
    mut score: ResMut<Score>,
    mut player: Query<&mut MapPosition, With<Player>>,
    mut platforms: Query<(&mut MapPosition, &BoxCollider, &Platform), Without<Player>>,
) {
    debug_assert_eq!(
        platforms.iter().count(),
        PLATFORM_COUNT,
        "platform population drifted"
    );

    let Ok(mut player_pos) = player.single_mut() else {
        return;
    };
    if player_pos.pos.y >= screen.scroll_threshold() {
        return;
    }

    let step = config.scroll_step;
    player_pos.translate(0.0, step);

    for (mut position, collider, platform) in platforms.iter_mut() {
        position.translate(0.0, step);
        if position.pos.y > screen.height() {
            position.pos.y = rng.coord(RECYCLE_Y_RANGE);
            position.pos.x = rng.coord(platform_x_range(&screen, collider.width()));
            score.add(1);
            debug!(
                "Recycled platform {} to ({}, {}), score {}",
                platform.slot,
                position.pos.x,
                position.pos.y,
                score.get()
            );
        }
    }
}

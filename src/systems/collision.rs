//! Landing resolution.
//!
//! [`find_landing`] is the pure check: given the player's box and vertical
//! velocity, the platforms in slot order and the floor (if visible), it
//! picks the surface the player lands on this frame, if any.
//! [`landing_resolver`] is the system that applies the result: it snaps the
//! player on top of the surface, stops vertical motion and scores a point.
//!
//! # Rules
//!
//! A platform lands the player when all of these hold:
//! - the player's bottom edge is at or above the platform top,
//! - moving by the current velocity would reach or cross the top,
//! - the horizontal extents overlap strictly.
//!
//! The floor spans the whole screen and is solid: any bottom edge at or below
//! its top lands the player.
//!
//! Platforms are checked before the floor, in slot order; the first match wins
//! and nothing else is checked that frame.

use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::floor::Floor;
use crate::components::mapposition::MapPosition;
use crate::components::platform::Platform;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::score::Score;

/// What the player landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Landing {
    Platform { slot: usize, top: f32 },
    Floor { top: f32 },
}

impl Landing {
    /// Y of the surface the player now stands on.
    pub fn top(&self) -> f32 {
        match self {
            Landing::Platform { top, .. } | Landing::Floor { top } => *top,
        }
    }
}

/// A platform as seen by the landing check.
#[derive(Debug, Clone, Copy)]
pub struct PlatformBox {
    pub slot: usize,
    pub pos: Vector2,
    pub collider: BoxCollider,
}

/// Decide what, if anything, the player lands on this frame.
///
/// `platforms` must already be in iteration order. Pass `floor = None` when
/// the floor is hidden.
pub fn find_landing(
    player_pos: Vector2,
    player_collider: &BoxCollider,
    velocity_y: f32,
    platforms: &[PlatformBox],
    floor: Option<(Vector2, BoxCollider)>,
) -> Option<Landing> {
    let bottom = player_collider.bottom(player_pos);

    for platform in platforms {
        let top = platform.pos.y;
        if bottom <= top
            && bottom + velocity_y >= top
            && player_collider.overlaps_horizontally(player_pos, &platform.collider, platform.pos)
        {
            return Some(Landing::Platform {
                slot: platform.slot,
                top,
            });
        }
    }

    match floor {
        Some((floor_pos, _)) if bottom >= floor_pos.y => Some(Landing::Floor { top: floor_pos.y }),
        _ => None,
    }
}

/// Land the player on the first eligible surface and score the landing.
pub fn landing_resolver(
    mut player: Query<(&mut MapPosition, &mut RigidBody, &BoxCollider), With<Player>>,
    platforms: Query<(&MapPosition, &BoxCollider, &Platform), Without<Player>>,
    floors: Query<(&MapPosition, &BoxCollider, &Floor), (Without<Player>, Without<Platform>)>,
    mut score: ResMut<Score>,
) {
    let Ok((mut position, mut rigidbody, collider)) = player.single_mut() else {
        return;
    };

    let mut boxes: Vec<PlatformBox> = platforms
        .iter()
        .map(|(pos, collider, platform)| PlatformBox {
            slot: platform.slot,
            pos: pos.pos,
            collider: *collider,
        })
        .collect();
    boxes.sort_by_key(|b| b.slot);

    let floor = floors
        .iter()
        .find(|(_, _, floor)| floor.is_visible())
        .map(|(pos, collider, _)| (pos.pos, *collider));

    if let Some(landing) = find_landing(
        position.pos,
        collider,
        rigidbody.velocity.y,
        &boxes,
        floor,
    ) {
        position.pos.y = landing.top() - collider.height();
        rigidbody.stop_vertical();
        score.add(1);
        debug!("Landed on {:?}, score {}", landing, score.get());
    }
}

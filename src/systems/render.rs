//! Rendering.
//!
//! Drawing is split in two so the simulation never touches raylib:
//! - [`collect_draw_commands`] is a pure read of the world that produces the
//!   frame as a list of [`DrawCommand`]s, in painter's order.
//! - [`render_pass`] replays that list on a raylib draw handle, resolving
//!   texture keys through the [`TextureStore`].
//!
//! Painter's order is: background, floor (if visible), player, platforms in
//! slot order, score text, then the debug overlay when [`DebugMode`] is
//! present. A hidden floor is left out of the overlay too.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::floor::Floor;
use crate::components::jumpcharge::JumpCharge;
use crate::components::mapposition::MapPosition;
use crate::components::platform::Platform;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::game::SKY_TEX;
use crate::resources::debugmode::DebugMode;
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

pub const SKY_COLOR: Color = Color::new(135, 206, 235, 255);
pub const FLOOR_COLOR: Color = Color::new(139, 69, 19, 255);
pub const PLATFORM_FALLBACK_COLOR: Color = Color::new(90, 160, 70, 255);
pub const PLAYER_FALLBACK_COLOR: Color = Color::new(220, 60, 60, 255);
pub const SCORE_FONT_SIZE: i32 = 36;

/// One drawing operation.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Solid rectangle.
    Rect { dest: Rectangle, color: Color },
    /// Textured quad. `src` is the source cell in the texture, or the whole
    /// texture when `None`. `fallback` is drawn when the texture is missing.
    Texture {
        tex_key: &'static str,
        src: Option<Rectangle>,
        dest: Rectangle,
        fallback: Color,
    },
    /// Rectangle outline, used by the debug overlay.
    Outline { dest: Rectangle, color: Color },
    Text {
        text: String,
        x: i32,
        y: i32,
        size: i32,
        color: Color,
    },
}

fn sprite_command(
    sprite: &Sprite,
    pos: &MapPosition,
    animation: Option<&Animation>,
    fallback: Color,
) -> DrawCommand {
    let src = sprite.frame_size.map(|cell| {
        let frame = animation.map(|a| a.frame_index).unwrap_or(0);
        Rectangle::new(frame as f32 * cell.x, 0.0, cell.x, cell.y)
    });
    DrawCommand::Texture {
        tex_key: sprite.tex_key,
        src,
        dest: Rectangle::new(pos.pos.x, pos.pos.y, sprite.width, sprite.height),
        fallback,
    }
}

/// Build the frame's draw list from the current world state.
pub fn collect_draw_commands(world: &mut World) -> Vec<DrawCommand> {
    let screen = *world.resource::<ScreenSize>();
    let mut commands = Vec::new();

    commands.push(DrawCommand::Texture {
        tex_key: SKY_TEX,
        src: None,
        dest: Rectangle::new(0.0, 0.0, screen.width(), screen.height()),
        fallback: SKY_COLOR,
    });

    let mut floors = world.query::<(&Floor, &MapPosition, &BoxCollider)>();
    for (floor, pos, collider) in floors.iter(world) {
        if floor.is_visible() {
            let (x, y, w, h) = collider.get_aabb(pos.pos);
            commands.push(DrawCommand::Rect {
                dest: Rectangle::new(x, y, w, h),
                color: FLOOR_COLOR,
            });
        }
    }

    let mut players = world.query_filtered::<(&Sprite, &MapPosition, Option<&Animation>), With<Player>>();
    for (sprite, pos, animation) in players.iter(world) {
        commands.push(sprite_command(sprite, pos, animation, PLAYER_FALLBACK_COLOR));
    }

    let mut platforms: Vec<(Platform, Sprite, MapPosition)> = {
        let mut q = world.query::<(&Platform, &Sprite, &MapPosition)>();
        q.iter(world)
            .map(|(platform, sprite, pos)| (*platform, sprite.clone(), *pos))
            .collect()
    };
    platforms.sort_by_key(|(platform, _, _)| *platform);
    for (_, sprite, pos) in platforms.iter() {
        commands.push(sprite_command(sprite, pos, None, PLATFORM_FALLBACK_COLOR));
    }

    let score = world.resource::<Score>().get();
    commands.push(DrawCommand::Text {
        text: format!("Score: {}", score),
        x: 10,
        y: 10,
        size: SCORE_FONT_SIZE,
        color: Color::BLACK,
    });

    if world.contains_resource::<DebugMode>() {
        let mut colliders = world.query::<(&BoxCollider, &MapPosition, Option<&Floor>)>();
        for (collider, pos, floor) in colliders.iter(world) {
            if floor.is_some_and(|f| !f.is_visible()) {
                continue;
            }
            let (x, y, w, h) = collider.get_aabb(pos.pos);
            commands.push(DrawCommand::Outline {
                dest: Rectangle::new(x, y, w, h),
                color: Color::RED,
            });
        }

        let mut player_state =
            world.query_filtered::<(&MapPosition, &RigidBody, &JumpCharge), With<Player>>();
        for (pos, rb, charge) in player_state.iter(world) {
            commands.push(DrawCommand::Text {
                text: format!(
                    "pos ({:.1}, {:.1}) vy {:.2} charge {:.1}{}",
                    pos.pos.x,
                    pos.pos.y,
                    rb.velocity.y,
                    charge.power,
                    if charge.charging { " *" } else { "" }
                ),
                x: 10,
                y: screen.h - 20,
                size: 10,
                color: Color::BLACK,
            });
        }
    }

    commands
}

/// Replay a draw list. The caller owns the drawing scope.
pub fn render_pass(d: &mut RaylibDrawHandle, textures: &TextureStore, commands: &[DrawCommand]) {
    d.clear_background(SKY_COLOR);

    for command in commands {
        match command {
            DrawCommand::Rect { dest, color } => {
                d.draw_rectangle_rec(*dest, *color);
            }
            DrawCommand::Texture {
                tex_key,
                src,
                dest,
                fallback,
            } => match textures.get(tex_key) {
                Some(tex) => {
                    let src = src.unwrap_or_else(|| {
                        Rectangle::new(0.0, 0.0, tex.width as f32, tex.height as f32)
                    });
                    d.draw_texture_pro(tex, src, *dest, Vector2::zero(), 0.0, Color::WHITE);
                }
                None => d.draw_rectangle_rec(*dest, *fallback),
            },
            DrawCommand::Outline { dest, color } => {
                d.draw_rectangle_lines(
                    dest.x as i32,
                    dest.y as i32,
                    dest.width as i32,
                    dest.height as i32,
                    *color,
                );
            }
            DrawCommand::Text {
                text,
                x,
                y,
                size,
                color,
            } => {
                d.draw_text(text, *x, *y, *size, *color);
            }
        }
    }
}

//! Draw list integration tests. These build the frame's draw commands from a
//! live world without opening a window.

use bevy_ecs::prelude::*;

use skyclimber::components::animation::Animation;
use skyclimber::components::floor::Floor;
use skyclimber::components::player::Player;
use skyclimber::events::switchdebug::SwitchDebugEvent;
use skyclimber::game::{PLATFORM_COUNT, PLATFORM_TEX, PLAYER_TEX, SKY_TEX, setup_world};
use skyclimber::resources::debugmode::DebugMode;
use skyclimber::resources::gameconfig::GameConfig;
use skyclimber::resources::rng::GameRng;
use skyclimber::resources::score::Score;
use skyclimber::systems::render::{DrawCommand, FLOOR_COLOR, collect_draw_commands};

fn make_world() -> World {
    setup_world(GameConfig::new(), GameRng::with_seed(7))
}

fn texture_keys(commands: &[DrawCommand]) -> Vec<&'static str> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Texture { tex_key, .. } => Some(*tex_key),
            _ => None,
        })
        .collect()
}

fn rect_count(commands: &[DrawCommand]) -> usize {
    commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Rect { .. }))
        .count()
}

fn outline_count(commands: &[DrawCommand]) -> usize {
    commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Outline { .. }))
        .count()
}

#[test]
fn frame_is_drawn_in_painters_order() {
    let mut world = make_world();
    let commands = collect_draw_commands(&mut world);

    // sky, floor, player, six platforms, score
    assert_eq!(commands.len(), 3 + PLATFORM_COUNT + 1);

    match &commands[0] {
        DrawCommand::Texture { tex_key, dest, .. } => {
            assert_eq!(*tex_key, SKY_TEX);
            assert_eq!((dest.width, dest.height), (400.0, 600.0));
        }
        other => panic!("expected background first, got {:?}", other),
    }
    match &commands[1] {
        DrawCommand::Rect { dest, color } => {
            assert_eq!((dest.x, dest.y, dest.width, dest.height), (0.0, 580.0, 400.0, 20.0));
            assert_eq!(*color, FLOOR_COLOR);
        }
        other => panic!("expected floor second, got {:?}", other),
    }

    let mut expected = vec![SKY_TEX, PLAYER_TEX];
    expected.extend(std::iter::repeat_n(PLATFORM_TEX, PLATFORM_COUNT));
    assert_eq!(texture_keys(&commands), expected);

    // platforms follow slot order, which is top to bottom at setup
    let platform_ys: Vec<f32> = commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Texture { tex_key, dest, .. } if *tex_key == PLATFORM_TEX => Some(dest.y),
            _ => None,
        })
        .collect();
    assert_eq!(platform_ys, vec![0.0, 100.0, 200.0, 300.0, 400.0, 500.0]);

    match commands.last() {
        Some(DrawCommand::Text { text, x, y, .. }) => {
            assert_eq!(text, "Score: 0");
            assert_eq!((*x, *y), (10, 10));
        }
        other => panic!("expected score last, got {:?}", other),
    }
}

#[test]
fn hidden_floor_is_not_drawn() {
    let mut world = make_world();
    let floor = world
        .query_filtered::<Entity, With<Floor>>()
        .single(&world)
        .unwrap();
    world.get_mut::<Floor>(floor).unwrap().hide();

    let commands = collect_draw_commands(&mut world);
    assert_eq!(rect_count(&commands), 0);
    assert_eq!(commands.len(), 2 + PLATFORM_COUNT + 1);
}

#[test]
fn player_sprite_uses_current_animation_cell() {
    let mut world = make_world();
    let player = world
        .query_filtered::<Entity, With<Player>>()
        .single(&world)
        .unwrap();
    world.get_mut::<Animation>(player).unwrap().frame_index = 2;

    let commands = collect_draw_commands(&mut world);
    let src = commands.iter().find_map(|c| match c {
        DrawCommand::Texture { tex_key, src, dest, .. } if *tex_key == PLAYER_TEX => {
            assert_eq!((dest.x, dest.y, dest.width, dest.height), (180.0, 520.0, 40.0, 40.0));
            *src
        }
        _ => None,
    });
    let src = src.expect("player sprite has a source cell");
    assert_eq!((src.x, src.y, src.width, src.height), (64.0, 0.0, 32.0, 32.0));
}

#[test]
fn score_text_tracks_score() {
    let mut world = make_world();
    world.resource_mut::<Score>().add(12);
    let commands = collect_draw_commands(&mut world);
    let found = commands
        .iter()
        .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == "Score: 12"));
    assert!(found);
}

#[test]
fn debug_toggle_adds_and_removes_overlay() {
    let mut world = make_world();
    assert_eq!(outline_count(&collect_draw_commands(&mut world)), 0);

    world.trigger(SwitchDebugEvent::toggle());
    assert!(world.contains_resource::<DebugMode>());
    let commands = collect_draw_commands(&mut world);
    // player, platforms and floor
    assert_eq!(outline_count(&commands), 1 + PLATFORM_COUNT + 1);

    world.trigger(SwitchDebugEvent::toggle());
    assert!(!world.contains_resource::<DebugMode>());
    assert_eq!(outline_count(&collect_draw_commands(&mut world)), 0);
}

#[test]
fn debug_overlay_skips_hidden_floor() {
    let mut world = make_world();
    let floor = world
        .query_filtered::<Entity, With<Floor>>()
        .single(&world)
        .unwrap();
    world.get_mut::<Floor>(floor).unwrap().hide();
    world.trigger(SwitchDebugEvent::set(true));

    let commands = collect_draw_commands(&mut world);
    // player and platforms only
    assert_eq!(outline_count(&commands), 1 + PLATFORM_COUNT);
    let floor_outline = commands.iter().any(|c| {
        matches!(c, DrawCommand::Outline { dest, .. } if dest.y == 580.0 && dest.width == 400.0)
    });
    assert!(!floor_outline);
}

#[test]
fn forced_debug_state_is_idempotent() {
    let mut world = make_world();

    world.trigger(SwitchDebugEvent::set(true));
    world.trigger(SwitchDebugEvent::set(true));
    assert!(world.contains_resource::<DebugMode>());

    world.trigger(SwitchDebugEvent::set(false));
    assert!(!world.contains_resource::<DebugMode>());
    world.trigger(SwitchDebugEvent::set(false));
    assert!(!world.contains_resource::<DebugMode>());
}

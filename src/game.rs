//! Game setup and the per-frame update schedule.
//!
//! [`setup_world`] builds the whole session state: resources, the player,
//! the six platforms and the floor. [`build_update_schedule`] wires the
//! simulation systems in their fixed order. Neither needs a window, which is
//! what the integration tests rely on.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use log::{info, warn};
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
use crate::events::gameover::observe_game_over;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameState;
use crate::resources::input::InputState;
use crate::resources::rng::GameRng;
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::landing_resolver;
use crate::systems::floor::update_floor_visibility;
use crate::systems::gamestate::{check_fall_game_over, state_is_playing};
use crate::systems::input::check_quit;
use crate::systems::jump::jump_charge_controller;
use crate::systems::movement::{gravity_system, horizontal_movement};
use crate::systems::scroll::{platform_x_range, world_scroller};

pub const PLAYER_TEX: &str = "player";
pub const PLATFORM_TEX: &str = "platform";
pub const SKY_TEX: &str = "sky";

pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 40.0;
pub const PLAYER_START_VELOCITY: f32 = 1.0;
/// Cells in the player sprite sheet, laid out left to right.
pub const PLAYER_FRAMES: usize = 3;
pub const PLAYER_FRAME_SIZE: f32 = 32.0;

pub const PLATFORM_COUNT: usize = 6;
pub const PLATFORM_WIDTH: f32 = 100.0;
pub const PLATFORM_HEIGHT: f32 = 10.0;

pub const FLOOR_HEIGHT: f32 = 20.0;

const TEXTURE_PATHS: [(&str, &str); 3] = [
    (PLAYER_TEX, "./assets/character_spritesheet.png"),
    (PLATFORM_TEX, "./assets/platform_texture.png"),
    (SKY_TEX, "./assets/sky_background.png"),
];

/// Build a fresh session world.
///
/// Screen size comes from the config's window size. The platform layout is
/// drawn from `rng`, which then stays in the world for recycling.
pub fn setup_world(config: GameConfig, mut rng: GameRng) -> World {
    let screen = ScreenSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    };

    let mut world = World::new();

    spawn_player(&mut world, &config, &screen);
    spawn_platforms(&mut world, &screen, &mut rng);
    spawn_floor(&mut world, &screen);

    world.insert_resource(screen);
    world.insert_resource(config);
    world.insert_resource(rng);
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(Score::default());
    world.insert_resource(GameState::new());

    world.spawn(Observer::new(observe_game_over));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure observers are registered before any system triggers an event.
    world.flush();

    info!(
        "World ready: {}x{} screen, {} platforms",
        screen.w, screen.h, PLATFORM_COUNT
    );
    world
}

fn spawn_player(world: &mut World, config: &GameConfig, screen: &ScreenSize) {
    world.spawn((
        Player,
        MapPosition::new(
            (screen.w / 2) as f32 - PLAYER_WIDTH / 2.0,
            screen.height() - 2.0 * PLAYER_HEIGHT,
        ),
        BoxCollider::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        RigidBody::new(config.gravity).with_velocity_y(PLAYER_START_VELOCITY),
        JumpCharge::default(),
        Animation::new(PLAYER_FRAMES),
        Sprite::new(PLAYER_TEX, PLAYER_WIDTH, PLAYER_HEIGHT)
            .with_frames(PLAYER_FRAME_SIZE, PLAYER_FRAME_SIZE),
    ));
}

/// Spread the platforms evenly down the screen, one per band, at random x.
fn spawn_platforms(world: &mut World, screen: &ScreenSize, rng: &mut GameRng) {
    let band = screen.h / PLATFORM_COUNT as i32;
    for slot in 0..PLATFORM_COUNT {
        let x = rng.coord(platform_x_range(screen, PLATFORM_WIDTH));
        let y = (slot as i32 * band) as f32;
        world.spawn((
            Platform { slot },
            MapPosition::new(x, y),
            BoxCollider::new(PLATFORM_WIDTH, PLATFORM_HEIGHT),
            Sprite::new(PLATFORM_TEX, PLATFORM_WIDTH, PLATFORM_HEIGHT),
        ));
    }
}

fn spawn_floor(world: &mut World, screen: &ScreenSize) {
    world.spawn((
        Floor::default(),
        MapPosition::new(0.0, screen.height() - FLOOR_HEIGHT),
        BoxCollider::new(screen.width(), FLOOR_HEIGHT),
    ));
}

/// The simulation half of a frame, in its required order.
///
/// Every system after [`check_quit`] is gated on the session still being
/// live, so a quit or a fall stops the rest of the frame from running.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.set_executor_kind(ExecutorKind::SingleThreaded);
    update.add_systems(
        (
            check_quit,
            update_floor_visibility.run_if(state_is_playing),
            jump_charge_controller.run_if(state_is_playing),
            horizontal_movement.run_if(state_is_playing),
            gravity_system.run_if(state_is_playing),
            landing_resolver.run_if(state_is_playing),
            world_scroller.run_if(state_is_playing),
            check_fall_game_over.run_if(state_is_playing),
        )
            .chain(),
    );
    update
}

/// Load every texture the game draws. Missing files are logged and skipped;
/// the renderer falls back to flat colours for them.
pub fn load_textures(rl: &mut RaylibHandle, thread: &RaylibThread) -> TextureStore {
    let mut store = TextureStore::new();
    for (key, path) in TEXTURE_PATHS {
        match rl.load_texture(thread, path) {
            Ok(texture) => {
                info!("Loaded texture '{}' from {}", key, path);
                store.add(key, texture);
            }
            Err(e) => warn!("Texture '{}' not loaded from {}: {}", key, path, e),
        }
    }
    store
}

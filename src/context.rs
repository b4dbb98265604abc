//! Game context: the window, the ECS world and the update schedule.
//!
//! [`GameContext`] is built once at startup and consumed by
//! [`GameContext::run`], which drives the frame loop until the session ends
//! and then drops everything, closing the window.
//!
//! # Frame
//!
//! 1. Poll raylib input into [`InputState`]; F11 toggles the debug overlay.
//! 2. Advance [`WorldTime`] by the last frame's duration.
//! 3. Run the update schedule (quit check, floor timer, jump, movement,
//!    gravity, landing, scroll, game-over check).
//! 4. Unless the player quit, build the draw list and render it.
//!    `end_drawing` at the close of the scope presents the frame and sleeps
//!    to hold the target frame rate.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::game::{build_update_schedule, load_textures, setup_world};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::input::InputState;
use crate::resources::rng::GameRng;
use crate::resources::score::Score;
use crate::resources::texturestore::TextureStore;
use crate::systems::input::update_input_state;
use crate::systems::render::{collect_draw_commands, render_pass};
use crate::systems::time::update_world_time;

pub struct GameContext {
    rl: RaylibHandle,
    thread: RaylibThread,
    world: World,
    update: Schedule,
}

impl GameContext {
    /// Open the window, load textures and build the session world.
    pub fn new(config: GameConfig, rng: GameRng, debug: bool) -> Self {
        let (window_width, window_height) = config.window_size();
        let (mut rl, thread) = raylib::init()
            .size(window_width as i32, window_height as i32)
            .title(&config.title)
            .build();
        rl.set_target_fps(config.target_fps);
        // Escape is read as the quit key through InputState, not by raylib.
        rl.set_exit_key(None);

        let textures = load_textures(&mut rl, &thread);

        let mut world = setup_world(config, rng);
        world.insert_non_send_resource(textures);
        if debug {
            world.trigger(SwitchDebugEvent::set(true));
        }

        Self {
            rl,
            thread,
            world,
            update: build_update_schedule(),
        }
    }

    /// Run frames until the player quits or falls. Returns the final score.
    pub fn run(mut self) -> u32 {
        info!("Game started");
        loop {
            {
                let mut input = self.world.resource_mut::<InputState>();
                update_input_state(&mut input, &self.rl);
            }
            if self.world.resource::<InputState>().debug_toggle.just_pressed {
                self.world.trigger(SwitchDebugEvent::toggle());
            }

            let dt = self.rl.get_frame_time();
            update_world_time(&mut self.world, dt);

            self.update.run(&mut self.world);

            let state = *self.world.resource::<GameState>().get();
            if state == GameStates::Quitting {
                break;
            }

            let commands = collect_draw_commands(&mut self.world);
            {
                let textures = self.world.non_send_resource::<TextureStore>();
                let mut d = self.rl.begin_drawing(&self.thread);
                render_pass(&mut d, textures, &commands);
            }

            if state == GameStates::GameOver {
                break;
            }
        }

        let score = self.world.resource::<Score>().get();
        info!("Session ended with score {}", score);
        score
    }
}

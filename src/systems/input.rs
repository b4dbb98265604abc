//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - [`check_quit`] is the first scheduled system of a frame: it ends the
//!   session as soon as the quit signal is seen, before anything moves.
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::{KeyboardKey, RaylibHandle};

use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input and update the `InputState` resource.
///
/// Raylib is owned by the game context rather than the ECS world, so this is
/// a plain function called by the driver before the update schedule runs.
pub fn update_input_state(input: &mut InputState, rl: &RaylibHandle) {
    let poll = |state: &mut BoolState| {
        let key: KeyboardKey = state.key_binding;
        state.active = rl.is_key_down(key);
        state.just_pressed = rl.is_key_pressed(key);
    };

    poll(&mut input.left);
    poll(&mut input.right);
    poll(&mut input.jump);
    poll(&mut input.quit);
    poll(&mut input.debug_toggle);
    input.window_close = rl.window_should_close();
}

/// End the session when the quit signal is set.
pub fn check_quit(input: Res<InputState>, mut game_state: ResMut<GameState>) {
    if input.quit_requested() && game_state.is_playing() {
        info!("Quit requested");
        game_state.set(GameStates::Quitting);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_check_quit(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(check_quit);
        schedule.run(world);
    }

    #[test]
    fn test_quit_key_moves_to_quitting() {
        let mut world = World::new();
        let mut input = InputState::default();
        input.quit.active = true;
        world.insert_resource(input);
        world.insert_resource(GameState::new());

        run_check_quit(&mut world);

        assert_eq!(*world.resource::<GameState>().get(), GameStates::Quitting);
    }

    #[test]
    fn test_no_quit_keeps_playing() {
        let mut world = World::new();
        world.insert_resource(InputState::default());
        world.insert_resource(GameState::new());

        run_check_quit(&mut world);

        assert!(world.resource::<GameState>().is_playing());
    }
}

//! Game over event and observer.
//!
//! [`check_fall_game_over`](crate::systems::gamestate::check_fall_game_over)
//! moves the [`GameState`] to [`GameStates::GameOver`] and then triggers a
//! [`GameOverEvent`] carrying the final score. The observer in this module
//! reports the score on the console and in the log.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::gamestate::{GameState, GameStates};

/// Event fired once, on the frame the player falls past the bottom edge.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameOverEvent {
    pub score: u32,
}

/// Observer that reports the final score.
///
/// Also makes sure the state is terminal, so triggering the event by hand
/// ends the session the same way a fall does.
pub fn observe_game_over(trigger: On<GameOverEvent>, mut game_state: ResMut<GameState>) {
    let score = trigger.event().score;
    game_state.set(GameStates::GameOver);
    info!("Player fell off the screen, final score {}", score);
    println!("Game Over! Final Score: {}", score);
}

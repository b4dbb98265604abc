use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::events::gameover::GameOverEvent;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;

/// Run condition: only simulate while the session is live.
pub fn state_is_playing(state: Res<GameState>) -> bool {
    state.is_playing()
}

/// End the session once the player has fallen past the bottom edge.
///
/// The state change is immediate; the [`GameOverEvent`] that reports the
/// score is delivered when this system's commands are applied.
pub fn check_fall_game_over(
    screen: Res<ScreenSize>,
    score: Res<Score>,
    mut game_state: ResMut<GameState>,
    player: Query<&MapPosition, With<Player>>,
    mut commands: Commands,
) {
    let Ok(position) = player.single() else {
        return;
    };
    if position.pos.y > screen.height() && game_state.is_playing() {
        game_state.set(GameStates::GameOver);
        commands.trigger(GameOverEvent { score: score.get() });
    }
}

//! High-level game state resource.
//!
//! A session starts in [`GameStates::Playing`] and leaves it exactly once,
//! either because the player quit or because they fell off the bottom of the
//! screen. Both exits are terminal; there is no way back to `Playing`.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    Playing,
    /// The player fell past the bottom edge.
    GameOver,
    /// The quit signal was received.
    Quitting,
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::Playing`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::Playing,
        }
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> &GameStates {
        &self.current
    }
    /// Move to `state`. Terminal states are sticky.
    pub fn set(&mut self, state: GameStates) {
        if self.is_playing() {
            self.current = state;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.current == GameStates::Playing
    }
}

//! Per-frame keyboard input resource.
//!
//! Captures the four signals the game reads (left, right, jump, quit) plus
//! the debug toggle, and exposes them to systems via the [`InputState`]
//! resource. Arrow keys move, space charges the jump, Escape quits.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
///
/// `window_close` is set when the window manager asks the window to close;
/// together with `quit` it forms the quit signal.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub jump: BoolState,
    pub quit: BoolState,
    pub debug_toggle: BoolState,
    pub window_close: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            jump: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            quit: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            debug_toggle: BoolState::bound_to(KeyboardKey::KEY_F11),
            window_close: false,
        }
    }
}

impl InputState {
    /// True when the player asked to leave, by key or by closing the window.
    pub fn quit_requested(&self) -> bool {
        self.quit.active || self.window_close
    }
}

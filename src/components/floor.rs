//! The ground the player starts on.
//!
//! The floor is visible for a fixed time after the game starts and then
//! disappears for good. A hidden floor neither lands the player nor draws.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug)]
pub struct Floor {
    visible: bool,
}

impl Default for Floor {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl Floor {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide the floor. Returns true only on the call that actually hid it.
    pub fn hide(&mut self) -> bool {
        let was_visible = self.visible;
        self.visible = false;
        was_visible
    }
}

//! Screen size resource.
//!
//! Stores the playfield dimensions in pixels. The window is not resizable,
//! so this is fixed for a session; bounds checks, the scroll threshold and
//! the game-over line are all derived from it.

use bevy_ecs::prelude::Resource;

/// Playfield size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn width(&self) -> f32 {
        self.w as f32
    }

    pub fn height(&self) -> f32 {
        self.h as f32
    }

    /// Above this y (strictly) the world scrolls down.
    pub fn scroll_threshold(&self) -> f32 {
        (self.h / 4) as f32
    }
}

use bevy_ecs::prelude::Resource;

/// Wall-clock time since the game started.
///
/// `elapsed` starts at zero when the world is built, which makes it the
/// anchor the floor timer compares against every frame.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    /// Seconds since the game started.
    pub elapsed: f32,
}

impl WorldTime {
    /// Elapsed time in whole milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        (self.elapsed as f64 * 1000.0) as u64
    }
}

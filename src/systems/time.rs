//! Time update.
//!
//! Advances the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame by raylib's frame time.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Add `dt` seconds to the elapsed time. Negative deltas are ignored so the
/// clock never runs backwards.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    wt.elapsed += dt.max(0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_world_time_accumulates() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        update_world_time(&mut world, 0.25);
        update_world_time(&mut world, 0.5);
        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.elapsed, 0.75);
        assert_eq!(wt.elapsed_ms(), 750);
    }

    #[test]
    fn test_update_world_time_never_rewinds() {
        let mut world = World::new();
        world.insert_resource(WorldTime { elapsed: 2.0 });
        update_world_time(&mut world, -1.0);
        assert_eq!(world.resource::<WorldTime>().elapsed, 2.0);
    }
}

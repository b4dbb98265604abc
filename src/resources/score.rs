//! Session score.
//!
//! One point per landing and one per recycled platform. The score only ever
//! goes up.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score(u32);

impl Score {
    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn add(&mut self, points: u32) {
        let before = self.0;
        self.0 = self.0.saturating_add(points);
        debug_assert!(self.0 >= before, "score went down");
    }
}

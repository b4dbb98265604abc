//! Platform component.
//!
//! Platforms are spawned once, when the world is built, and then only ever
//! repositioned by the world scroller. The `slot` is fixed at spawn time and
//! gives platforms a stable order: landing checks and drawing both walk the
//! platforms sorted by slot.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Platform {
    pub slot: usize,
}

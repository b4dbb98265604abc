//! Debug toggle resource.
//!
//! The mere presence of this resource turns on the debug overlay: collider
//! outlines and a line of player state text. F11 or `--debug` enables it.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer adds debug overlays.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}

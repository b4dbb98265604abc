//! Debug overlay switch.
//!
//! The overlay is on while the [`DebugMode`] resource exists. A
//! [`SwitchDebugEvent`] either flips it (F11) or forces it to a given state
//! (the `--debug` flag at startup).
use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SwitchDebugEvent {
    /// `None` flips the current state.
    pub enable: Option<bool>,
}

impl SwitchDebugEvent {
    pub fn toggle() -> Self {
        Self { enable: None }
    }

    pub fn set(enable: bool) -> Self {
        Self {
            enable: Some(enable),
        }
    }
}

pub fn switch_debug_observer(
    trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    let active = debug_mode.is_some();
    let want = trigger.event().enable.unwrap_or(!active);
    match (active, want) {
        (false, true) => {
            commands.insert_resource(DebugMode {});
            info!("Debug overlay on");
        }
        (true, false) => {
            commands.remove_resource::<DebugMode>();
            info!("Debug overlay off");
        }
        _ => {}
    }
}

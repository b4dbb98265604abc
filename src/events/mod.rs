//! Event types and observers.
//!
//! Submodules:
//! - [`gameover`] – fired once when the player falls off the screen; reports the final score
//! - [`switchdebug`] – toggle debug overlays on/off
pub mod gameover;
pub mod switchdebug;

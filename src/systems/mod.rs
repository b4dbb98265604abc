//! Game systems.
//!
//! Submodules overview
//! - [`collision`] – land the player on platforms or the floor and score it
//! - [`floor`] – hide the floor once its timer runs out
//! - [`gamestate`] – run condition and the fall-through game over check
//! - [`input`] – read hardware input and handle the quit signal
//! - [`jump`] – charge and release jumps
//! - [`movement`] – horizontal stepping and gravity integration
//! - [`render`] – build the frame's draw list and replay it with Raylib
//! - [`scroll`] – shift the world down and recycle platforms
//! - [`time`] – advance the session clock

pub mod collision;
pub mod floor;
pub mod gamestate;
pub mod input;
pub mod jump;
pub mod movement;
pub mod render;
pub mod scroll;
pub mod time;

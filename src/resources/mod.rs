//! ECS resources made available to systems.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – window, physics and world settings loaded from INI
//! - `gamestate` – playing, game over or quitting
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `rng` – seedable random source for platform placement
//! - `score` – points for landings and recycled platforms
//! - `screensize` – playfield dimensions in pixels
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – seconds since the session started
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod rng;
pub mod score;
pub mod screensize;
pub mod texturestore;
pub mod worldtime;

//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 400
//! height = 600
//! target_fps = 60
//! title = Sky Climber
//!
//! [physics]
//! gravity = 0.3
//! jump_charge_rate = 0.5
//! max_jump_power = -30.0
//! move_step = 5.0
//!
//! [world]
//! scroll_step = 5.0
//! floor_timeout = 10.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 400;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Sky Climber";
const DEFAULT_GRAVITY: f32 = 0.3;
const DEFAULT_JUMP_CHARGE_RATE: f32 = 0.5;
const DEFAULT_MAX_JUMP_POWER: f32 = -30.0;
const DEFAULT_MOVE_STEP: f32 = 5.0;
const DEFAULT_SCROLL_STEP: f32 = 5.0;
const DEFAULT_FLOOR_TIMEOUT: f32 = 10.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Physics values are per frame: the simulation advances one fixed step per
/// rendered frame at `target_fps`.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window (and playfield) width in pixels.
    pub window_width: u32,
    /// Window (and playfield) height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Window title.
    pub title: String,
    /// Added to the player's vertical velocity every frame.
    pub gravity: f32,
    /// Jump power gained per frame while the jump key is held.
    pub jump_charge_rate: f32,
    /// Strongest jump velocity. Always <= 0 (up is negative y).
    pub max_jump_power: f32,
    /// Horizontal pixels per frame while left/right is held.
    pub move_step: f32,
    /// Pixels the world shifts down per frame while the player is too high.
    pub scroll_step: f32,
    /// Seconds after start when the floor disappears.
    pub floor_timeout: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            gravity: DEFAULT_GRAVITY,
            jump_charge_rate: DEFAULT_JUMP_CHARGE_RATE,
            max_jump_power: DEFAULT_MAX_JUMP_POWER,
            move_step: DEFAULT_MOVE_STEP,
            scroll_step: DEFAULT_SCROLL_STEP,
            floor_timeout: DEFAULT_FLOOR_TIMEOUT,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let get_f32 = |section: &str, key: &str| {
            config.getfloat(section, key).ok().flatten().map(|v| v as f32)
        };

        // Window sizes end up as raylib `i32`s, so they are capped there.
        let get_u32 = |section: &str, key: &str, max: u32| {
            let value = config.getuint(section, key).ok().flatten()?;
            match u32::try_from(value) {
                Ok(v) if v <= max => Some(v),
                _ => {
                    warn!("[{}] {} = {} is out of range; keeping default", section, key, value);
                    None
                }
            }
        };

        // [window] section
        if let Some(width) = get_u32("window", "width", i32::MAX as u32) {
            self.window_width = width;
        }
        if let Some(height) = get_u32("window", "height", i32::MAX as u32) {
            self.window_height = height;
        }
        if let Some(fps) = get_u32("window", "target_fps", u32::MAX) {
            self.target_fps = fps;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [physics] section
        if let Some(gravity) = get_f32("physics", "gravity") {
            self.gravity = gravity;
        }
        if let Some(rate) = get_f32("physics", "jump_charge_rate") {
            self.jump_charge_rate = rate.abs();
        }
        if let Some(max_power) = get_f32("physics", "max_jump_power") {
            self.max_jump_power = -max_power.abs();
        }
        if let Some(step) = get_f32("physics", "move_step") {
            self.move_step = step;
        }

        // [world] section
        if let Some(step) = get_f32("world", "scroll_step") {
            self.scroll_step = step;
        }
        if let Some(timeout) = get_f32("world", "floor_timeout") {
            self.floor_timeout = timeout;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, gravity={}, charge_rate={}, max_jump={}, scroll_step={}, floor_timeout={}s",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.gravity,
            self.jump_charge_rate,
            self.max_jump_power,
            self.scroll_step,
            self.floor_timeout
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "title", Some(self.title.clone()));

        // [physics] section
        config.set("physics", "gravity", Some(self.gravity.to_string()));
        config.set(
            "physics",
            "jump_charge_rate",
            Some(self.jump_charge_rate.to_string()),
        );
        config.set(
            "physics",
            "max_jump_power",
            Some(self.max_jump_power.to_string()),
        );
        config.set("physics", "move_step", Some(self.move_step.to_string()));

        // [world] section
        config.set("world", "scroll_step", Some(self.scroll_step.to_string()));
        config.set(
            "world",
            "floor_timeout",
            Some(self.floor_timeout.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "skyclimber_{}_{}.ini",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (400, 600));
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.gravity, 0.3);
        assert_eq!(config.jump_charge_rate, 0.5);
        assert_eq!(config.max_jump_power, -30.0);
        assert_eq!(config.move_step, 5.0);
        assert_eq!(config.scroll_step, 5.0);
        assert_eq!(config.floor_timeout, 10.0);
    }

    #[test]
    fn test_missing_file_is_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path(temp_config_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (400, 600));
    }

    #[test]
    fn test_partial_file_overrides_only_present_keys() {
        let path = temp_config_path("partial");
        std::fs::write(
            &path,
            "[physics]\ngravity = 0.5\nmax_jump_power = 25\n\n[world]\nfloor_timeout = 3.5\n",
        )
        .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.gravity, 0.5);
        assert_eq!(config.max_jump_power, -25.0);
        assert_eq!(config.floor_timeout, 3.5);
        assert_eq!(config.jump_charge_rate, 0.5);
        assert_eq!(config.window_size(), (400, 600));
    }

    #[test]
    fn test_oversized_window_values_keep_defaults() {
        let path = temp_config_path("oversized");
        std::fs::write(
            &path,
            "[window]\nwidth = 4294967697\nheight = 3000000000\ntarget_fps = 144\n",
        )
        .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.window_size(), (400, 600));
        assert_eq!(config.target_fps, 144);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("saved");
        let mut original = GameConfig::with_path(&path);
        original.window_width = 480;
        original.scroll_step = 7.0;
        original.title = "Climb".to_string();
        original.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.window_width, 480);
        assert_eq!(loaded.scroll_step, 7.0);
        assert_eq!(loaded.title, "Climb");
        assert_eq!(loaded.max_jump_power, -30.0);
    }
}

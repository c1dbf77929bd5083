//! Game configuration resource.
//!
//! Manages startup settings loaded from an INI configuration file. Provides
//! defaults for safe startup and a loader that keeps defaults for any
//! missing file or key.
//!
//! # Configuration File Format
//!
//! ```ini
//! [playfield]
//! width = 800
//! height = 600
//!
//! [driver]
//! target_fps = 60
//!
//! [scores]
//! path = ./highscores.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_PLAYFIELD_WIDTH: u32 = 800;
const DEFAULT_PLAYFIELD_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_SCORES_PATH: &str = "./highscores.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Startup configuration resource.
///
/// Stores the playfield dimensions, the driver's target tick rate, and the
/// path of the persisted high-score ledger.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Playfield width in playfield units.
    pub playfield_width: u32,
    /// Playfield height in playfield units.
    pub playfield_height: u32,
    /// Target ticks per second for the driver loop.
    pub target_fps: u32,
    /// Path of the persisted high-score ledger.
    pub scores_path: PathBuf,
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
            playfield_width: DEFAULT_PLAYFIELD_WIDTH,
            playfield_height: DEFAULT_PLAYFIELD_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    #[cfg_attr(not(test), allow(dead_code))]
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

        // [playfield] section
        if let Some(width) = config.getuint("playfield", "width").ok().flatten() {
            self.playfield_width = width as u32;
        }
        if let Some(height) = config.getuint("playfield", "height").ok().flatten() {
            self.playfield_height = height as u32;
        }

        // [driver] section
        if let Some(fps) = config.getuint("driver", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [scores] section
        if let Some(path) = config.get("scores", "path") {
            self.scores_path = PathBuf::from(path);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.playfield_width, 800);
        assert_eq!(config.playfield_height, 600);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.scores_path, PathBuf::from("./highscores.json"));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("./definitely-not-here.ini");
        assert!(config.load_from_file().is_err());
        // Defaults survive a failed load.
        assert_eq!(config.playfield_width, 800);
    }

    #[test]
    fn test_load_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[playfield]\nwidth = 1024\nheight = 768\n\n[driver]\ntarget_fps = 120\n\n[scores]\npath = ./scores/best.json"
        )
        .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.playfield_width, 1024);
        assert_eq!(config.playfield_height, 768);
        assert_eq!(config.target_fps, 120);
        assert_eq!(config.scores_path, PathBuf::from("./scores/best.json"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[playfield]\nwidth = 480").unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.playfield_width, 480);
        assert_eq!(config.playfield_height, 600);
        assert_eq!(config.target_fps, 60);
    }
}

//! Configuration file support for quadboard.
//!
//! Settings are loaded from `~/.config/quadboard/config.toml`. They cover the
//! keyboard's initial page, the bounce filter, and the default surface used
//! by the replay tool. If no config file exists, defaults are used.

pub mod types;

// Re-export commonly used types at module level
pub use types::{KeyboardConfig, SurfaceConfig};

use crate::layout::Mode;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [keyboard]
/// initial_mode = "letters"
/// noise_threshold_time_ms = 40
/// noise_threshold_distance = 12
///
/// [surface]
/// width = 900
/// height = 900
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Keyboard behaviour
    #[serde(default)]
    pub keyboard: KeyboardConfig,

    /// Default keyboard surface
    #[serde(default)]
    pub surface: SurfaceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `noise_threshold_time_ms`: 0 - 1000
    /// - `noise_threshold_distance`: 0 - 500
    /// - `surface.width`, `surface.height`: 3 - 20000
    pub fn validate_and_clamp(&mut self) {
        if self.keyboard.initial_mode.parse::<Mode>().is_err() {
            warn!(
                "Invalid initial_mode '{}', falling back to 'letters'",
                self.keyboard.initial_mode
            );
            self.keyboard.initial_mode = Mode::Letters.name().to_string();
        }

        if self.keyboard.noise_threshold_time_ms > 1000 {
            warn!(
                "Invalid noise_threshold_time_ms {}, clamping to 0-1000 range",
                self.keyboard.noise_threshold_time_ms
            );
            self.keyboard.noise_threshold_time_ms = 1000;
        }

        if !(0..=500).contains(&self.keyboard.noise_threshold_distance) {
            warn!(
                "Invalid noise_threshold_distance {}, clamping to 0-500 range",
                self.keyboard.noise_threshold_distance
            );
            self.keyboard.noise_threshold_distance =
                self.keyboard.noise_threshold_distance.clamp(0, 500);
        }

        // A surface narrower than one cell per column cannot be addressed
        if !(3..=20000).contains(&self.surface.width) {
            warn!(
                "Invalid surface width {}, clamping to 3-20000 range",
                self.surface.width
            );
            self.surface.width = self.surface.width.clamp(3, 20000);
        }
        if !(3..=20000).contains(&self.surface.height) {
            warn!(
                "Invalid surface height {}, clamping to 3-20000 range",
                self.surface.height
            );
            self.surface.height = self.surface.height.clamp(3, 20000);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("quadboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default path.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Serializes the config to TOML and writes it to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Writes the documented example config to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if a config file already exists or it cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, Self::example_toml())?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// The documented example config shipped with the crate.
    pub fn example_toml() -> &'static str {
        include_str!("../../config.example.toml")
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

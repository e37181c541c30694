//! Configuration file support for paintboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/paintboard/config.toml`. Settings include the starting style,
//! the starting tool, and the drawing surface size and background.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig};

use crate::draw::Color;
use crate::input::{MAX_LINE_WIDTH, MIN_LINE_WIDTH, StyleConfig};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted canvas edge in pixels.
const MAX_CANVAS_EDGE: u32 = 8192;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_line_width = 4
/// default_filled = false
/// default_tool = "oval"
///
/// [canvas]
/// width = 800
/// height = 600
/// background = "white"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Starting style and tool
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Drawing surface size and background
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_line_width`: 2 - 19
    /// - `canvas.width` / `canvas.height`: 1 - 8192
    fn validate_and_clamp(&mut self) {
        // Line width: 2 - 19
        if !(MIN_LINE_WIDTH..=MAX_LINE_WIDTH).contains(&self.drawing.default_line_width) {
            log::warn!(
                "Invalid default_line_width {}, clamping to {}-{} range",
                self.drawing.default_line_width,
                MIN_LINE_WIDTH,
                MAX_LINE_WIDTH
            );
            self.drawing.default_line_width = self
                .drawing
                .default_line_width
                .clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH);
        }

        // Canvas size: 1 - 8192
        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width,
                MAX_CANVAS_EDGE
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_EDGE);
        }
        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height,
                MAX_CANVAS_EDGE
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_EDGE);
        }
    }

    /// Style a new drawing session starts with.
    pub fn initial_style(&self) -> StyleConfig {
        StyleConfig::new(
            self.drawing.default_color.to_color(),
            self.drawing.default_line_width,
            self.drawing.default_filled,
        )
    }

    /// Background the canvas is cleared to.
    pub fn background_color(&self) -> Color {
        self.canvas.background.to_color()
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/paintboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("paintboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
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
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the configuration to `path` as pretty TOML.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED, TRANSPARENT, WHITE};
    use crate::input::Tool;
    use tempfile::TempDir;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.drawing.default_line_width, 2);
        assert_eq!(config.drawing.default_tool, Tool::Freehand);
        assert!(!config.drawing.default_filled);
        assert_eq!(config.canvas.width, 500);
        assert_eq!(config.background_color(), WHITE);
        assert_eq!(config.initial_style().color, BLACK);
    }

    #[test]
    fn drawing_section_parses_tool_and_color() {
        let config: Config = toml::from_str(
            r#"
            [drawing]
            default_color = [255, 0, 0]
            default_tool = "mirrored-freehand"
            default_filled = true
            "#,
        )
        .unwrap();

        let style = config.initial_style();
        assert_eq!(style.color, RED);
        assert!(style.filled);
        assert_eq!(config.drawing.default_tool, Tool::MirroredFreehand);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[drawing]\ndefault_line_width = 40\n[canvas]\nwidth = 0\nheight = 100000\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_line_width, 19);
        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, 8192);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[drawing\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.toml"));
    }

    #[test]
    fn save_then_load_keeps_settings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.drawing.default_tool = Tool::Polygon;
        config.canvas.background = ColorSpec::Name("transparent".to_string());
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.drawing.default_tool, Tool::Polygon);
        assert_eq!(loaded.background_color(), TRANSPARENT);
    }

    #[test]
    fn schema_describes_both_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = &schema["properties"];
        assert!(properties.get("drawing").is_some());
        assert!(properties.get("canvas").is_some());
    }
}

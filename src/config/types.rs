//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the style and tool a session starts with. Users can change these
/// values at runtime through the style controls and tool selection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial stroke color - a named color, a CSS `rgba(...)` string, or an
    /// RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial line width in pixels (valid range: 2 - 19)
    #[serde(default = "default_line_width")]
    pub default_line_width: u32,

    /// Whether rectangles, ovals, and closed polygons start out filled
    #[serde(default)]
    pub default_filled: bool,

    /// Tool selected at startup
    #[serde(default)]
    pub default_tool: Tool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_line_width: default_line_width(),
            default_filled: false,
            default_tool: Tool::default(),
        }
    }
}

/// Drawing surface settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Surface height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Color the surface is cleared to; use "transparent" for no background
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_line_width() -> u32 {
    2
}

fn default_canvas_width() -> u32 {
    500
}

fn default_canvas_height() -> u32 {
    400
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

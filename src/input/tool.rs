//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Drawing tool selection.
///
/// The active tool determines which gesture handler interprets pointer events
/// and therefore which kind of shape gets built.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Freehand drawing - follows the pointer path (default)
    #[default]
    Freehand,
    /// Rectangle from the press corner to the release corner
    Rectangle,
    /// Wide or tall oval centered on the press point
    Oval,
    /// Polygon built one vertex per click, closed with the middle button
    Polygon,
    /// Freehand stroke mirrored across the vertical center line
    MirroredFreehand,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 5] = [
        Tool::Freehand,
        Tool::Rectangle,
        Tool::Oval,
        Tool::Polygon,
        Tool::MirroredFreehand,
    ];

    /// Returns the canonical kebab-case name of the tool.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Freehand => "freehand",
            Tool::Rectangle => "rectangle",
            Tool::Oval => "oval",
            Tool::Polygon => "polygon",
            Tool::MirroredFreehand => "mirrored-freehand",
        }
    }

    /// Whether the fill toggle affects shapes made with this tool.
    ///
    /// Only bounded shapes can be filled.
    pub fn supports_fill(self) -> bool {
        matches!(self, Tool::Rectangle | Tool::Oval | Tool::Polygon)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a tool name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tool '{0}' (expected freehand, rectangle, oval, polygon, or mirrored-freehand)")]
pub struct ParseToolError(pub String);

impl FromStr for Tool {
    type Err = ParseToolError;

    /// Accepts the kebab-case names plus the single-letter toolbar codes
    /// (`l`, `r`, `o`, `p`, `s`).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "freehand" | "line" | "l" => Ok(Tool::Freehand),
            "rectangle" | "rect" | "r" => Ok(Tool::Rectangle),
            "oval" | "o" => Ok(Tool::Oval),
            "polygon" | "p" => Ok(Tool::Polygon),
            "mirrored-freehand" | "symmetry" | "s" => Ok(Tool::MirroredFreehand),
            _ => Err(ParseToolError(value.to_string())),
        }
    }
}

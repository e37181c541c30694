//! Stroke style shared by the session and its gesture handler.

use crate::draw::Color;

/// Thinnest line width the width stepper allows.
pub const MIN_LINE_WIDTH: u32 = 2;
/// Thickest line width the width stepper allows.
pub const MAX_LINE_WIDTH: u32 = 19;

/// Style applied to newly created shape records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    /// Stroke color, also used as fill color
    pub color: Color,
    /// Line width in pixels, within [`MIN_LINE_WIDTH`, `MAX_LINE_WIDTH`]
    pub line_width: u32,
    /// Whether bounded shapes are filled
    pub filled: bool,
}

/// A single change to the style configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleUpdate {
    /// Replace the stroke color
    Color(Color),
    /// Step the line width; steps leaving the allowed range are ignored
    WidthDelta(i32),
    /// Set whether bounded shapes are filled
    Filled(bool),
}

impl StyleConfig {
    /// Creates a style, clamping the width into the allowed range.
    pub fn new(color: Color, line_width: u32, filled: bool) -> Self {
        Self {
            color,
            line_width: line_width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH),
            filled,
        }
    }

    /// Line width as the floating-point value shape records store.
    pub fn width(&self) -> f64 {
        self.line_width as f64
    }

    /// Applies an update, returning whether anything changed.
    pub fn apply(&mut self, update: StyleUpdate) -> bool {
        match update {
            StyleUpdate::Color(color) => {
                let changed = self.color != color;
                self.color = color;
                changed
            }
            StyleUpdate::WidthDelta(delta) => {
                let target = self.line_width as i64 + delta as i64;
                if (MIN_LINE_WIDTH as i64..=MAX_LINE_WIDTH as i64).contains(&target) {
                    let changed = target != self.line_width as i64;
                    self.line_width = target as u32;
                    changed
                } else {
                    false
                }
            }
            StyleUpdate::Filled(filled) => {
                let changed = self.filled != filled;
                self.filled = filled;
                changed
            }
        }
    }
}

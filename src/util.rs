//! Utility functions for coordinates, geometry, and color names.
//!
//! This module provides:
//! - Page-to-surface coordinate mapping
//! - Distance and mirror calculations used by shape records
//! - Color name mapping for configuration and scripts

use crate::draw::{Color, color::*};
use serde::Deserialize;

// ============================================================================
// Coordinates
// ============================================================================

/// A position in surface-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Origin of the drawing surface's bounding box in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SurfaceBounds {
    /// Page X coordinate of the surface's left edge
    pub left: f64,
    /// Page Y coordinate of the surface's top edge
    pub top: f64,
}

/// Converts page-relative pointer coordinates into surface-local coordinates.
///
/// # Arguments
/// * `page_x` - Pointer X coordinate relative to the page
/// * `page_y` - Pointer Y coordinate relative to the page
/// * `bounds` - Bounding box origin of the target surface
pub fn map_to_surface(page_x: f64, page_y: f64, bounds: SurfaceBounds) -> Point {
    Point {
        x: page_x - bounds.left,
        y: page_y - bounds.top,
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Reflects an X coordinate across the vertical axis at half the surface width.
pub fn mirror_x(x: f64, surface_width: f64) -> f64 {
    surface_width - x
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and gesture scripts to parse color names.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "purple", "white", "black"
/// - "transparent"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "purple" => Some(PURPLE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

/// Parses a CSS `rgba(r,g,b,a)` string with 0-255 channels.
///
/// This is the form the color chooser reports its samples in.
pub fn parse_css_rgba(value: &str) -> Option<Color> {
    let inner = value
        .trim()
        .strip_prefix("rgba(")?
        .strip_suffix(')')?;
    let channels: Vec<u8> = inner
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .ok()?;
    match channels.as_slice() {
        &[r, g, b, a] => Some(Color::from(ColorSample { r, g, b, a })),
        _ => None,
    }
}

//! Pointer event types delivered to the drawing session.

use serde::{Deserialize, Serialize};

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Middle mouse button (closes the polygon being built)
    Middle,
    /// Right mouse button
    Right,
}

/// Phase of a pointer gesture an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Button pressed
    Down,
    /// Pointer moved (pressed or not)
    Move,
    /// Button released
    Up,
    /// Pointer left the drawing surface
    Leave,
}

/// A raw pointer event in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// X coordinate relative to the page
    pub page_x: f64,
    /// Y coordinate relative to the page
    pub page_y: f64,
    /// Button involved, if the event carries one
    pub button: Option<MouseButton>,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, page_x: f64, page_y: f64) -> Self {
        Self {
            kind,
            page_x,
            page_y,
            button: None,
        }
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = Some(button);
        self
    }
}

//! Gesture scripts: a recorded stream of pointer and control events.
//!
//! A script is a TOML document listing events in the order they would arrive
//! from a pointing device and the surrounding controls. [`run_script`] feeds
//! them into a [`DrawingSession`] bound to a surface, which makes it the event
//! loop for headless rendering.
//!
//! # Example
//! ```toml
//! [surface]
//! left = 8.0
//! top = 8.0
//!
//! [[events]]
//! action = "tool"
//! tool = "rectangle"
//!
//! [[events]]
//! action = "down"
//! x = 13.0
//! y = 13.0
//!
//! [[events]]
//! action = "up"
//! x = 33.0
//! y = 23.0
//! ```

use crate::config::ColorSpec;
use crate::draw::{Color, Surface};
use crate::input::{
    DrawingSession, MouseButton, ParseToolError, PointerEvent, PointerKind, StyleUpdate, Tool,
};
use crate::util::SurfaceBounds;
use log::debug;
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while reading a gesture script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("event {index}: {source}")]
    UnknownTool {
        index: usize,
        #[source]
        source: ParseToolError,
    },
    #[error("event {index}: unknown color '{color}'")]
    UnknownColor { index: usize, color: String },
}

/// One step of a script after names have been resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptAction {
    /// Select a tool
    Tool(Tool),
    /// Change the style
    Style(StyleUpdate),
    /// Flip the fill flag
    ToggleFill,
    /// Raw pointer event in page coordinates
    Pointer(PointerEvent),
    /// Remove the last committed shape
    Undo,
    /// Remove every shape
    Clear,
    /// Clear the surface and replay the frame
    Render,
}

/// A parsed, validated gesture script.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
    /// Page-coordinate origin of the surface
    pub bounds: SurfaceBounds,
    /// Actions in dispatch order
    pub actions: Vec<ScriptAction>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScript {
    #[serde(default)]
    surface: SurfaceBounds,
    #[serde(default)]
    events: Vec<RawEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
enum RawEvent {
    Tool {
        tool: String,
    },
    Color {
        color: ColorSpec,
    },
    Width {
        delta: i32,
    },
    Fill {
        filled: bool,
    },
    ToggleFill,
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Option<MouseButton>,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up {
        x: f64,
        y: f64,
    },
    Leave {
        x: f64,
        y: f64,
    },
    Undo,
    Clear,
    Render,
}

impl RawEvent {
    fn resolve(self, index: usize) -> Result<ScriptAction, ScriptError> {
        let action = match self {
            RawEvent::Tool { tool } => ScriptAction::Tool(
                tool.parse()
                    .map_err(|source| ScriptError::UnknownTool { index, source })?,
            ),
            RawEvent::Color { color } => {
                let resolved: Color =
                    color.resolve().ok_or_else(|| ScriptError::UnknownColor {
                        index,
                        color: color.to_string(),
                    })?;
                ScriptAction::Style(StyleUpdate::Color(resolved))
            }
            RawEvent::Width { delta } => ScriptAction::Style(StyleUpdate::WidthDelta(delta)),
            RawEvent::Fill { filled } => ScriptAction::Style(StyleUpdate::Filled(filled)),
            RawEvent::ToggleFill => ScriptAction::ToggleFill,
            RawEvent::Down { x, y, button } => {
                let mut event = PointerEvent::new(PointerKind::Down, x, y);
                event.button = button;
                ScriptAction::Pointer(event)
            }
            RawEvent::Move { x, y } => ScriptAction::Pointer(PointerEvent::new(PointerKind::Move, x, y)),
            RawEvent::Up { x, y } => ScriptAction::Pointer(PointerEvent::new(PointerKind::Up, x, y)),
            RawEvent::Leave { x, y } => {
                ScriptAction::Pointer(PointerEvent::new(PointerKind::Leave, x, y))
            }
            RawEvent::Undo => ScriptAction::Undo,
            RawEvent::Clear => ScriptAction::Clear,
            RawEvent::Render => ScriptAction::Render,
        };
        Ok(action)
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let raw: RawScript = toml::from_str(source)?;
        let actions = raw
            .events
            .into_iter()
            .enumerate()
            .map(|(index, event)| event.resolve(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            bounds: raw.surface,
            actions,
        })
    }
}

/// Dispatches every action of `script` in order, then replays the frame.
pub fn run_script<S: Surface + ?Sized>(
    session: &mut DrawingSession,
    surface: &mut S,
    script: &Script,
) {
    for action in &script.actions {
        match *action {
            ScriptAction::Tool(tool) => session.switch_tool(tool),
            ScriptAction::Style(update) => {
                session.set_style(update);
            }
            ScriptAction::ToggleFill => {
                session.toggle_fill();
            }
            ScriptAction::Pointer(event) => session.dispatch(surface, script.bounds, &event),
            ScriptAction::Undo => session.undo(surface),
            ScriptAction::Clear => session.clear(surface),
            ScriptAction::Render => session.render(surface),
        }
    }

    session.render(surface);
    debug!(
        "Script finished: {} action(s), {} shape(s) committed",
        script.actions.len(),
        session.frame().len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, BLUE};
    use crate::draw::{RecordingSurface, Shape};
    use crate::input::StyleConfig;
    use crate::util::Point;

    fn session() -> DrawingSession {
        DrawingSession::new(Tool::Freehand, StyleConfig::new(BLACK, 2, false))
    }

    #[test]
    fn parses_surface_and_events() {
        let script: Script = r#"
            [surface]
            left = 8.0
            top = 4

            [[events]]
            action = "tool"
            tool = "r"

            [[events]]
            action = "down"
            x = 10
            y = 10.5
            button = "middle"

            [[events]]
            action = "toggle-fill"
        "#
        .parse()
        .unwrap();

        assert_eq!(script.bounds, SurfaceBounds { left: 8.0, top: 4.0 });
        assert_eq!(
            script.actions,
            vec![
                ScriptAction::Tool(Tool::Rectangle),
                ScriptAction::Pointer(
                    PointerEvent::new(PointerKind::Down, 10.0, 10.5)
                        .with_button(MouseButton::Middle)
                ),
                ScriptAction::ToggleFill,
            ]
        );
    }

    #[test]
    fn unknown_tool_reports_event_index() {
        let err = r#"
            [[events]]
            action = "undo"

            [[events]]
            action = "tool"
            tool = "spray"
        "#
        .parse::<Script>()
        .unwrap_err();

        assert!(matches!(err, ScriptError::UnknownTool { index: 1, .. }));
        assert!(err.to_string().contains("spray"));
    }

    #[test]
    fn unknown_action_is_a_parse_error() {
        let err = "[[events]]\naction = \"teleport\"\n"
            .parse::<Script>()
            .unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn unknown_color_is_rejected() {
        let err = "[[events]]\naction = \"color\"\ncolor = \"teal\"\n"
            .parse::<Script>()
            .unwrap_err();
        assert!(matches!(err, ScriptError::UnknownColor { index: 0, .. }));
    }

    #[test]
    fn run_maps_page_coordinates_and_replays() {
        let script: Script = r#"
            [surface]
            left = 100.0
            top = 50.0

            [[events]]
            action = "color"
            color = [0, 0, 255]

            [[events]]
            action = "tool"
            tool = "rectangle"

            [[events]]
            action = "down"
            x = 105.0
            y = 55.0

            [[events]]
            action = "up"
            x = 125.0
            y = 65.0
        "#
        .parse()
        .unwrap();

        let mut session = session();
        let mut surface = RecordingSurface::new(300.0);
        run_script(&mut session, &mut surface, &script);

        let shapes: Vec<&Shape> = session.frame().shapes().collect();
        assert_eq!(shapes.len(), 1);
        match shapes[0] {
            Shape::Rect {
                origin,
                size,
                color,
                ..
            } => {
                assert_eq!(*origin, Point::new(5.0, 5.0));
                assert_eq!(*size, Some((20.0, 10.0)));
                assert_eq!(*color, BLUE);
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
        assert_eq!(surface.stroke_count(), 1);
    }

    #[test]
    fn run_applies_undo_and_clear() {
        let script: Script = r#"
            [[events]]
            action = "down"
            x = 1.0
            y = 1.0

            [[events]]
            action = "up"
            x = 1.0
            y = 1.0

            [[events]]
            action = "down"
            x = 2.0
            y = 2.0

            [[events]]
            action = "up"
            x = 2.0
            y = 2.0

            [[events]]
            action = "undo"
        "#
        .parse()
        .unwrap();

        let mut session = session();
        let mut surface = RecordingSurface::new(100.0);
        run_script(&mut session, &mut surface, &script);
        assert_eq!(session.frame().len(), 1);

        let clear: Script = "[[events]]\naction = \"clear\"\n".parse().unwrap();
        run_script(&mut session, &mut surface, &clear);
        assert!(session.frame().is_empty());
        assert!(surface.ops().is_empty());
    }
}

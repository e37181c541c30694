//! Drawing session state: committed shapes, active handler, and style.

use crate::draw::{Frame, ShapeId, Surface, render_shape, render_shapes};
use crate::input::handler::{GestureHandler, Redraw};
use crate::input::style::StyleConfig;
use crate::input::tool::Tool;

/// Main drawing state for one surface.
///
/// Owns the ordered list of committed shapes, the gesture handler for the
/// selected tool, and the style new shapes are created with. The surface itself
/// is not owned; every operation that paints takes it as an argument, so one
/// event loop can drive the session against whatever surface it holds.
pub struct DrawingSession {
    /// Committed shapes in paint order
    pub(super) frame: Frame,
    /// Gesture handler for the selected tool
    pub(super) handler: GestureHandler,
    /// Style handed to the next handler on tool switch
    pub(super) style: StyleConfig,
}

impl DrawingSession {
    /// Creates an empty session with the given tool selected.
    pub fn new(tool: Tool, style: StyleConfig) -> Self {
        Self {
            frame: Frame::new(),
            handler: GestureHandler::new(tool, style),
            style,
        }
    }

    /// Committed shapes in paint order.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Current session style.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Active gesture handler.
    pub fn handler(&self) -> &GestureHandler {
        &self.handler
    }

    /// Tool of the active gesture handler.
    pub fn active_tool(&self) -> Tool {
        self.handler.tool()
    }

    /// Id of the committed record the active handler is building, if any.
    pub fn pending(&self) -> Option<ShapeId> {
        self.handler.pending()
    }

    /// Whether the active handler has a gesture in progress.
    pub fn is_building(&self) -> bool {
        self.handler.is_building()
    }

    /// Clears the surface and replays every committed shape in order.
    ///
    /// Shapes abandoned by a tool switch are skipped.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        render_shapes(surface, self.frame.visible_shapes());
    }

    /// Performs the repaint a handler hook asked for.
    pub(super) fn apply_redraw<S: Surface + ?Sized>(&self, surface: &mut S, redraw: Redraw) {
        match redraw {
            Redraw::Nothing => {}
            Redraw::Shape(id) => {
                if let Some(shape) = self.frame.get(id) {
                    render_shape(surface, shape);
                }
            }
            Redraw::Detached(shape) => render_shape(surface, &shape),
            Redraw::Full => self.render(surface),
        }
    }
}

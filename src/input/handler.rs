//! Per-tool gesture handlers that turn pointer events into shape records.

use super::events::MouseButton;
use super::style::{StyleConfig, StyleUpdate};
use super::tool::Tool;
use crate::draw::{Frame, Shape, ShapeId};
use crate::util::Point;
use log::debug;

/// What the session has to repaint after a handler hook ran.
#[derive(Debug, Clone, PartialEq)]
pub enum Redraw {
    /// Nothing visible changed
    Nothing,
    /// Paint one committed record on top of the current surface contents
    Shape(ShapeId),
    /// Paint a record that is no longer part of the frame
    Detached(Shape),
    /// Clear the surface and replay every committed record
    Full,
}

/// Record a handler is building.
#[derive(Debug, Clone)]
enum Pending {
    /// Committed to the frame under this id
    Committed(ShapeId),
    /// Taken out of the frame by a clear; still built, never committed again
    Detached(Shape),
}

/// Where a pending record lives, for choosing the repaint.
#[derive(Clone, Copy)]
enum Slot {
    Frame(ShapeId),
    Detached,
}

impl Slot {
    fn repaint(self, shape: &Shape) -> Redraw {
        match self {
            Slot::Frame(id) => Redraw::Shape(id),
            Slot::Detached => Redraw::Detached(shape.clone()),
        }
    }
}

/// Gesture state machine for the active tool.
///
/// Each handler is `Idle` while `pending` is `None` and `Building` while it
/// holds a record. Records are committed as soon as they are created, so live
/// strokes appear in replays while being drawn.
#[derive(Debug, Clone)]
pub struct GestureHandler {
    tool: Tool,
    /// Style snapshot taken from the session when the tool was selected
    style: StyleConfig,
    /// Record currently being built, if any
    pending: Option<Pending>,
}

impl GestureHandler {
    /// Creates an idle handler for `tool` with a copy of the session style.
    pub fn new(tool: Tool, style: StyleConfig) -> Self {
        Self {
            tool,
            style,
            pending: None,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Id of the committed record being built, if any.
    pub fn pending(&self) -> Option<ShapeId> {
        match self.pending {
            Some(Pending::Committed(id)) => Some(id),
            _ => None,
        }
    }

    /// Whether a gesture is in progress, committed or detached.
    pub fn is_building(&self) -> bool {
        self.pending.is_some()
    }

    /// Record being built after its frame was cleared.
    pub fn detached(&self) -> Option<&Shape> {
        match &self.pending {
            Some(Pending::Detached(shape)) => Some(shape),
            _ => None,
        }
    }

    /// Applies a style update to this handler's snapshot.
    pub fn apply_style(&mut self, update: StyleUpdate) -> bool {
        self.style.apply(update)
    }

    /// Forgets the record being built without touching the frame.
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Takes a private copy of the pending record before `frame` is cleared.
    ///
    /// The gesture continues on the copy; nothing it does reaches the frame.
    pub fn detach(&mut self, frame: &Frame) {
        if let Some(Pending::Committed(id)) = self.pending {
            self.pending = frame.get(id).cloned().map(Pending::Detached);
            debug!("{} gesture detached from cleared frame", self.tool);
        }
    }

    /// Pointer pressed on the surface.
    pub fn on_start(
        &mut self,
        frame: &mut Frame,
        point: Point,
        button: Option<MouseButton>,
    ) -> Redraw {
        if self.tool == Tool::Polygon {
            return self.polygon_start(frame, point, button);
        }

        let id = frame.commit(self.new_shape(point));
        debug!("{} gesture started at ({}, {})", self.tool, point.x, point.y);
        self.pending = Some(Pending::Committed(id));
        Redraw::Nothing
    }

    /// Pointer moved over the surface.
    pub fn on_move(&mut self, frame: &mut Frame, point: Point) -> Redraw {
        let tool = self.tool;
        let Some((slot, shape)) = self.pending_shape(frame) else {
            return Redraw::Nothing;
        };

        match tool {
            Tool::Freehand | Tool::MirroredFreehand => {
                shape.push_point(point);
                slot.repaint(shape)
            }
            Tool::Rectangle | Tool::Oval => {
                shape.drag_to(point);
                Redraw::Full
            }
            // Polygons only change on discrete clicks.
            Tool::Polygon => Redraw::Nothing,
        }
    }

    /// Pointer released over the surface.
    pub fn on_end(&mut self, frame: &mut Frame, point: Point) -> Redraw {
        let tool = self.tool;
        let Some((slot, shape)) = self.pending_shape(frame) else {
            return Redraw::Nothing;
        };

        match tool {
            Tool::Freehand | Tool::MirroredFreehand => {
                self.pending = None;
                Redraw::Nothing
            }
            Tool::Rectangle | Tool::Oval => {
                shape.drag_to(point);
                self.pending = None;
                debug!("{tool} gesture finished");
                Redraw::Full
            }
            Tool::Polygon => {
                // Each release adds one more edge.
                shape.push_point(point);
                slot.repaint(shape)
            }
        }
    }

    /// Pointer left the surface; finishes the gesture like a release.
    pub fn on_leave(&mut self, frame: &mut Frame, point: Point) -> Redraw {
        match self.tool {
            Tool::Polygon => Redraw::Nothing,
            _ => self.on_end(frame, point),
        }
    }

    fn polygon_start(
        &mut self,
        frame: &mut Frame,
        point: Point,
        button: Option<MouseButton>,
    ) -> Redraw {
        let fill = self.style.filled;
        match self.pending_shape(frame) {
            None => {
                let mut shape = self.new_shape(point);
                shape.push_point(point);
                self.pending = Some(Pending::Committed(frame.commit(shape)));
                debug!("polygon started at ({}, {})", point.x, point.y);
                Redraw::Nothing
            }
            Some((slot, shape)) if button == Some(MouseButton::Middle) => {
                shape.close_polygon(fill);
                let redraw = slot.repaint(shape);
                self.pending = None;
                debug!("polygon closed (filled: {fill})");
                redraw
            }
            Some(_) => Redraw::Nothing,
        }
    }

    /// Looks up the record being built, wherever it lives.
    ///
    /// A committed id the frame no longer has (the frame was cleared without
    /// detaching) resolves to nothing and is dropped.
    fn pending_shape<'a>(&'a mut self, frame: &'a mut Frame) -> Option<(Slot, &'a mut Shape)> {
        let id = match self.pending.as_ref()? {
            Pending::Committed(id) => *id,
            Pending::Detached(_) => {
                let Some(Pending::Detached(shape)) = self.pending.as_mut() else {
                    return None;
                };
                return Some((Slot::Detached, shape));
            }
        };
        if frame.get(id).is_none() {
            self.pending = None;
            return None;
        }
        frame.get_mut(id).map(|shape| (Slot::Frame(id), shape))
    }

    /// Builds an empty record for this tool anchored at `point`.
    fn new_shape(&self, point: Point) -> Shape {
        let color = self.style.color;
        let width = self.style.width();
        let filled = self.style.filled;
        match self.tool {
            Tool::Freehand => Shape::Freehand {
                points: vec![point],
                color,
                width,
            },
            Tool::MirroredFreehand => Shape::Mirrored {
                points: vec![point],
                color,
                width,
            },
            Tool::Rectangle => Shape::Rect {
                origin: point,
                size: None,
                color,
                width,
                filled,
            },
            Tool::Oval => Shape::Oval {
                center: point,
                extent: None,
                color,
                width,
                filled,
            },
            Tool::Polygon => Shape::Polygon {
                points: Vec::new(),
                closed: false,
                color,
                width,
                filled,
            },
        }
    }
}
